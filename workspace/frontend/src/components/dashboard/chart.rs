use common::chart::{plot_config, revenue_layout, revenue_traces, CHART_HEIGHT};
use common::ChartData;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    /// In-place update against an existing plot; creates nothing new.
    #[wasm_bindgen(js_namespace = Plotly)]
    fn react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

const CHART_DIV_ID: &str = "revenue-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Option<ChartData>,
}

/// Revenue chart bound to the snapshot's `chart_data`. First render with
/// data creates the plot; later snapshots update the same plot in place, so
/// at most one plot is ever alive, and it is purged when the dashboard
/// unmounts. Without data the card shows a placeholder and no plot exists.
#[function_component(RevenueChart)]
pub fn revenue_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    // Distinguishes first plot from updates across effect runs.
    let plotted = use_mut_ref(|| false);

    {
        let plotted = plotted.clone();
        let data = props.data.clone();
        use_effect_with((chart_ref.clone(), data), move |(chart_ref, data)| {
            if let (Some(_element), Some(data)) = (chart_ref.cast::<Element>(), data.as_ref()) {
                if !data.datasets.is_empty() {
                    let traces = serde_wasm_bindgen::to_value(&revenue_traces(data)).unwrap();
                    let layout = serde_wasm_bindgen::to_value(&revenue_layout()).unwrap();
                    let config = serde_wasm_bindgen::to_value(&plot_config()).unwrap();

                    if *plotted.borrow() {
                        log::trace!("Updating revenue chart in place");
                        react(CHART_DIV_ID, traces, layout, config);
                    } else {
                        log::debug!("Creating revenue chart");
                        newPlot(CHART_DIV_ID, traces, layout, config);
                        *plotted.borrow_mut() = true;
                    }
                }
            }

            || ()
        });
    }

    // Teardown runs once, when the dashboard unmounts.
    {
        let plotted = plotted.clone();
        use_effect_with((), move |_| {
            move || {
                if *plotted.borrow() {
                    log::debug!("Destroying revenue chart");
                    purge(CHART_DIV_ID);
                    *plotted.borrow_mut() = false;
                }
            }
        });
    }

    let has_data = props
        .data
        .as_ref()
        .is_some_and(|d| !d.datasets.is_empty());

    html! {
        <>
            <div
                ref={chart_ref}
                id={CHART_DIV_ID}
                class={classes!("chart-container", (!has_data).then_some("hidden"))}
                style={format!("width: 100%; height: {}px;", CHART_HEIGHT)}
            ></div>
            if !has_data {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                    <p>{"No revenue data for this period yet."}</p>
                </div>
            }
        </>
    }
}
