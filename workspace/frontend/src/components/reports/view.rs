use common::format::group_digits;
use common::ReportRow;
use plotly::common::Title;
use plotly::layout::Axis;
use plotly::{Bar, Layout};
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::api_client::report::get_session_report;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[function_component(Reports)]
pub fn reports() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_session_report);

    let render = Callback::from(|rows: Vec<ReportRow>| {
        if rows.is_empty() {
            return html! {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-bar text-4xl mb-4 opacity-50"></i>
                    <p>{"No finished sessions this month."}</p>
                </div>
            };
        }

        html! {
            <>
                <RevenueByCustomerChart rows={rows.clone()} />

                <div class="overflow-x-auto mt-6">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Customer"}</th>
                                <th class="text-right">{"Sessions"}</th>
                                <th class="text-right">{"Revenue"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.iter().map(|row| html! {
                                <tr key={row.customer.clone()}>
                                    <td>{&row.customer}</td>
                                    <td class="text-right">{row.sessions}</td>
                                    <td class="text-right font-mono">
                                        {group_digits(row.revenue.to_f64().unwrap_or_default())}
                                    </td>
                                </tr>
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>
            </>
        }
    });

    html! {
        <div class="container mx-auto p-4">
            <h1 class="text-2xl font-bold mb-4">{"Session Reports"}</h1>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{"Revenue by Customer"}</h3>
                    <p class="text-sm text-gray-500 mb-4">{"Finished sessions, this month"}</p>
                    <FetchRender<Vec<ReportRow>>
                        state={(*fetch_state).clone()}
                        render={render}
                        on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                    />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChartProps {
    rows: Vec<ReportRow>,
}

#[function_component(RevenueByCustomerChart)]
fn revenue_by_customer_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let rows = props.rows.clone();

    use_effect_with(
        (container_ref.clone(), rows),
        move |(container_ref, rows)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("report-revenue-chart");

                let customers: Vec<String> = rows.iter().map(|r| r.customer.clone()).collect();
                let revenues: Vec<f64> = rows
                    .iter()
                    .map(|r| r.revenue.to_f64().unwrap_or_default())
                    .collect();

                let trace = Bar::new(customers, revenues)
                    .name("Revenue")
                    .marker(plotly::common::Marker::new().color("rgb(59, 130, 246)"));

                let layout = Layout::new()
                    .x_axis(Axis::new().title(Title::with_text("Customer")))
                    .y_axis(Axis::new().title(Title::with_text("Revenue")))
                    .height(360);

                let trace_json = serde_json::to_string(&trace).unwrap_or_default();
                let layout_json = serde_json::to_string(&layout).unwrap_or_default();

                if let (Ok(trace_js), Ok(layout_js)) = (
                    js_sys::JSON::parse(&trace_json),
                    js_sys::JSON::parse(&layout_json),
                ) {
                    let data_js = js_sys::Array::new();
                    data_js.push(&trace_js);
                    newPlot("report-revenue-chart", data_js.into(), layout_js);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:360px;"></div>
    }
}
