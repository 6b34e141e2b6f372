//! Plotly trace and layout construction for the revenue chart.
//!
//! The dashboard endpoint ships its series in a labeled-datasets shape (see
//! [`crate::ChartData`]); these builders turn that into the JSON values the
//! frontend hands to `Plotly.newPlot` / `Plotly.react`. Keeping the mapping
//! here keeps it testable off the browser.

use crate::ChartData;
use serde_json::{json, Value};

/// Fixed plot height in pixels; width follows the container.
pub const CHART_HEIGHT: u32 = 240;

/// One filled line trace per dataset, all sharing the label axis.
/// An empty dataset list yields an empty trace array, which the chart
/// component treats as "nothing to plot".
pub fn revenue_traces(data: &ChartData) -> Value {
    let traces: Vec<Value> = data
        .datasets
        .iter()
        .map(|ds| {
            json!({
                "x": data.labels,
                "y": ds.data,
                "type": "scatter",
                "mode": "lines",
                "name": ds.label,
                "fill": if ds.fill { "tozeroy" } else { "none" },
                "fillcolor": ds.background_color,
                "line": {
                    "color": ds.border_color,
                    "width": ds.border_width,
                },
            })
        })
        .collect();
    Value::Array(traces)
}

/// Layout shared by every period: legend hidden, y axis anchored at zero,
/// x grid off, transparent background so the card color shows through.
pub fn revenue_layout() -> Value {
    json!({
        "height": CHART_HEIGHT,
        "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "rgba(0,0,0,0.1)", "rangemode": "tozero"},
    })
}

pub fn plot_config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartDataset;

    fn sample() -> ChartData {
        ChartData {
            labels: vec!["Mon".into(), "Tue".into(), "Wed".into()],
            datasets: vec![ChartDataset {
                label: "Daily Revenue".into(),
                data: vec![10.0, 0.0, 42.5],
                background_color: "rgba(102, 126, 234, 0.1)".into(),
                border_color: "rgba(102, 126, 234, 1)".into(),
                border_width: 2.0,
                fill: true,
            }],
        }
    }

    #[test]
    fn one_trace_per_dataset() {
        let traces = revenue_traces(&sample());
        let traces = traces.as_array().unwrap();
        assert_eq!(traces.len(), 1);

        let trace = &traces[0];
        assert_eq!(trace["x"], json!(["Mon", "Tue", "Wed"]));
        assert_eq!(trace["y"], json!([10.0, 0.0, 42.5]));
        assert_eq!(trace["fill"], "tozeroy");
        assert_eq!(trace["line"]["color"], "rgba(102, 126, 234, 1)");
        assert_eq!(trace["name"], "Daily Revenue");
    }

    #[test]
    fn unfilled_dataset_opts_out_of_fill() {
        let mut data = sample();
        data.datasets[0].fill = false;
        let traces = revenue_traces(&data);
        assert_eq!(traces[0]["fill"], "none");
    }

    #[test]
    fn empty_data_yields_empty_traces() {
        let traces = revenue_traces(&ChartData::default());
        assert_eq!(traces, Value::Array(vec![]));
    }

    #[test]
    fn layout_and_config_constants() {
        let layout = revenue_layout();
        assert_eq!(layout["height"], CHART_HEIGHT);
        assert_eq!(layout["showlegend"], false);
        assert_eq!(layout["yaxis"]["rangemode"], "tozero");
        assert_eq!(layout["xaxis"]["showgrid"], false);

        let config = plot_config();
        assert_eq!(config["responsive"], true);
        assert_eq!(config["displayModeBar"], false);
    }
}
