use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

/// Traces plus layout, in the JSON shape Plotly expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: serde_json::Value,
    pub layout: serde_json::Value,
}

impl Figure {
    pub fn new(data: serde_json::Value, layout: serde_json::Value) -> Self {
        Self { data, layout }
    }

    /// Number of traces in `data`.
    pub fn trace_count(&self) -> usize {
        self.data.as_array().map_or(0, |traces| traces.len())
    }
}

fn plot_config() -> serde_json::Value {
    serde_json::json!({"responsive": true, "displayModeBar": false})
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn draw(div_id: &str, figure: &Figure) {
    let converted = to_js(&figure.data)
        .and_then(|data| Ok((data, to_js(&figure.layout)?, to_js(&plot_config())?)));

    match converted {
        Ok((data, layout, config)) => {
            log::trace!("Drawing chart {} with {} traces", div_id, figure.trace_count());
            if let Err(e) = new_plot(div_id, data, layout, config) {
                log::error!("Plotly failed to draw chart {}: {:?}", div_id, e);
            }
        }
        Err(e) => log::error!("Failed to convert chart {} for Plotly: {}", div_id, e),
    }
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    /// DOM id of the chart container; must be unique on the page
    pub id: AttrValue,
    pub figure: Rc<Figure>,
    #[prop_or(300)]
    pub height: u32,
}

#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let figure = props.figure.clone();
        use_effect_with((chart_ref.clone(), figure), move |(chart_ref, figure)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    draw(&div_id, figure);
                }
            }
            || ()
        });
    }

    html! {
        <div
            ref={chart_ref}
            id={props.id.clone()}
            class="chart-container w-full"
            data-chart={props.id.clone()}
            style={format!("height: {}px;", props.height)}
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_with;

    #[test]
    fn test_trace_count() {
        let figure = Figure::new(serde_json::json!([{}, {}]), serde_json::json!({}));
        assert_eq!(figure.trace_count(), 2);
        let empty = Figure::new(serde_json::Value::Null, serde_json::json!({}));
        assert_eq!(empty.trace_count(), 0);
    }

    #[tokio::test]
    async fn test_chart_renders_sized_container() {
        let html = render_with::<PlotlyChart>(|| PlotlyChartProps {
            id: "chart-test".into(),
            figure: Rc::new(Figure::new(serde_json::json!([]), serde_json::json!({}))),
            height: 240,
        })
        .await;
        assert!(html.contains("id=\"chart-test\""));
        assert!(html.contains("height: 240px;"));
    }
}
