//! Plotly figures for the dashboard charts.
//!
//! Each builder turns one of the literal datasets into trace and layout JSON.
//! Nothing here touches the DOM, so the figures are checked natively.

use common::mock_data::{
    AI_INDEX_HISTORY, CATEGORY_VALUATIONS, CHART_PALETTE, DEEPFAKE_DISTRIBUTION,
    INFRINGEMENT_DISTRIBUTION, MUTED_COLOR, PRIMARY_COLOR, RISK_SCORE_HISTORY, SECONDARY_COLOR,
    VALUATION_HISTORY,
};
use serde_json::{json, Value};

use crate::components::ui::Figure;

const GRID_COLOR: &str = "#333";

/// Transparent dark layout shared by every chart.
fn base_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"color": MUTED_COLOR},
        "showlegend": false,
        "xaxis": {"showgrid": false, "color": MUTED_COLOR},
        "yaxis": {"showgrid": true, "gridcolor": GRID_COLOR, "griddash": "dash", "color": MUTED_COLOR},
        "hoverlabel": {"bgcolor": "#1a1a1a", "bordercolor": GRID_COLOR}
    })
}

fn with_layout(overrides: Value) -> Value {
    let mut layout = base_layout();
    if let (Some(target), Value::Object(extra)) = (layout.as_object_mut(), overrides) {
        for (key, value) in extra {
            // Axis overrides are merged key by key
            let merged = match (target.remove(&key), value) {
                (Some(Value::Object(mut existing)), Value::Object(patch)) => {
                    existing.extend(patch);
                    Value::Object(existing)
                }
                (_, value) => value,
            };
            target.insert(key, merged);
        }
    }
    layout
}

pub fn palette_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// Quarterly portfolio value as a filled area.
pub fn valuation_trend() -> Figure {
    let quarters: Vec<&str> = VALUATION_HISTORY.iter().map(|p| p.quarter).collect();
    let values: Vec<u64> = VALUATION_HISTORY.iter().map(|p| p.value).collect();

    Figure::new(
        json!([{
            "x": quarters,
            "y": values,
            "type": "scatter",
            "mode": "lines",
            "fill": "tozeroy",
            "fillcolor": "rgba(123,44,191,0.35)",
            "line": {"color": PRIMARY_COLOR, "shape": "spline"},
            "name": "Value",
            "hovertemplate": "$%{y:,}<extra>Value</extra>"
        }]),
        with_layout(json!({"yaxis": {"tickprefix": "$", "tickformat": "~s"}})),
    )
}

/// Infringement risk by content type as a donut.
pub fn infringement_distribution() -> Figure {
    let labels: Vec<&str> = INFRINGEMENT_DISTRIBUTION.iter().map(|s| s.name).collect();
    let values: Vec<u32> = INFRINGEMENT_DISTRIBUTION.iter().map(|s| s.percent).collect();
    let colors: Vec<&str> = (0..INFRINGEMENT_DISTRIBUTION.len()).map(palette_color).collect();

    Figure::new(
        json!([{
            "labels": labels,
            "values": values,
            "type": "pie",
            "hole": 0.75,
            "sort": false,
            "textinfo": "none",
            "marker": {"colors": colors, "line": {"color": "#000", "width": 2}},
            "hovertemplate": "%{label}: %{value}%<extra>Risk Level</extra>"
        }]),
        with_layout(json!({"margin": {"t": 0, "r": 0, "l": 0, "b": 0}})),
    )
}

/// Monthly AI index on a fixed 0-100 axis.
pub fn ai_index_trend() -> Figure {
    let months: Vec<&str> = AI_INDEX_HISTORY.iter().map(|p| p.month).collect();
    let index: Vec<u32> = AI_INDEX_HISTORY.iter().map(|p| p.index).collect();

    Figure::new(
        json!([{
            "x": months,
            "y": index,
            "type": "scatter",
            "mode": "lines+markers",
            "line": {"color": PRIMARY_COLOR, "width": 2, "shape": "spline"},
            "marker": {"color": PRIMARY_COLOR, "size": 8},
            "name": "AI Index"
        }]),
        with_layout(json!({"yaxis": {"range": [0, 100]}})),
    )
}

/// Risk score against its alert threshold.
pub fn risk_score_trend() -> Figure {
    let months: Vec<&str> = RISK_SCORE_HISTORY.iter().map(|p| p.month).collect();
    let scores: Vec<u32> = RISK_SCORE_HISTORY.iter().map(|p| p.score).collect();
    let thresholds: Vec<u32> = RISK_SCORE_HISTORY.iter().map(|p| p.threshold).collect();

    Figure::new(
        json!([
            {
                "x": months,
                "y": scores,
                "type": "scatter",
                "mode": "lines+markers",
                "line": {"color": PRIMARY_COLOR, "width": 2, "shape": "spline"},
                "marker": {"color": PRIMARY_COLOR, "size": 8},
                "name": "Risk Score"
            },
            {
                "x": months,
                "y": thresholds,
                "type": "scatter",
                "mode": "lines",
                "line": {"color": MUTED_COLOR, "width": 2, "dash": "dash"},
                "name": "Risk Threshold"
            }
        ]),
        with_layout(json!({
            "showlegend": true,
            "legend": {"orientation": "h", "y": -0.2},
            "yaxis": {"range": [0, 100]}
        })),
    )
}

/// Deepfake exposure split by severity, coloured by severity tone.
pub fn deepfake_distribution() -> Figure {
    let labels: Vec<&str> = DEEPFAKE_DISTRIBUTION.iter().map(|(s, _)| s.name).collect();
    let values: Vec<u32> = DEEPFAKE_DISTRIBUTION.iter().map(|(s, _)| s.percent).collect();
    let colors: Vec<&str> = DEEPFAKE_DISTRIBUTION
        .iter()
        .map(|(_, severity)| severity.tone().hex())
        .collect();

    Figure::new(
        json!([{
            "labels": labels,
            "values": values,
            "type": "pie",
            "hole": 0.75,
            "sort": false,
            "textinfo": "none",
            "marker": {"colors": colors, "line": {"color": "#000", "width": 2}},
            "hovertemplate": "%{label}: %{value}%<extra>Risk Level</extra>"
        }]),
        with_layout(json!({"margin": {"t": 0, "r": 0, "l": 0, "b": 0}})),
    )
}

/// Previous and current value per IP category as grouped bars.
pub fn category_valuations() -> Figure {
    let names: Vec<&str> = CATEGORY_VALUATIONS.iter().map(|c| c.name).collect();
    let previous: Vec<u64> = CATEGORY_VALUATIONS.iter().map(|c| c.last_value).collect();
    let current: Vec<u64> = CATEGORY_VALUATIONS.iter().map(|c| c.value).collect();

    Figure::new(
        json!([
            {
                "x": names,
                "y": previous,
                "type": "bar",
                "name": "Previous Value",
                "marker": {"color": SECONDARY_COLOR}
            },
            {
                "x": names,
                "y": current,
                "type": "bar",
                "name": "Current Value",
                "marker": {"color": PRIMARY_COLOR}
            }
        ]),
        with_layout(json!({
            "barmode": "group",
            "showlegend": true,
            "legend": {"orientation": "h", "y": -0.2},
            "yaxis": {"tickprefix": "$", "tickformat": "~s"}
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Severity;

    #[test]
    fn test_valuation_trend_ends_at_current_value() {
        let figure = valuation_trend();
        assert_eq!(figure.trace_count(), 1);
        assert_eq!(figure.data[0]["x"], json!(["Q1", "Q2", "Q3", "Q4"]));
        assert_eq!(figure.data[0]["y"][3], json!(450_000));
        assert_eq!(figure.layout["yaxis"]["tickprefix"], "$");
        // Base axis settings survive the override
        assert_eq!(figure.layout["yaxis"]["gridcolor"], GRID_COLOR);
    }

    #[test]
    fn test_donut_colors_cycle_palette() {
        let figure = infringement_distribution();
        let colors = figure.data[0]["marker"]["colors"].as_array().unwrap();
        assert_eq!(colors.len(), INFRINGEMENT_DISTRIBUTION.len());
        assert_eq!(colors[0], CHART_PALETTE[0]);
        assert_eq!(figure.data[0]["hole"], json!(0.75));
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(CHART_PALETTE.len()), CHART_PALETTE[0]);
    }

    #[test]
    fn test_ai_index_axis_is_fixed() {
        let figure = ai_index_trend();
        assert_eq!(figure.layout["yaxis"]["range"], json!([0, 100]));
        assert_eq!(figure.data[0]["y"].as_array().unwrap().last(), Some(&json!(92)));
    }

    #[test]
    fn test_risk_trend_has_threshold_line() {
        let figure = risk_score_trend();
        assert_eq!(figure.trace_count(), 2);
        assert_eq!(figure.data[1]["name"], "Risk Threshold");
        assert_eq!(figure.data[1]["line"]["dash"], "dash");
        assert!(figure.data[1]["y"].as_array().unwrap().iter().all(|y| *y == json!(50)));
    }

    #[test]
    fn test_deepfake_colors_follow_severity() {
        let figure = deepfake_distribution();
        let colors = figure.data[0]["marker"]["colors"].as_array().unwrap();
        assert_eq!(colors[0], Severity::Low.tone().hex());
        assert_eq!(colors[2], Severity::High.tone().hex());
    }

    #[test]
    fn test_category_bars_are_grouped() {
        let figure = category_valuations();
        assert_eq!(figure.trace_count(), 2);
        assert_eq!(figure.layout["barmode"], "group");
        assert_eq!(figure.data[0]["name"], "Previous Value");
        assert_eq!(figure.data[1]["y"][0], json!(180_000));
    }

    #[test]
    fn test_figures_are_deterministic() {
        assert_eq!(valuation_trend(), valuation_trend());
        assert_eq!(category_valuations(), category_valuations());
    }
}
