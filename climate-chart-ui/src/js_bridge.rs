//! Chart.js interop via `js_sys::eval()`.
//!
//! Chart.js is loaded by the page as a global `Chart`. Live charts are kept on
//! `window.__climateCharts` keyed by canvas id, and the latest series for each
//! canvas on `window.__climateSeries`, so an update that arrives while the
//! chart is still waiting for Chart.js or its canvas is not lost.

use climate_view::chart::{ChartSeries, ChartSurface};

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Climate dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Serialize a series as a JS object literal. NaN values become `null`, which
/// Chart.js draws as a gap.
fn series_literal(series: &ChartSeries) -> String {
    serde_json::to_string(series).unwrap_or_else(|_| "{\"labels\":[],\"values\":[]}".to_string())
}

fn id_literal(canvas_id: &str) -> String {
    serde_json::to_string(canvas_id).unwrap_or_default()
}

/// Create a line chart on the given canvas.
///
/// Polls until Chart.js has loaded and the canvas exists, then builds the
/// chart from whatever series is most recent at that point.
pub fn create_line_chart(canvas_id: &str, series: &ChartSeries) {
    let id = id_literal(canvas_id);
    let data = series_literal(series);
    call_js(&format!(
        r#"
        (function() {{
            window.__climateCharts = window.__climateCharts || {{}};
            window.__climateSeries = window.__climateSeries || {{}};
            window.__climateSeries[{id}] = {data};
            var poll = setInterval(function() {{
                var canvas = document.getElementById({id});
                if (typeof Chart === 'undefined' || !canvas) {{
                    return;
                }}
                clearInterval(poll);
                try {{
                    var s = window.__climateSeries[{id}];
                    window.__climateCharts[{id}] = new Chart(canvas.getContext('2d'), {{
                        type: 'line',
                        data: {{
                            labels: s.labels,
                            datasets: [{{
                                label: 'Value',
                                data: s.values,
                                fill: false,
                                tension: 0.2,
                                borderColor: '#2563eb',
                                backgroundColor: 'rgba(37, 99, 235, 0.3)',
                                pointRadius: 0,
                            }}],
                        }},
                        options: {{
                            responsive: true,
                            scales: {{
                                x: {{ ticks: {{ maxRotation: 0, autoSkip: true }} }},
                                y: {{
                                    beginAtZero: false,
                                    title: {{ display: !!s.y_axis_title, text: s.y_axis_title }},
                                }},
                            }},
                            plugins: {{ legend: {{ display: false }} }},
                        }},
                    }});
                }} catch(e) {{ console.error('[Climate] create chart error:', e); }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace the labels and data of an existing chart and redraw it.
pub fn update_line_chart(canvas_id: &str, series: &ChartSeries) {
    let id = id_literal(canvas_id);
    let data = series_literal(series);
    call_js(&format!(
        r#"
        (function() {{
            var s = {data};
            window.__climateSeries = window.__climateSeries || {{}};
            window.__climateSeries[{id}] = s;
            var chart = window.__climateCharts && window.__climateCharts[{id}];
            if (!chart) {{
                return;
            }}
            chart.data.labels = s.labels;
            chart.data.datasets[0].data = s.values;
            chart.options.scales.y.title.display = !!s.y_axis_title;
            chart.options.scales.y.title.text = s.y_axis_title;
            chart.update();
        }})();
        "#,
    ));
}

/// Destroy the chart on the given canvas, if any.
pub fn destroy_chart(canvas_id: &str) {
    let id = id_literal(canvas_id);
    call_js(&format!(
        r#"
        if (window.__climateCharts && window.__climateCharts[{id}]) {{
            window.__climateCharts[{id}].destroy();
            delete window.__climateCharts[{id}];
        }}
        "#,
    ));
}

/// [`ChartSurface`] backed by a Chart.js canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJsSurface {
    canvas_id: String,
}

impl ChartJsSurface {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
        }
    }
}

/// A chart that lives in `window.__climateCharts`.
#[derive(Debug)]
pub struct ChartJsInstance {
    canvas_id: String,
}

impl ChartSurface for ChartJsSurface {
    type Instance = ChartJsInstance;

    fn create(&mut self, series: &ChartSeries) -> ChartJsInstance {
        log::debug!("Creating chart on #{}", self.canvas_id);
        create_line_chart(&self.canvas_id, series);
        ChartJsInstance {
            canvas_id: self.canvas_id.clone(),
        }
    }

    fn update(&mut self, instance: &mut ChartJsInstance, series: &ChartSeries) {
        update_line_chart(&instance.canvas_id, series);
    }

    fn destroy(&mut self, instance: ChartJsInstance) {
        destroy_chart(&instance.canvas_id);
    }
}
