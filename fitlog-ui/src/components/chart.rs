//! Chart Component
//!
//! Weekly calories bar chart drawn on an HTML5 canvas.

use fitlog::chart::SERIES_LABEL;
use fitlog::{ChartRenderer, WeeklyCalories};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::DashboardState;

const BAR_COLOR: &str = "#FF9800";
const GRID_LINES: usize = 5;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Calories chart component; redraws whenever the dashboard reloads
#[component]
pub fn CaloriesChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let current = store_value(None::<CanvasFrame>);

    create_effect(move |_| {
        let chart = state.chart.get();

        if let (Some(canvas), Some(chart)) = (canvas_ref.get(), chart) {
            let renderer = CanvasChart {
                canvas: (*canvas).clone(),
            };

            let mut previous = None;
            current.update_value(|slot| previous = slot.take());
            let frame = renderer.render(previous, &chart);
            current.set_value(Some(frame));
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Canvas-backed renderer
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

/// A chart currently drawn on a canvas
pub struct CanvasFrame {
    ctx: Option<CanvasRenderingContext2d>,
    width: f64,
    height: f64,
}

impl CanvasChart {
    fn context(&self) -> Option<CanvasRenderingContext2d> {
        match self.canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
            _ => None,
        }
    }
}

impl ChartRenderer for CanvasChart {
    type Handle = CanvasFrame;

    fn draw(&self, chart: &WeeklyCalories) -> CanvasFrame {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let ctx = self.context();

        if let Some(ctx) = &ctx {
            draw_bars(ctx, chart, width, height);
        }

        CanvasFrame { ctx, width, height }
    }

    fn dispose(&self, frame: CanvasFrame) {
        if let Some(ctx) = frame.ctx {
            ctx.clear_rect(0.0, 0.0, frame.width, frame.height);
        }
    }
}

/// Round the y-axis top up to 1, 2 or 5 times a power of ten
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 100.0;
    }

    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// Bar rectangle (x, y, width, height) for each value, in canvas coordinates
pub fn bar_rects(values: &[f64], top: f64, width: f64, height: f64) -> Vec<(f64, f64, f64, f64)> {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let slot = chart_width / values.len().max(1) as f64;
    let bar_width = slot * 0.6;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = (value / top).clamp(0.0, 1.0) * chart_height;
            let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
            let y = MARGIN_TOP + chart_height - bar_height;
            (x, y, bar_width, bar_height)
        })
        .collect()
}

fn draw_bars(ctx: &CanvasRenderingContext2d, chart: &WeeklyCalories, width: f64, height: f64) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let top = nice_ceiling(chart.max());

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Legend
    ctx.set_fill_style(&BAR_COLOR.into());
    ctx.fill_rect(width / 2.0 - 90.0, 12.0, 12.0, 12.0);
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text(SERIES_LABEL, width / 2.0 - 72.0, 23.0);

    // Horizontal grid lines, y axis from zero
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=GRID_LINES {
        let y = MARGIN_TOP + (i as f64 / GRID_LINES as f64) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = top - (i as f64 / GRID_LINES as f64) * top;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars
    ctx.set_fill_style(&BAR_COLOR.into());
    let rects = bar_rects(&chart.values(), top, width, height);
    for (x, y, w, h) in &rects {
        ctx.fill_rect(*x, *y, *w, *h);
    }

    // Day labels
    ctx.set_fill_style(&"#9ca3af".into());
    let slot = chart_width / rects.len().max(1) as f64;
    for (i, label) in chart.labels().iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + slot / 2.0 - 30.0;
        let _ = ctx.fill_text(label, x, height - 12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 100.0);
        assert_eq!(nice_ceiling(800.0), 1000.0);
        assert_eq!(nice_ceiling(150.0), 200.0);
        assert_eq!(nice_ceiling(500.0), 500.0);
        assert_eq!(nice_ceiling(3.0), 5.0);
    }

    #[test]
    fn test_bar_rects_scale_from_zero() {
        let rects = bar_rects(&[0.0, 500.0, 1000.0], 1000.0, 800.0, 400.0);
        let chart_height = 400.0 - MARGIN_TOP - MARGIN_BOTTOM;

        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].3, 0.0);
        assert_eq!(rects[1].3, chart_height / 2.0);
        assert_eq!(rects[2].3, chart_height);
        assert_eq!(rects[2].1, MARGIN_TOP);
        assert!(rects[0].0 < rects[1].0 && rects[1].0 < rects[2].0);
    }
}
