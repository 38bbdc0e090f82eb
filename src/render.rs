//! Rendering: draws the full sketch scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of the
//! session and produces pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{AXIS_LENGTH, CLOSING_DASH_PX, GRID_EXTENT, VERTEX_FILL_PX, VERTEX_OUTLINE_PX};
use crate::engine::EngineCore;
use crate::polygon::Polygon;
use crate::viewport::{Point, Viewport};

/// Draw the full scene: grid, axes, the committed polygon, the open sketch,
/// and the highlighted side during measurement.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let viewport = &core.viewport;
    let (width, height) = viewport.screen_port();
    ctx.clear_rect(0.0, 0.0, width, height);

    draw_grid(ctx, viewport);
    draw_axes(ctx, viewport);

    if let Some(polygon) = core.polygon() {
        draw_ring(ctx, viewport, polygon.ring());
        if let Some(side) = core.measuring_side() {
            draw_measured_side(ctx, viewport, polygon, side);
        }
    }

    if !core.buffer.is_empty() {
        draw_open_sketch(ctx, viewport, core.buffer.points())?;
    }

    Ok(())
}

// =============================================================
// Background
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
    ctx.set_line_width(0.1);
    ctx.set_stroke_style_str("rgb(130,130,130)");
    ctx.begin_path();

    let extent = f64::from(GRID_EXTENT);
    for i in 0..=GRID_EXTENT {
        let offset = f64::from(i);
        for line_offset in [offset, -offset] {
            trace_world_line(
                ctx,
                viewport,
                Point::new(line_offset, -extent),
                Point::new(line_offset, extent),
            );
            trace_world_line(
                ctx,
                viewport,
                Point::new(-extent, line_offset),
                Point::new(extent, line_offset),
            );
        }
    }
    ctx.stroke();
}

fn draw_axes(ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
    ctx.set_line_width(2.0);

    ctx.set_stroke_style_str("rgb(150,75,75)");
    ctx.begin_path();
    trace_world_line(ctx, viewport, Point::new(0.0, 0.0), Point::new(AXIS_LENGTH, 0.0));
    ctx.stroke();

    ctx.set_stroke_style_str("rgb(75,150,75)");
    ctx.begin_path();
    trace_world_line(ctx, viewport, Point::new(0.0, 0.0), Point::new(0.0, AXIS_LENGTH));
    ctx.stroke();
}

// =============================================================
// Shapes
// =============================================================

/// The committed polygon: filled ring with a marker on every vertex.
fn draw_ring(ctx: &CanvasRenderingContext2d, viewport: &Viewport, ring: &[Point]) {
    ctx.set_stroke_style_str("black");
    ctx.set_fill_style_str("rgba(14, 135, 216, 0.5)");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    trace_world_path(ctx, viewport, ring);
    ctx.stroke();
    ctx.fill();

    draw_vertex_markers(ctx, viewport, ring);
}

/// The in-progress sketch: a gray polyline, a dashed closing hint once a
/// triangle is possible, and a marker on every point.
fn draw_open_sketch(
    ctx: &CanvasRenderingContext2d,
    viewport: &Viewport,
    points: &[Point],
) -> Result<(), JsValue> {
    ctx.set_stroke_style_str("darkgray");
    ctx.set_line_width(1.0);
    ctx.begin_path();
    trace_world_path(ctx, viewport, points);
    ctx.stroke();

    if points.len() > 2 {
        let dash = js_sys::Array::new();
        dash.push(&CLOSING_DASH_PX.into());
        dash.push(&CLOSING_DASH_PX.into());
        ctx.set_line_dash(&dash)?;

        ctx.begin_path();
        let last = viewport.world_to_screen(points[points.len() - 1]);
        let first = viewport.world_to_screen(points[0]);
        ctx.move_to(last.x, last.y);
        ctx.line_to(first.x, first.y);
        ctx.stroke();

        ctx.set_line_dash(&js_sys::Array::new())?;
    }

    draw_vertex_markers(ctx, viewport, points);
    Ok(())
}

/// The side currently being measured, drawn on top of the ring in red.
fn draw_measured_side(
    ctx: &CanvasRenderingContext2d,
    viewport: &Viewport,
    polygon: &Polygon,
    side: usize,
) {
    let Some(segment) = polygon.side(side - 1) else {
        return;
    };
    ctx.set_stroke_style_str("red");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    trace_world_line(ctx, viewport, segment.a, segment.b);
    ctx.stroke();
}

// =============================================================
// Helpers
// =============================================================

fn trace_world_path(ctx: &CanvasRenderingContext2d, viewport: &Viewport, points: &[Point]) {
    for (i, point) in points.iter().enumerate() {
        let screen = viewport.world_to_screen(*point);
        if i == 0 {
            ctx.move_to(screen.x, screen.y);
        } else {
            ctx.line_to(screen.x, screen.y);
        }
    }
}

fn trace_world_line(ctx: &CanvasRenderingContext2d, viewport: &Viewport, a: Point, b: Point) {
    let sa = viewport.world_to_screen(a);
    let sb = viewport.world_to_screen(b);
    ctx.move_to(sa.x, sa.y);
    ctx.line_to(sb.x, sb.y);
}

/// White squares with a black outline on every vertex, in screen pixels.
fn draw_vertex_markers(ctx: &CanvasRenderingContext2d, viewport: &Viewport, points: &[Point]) {
    ctx.set_fill_style_str("white");
    ctx.set_stroke_style_str("black");
    ctx.set_line_width(1.0);
    for point in points {
        let screen = viewport.world_to_screen(*point);
        ctx.fill_rect(
            screen.x - VERTEX_FILL_PX / 2.0,
            screen.y - VERTEX_FILL_PX / 2.0,
            VERTEX_FILL_PX,
            VERTEX_FILL_PX,
        );
        ctx.stroke_rect(
            screen.x - VERTEX_OUTLINE_PX / 2.0,
            screen.y - VERTEX_OUTLINE_PX / 2.0,
            VERTEX_OUTLINE_PX,
            VERTEX_OUTLINE_PX,
        );
    }
}
