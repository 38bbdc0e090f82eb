//! Top-level engine: the session state machine behind both tool variants.
//!
//! [`EngineCore`] holds everything the session owns — config, viewport,
//! point buffer, committed polygon, side-length collector, phase — and maps
//! every UI event to one synchronous method. All state transitions happen
//! inside the event currently being handled; there is no shared state and no
//! locking. Failures are returned as [`SketchError`] values and mutate
//! nothing.
//!
//! [`Engine`] wraps the core together with the browser canvas element: it
//! converts screen coordinates to world space, dispatches keyboard shortcuts,
//! turns domain errors into user-visible alert actions, and owns rendering.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::buffer::PointBuffer;
use crate::consts::{INTERSECT_TOLERANCE, MIN_SIDE_LENGTH};
use crate::export::{ExportDocument, EXPORT_FILENAME, EXPORT_MIME};
use crate::input::{InputMode, Key, Phase};
use crate::measure::{MeasureError, MeasureState, SideLengthCollector};
use crate::polygon::Polygon;
use crate::render;
use crate::viewport::{Point, Viewport};

/// Which of the two tool variants this session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Draw a polygon and export it.
    #[default]
    Sketch,
    /// Draw a polygon, measure every side, then export.
    Measure,
}

/// Per-session tuning. The numeric knobs default to [`crate::consts`] values
/// and exist as fields so a caller can adjust the unit scale without
/// touching the geometry code.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub variant: Variant,
    pub input_mode: InputMode,
    /// World-unit tolerance for the self-intersection test.
    pub intersect_tolerance: f64,
    /// Smallest accepted side length.
    pub min_side_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            input_mode: InputMode::default(),
            intersect_tolerance: INTERSECT_TOLERANCE,
            min_side_length: MIN_SIDE_LENGTH,
        }
    }
}

/// Domain failures reported to the user at the offending action. All are
/// recoverable; the session stays in the state it was in.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    /// Close was requested before at least a triangle was placed.
    #[error("not enough points")]
    NotEnoughPoints,
    /// Measurement or export was requested with no committed polygon.
    #[error("draw a polygon first")]
    NoPolygon,
    /// The polygon's sides cross each other.
    #[error("the polygon intersects itself")]
    SelfIntersecting,
    /// Export was requested before every side had a length.
    #[error("provide the length of all sides first")]
    SidesIncomplete,
    /// A side length arrived outside the measurement workflow.
    #[error("measurement has not started")]
    MeasureNotStarted,
    /// The plain sketch variant has no measurement step.
    #[error("this tool does not collect side lengths")]
    MeasureUnsupported,
    /// A submitted or edited side length failed validation.
    #[error(transparent)]
    Measure(#[from] MeasureError),
    /// The export document could not be serialized.
    #[error("export failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene changed; schedule a redraw.
    RenderNeeded,
    /// Show a message to the user.
    Alert(String),
    /// Offer the given text as a file download.
    SaveFile { name: String, mime: String, content: String },
    /// Prompt for the length of the given 1-based side.
    PromptSide(usize),
    /// Every side has a length; measurement input should be disabled.
    MeasureComplete,
}

/// Core session state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub config: Config,
    pub viewport: Viewport,
    pub buffer: PointBuffer,
    pub polygon: Option<Polygon>,
    pub collector: Option<SideLengthCollector>,
    pub phase: Phase,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Viewport ---

    /// Update the screen port, e.g. after a window resize.
    pub fn set_screen_port(&mut self, width: f64, height: f64) {
        self.viewport.set_screen_port(width, height);
    }

    // --- Drawing ---

    /// Place a point at a world position. The first point of a shape is
    /// planted twice (anchor plus trailing point). Ignored once a polygon
    /// is committed.
    pub fn add_point(&mut self, world: Point) -> Vec<Action> {
        if self.phase == Phase::Closed {
            return Vec::new();
        }
        self.phase = Phase::Drawing;
        self.buffer.add(world);
        vec![Action::RenderNeeded]
    }

    /// Track the pointer with the trailing point.
    pub fn pointer_moved(&mut self, world: Point) -> Vec<Action> {
        if self.phase != Phase::Drawing || self.config.input_mode != InputMode::Pointer {
            return Vec::new();
        }
        self.buffer.update_trailing(world);
        vec![Action::RenderNeeded]
    }

    /// The pointer left the canvas: stop tracking and drop the trailing
    /// point so it doesn't freeze at the border.
    pub fn pointer_left(&mut self) -> Vec<Action> {
        if self.phase != Phase::Drawing || self.config.input_mode != InputMode::Pointer {
            return Vec::new();
        }
        self.buffer.drop_trailing();
        vec![Action::RenderNeeded]
    }

    /// The pointer re-entered the canvas: resume tracking with a fresh
    /// trailing point.
    pub fn pointer_entered(&mut self, world: Point) -> Vec<Action> {
        if self.phase != Phase::Drawing || self.config.input_mode != InputMode::Pointer {
            return Vec::new();
        }
        self.buffer.restore_trailing(world);
        vec![Action::RenderNeeded]
    }

    /// Back out the most recently fixed point. In pointer mode the trailing
    /// point survives, so the second-from-end point goes; in tap mode the
    /// last point goes.
    pub fn step_back(&mut self) -> Vec<Action> {
        if self.phase != Phase::Drawing {
            return Vec::new();
        }
        let from_end = match self.config.input_mode {
            InputMode::Pointer => 2,
            InputMode::Tap => 1,
        };
        self.buffer.remove_from_end(from_end);
        vec![Action::RenderNeeded]
    }

    /// Commit the buffer into the session's polygon.
    ///
    /// The trailing point (pointer mode only) is not part of the shape. The
    /// fixed points are normalized to counter-clockwise order and closed
    /// into an explicit ring; the buffer is cleared and drawing input is
    /// disabled until [`Self::delete_shape`].
    ///
    /// # Errors
    ///
    /// [`SketchError::NotEnoughPoints`] when fewer than 3 fixed points have
    /// been placed. The buffer is left exactly as it was.
    pub fn close_shape(&mut self) -> Result<Vec<Action>, SketchError> {
        if self.phase == Phase::Closed {
            return Ok(Vec::new());
        }
        let points = self.buffer.points();
        let fixed = match self.config.input_mode {
            InputMode::Pointer => points.get(..points.len().saturating_sub(1)),
            InputMode::Tap => Some(points),
        };
        let polygon = fixed
            .and_then(Polygon::close)
            .ok_or(SketchError::NotEnoughPoints)?;
        self.polygon = Some(polygon);
        self.buffer.clear();
        self.phase = Phase::Closed;
        Ok(vec![Action::RenderNeeded])
    }

    /// Reset the whole session: in-progress points, committed polygon, and
    /// any collected lengths. Always returns to [`Phase::Empty`].
    pub fn delete_shape(&mut self) -> Vec<Action> {
        self.buffer.clear();
        self.polygon = None;
        self.collector = None;
        self.phase = Phase::Empty;
        vec![Action::RenderNeeded]
    }

    /// Dispatch a keyboard shortcut: Enter closes the shape, ArrowLeft backs
    /// out the last fixed point, Backspace resets the session.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the dispatched operation.
    pub fn key_up(&mut self, key: &Key) -> Result<Vec<Action>, SketchError> {
        match key.0.as_str() {
            "Enter" => self.close_shape(),
            "ArrowLeft" => Ok(self.step_back()),
            "Backspace" => Ok(self.delete_shape()),
            _ => Ok(Vec::new()),
        }
    }

    // --- Measurement ---

    /// Start the side-length wizard over the committed polygon. Idempotent:
    /// calling again re-prompts for the current side.
    ///
    /// # Errors
    ///
    /// [`SketchError::MeasureUnsupported`] in the plain sketch variant,
    /// [`SketchError::NoPolygon`] before a shape is committed, and
    /// [`SketchError::SelfIntersecting`] when the polygon's sides cross.
    pub fn begin_measure(&mut self) -> Result<Vec<Action>, SketchError> {
        if self.config.variant != Variant::Measure {
            return Err(SketchError::MeasureUnsupported);
        }
        let polygon = self.polygon.as_ref().ok_or(SketchError::NoPolygon)?;
        if polygon.self_intersects(self.config.intersect_tolerance) {
            return Err(SketchError::SelfIntersecting);
        }
        let collector = self.collector.get_or_insert_with(|| {
            SideLengthCollector::new(polygon.side_count(), self.config.min_side_length)
        });
        Ok(match collector.state() {
            MeasureState::Collecting(side) => vec![Action::RenderNeeded, Action::PromptSide(side)],
            MeasureState::Complete => vec![Action::MeasureComplete],
        })
    }

    /// Submit a raw length string for the side currently being measured.
    ///
    /// # Errors
    ///
    /// [`SketchError::MeasureNotStarted`] outside the wizard, or the
    /// validation failure from [`SideLengthCollector::submit`]. Rejected
    /// input leaves the wizard on the same side.
    pub fn submit_side(&mut self, raw: &str) -> Result<Vec<Action>, SketchError> {
        let collector = self.collector.as_mut().ok_or(SketchError::MeasureNotStarted)?;
        Ok(match collector.submit(raw)? {
            MeasureState::Collecting(side) => vec![Action::RenderNeeded, Action::PromptSide(side)],
            MeasureState::Complete => vec![Action::RenderNeeded, Action::MeasureComplete],
        })
    }

    /// Replace the stored length of a 1-based side without moving the
    /// wizard.
    ///
    /// # Errors
    ///
    /// [`SketchError::MeasureNotStarted`] outside the wizard, or the
    /// validation failure from [`SideLengthCollector::edit`].
    pub fn edit_side(&mut self, side: usize, raw: &str) -> Result<Vec<Action>, SketchError> {
        let collector = self.collector.as_mut().ok_or(SketchError::MeasureNotStarted)?;
        collector.edit(side, raw)?;
        Ok(vec![Action::RenderNeeded])
    }

    /// Clear every collected length and restart the wizard at side 1.
    ///
    /// # Errors
    ///
    /// [`SketchError::MeasureNotStarted`] outside the wizard.
    pub fn reset_sides(&mut self) -> Result<Vec<Action>, SketchError> {
        let collector = self.collector.as_mut().ok_or(SketchError::MeasureNotStarted)?;
        collector.reset();
        Ok(vec![Action::RenderNeeded, Action::PromptSide(1)])
    }

    // --- Export ---

    /// Build and serialize the export document, gated per variant: the
    /// plain variant requires a committed, non-self-intersecting polygon;
    /// the measurement variant additionally requires every side measured.
    ///
    /// # Errors
    ///
    /// [`SketchError::NoPolygon`], [`SketchError::SelfIntersecting`], or
    /// [`SketchError::SidesIncomplete`] depending on what is missing.
    pub fn export(&self) -> Result<Vec<Action>, SketchError> {
        let polygon = self.polygon.as_ref().ok_or(SketchError::NoPolygon)?;
        let document = match self.config.variant {
            Variant::Sketch => {
                if polygon.self_intersects(self.config.intersect_tolerance) {
                    return Err(SketchError::SelfIntersecting);
                }
                ExportDocument::build(polygon, None)
            }
            Variant::Measure => {
                let collector = self
                    .collector
                    .as_ref()
                    .filter(|c| c.is_complete())
                    .ok_or(SketchError::SidesIncomplete)?;
                ExportDocument::build(polygon, Some(collector.lengths()))
            }
        };
        let content = document.to_json()?;
        Ok(vec![Action::SaveFile {
            name: EXPORT_FILENAME.to_owned(),
            mime: EXPORT_MIME.to_owned(),
            content,
        }])
    }

    // --- Queries ---

    /// The committed polygon, if any.
    #[must_use]
    pub fn polygon(&self) -> Option<&Polygon> {
        self.polygon.as_ref()
    }

    /// The 1-based side currently being measured, if the wizard is running.
    #[must_use]
    pub fn measuring_side(&self) -> Option<usize> {
        self.collector.as_ref().and_then(SideLengthCollector::current_side)
    }

    /// The current drawing phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// The full sketch engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, sized from its
    /// current client rectangle.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: Config) -> Self {
        let mut core = EngineCore::new(config);
        core.set_screen_port(f64::from(canvas.client_width()), f64::from(canvas.client_height()));
        Self { canvas, core }
    }

    /// Re-read the canvas size after a window resize.
    pub fn on_resize(&mut self) -> Vec<Action> {
        self.core
            .set_screen_port(f64::from(self.canvas.client_width()), f64::from(self.canvas.client_height()));
        vec![Action::RenderNeeded]
    }

    // --- Input events (screen coordinates in CSS pixels) ---

    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Vec<Action> {
        let world = self.core.viewport.screen_to_world(Point::new(x, y));
        self.core.add_point(world)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Vec<Action> {
        let world = self.core.viewport.screen_to_world(Point::new(x, y));
        self.core.pointer_moved(world)
    }

    pub fn on_pointer_enter(&mut self, x: f64, y: f64) -> Vec<Action> {
        let world = self.core.viewport.screen_to_world(Point::new(x, y));
        self.core.pointer_entered(world)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.pointer_left()
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        report(self.core.key_up(key))
    }

    // --- Command bar ---

    pub fn close_shape(&mut self) -> Vec<Action> {
        report(self.core.close_shape())
    }

    pub fn delete_shape(&mut self) -> Vec<Action> {
        self.core.delete_shape()
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.step_back()
    }

    pub fn begin_measure(&mut self) -> Vec<Action> {
        report(self.core.begin_measure())
    }

    pub fn submit_side(&mut self, raw: &str) -> Vec<Action> {
        report(self.core.submit_side(raw))
    }

    pub fn edit_side(&mut self, side: usize, raw: &str) -> Vec<Action> {
        report(self.core.edit_side(side, raw))
    }

    pub fn reset_sides(&mut self) -> Vec<Action> {
        report(self.core.reset_sides())
    }

    pub fn export(&self) -> Vec<Action> {
        report(self.core.export())
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        render::draw(&ctx, &self.core)
    }
}

/// Map a domain failure to a user-visible alert; successful handlers pass
/// their actions through.
fn report(result: Result<Vec<Action>, SketchError>) -> Vec<Action> {
    match result {
        Ok(actions) => actions,
        Err(err) => vec![Action::Alert(err.to_string())],
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
