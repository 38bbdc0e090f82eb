//! Shared numeric constants for the sketch engine.

// ── Geometry ────────────────────────────────────────────────────

/// Default tolerance, in world units, for the tolerant segment-intersection
/// test used by the self-intersection scan.
pub const INTERSECT_TOLERANCE: f64 = 0.01;

/// Default smallest accepted side length. The wizard asks for meters.
pub const MIN_SIDE_LENGTH: f64 = 0.1;

// ── Viewport ────────────────────────────────────────────────────

/// Half-height of the world frustum in world units. The half-width is this
/// value scaled by the screen aspect ratio so world units stay square.
pub const FRUSTUM_HALF_HEIGHT: f64 = 30.0;

// ── Rendering ───────────────────────────────────────────────────

/// Background grid extent in world units, each direction from the origin.
pub const GRID_EXTENT: i32 = 50;

/// Axis line length in world units.
pub const AXIS_LENGTH: f64 = 50.0;

/// Side of the filled square drawn at each vertex, in screen pixels.
pub const VERTEX_FILL_PX: f64 = 3.0;

/// Side of the outline square drawn around each vertex, in screen pixels.
pub const VERTEX_OUTLINE_PX: f64 = 5.0;

/// Dash segment length, in screen pixels, for the open sketch's closing hint.
pub const CLOSING_DASH_PX: f64 = 4.0;
