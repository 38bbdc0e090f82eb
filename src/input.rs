//! Input model: input modes, keyboard keys, and the drawing phase.
//!
//! The phase gates which events mutate the session: points can only be
//! placed before a polygon is committed, and measurement can only start
//! afterwards. The input mode captures the one behavioral difference between
//! pointer and tap input: whether the buffer carries a trailing point.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// How points are being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Mouse or stylus: the buffer carries a trailing point that tracks the
    /// pointer, and step-back removes the second-from-end point so the
    /// trailing point survives.
    #[default]
    Pointer,
    /// Discrete taps: there is no pointer to track between taps, so close
    /// keeps every point and step-back removes the last one.
    Tap,
}

/// A keyboard key as reported by the browser (e.g. `"Enter"`, `"Backspace"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Where the session is in the drawing workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No points yet; the next pointer-down starts a shape.
    #[default]
    Empty,
    /// Points are being placed; the trailing point follows the pointer.
    Drawing,
    /// A polygon is committed; drawing input is disabled until reset.
    Closed,
}
