//! Polygon sketch and measurement engine for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a single-polygon drawing session: translating raw DOM
//! input events into sketch mutations, committing the in-progress points into
//! a closed counter-clockwise ring, optionally walking the user through
//! measuring every side, and producing the exported JSON document. The host
//! JavaScript layer is responsible only for wiring DOM events to the engine
//! and acting on the returned [`engine::Action`]s (redraws, alerts, file
//! downloads, measurement prompts).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`buffer`] | In-progress point buffer (fixed points + trailing point) |
//! | [`polygon`] | Committed closed ring and the self-intersection test |
//! | [`geometry`] | Signed area, winding, tolerant segment intersection |
//! | [`measure`] | Side-length collector state machine |
//! | [`export`] | Export document types and JSON serialization |
//! | [`viewport`] | Orthographic viewport and coordinate conversions |
//! | [`input`] | Input modes, keys, and the drawing phase |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`consts`] | Shared numeric constants (tolerances, frustum, grid) |

pub mod buffer;
pub mod consts;
pub mod engine;
pub mod export;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod polygon;
pub mod render;
pub mod viewport;
