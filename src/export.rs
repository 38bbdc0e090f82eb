//! The exported document: the one stable external-facing contract.
//!
//! Downstream consumers take a flat `"polyline"`-typed JSON value with the
//! ring vertices under `data.points` and, for the measurement variant, the
//! side lengths as a top-level sibling of `type` and `data`. Vertices are
//! written in ring order with the closing duplicate included and no
//! reordering.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;

/// Filename offered for the download.
pub const EXPORT_FILENAME: &str = "polygon.json";

/// MIME type of the exported text.
pub const EXPORT_MIME: &str = "application/json";

/// A point as written to the export file. The tool is strictly 2D; `z` is
/// always zero and exists only because the downstream point format has
/// three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Geometry payload: the ring vertices, closing duplicate included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub points: Vec<ExportPoint>,
}

/// The complete exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ExportData,
    /// One length per side, present only in the measurement variant once
    /// every side has been measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lengths: Option<Vec<f64>>,
}

impl ExportDocument {
    /// Build the document from a committed polygon, copying the ring in
    /// order. Pass `lengths` only when the side-length wizard is complete.
    #[must_use]
    pub fn build(polygon: &Polygon, lengths: Option<&[f64]>) -> Self {
        Self {
            kind: "polyline".to_owned(),
            data: ExportData {
                points: polygon
                    .ring()
                    .iter()
                    .map(|p| ExportPoint { x: p.x, y: p.y, z: 0.0 })
                    .collect(),
            },
            lengths: lengths.map(<[f64]>::to_vec),
        }
    }

    /// Serialize to the JSON text handed to the host's file-save primitive.
    ///
    /// # Errors
    ///
    /// Returns `Err` if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
