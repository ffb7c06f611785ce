use serde::{Deserialize, Serialize};

/// Fixed coordinates for overlay-draw mode, in PDF points on page 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayLayout {
    pub header_x: f32,
    /// One y per header line: patient, id, dob, collected, finalized.
    pub header_ys: [f32; 5],
    pub header_size: f32,
    /// Column x positions: name, value, units, reference, flag.
    pub columns: [f32; 5],
    pub first_row_y: f32,
    pub row_pitch: f32,
    pub max_rows: usize,
    pub row_size: f32,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            header_x: 50.0,
            header_ys: [740.0, 725.0, 710.0, 695.0, 680.0],
            header_size: 11.0,
            columns: [50.0, 260.0, 330.0, 400.0, 520.0],
            first_row_y: 640.0,
            row_pitch: 16.0,
            max_rows: 12,
            row_size: 10.0,
        }
    }
}

impl OverlayLayout {
    pub fn row_y(&self, row: usize) -> f32 {
        self.first_row_y - self.row_pitch * row as f32
    }
}
