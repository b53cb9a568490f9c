//! Packing arrangements of six cube faces inside one image.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CubeFace, ProjectionError};

/// How the six faces are packed into a single buffer.
///
/// ```text
/// line:  -X +X -Y +Y -Z +Z
///
/// cube:  .. +Y .. ..
///        -X +Z +X -Z
///        .. -Y .. ..
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Six faces side by side in one row.
    Line,
    /// Unfolded cross on a 4x3 grid; six of the twelve cells are unused.
    Cube,
}

impl Layout {
    /// Both layouts.
    pub const ALL: [Layout; 2] = [Layout::Line, Layout::Cube];

    /// The lowercase name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Layout::Line => "line",
            Layout::Cube => "cube",
        }
    }

    /// Grid size in face cells as `(columns, rows)`.
    #[must_use]
    pub fn grid(self) -> (u32, u32) {
        match self {
            Layout::Line => (6, 1),
            Layout::Cube => (4, 3),
        }
    }

    /// The `(column, row)` cell that holds `face`.
    #[must_use]
    pub fn cell(self, face: CubeFace) -> (u32, u32) {
        match self {
            Layout::Line => match face {
                CubeFace::NegX => (0, 0),
                CubeFace::PosX => (1, 0),
                CubeFace::NegY => (2, 0),
                CubeFace::PosY => (3, 0),
                CubeFace::NegZ => (4, 0),
                CubeFace::PosZ => (5, 0),
            },
            Layout::Cube => match face {
                CubeFace::PosY => (1, 0),
                CubeFace::NegX => (0, 1),
                CubeFace::PosZ => (1, 1),
                CubeFace::PosX => (2, 1),
                CubeFace::NegZ => (3, 1),
                CubeFace::NegY => (1, 2),
            },
        }
    }

    /// The face stored in cell `(col, row)`, or `None` for an unused cell.
    #[must_use]
    pub fn face_at_cell(self, col: u32, row: u32) -> Option<CubeFace> {
        CubeFace::ALL
            .into_iter()
            .find(|&face| self.cell(face) == (col, row))
    }

    /// Packed buffer dimensions for faces of `face_res` pixels.
    #[must_use]
    pub fn packed_size(self, face_res: u32) -> (u32, u32) {
        let (cols, rows) = self.grid();
        (cols * face_res, rows * face_res)
    }

    /// Face resolution implied by a packed buffer's dimensions.
    ///
    /// `cube` derives it from the width, `line` from the height. Dimensions
    /// that do not match the layout's aspect ratio are not detected.
    #[must_use]
    pub fn face_res(self, width: u32, height: u32) -> u32 {
        match self {
            Layout::Line => height,
            Layout::Cube => width / 4,
        }
    }
}

impl FromStr for Layout {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProjectionError::InvalidLayout(s.to_string()))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
