// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams and the direction they run in.

use std::fmt;

/// Which way a seam runs.  A vertical seam runs top to bottom and
/// costs the image one column; a horizontal seam runs left to right
/// and costs it one row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn turn(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// Of a `(width, height)` pair, the extent a seam on this axis
    /// shrinks.
    pub fn extent(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Axis::Vertical => width,
            Axis::Horizontal => height,
        }
    }

    /// Of a `(width, height)` pair, the extent a seam on this axis
    /// spans, which is also the seam's length.
    pub fn span(self, dimensions: (u32, u32)) -> u32 {
        self.turn().extent(dimensions)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A connected, one-pixel-wide path across the image.  For a vertical
/// seam, `indices()[y]` is the column cut from row `y`; for a
/// horizontal seam, `indices()[x]` is the row cut from column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    axis: Axis,
    indices: Vec<u32>,
}

impl Seam {
    pub fn new(axis: Axis, indices: Vec<u32>) -> Self {
        Seam { axis, indices }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True if no two consecutive indices differ by more than one.
    pub fn is_connected(&self) -> bool {
        self.indices
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }
}

impl From<Seam> for Vec<u32> {
    fn from(seam: Seam) -> Self {
        seam.indices
    }
}
