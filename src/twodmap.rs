// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A two-dimensional, row-major map.
//!
//! Every intermediate product of the carver (grayscale, gradients,
//! energy, cumulative cost) lives in one of these.  Addressing is
//! `(x, y)`, column then row, the same as the `image` crate.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }

    /// Define a new map with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the buffer
    /// is not exactly `width * height` long.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() == width as usize * height as usize {
            Some(TwoDimensionalMap {
                width,
                height,
                data,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The whole map, row after row.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// One row of the map.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// One row of the map, mutably.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Row `y - 1` for reading alongside row `y` for writing.  This is
    /// what a top-to-bottom dynamic program needs at every step.
    pub fn adjacent_rows_mut(&mut self, y: u32) -> (&[P], &mut [P]) {
        assert!(y > 0 && y < self.height, "row {} has no predecessor", y);
        let width = self.width as usize;
        let split = self.get_index(0, y);
        let (above, rest) = self.data.split_at_mut(split);
        (&above[split - width..], &mut rest[..width])
    }

    /// The same map flipped over its main diagonal: `(x, y)` becomes
    /// `(y, x)`, so columns can be walked as contiguous rows.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            for y in 0..self.height {
                data.push(self[(x, y)]);
            }
        }
        TwoDimensionalMap {
            width: self.height,
            height: self.width,
            data,
        }
    }

    /// A copy of this map one column narrower, with the cell at
    /// `(seam[y], y)` cut out of every row.
    pub fn without_vertical_seam(&self, seam: &[u32]) -> Self {
        assert_eq!(seam.len(), self.height as usize, "seam must cover every row");
        let mut data = Vec::with_capacity(self.data.len() - seam.len());
        for (y, &cut) in seam.iter().enumerate() {
            let row = self.row(y as u32);
            let cut = cut as usize;
            data.extend_from_slice(&row[..cut]);
            data.extend_from_slice(&row[cut + 1..]);
        }
        TwoDimensionalMap {
            width: self.width - 1,
            height: self.height,
            data,
        }
    }

    /// A copy of this map one row shorter, with the cell at
    /// `(x, seam[x])` cut out of every column.
    pub fn without_horizontal_seam(&self, seam: &[u32]) -> Self {
        assert_eq!(seam.len(), self.width as usize, "seam must cover every column");
        let height = self.height - 1;
        let mut data = Vec::with_capacity(self.data.len() - seam.len());
        for y in 0..height {
            for (x, &cut) in seam.iter().enumerate() {
                // Rows at or below the cut shift up by one.
                let source = if y < cut { y } else { y + 1 };
                data.push(self[(x as u32, source)]);
            }
        }
        TwoDimensionalMap {
            width: self.width,
            height,
            data,
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
