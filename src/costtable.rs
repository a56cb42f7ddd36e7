// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative minimum-cost tables
//!
//! For every pixel, the least total energy of any connected path that
//! reaches it from the starting edge, along with which neighbour that
//! path came through.
//!
//! Both axes are computed as top-to-bottom "lanes".  A horizontal table
//! is built on the transposed energy map, so each column of the image
//! becomes a contiguous row here.  Within a lane every cell depends
//! only on the lane before it, which is what lets the `threaded`
//! feature break the receiving lane into chunks and fill each chunk on
//! its own thread without anything unsafe.

use crate::energy::EnergyMap;
use crate::seam::Axis;
use crate::twodmap::TwoDimensionalMap;
use std::borrow::Cow;
use std::cmp::min;
use std::ops::RangeInclusive;

/// One cell of the table: the accumulated cost, and the index in the
/// previous lane of the cheapest predecessor.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CostAndParent {
    pub cost: u32,
    pub parent: u32,
}

/// The dynamic-programming table for one axis.  Same extent as the
/// energy map it was built from.
#[derive(Debug, Clone)]
pub struct CostTable {
    axis: Axis,
    lanes: TwoDimensionalMap<CostAndParent>,
}

impl CostTable {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// `(width, height)` in image coordinates.
    pub fn dimensions(&self) -> (u32, u32) {
        let (across, along) = self.lanes.dimensions();
        match self.axis {
            Axis::Vertical => (across, along),
            Axis::Horizontal => (along, across),
        }
    }

    /// The cell for pixel `(x, y)`, in image coordinates.
    pub fn get(&self, x: u32, y: u32) -> CostAndParent {
        match self.axis {
            Axis::Vertical => self.lanes[(x, y)],
            Axis::Horizontal => self.lanes[(y, x)],
        }
    }

    /// The accumulated cost at pixel `(x, y)`.
    pub fn cost(&self, x: u32, y: u32) -> u32 {
        self.get(x, y).cost
    }

    // Row `n` of this map is lane `n` of the table: a row of the image
    // for vertical seams, a column for horizontal ones.
    pub(crate) fn lanes(&self) -> &TwoDimensionalMap<CostAndParent> {
        &self.lanes
    }
}

/// The indices in the previous lane that can reach index `i` of a lane
/// `len` wide: `i - 1 ..= i + 1`, clipped to the lane.
pub(crate) fn predecessors(i: u32, len: u32) -> RangeInclusive<u32> {
    i.saturating_sub(1)..=min(i + 1, len.saturating_sub(1))
}

/// Build the cumulative cost table for seams along `axis`.
pub fn cumulative_cost(energy: &EnergyMap, axis: Axis) -> CostTable {
    let source = match axis {
        Axis::Vertical => Cow::Borrowed(energy),
        Axis::Horizontal => Cow::Owned(energy.transpose()),
    };
    let (width, height) = source.dimensions();
    let mut lanes = TwoDimensionalMap::new(width, height);

    if height > 0 {
        // The first lane is just the energy.
        for (x, (cell, &e)) in lanes.row_mut(0).iter_mut().zip(source.row(0)).enumerate() {
            *cell = CostAndParent {
                cost: e,
                parent: x as u32,
            };
        }
    }

    // Every subsequent lane: the cell's own energy plus the cheapest
    // reachable cell of the lane above.
    for y in 1..height {
        let (above, current) = lanes.adjacent_rows_mut(y);
        fill_lane(above, source.row(y), current);
    }

    CostTable { axis, lanes }
}

// `out` and `energy` are the slice of a lane starting at `offset`;
// `above` is the whole previous lane.
fn fill_span(above: &[CostAndParent], energy: &[u32], out: &mut [CostAndParent], offset: usize) {
    let len = above.len() as u32;
    for (i, (cell, &e)) in out.iter_mut().zip(energy).enumerate() {
        let x = (offset + i) as u32;
        // min_by_key keeps the first of equal minima: lowest index wins.
        let parent = predecessors(x, len)
            .min_by_key(|p| above[*p as usize].cost)
            .unwrap_or(x);
        *cell = CostAndParent {
            cost: e.saturating_add(above[parent as usize].cost),
            parent,
        };
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_lane(above: &[CostAndParent], energy: &[u32], out: &mut [CostAndParent]) {
    fill_span(above, energy, out, 0)
}

/// Lanes narrower than this are not worth a thread.
#[cfg(feature = "threaded")]
const MIN_SPAN: usize = 2048;

#[cfg(feature = "threaded")]
fn fill_lane(above: &[CostAndParent], energy: &[u32], out: &mut [CostAndParent]) {
    let workers = num_cpus::get().max(1);
    let span = ((out.len() + workers - 1) / workers).max(MIN_SPAN);
    if out.len() <= span {
        return fill_span(above, energy, out, 0);
    }

    let result = crossbeam::scope(|scope| {
        for (n, (chunk, energy)) in out.chunks_mut(span).zip(energy.chunks(span)).enumerate() {
            scope.spawn(move |_| fill_span(above, energy, chunk, n * span));
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
