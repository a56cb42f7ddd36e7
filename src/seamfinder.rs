// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recover the cheapest seam from a cost table.

use crate::costtable::{cumulative_cost, CostTable};
use crate::energy::EnergyMap;
use crate::seam::{Axis, Seam};

/// Find the end of the cheapest path in the final lane, then walk the
/// parent pointers back to the first lane.  Ties anywhere resolve to
/// the lowest index.
pub fn find_seam(table: &CostTable) -> Seam {
    let lanes = table.lanes();
    let (width, height) = lanes.dimensions();
    if width == 0 || height == 0 {
        return Seam::new(table.axis(), Vec::new());
    }

    let last = lanes.row(height - 1);
    let mut seam_col = (0..width)
        .min_by_key(|x| last[*x as usize].cost)
        .unwrap_or(0);

    // Working backwards, collect the index at each lane, reverse and
    // return.
    let mut indices = (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = lanes[(seam_col, y)].parent;
            acc
        });
    indices.reverse();
    Seam::new(table.axis(), indices)
}

/// A convenience wrapper: build the table for `axis` and find its seam.
pub fn energy_to_seam(energy: &EnergyMap, axis: Axis) -> Seam {
    find_seam(&cumulative_cost(energy, axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    const ENERGY_DATA: [u32; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn energies() -> EnergyMap {
        TwoDimensionalMap::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = energy_to_seam(&energies(), Axis::Vertical);
        assert_eq!(seam.axis(), Axis::Vertical);
        assert_eq!(seam.indices(), &[2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let seam = energy_to_seam(&energies(), Axis::Horizontal);
        assert_eq!(seam.axis(), Axis::Horizontal);
        assert_eq!(seam.indices(), &[0, 1, 0, 1, 2]);
    }

    #[test]
    fn uniform_interior_hugs_the_left_edge() {
        // The energy of a 5x5 image of a single color.
        let mut energy = TwoDimensionalMap::filled(5, 5, 510);
        for y in 1..4 {
            for x in 1..4 {
                energy[(x, y)] = 0;
            }
        }
        // Every end cell ties at 1020; the first wins, then the path
        // dives into the zero-energy interior as early as it can.
        assert_eq!(energy_to_seam(&energy, Axis::Vertical).indices(), &[0, 1, 1, 1, 0]);
        assert_eq!(energy_to_seam(&energy, Axis::Horizontal).indices(), &[0, 1, 1, 1, 0]);
    }

    #[test]
    fn seams_are_connected_and_span_the_image() {
        let data = (0..9 * 7).map(|i| (i * 37 % 11) as u32).collect();
        let energy = TwoDimensionalMap::from_raw(9, 7, data).unwrap();
        let vertical = energy_to_seam(&energy, Axis::Vertical);
        assert_eq!(vertical.len(), 7);
        assert!(vertical.is_connected());
        assert!(vertical.indices().iter().all(|&x| x < 9));
        let horizontal = energy_to_seam(&energy, Axis::Horizontal);
        assert_eq!(horizontal.len(), 9);
        assert!(horizontal.is_connected());
        assert!(horizontal.indices().iter().all(|&y| y < 7));
    }

    #[test]
    fn single_column_seam() {
        let energy = TwoDimensionalMap::filled(1, 3, 510);
        assert_eq!(energy_to_seam(&energy, Axis::Vertical).indices(), &[0, 0, 0]);
    }
}
