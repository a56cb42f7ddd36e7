// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::seam::Axis;
use failure::Fail;

/// Everything the carver can refuse to do.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum CarveError {
    /// Removing this many seams would leave the image with no width
    /// (vertical) or no height (horizontal).
    #[fail(
        display = "cannot remove {} {} seams from an image only {} pixels across",
        requested, axis, available
    )]
    InvalidRequest {
        axis: Axis,
        requested: u32,
        available: u32,
    },

    #[fail(
        display = "seam carving cannot upscale an image from {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    #[fail(
        display = "a {} seam of length {} does not fit a {}x{} image",
        axis, length, width, height
    )]
    InvalidSeam {
        axis: Axis,
        length: usize,
        width: u32,
        height: u32,
    },

    #[fail(
        display = "energy map is {}x{} but the image is {}x{}",
        energy_width, energy_height, width, height
    )]
    MismatchedEnergy {
        energy_width: u32,
        energy_height: u32,
        width: u32,
        height: u32,
    },
}
