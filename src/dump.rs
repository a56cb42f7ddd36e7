// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a picture, for eyeballing.

use crate::energy::EnergyMap;
use image::{GrayImage, ImageBuffer, Luma};

/// Scale `energy` so its largest value is white.  An all-zero map
/// renders black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = u64::from(energy.as_slice().iter().cloned().max().unwrap_or(0).max(1));
    ImageBuffer::from_fn(width, height, |x, y| {
        let scaled = u64::from(energy[(x, y)]) * 255 / factor;
        Luma([scaled as u8])
    })
}
