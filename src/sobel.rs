// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sobel gradient operators
//!
//! The two fixed 3×3 kernels used to estimate how quickly intensity
//! changes across, and down, a grayscale map.

use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// A 3×3 convolution kernel, addressed `[row][column]`.
pub type Kernel = [[i32; 3]; 3];

/// Sobel kernel for detecting horizontal gradients.
#[rustfmt::skip]
pub const HORIZONTAL_SOBEL: Kernel = [
    [-1, 0, 1],
    [-2, 0, 2],
    [-1, 0, 1],
];

/// Sobel kernel for detecting vertical gradients.
#[rustfmt::skip]
pub const VERTICAL_SOBEL: Kernel = [
    [-1, -2, -1],
    [ 0,  0,  0],
    [ 1,  2,  1],
];

/// The value left in every border cell of a gradient map.  The
/// convolution never writes the outermost ring, and these cells must
/// look maximally important so no seam is ever cut along an edge of
/// nothing.
pub const GRADIENT_SENTINEL: i32 = 255;

/// Convolve `gray` with `kernel`, valid-mode, into a map of the same
/// size.  Cell `(x + 1, y + 1)` receives the response of the window
/// whose top-left corner is `(x, y)`; the sum is truncated toward zero.
/// The outer ring keeps [`GRADIENT_SENTINEL`].  Maps narrower or
/// shorter than the kernel are all sentinel.
pub fn gradient(gray: &TwoDimensionalMap<f64>, kernel: &Kernel) -> TwoDimensionalMap<i32> {
    let (width, height) = gray.dimensions();
    let mut out = TwoDimensionalMap::filled(width, height, GRADIENT_SENTINEL);
    if width < 3 || height < 3 {
        return out;
    }

    for (y, x) in iproduct!(0..height - 2, 0..width - 2) {
        let response = iproduct!(0..3u32, 0..3u32).fold(0.0, |acc, (ky, kx)| {
            acc + f64::from(kernel[ky as usize][kx as usize]) * gray[(x + kx, y + ky)]
        });
        out[(x + 1, y + 1)] = response as i32;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> TwoDimensionalMap<f64> {
        // Brightness rises by 10 per column and 1 per row.
        let data = iproduct!(0..4u32, 0..5u32)
            .map(|(y, x)| f64::from(x * 10 + y))
            .collect();
        TwoDimensionalMap::from_raw(5, 4, data).unwrap()
    }

    #[test]
    fn border_keeps_sentinel() {
        let gx = gradient(&ramp(), &HORIZONTAL_SOBEL);
        for x in 0..5 {
            assert_eq!(gx[(x, 0)], GRADIENT_SENTINEL);
            assert_eq!(gx[(x, 3)], GRADIENT_SENTINEL);
        }
        for y in 0..4 {
            assert_eq!(gx[(0, y)], GRADIENT_SENTINEL);
            assert_eq!(gx[(4, y)], GRADIENT_SENTINEL);
        }
    }

    #[test]
    fn interior_matches_kernel_response() {
        let gray = ramp();
        let gx = gradient(&gray, &HORIZONTAL_SOBEL);
        let gy = gradient(&gray, &VERTICAL_SOBEL);
        // (1 + 2 + 1) * 20 across; (1 + 2 + 1) * 2 down.
        for (y, x) in iproduct!(1..3u32, 1..4u32) {
            assert_eq!(gx[(x, y)], 80);
            assert_eq!(gy[(x, y)], 8);
        }
    }

    #[test]
    fn responses_truncate_toward_zero() {
        let mut gray = TwoDimensionalMap::new(3, 3);
        gray[(0, 1)] = 0.6;
        let gx = gradient(&gray, &HORIZONTAL_SOBEL);
        // -2 * 0.6 = -1.2
        assert_eq!(gx[(1, 1)], -1);
    }

    #[test]
    fn small_maps_are_all_sentinel() {
        let gray = TwoDimensionalMap::filled(2, 7, 12.0);
        let gy = gradient(&gray, &VERTICAL_SOBEL);
        assert!(gy.as_slice().iter().all(|&g| g == GRADIENT_SENTINEL));
    }
}
