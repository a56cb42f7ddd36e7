// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, reduce it to grayscale with fixed channel weights,
//! run both Sobel operators over it, and sum the absolute responses.
//! The outermost ring of the map is always [`BORDER_ENERGY`].

use crate::sobel::{gradient, GRADIENT_SENTINEL, HORIZONTAL_SOBEL, VERTICAL_SOBEL};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use log::warn;
use num_traits::NumCast;

/// Per-pixel luminance, unscaled.
pub type GrayscaleMap = TwoDimensionalMap<f64>;

/// Per-pixel importance.  Always the same size as the image it
/// describes.
pub type EnergyMap = TwoDimensionalMap<u32>;

/// The energy of every border cell: the sum of both gradient sentinels.
pub const BORDER_ENERGY: u32 = 2 * GRADIENT_SENTINEL as u32;

pub const RED_WEIGHT: f64 = 0.2989;
pub const GREEN_WEIGHT: f64 = 0.5870;
pub const BLUE_WEIGHT: f64 = 0.1140;

/// The luminance of a single pixel.  Non-RGB pixels are converted to
/// RGB first; alpha is ignored.
#[inline]
pub fn luminance<P, S>(pixel: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let rgb = pixel.to_rgb();
    let c = rgb.channels();
    let channel = |s: S| -> f64 { NumCast::from(s).unwrap_or(0.0) };
    RED_WEIGHT * channel(c[0]) + GREEN_WEIGHT * channel(c[1]) + BLUE_WEIGHT * channel(c[2])
}

/// Image -> GrayscaleMap
pub fn grayscale<I, P, S>(image: &I) -> GrayscaleMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let data = iproduct!(0..height, 0..width)
        .map(|(y, x)| luminance(&image.get_pixel(x, y)))
        .collect();
    TwoDimensionalMap::from_raw(width, height, data)
        .unwrap_or_else(|| TwoDimensionalMap::new(width, height))
}

/// Combine the two gradient maps into an energy map, |gx| + |gy|.
pub fn energy_of_gradients(
    gx: &TwoDimensionalMap<i32>,
    gy: &TwoDimensionalMap<i32>,
) -> EnergyMap {
    let (width, height) = gx.dimensions();
    debug_assert_eq!(gy.dimensions(), (width, height));
    let data = gx
        .as_slice()
        .iter()
        .zip(gy.as_slice())
        .map(|(x, y)| x.unsigned_abs() + y.unsigned_abs())
        .collect();
    TwoDimensionalMap::from_raw(width, height, data)
        .unwrap_or_else(|| TwoDimensionalMap::new(width, height))
}

/// Compute the energy of every pixel in an image.  Images with fewer
/// than three rows or columns have no interior to convolve; their map
/// is entirely [`BORDER_ENERGY`] and seams found on it are arbitrary.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        warn!(
            "{}x{} image is too small for a 3x3 gradient; every pixel gets border energy",
            width, height
        );
    }
    let gray = grayscale(image);
    energy_of_gradients(
        &gradient(&gray, &HORIZONTAL_SOBEL),
        &gradient(&gray, &VERTICAL_SOBEL),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage, Rgba};

    fn columns(colors: &[[u8; 3]], height: u32) -> RgbImage {
        ImageBuffer::from_fn(colors.len() as u32, height, |x, _| Rgb(colors[x as usize]))
    }

    #[test]
    fn grayscale_uses_fixed_weights() {
        let image = columns(&[[200, 0, 0], [0, 200, 0], [0, 0, 200], [10, 10, 10]], 1);
        let gray = grayscale(&image);
        assert_eq!(gray[(0, 0)], 0.2989 * 200.0);
        assert_eq!(gray[(1, 0)], 0.5870 * 200.0);
        assert_eq!(gray[(2, 0)], 0.1140 * 200.0);
        assert!((gray[(3, 0)] - 9.999).abs() < 1e-9);
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = luminance(&Rgba([30u8, 60, 90, 255]));
        let clear = luminance(&Rgba([30u8, 60, 90, 0]));
        assert_eq!(opaque, clear);
        assert_eq!(opaque, luminance(&Rgb([30u8, 60, 90])));
    }

    #[test]
    fn uniform_image_has_zero_interior() {
        let image: RgbImage = ImageBuffer::from_pixel(5, 5, Rgb([10, 20, 30]));
        let energy = calculate_energy(&image);
        for (y, x) in iproduct!(0..5u32, 0..5u32) {
            let border = x == 0 || y == 0 || x == 4 || y == 4;
            let expected = if border { BORDER_ENERGY } else { 0 };
            assert_eq!(energy[(x, y)], expected, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn border_is_sentinel_regardless_of_content() {
        let image: RgbImage =
            ImageBuffer::from_fn(6, 4, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 7]));
        let energy = calculate_energy(&image);
        for x in 0..6 {
            assert_eq!(energy[(x, 0)], BORDER_ENERGY);
            assert_eq!(energy[(x, 3)], BORDER_ENERGY);
        }
        for y in 0..4 {
            assert_eq!(energy[(0, y)], BORDER_ENERGY);
            assert_eq!(energy[(5, y)], BORDER_ENERGY);
        }
    }

    #[test]
    fn hard_edge_energy() {
        let black = [0, 0, 0];
        let white = [255, 255, 255];
        let image = columns(&[black, black, white, white, white], 4);
        let energy = calculate_energy(&image);
        #[rustfmt::skip]
        let expected = [
            510,  510,  510, 510, 510,
            510, 1019, 1019,   0, 510,
            510, 1019, 1019,   0, 510,
            510,  510,  510, 510, 510,
        ];
        assert_eq!(energy.as_slice(), &expected[..]);
    }

    #[test]
    fn single_channel_responses() {
        let image = columns(&[[200, 0, 0], [0, 200, 0], [0, 0, 200], [10, 10, 10]], 3);
        let energy = calculate_energy(&image);
        assert_eq!(energy.row(1), &[510, 147, 429, 510]);
    }

    #[test]
    fn degenerate_image_is_all_border() {
        let image: RgbImage = ImageBuffer::from_fn(2, 5, |x, y| Rgb([(x * 90) as u8, (y * 20) as u8, 0]));
        let energy = calculate_energy(&image);
        assert_eq!(energy.dimensions(), (2, 5));
        assert!(energy.as_slice().iter().all(|&e| e == BORDER_ENERGY));
    }
}
