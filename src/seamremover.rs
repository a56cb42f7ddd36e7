// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a seam out of an image and its energy map together.
//!
//! Nothing is recomputed here: the energy cells on either side of the
//! cut keep the values they had before it.

use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::seam::{Axis, Seam};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for (y, &cut) in seam.iter().enumerate() {
        let y = y as u32;
        for x in (0..width).filter(|&x| x != cut) {
            let target = if x < cut { x } else { x - 1 };
            imgbuf.put_pixel(target, y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for (x, &cut) in seam.iter().enumerate() {
        let x = x as u32;
        for y in (0..height).filter(|&y| y != cut) {
            let target = if y < cut { y } else { y - 1 };
            imgbuf.put_pixel(x, target, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// Remove `seam` from both `image` and `energy`, returning a new pair
/// one column narrower (vertical) or one row shorter (horizontal).
pub fn remove_seam<I, P, S>(
    image: &I,
    energy: &EnergyMap,
    seam: &Seam,
) -> Result<(ImageBuffer<P, Vec<S>>, EnergyMap), CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let dimensions = image.dimensions();
    let (width, height) = dimensions;
    if energy.dimensions() != dimensions {
        return Err(CarveError::MismatchedEnergy {
            energy_width: energy.width(),
            energy_height: energy.height(),
            width,
            height,
        });
    }

    let axis = seam.axis();
    let extent = axis.extent(dimensions);
    if extent == 0
        || seam.len() != axis.span(dimensions) as usize
        || seam.indices().iter().any(|&i| i >= extent)
    {
        return Err(CarveError::InvalidSeam {
            axis,
            length: seam.len(),
            width,
            height,
        });
    }

    Ok(match axis {
        Axis::Vertical => (
            remove_vertical_seam(image, seam.indices()),
            energy.without_vertical_seam(seam.indices()),
        ),
        Axis::Horizontal => (
            remove_horizontal_seam(image, seam.indices()),
            energy.without_horizontal_seam(seam.indices()),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;
    use image::{GrayImage, Luma};

    // 4 wide, 3 tall; each pixel's value is its original index.
    fn numbered() -> (GrayImage, EnergyMap) {
        let image = ImageBuffer::from_fn(4, 3, |x, y| Luma([(y * 4 + x) as u8]));
        let energy = TwoDimensionalMap::from_raw(4, 3, (100..112).collect()).unwrap();
        (image, energy)
    }

    #[test]
    fn vertical_removal_shifts_left() {
        let (image, energy) = numbered();
        let seam = Seam::new(Axis::Vertical, vec![1, 2, 3]);
        let (carved, cut) = remove_seam(&image, &energy, &seam).unwrap();
        assert_eq!(carved.dimensions(), (3, 3));
        assert_eq!(cut.dimensions(), (3, 3));
        assert_eq!(carved.into_raw(), vec![0, 2, 3, 4, 5, 7, 8, 9, 10]);
        assert_eq!(cut.as_slice(), &[100, 102, 103, 104, 105, 107, 108, 109, 110]);
    }

    #[test]
    fn horizontal_removal_shifts_up() {
        let (image, energy) = numbered();
        let seam = Seam::new(Axis::Horizontal, vec![2, 1, 0, 0]);
        let (carved, cut) = remove_seam(&image, &energy, &seam).unwrap();
        assert_eq!(carved.dimensions(), (4, 2));
        assert_eq!(cut.dimensions(), (4, 2));
        assert_eq!(carved.into_raw(), vec![0, 1, 6, 7, 4, 9, 10, 11]);
        assert_eq!(cut.as_slice(), &[100, 101, 106, 107, 104, 109, 110, 111]);
    }

    #[test]
    fn rejects_short_seam() {
        let (image, energy) = numbered();
        let seam = Seam::new(Axis::Vertical, vec![1, 2]);
        assert_eq!(
            remove_seam(&image, &energy, &seam).err(),
            Some(CarveError::InvalidSeam {
                axis: Axis::Vertical,
                length: 2,
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        let (image, energy) = numbered();
        let seam = Seam::new(Axis::Horizontal, vec![0, 1, 2, 3]);
        assert!(remove_seam(&image, &energy, &seam).is_err());
    }

    #[test]
    fn rejects_mismatched_energy() {
        let (image, _) = numbered();
        let energy = TwoDimensionalMap::new(3, 3);
        let seam = Seam::new(Axis::Vertical, vec![0, 0, 0]);
        match remove_seam(&image, &energy, &seam) {
            Err(CarveError::MismatchedEnergy { energy_width: 3, .. }) => (),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }
}
