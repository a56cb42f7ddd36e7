// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The energy map is computed once, then seams are found and cut one at
//! a time, each from the image and energy map left by the cut before.

use crate::energy::{calculate_energy, EnergyMap};
use crate::error::CarveError;
use crate::seam::{Axis, Seam};
use crate::seamfinder::energy_to_seam;
use crate::seamremover::remove_seam;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::{debug, info};

/// In which order the requested seams are taken.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeamOrder {
    /// Every vertical seam, then every horizontal one.
    VerticalFirst,
    /// Every horizontal seam, then every vertical one.
    HorizontalFirst,
    /// One of each, starting with vertical, until one axis runs out.
    Alternating,
}

impl Default for SeamOrder {
    fn default() -> Self {
        SeamOrder::VerticalFirst
    }
}

impl SeamOrder {
    /// The axis of every removal, in order.
    pub fn schedule(self, vertical: u32, horizontal: u32) -> Vec<Axis> {
        let repeat = |axis, count| std::iter::repeat(axis).take(count as usize);
        match self {
            SeamOrder::VerticalFirst => repeat(Axis::Vertical, vertical)
                .chain(repeat(Axis::Horizontal, horizontal))
                .collect(),
            SeamOrder::HorizontalFirst => repeat(Axis::Horizontal, horizontal)
                .chain(repeat(Axis::Vertical, vertical))
                .collect(),
            SeamOrder::Alternating => {
                let (mut vertical, mut horizontal) = (vertical, horizontal);
                let mut direction = Axis::Vertical;
                let mut out = Vec::with_capacity((vertical + horizontal) as usize);
                while vertical > 0 && horizontal > 0 {
                    out.push(direction);
                    match direction {
                        Axis::Vertical => vertical -= 1,
                        Axis::Horizontal => horizontal -= 1,
                    }
                    direction = direction.turn();
                }
                out.extend(repeat(Axis::Vertical, vertical));
                out.extend(repeat(Axis::Horizontal, horizontal));
                out
            }
        }
    }
}

/// What happens to the energy map after a cut.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnergyStrategy {
    /// Cut the seam's cells out of the map and keep the rest as-is.
    DeleteOnly,
    /// Recompute the whole map from the carved image.  Slower; cells
    /// next to the cut get fresh gradients.
    Recompute,
}

impl Default for EnergyStrategy {
    fn default() -> Self {
        EnergyStrategy::DeleteOnly
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CarveOptions {
    pub order: SeamOrder,
    pub energy: EnergyStrategy,
}

impl CarveOptions {
    pub fn with_order(self, order: SeamOrder) -> Self {
        CarveOptions { order, ..self }
    }

    pub fn with_energy(self, energy: EnergyStrategy) -> Self {
        CarveOptions { energy, ..self }
    }
}

/// A carving in progress: the current image and its energy map, which
/// always have the same dimensions.  Each call to `remove_seam` either
/// replaces both or changes nothing, so a caller may stop between any
/// two seams.
pub struct Carving<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: ImageBuffer<P, Vec<S>>,
    energy: EnergyMap,
    strategy: EnergyStrategy,
}

impl<P, S> Carving<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Copy `image` and compute its energy map.
    pub fn new<I>(image: &I, strategy: EnergyStrategy) -> Self
    where
        I: GenericImageView<Pixel = P>,
    {
        let (width, height) = image.dimensions();
        let image = ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y));
        let energy = calculate_energy(&image);
        Carving {
            image,
            energy,
            strategy,
        }
    }

    pub fn image(&self) -> &ImageBuffer<P, Vec<S>> {
        &self.image
    }

    pub fn energy(&self) -> &EnergyMap {
        &self.energy
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Find and cut the cheapest seam along `axis`, returning it.
    /// Fails, changing nothing, if the image has only one column
    /// (vertical) or row (horizontal) left.
    pub fn remove_seam(&mut self, axis: Axis) -> Result<Seam, CarveError> {
        check_request(axis, 1, axis.extent(self.dimensions()))?;
        let seam = energy_to_seam(&self.energy, axis);
        let (image, energy) = remove_seam(&self.image, &self.energy, &seam)?;
        self.energy = match self.strategy {
            EnergyStrategy::DeleteOnly => energy,
            EnergyStrategy::Recompute => calculate_energy(&image),
        };
        self.image = image;
        Ok(seam)
    }

    pub fn into_image(self) -> ImageBuffer<P, Vec<S>> {
        self.image
    }
}

fn check_request(axis: Axis, requested: u32, available: u32) -> Result<(), CarveError> {
    if requested > 0 && requested >= available {
        Err(CarveError::InvalidRequest {
            axis,
            requested,
            available,
        })
    } else {
        Ok(())
    }
}

/// A struct for holding the image to be carved, and how to carve it.
pub struct SeamCarver<'a, I: GenericImageView> {
    image: &'a I,
    options: CarveOptions,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self::with_options(image, CarveOptions::default())
    }

    pub fn with_options(image: &'a I, options: CarveOptions) -> Self {
        Self { image, options }
    }

    /// Remove `vertical` seams (columns) and `horizontal` seams (rows).
    /// Both counts are checked against the image before anything is
    /// carved.
    pub fn resize(&self, vertical: u32, horizontal: u32) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        check_request(Axis::Vertical, vertical, width)?;
        check_request(Axis::Horizontal, horizontal, height)?;

        info!(
            "carving {}x{} down to {}x{}",
            width,
            height,
            width - vertical,
            height - horizontal
        );
        let mut carving = Carving::new(self.image, self.options.energy);
        let schedule = self.options.order.schedule(vertical, horizontal);
        let total = schedule.len();
        for (n, axis) in schedule.into_iter().enumerate() {
            carving.remove_seam(axis)?;
            let (w, h) = carving.dimensions();
            debug!("removed {} seam {} of {}: now {}x{}", axis, n + 1, total, w, h);
        }
        info!("carved {} seams", total);
        Ok(carving.into_image())
    }

    /// Given an image and a desired new width and height, repeatedly carve
    /// seams out of the image.
    pub fn carve(&self, new_width: u32, new_height: u32) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        if width < new_width || height < new_height {
            return Err(CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        self.resize(width - new_width, height - new_height)
    }
}

/// Shrink `image` by `vertical` columns and `horizontal` rows, taking
/// every vertical seam first.
pub fn resize<I, P, S>(image: &I, vertical: u32, horizontal: u32) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    SeamCarver::new(image).resize(vertical, horizontal)
}
