// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! The energy of every pixel is the L1 magnitude of its Sobel gradient
//! over a weighted grayscale.  Seams, connected one-pixel paths from
//! edge to edge, are found by dynamic programming over that energy and
//! cut out one at a time until the image is the requested size.

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod sobel;

pub mod energy;
pub use energy::{calculate_energy, EnergyMap, BORDER_ENERGY};

pub mod seam;
pub use seam::{Axis, Seam};

pub mod costtable;
pub use costtable::{cumulative_cost, CostTable};

pub mod seamfinder;
pub use seamfinder::{energy_to_seam, find_seam};

pub mod seamremover;
pub use seamremover::remove_seam;

pub mod error;
pub use error::CarveError;

pub mod seamcarver;
pub use seamcarver::{resize, CarveOptions, Carving, EnergyStrategy, SeamCarver, SeamOrder};

pub mod dump;
pub use dump::energy_to_image;
