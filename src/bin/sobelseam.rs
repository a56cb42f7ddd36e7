// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgGroup, ArgMatches};
use failure::{bail, format_err, Error};
use log::info;
use sobelseam::{
    calculate_energy, energy_to_image, CarveOptions, EnergyStrategy, SeamCarver, SeamOrder,
};
use std::path::{Path, PathBuf};
use std::process;

const EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn seam_count(matches: &ArgMatches, name: &str) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(0),
        Some(value) => value.parse::<u32>().map_err(|_| {
            format_err!("invalid --{} value {:?}: expected a non-negative integer", name, value)
        }),
    }
}

// <stem>_<width>x<height>.png, next to the input.
fn default_output(input: &Path, width: u32, height: u32) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_{}x{}.png", stem, width, height))
}

fn options(matches: &ArgMatches) -> CarveOptions {
    let order = match matches.value_of("order") {
        Some("horizontal-first") => SeamOrder::HorizontalFirst,
        Some("alternating") => SeamOrder::Alternating,
        _ => SeamOrder::VerticalFirst,
    };
    let energy = if matches.is_present("recompute-energy") {
        EnergyStrategy::Recompute
    } else {
        EnergyStrategy::DeleteOnly
    };
    CarveOptions::default().with_order(order).with_energy(energy)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let file = Path::new(matches.value_of("file").unwrap_or_default());
    let vertical = seam_count(matches, "vertical")?;
    let horizontal = seam_count(matches, "horizontal")?;

    if !file.is_file() {
        bail!("file not found: {}", file.display());
    }
    if !has_supported_extension(file) {
        bail!(
            "incorrect file type: {} (expected one of {})",
            file.display(),
            EXTENSIONS.join(", ")
        );
    }

    let image = image::open(file)
        .map_err(|e| format_err!("could not read {}: {}", file.display(), e))?
        .to_rgb();
    let (width, height) = image.dimensions();
    if vertical >= width || horizontal >= height {
        bail!(
            "too many seams: cannot remove {} columns and {} rows from a {}x{} image",
            vertical,
            horizontal,
            width,
            height
        );
    }
    let (new_width, new_height) = (width - vertical, height - horizontal);

    if let Some(path) = matches.value_of("energy-map") {
        energy_to_image(&calculate_energy(&image))
            .save(path)
            .map_err(|e| format_err!("could not write energy map {}: {}", path, e))?;
        info!("wrote energy map to {}", path);
    }

    let result = SeamCarver::with_options(&image, options(matches)).resize(vertical, horizontal)?;

    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(file, new_width, new_height));
    result
        .save(&output)
        .map_err(|e| format_err!("could not write {}: {}", output.display(), e))?;
    info!("wrote {}x{} image to {}", new_width, new_height, output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("sobelseam")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("file")
                .help("The image to resize (.png, .jpg or .jpeg)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("vertical")
                .long("vertical")
                .value_name("SEAMS")
                .help("Number of vertical seams (columns) to remove")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("horizontal")
                .long("horizontal")
                .value_name("SEAMS")
                .help("Number of horizontal seams (rows) to remove")
                .takes_value(true),
        )
        .group(
            ArgGroup::with_name("seams")
                .args(&["vertical", "horizontal"])
                .multiple(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the result [default: <stem>_<width>x<height>.png]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("order")
                .long("order")
                .value_name("ORDER")
                .help("Which seams to take first")
                .possible_values(&["vertical-first", "horizontal-first", "alternating"])
                .default_value("vertical-first"),
        )
        .arg(
            Arg::with_name("recompute-energy")
                .long("recompute-energy")
                .help("Recompute the energy map after every seam instead of only cutting it"),
        )
        .arg(
            Arg::with_name("energy-map")
                .long("energy-map")
                .value_name("FILE")
                .help("Also write the initial energy map as a grayscale image")
                .takes_value(true),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("sobelseam: {}", err);
        process::exit(1);
    }
}
