//! Background
//!
//! Set the desktop wallpaper to an image picked by name from the images
//! directory named in `~/.background/conf.json`, and remember it in
//! `~/.background/current.txt`.

mod catalog;
mod cli;
mod config;
mod error;
mod render;
mod state;

pub use self::catalog::{file_stem, find_image, format_listing, is_image_file, list_images};
pub use self::cli::Args;
pub use self::config::{Config, Paths, HOME_PLACEHOLDER};
pub use self::error::Error;
pub use self::render::Renderer;

use std::io::Write;
use std::path::Path;

/// Result type alias to handle errors.
pub type Result<T> = std::result::Result<T, Error>;

/// What to do on this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Re-apply the image named in the state file.
    Current,

    /// Print the images directory's contents and stop.
    List,

    /// Apply a randomly chosen image from the images directory.
    Random,

    /// Apply the image with this filename or stem.
    Set(String),
}

const NO_IMAGES: &str = "No images found in directory.";

/// Main entry point.
///
/// All fixed paths are derived from `home`; nothing is read from the
/// environment here. Listings and messages go to `out`.
pub fn run(mode: Mode, home: &Path, renderer: &Renderer, out: &mut impl Write) -> Result<()> {
    let paths = Paths::new(home);
    let config = Config::load(paths.config_file(), home)?;
    let images_dir = config.images_dir();
    tracing::debug!(
        config = %paths.config_file().display(),
        images = %images_dir.display(),
        "loaded config"
    );

    let target = match mode {
        Mode::Current => state::read_current(paths.state_file())?,
        Mode::List => {
            let images = list_images(images_dir)?;
            if images.is_empty() {
                writeln!(out, "{NO_IMAGES}")?;
            } else {
                write!(out, "\n{}\n", format_listing(&images))?;
            }
            return Ok(());
        }
        Mode::Random => {
            let images = list_images(images_dir)?;
            let Some(chosen) = catalog::pick_random(&images, &mut rand::thread_rng()) else {
                writeln!(out, "{NO_IMAGES}")?;
                return Ok(());
            };
            let stem = file_stem(chosen).to_string();
            write!(out, "\nRandomly selected image: {stem}\n\n")?;
            stem
        }
        Mode::Set(name) => name,
    };

    let image = match find_image(images_dir, &target)? {
        Some(image) => image,
        None => {
            tracing::warn!(%target, "no image matched; passing an empty name to the renderer");
            String::new()
        }
    };
    tracing::debug!(%target, %image, "resolved image");

    renderer.launch(&images_dir.join(&image))?;

    state::write_current(paths.state_file(), &image)
}
