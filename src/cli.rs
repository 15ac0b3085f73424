use super::Mode;
use clap::Parser;

/// Argument that means "re-apply the current image".
const CURRENT: &str = "current";

#[derive(Parser, Debug)]
#[command(
    name = "background",
    author,
    version,
    about = "Set the desktop wallpaper from a directory of images"
)]
pub struct Args {
    /// Image filename or stem to set. `current` re-applies the active image.
    #[arg(value_name = "IMAGE", allow_hyphen_values = true)]
    pub image: Option<String>,

    /// Re-apply the active image (the default when nothing is given).
    #[arg(short, long, conflicts_with_all = ["image", "list", "random"])]
    pub current: bool,

    /// List the images in the images directory.
    #[arg(long, visible_alias = "ls", conflicts_with_all = ["image", "random"])]
    pub list: bool,

    /// Pick an image from the images directory at random.
    #[arg(short, long, visible_alias = "rand", conflicts_with = "image")]
    pub random: bool,
}

impl Args {
    pub fn mode(self) -> Mode {
        if self.list {
            Mode::List
        } else if self.random {
            Mode::Random
        } else {
            match self.image {
                Some(image) if image != CURRENT => Mode::Set(image),
                _ => Mode::Current,
            }
        }
    }
}
