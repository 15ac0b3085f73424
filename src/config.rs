use super::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Token in `images_dir` replaced by the home directory.
pub const HOME_PLACEHOLDER: &str = "$HOME";

const APP_DIR: &str = ".background";
const CONFIG_FILE: &str = "conf.json";
const STATE_FILE: &str = "current.txt";

/// Program configuration, read from `~/.background/conf.json`.
///
/// # Example
/// ```
/// # use background::Config;
/// # use std::path::Path;
/// let config = Config::from_json(
///     r#"{ "images_dir": "$HOME/Pictures/wallpapers" }"#,
///     Path::new("/home/me"),
/// )
/// .expect("Can't parse example config");
///
/// assert_eq!(Path::new("/home/me/Pictures/wallpapers"), config.images_dir());
/// ```
#[derive(Debug)]
pub struct Config {
    /// Directory holding the wallpaper images, `$HOME` already expanded.
    images_dir: PathBuf,
}

impl Config {
    /// Read and parse the config file, expanding `$HOME` with `home`.
    pub fn load(filename: &Path, home: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(filename).map_err(Error::ReadConfig)?;

        Self::from_json(&contents, home)
    }

    pub fn from_json(contents: &str, home: &Path) -> Result<Self> {
        #[derive(Deserialize)]
        struct Raw {
            images_dir: String,
        }

        let raw: Raw = serde_json::from_str(contents)?;
        let images_dir = raw
            .images_dir
            .replace(HOME_PLACEHOLDER, &home.to_string_lossy());

        Ok(Self {
            images_dir: PathBuf::from(images_dir),
        })
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}

/// Fixed locations under the home directory.
#[derive(Debug, Clone)]
pub struct Paths {
    config_file: PathBuf,
    state_file: PathBuf,
}

impl Paths {
    pub fn new(home: &Path) -> Self {
        let app_dir = home.join(APP_DIR);
        Self {
            config_file: app_dir.join(CONFIG_FILE),
            state_file: app_dir.join(STATE_FILE),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn state_file(&self) -> &Path {
        &self.state_file
    }
}
