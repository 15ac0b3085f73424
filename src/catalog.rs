//! Image files in the images directory.

use super::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Recognized image extensions, compared case-insensitively.
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Minimum width of the stem column in the listing.
const STEM_COLUMN: usize = 25;

/// Filename without its last extension. `a.tar.gz` gives `a.tar`.
pub fn file_stem(name: &str) -> &str {
    name.rfind('.').map_or(name, |dot| &name[..dot])
}

fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|dot| &name[dot + 1..])
}

pub fn is_image_file(name: &str) -> bool {
    extension(name).is_some_and(|ext| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Names of the image files directly inside `dir`, in listing order.
///
/// Subdirectories are not descended into.
pub fn list_images(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|err| Error::ReadDir(dir.to_path_buf(), err))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| Error::ReadDir(dir.to_path_buf(), err))?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        if is_image_file(&name) {
            images.push(name);
        }
    }

    Ok(images)
}

/// Entries whose names aren't valid UTF-8 can't be named on the command line
/// or stored in the state file, so they are skipped.
fn utf8_name(entry: &fs::DirEntry) -> Option<String> {
    match entry.file_name().into_string() {
        Ok(name) => Some(name),
        Err(name) => {
            tracing::debug!(?name, "skipping entry with a non-UTF-8 name");
            None
        }
    }
}

pub fn pick_random<'a, R: Rng + ?Sized>(images: &'a [String], rng: &mut R) -> Option<&'a str> {
    images.choose(rng).map(String::as_str)
}

/// Render the `--list` table: one row per image, sorted by filename, showing
/// the stem and the bracketed filename.
///
/// Both columns are left-aligned, separated by a single space.
pub fn format_listing(images: &[String]) -> String {
    let mut sorted: Vec<&str> = images.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let width = sorted
        .iter()
        .map(|name| file_stem(name).chars().count())
        .max()
        .unwrap_or(0)
        .max(STEM_COLUMN);

    let mut table = String::new();
    for name in sorted {
        // Writing to a String can't fail.
        let _ = writeln!(table, "{:<width$} [{name}]", file_stem(name));
    }

    table
}

/// Search `dir` for a file named `target`, or whose stem is `target`, and
/// return its bare filename.
///
/// Entries are visited in the order the directory listing yields them.
/// Directories starting with `.` are skipped. The first other directory met
/// is searched and its result returned as is, so later siblings are never
/// looked at once a subdirectory has been entered. With duplicate names in
/// different subdirectories the winner depends on the filesystem's order.
pub fn find_image(dir: &Path, target: &str) -> Result<Option<String>> {
    let entries = fs::read_dir(dir).map_err(|err| Error::ReadDir(dir.to_path_buf(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| Error::ReadDir(dir.to_path_buf(), err))?;

        if entry.file_type()?.is_dir() {
            if entry.file_name().as_encoded_bytes().starts_with(b".") {
                continue;
            }
            return find_image(&entry.path(), target);
        }

        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        if target == name || target == file_stem(&name) {
            return Ok(Some(name));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    mod filter_tests {
        use super::*;

        #[test]
        fn supported_extensions_any_case() {
            for name in [
                "a.png", "a.PNG", "a.jpg", "a.JpG", "a.jpeg", "a.JPEG", "a.bmp", "a.gif", "a.GIF",
            ] {
                assert!(is_image_file(name), "{name} should be recognized");
            }
        }

        #[test]
        fn other_extensions() {
            for name in ["a.txt", "a.webp", "a.png.bak", "png", "a.", "jpg.tiff"] {
                assert!(!is_image_file(name), "{name} should not be recognized");
            }
        }

        #[test]
        fn stems() {
            assert_eq!("beach", file_stem("beach.png"));
            assert_eq!("a.tar", file_stem("a.tar.gz"));
            assert_eq!("noext", file_stem("noext"));
        }
    }

    mod listing_tests {
        use super::*;

        #[test]
        fn shallow_and_filtered() {
            let root = TempDir::new().unwrap();
            touch(root.path(), "a.png");
            touch(root.path(), "notes.txt");
            touch(root.path(), "nested/deep.png");

            let images = list_images(root.path()).unwrap();

            assert_eq!(vec!["a.png".to_string()], images);
        }

        #[cfg(target_os = "linux")]
        #[test]
        fn non_utf8_names_skipped() {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            let root = TempDir::new().unwrap();
            touch(root.path(), "a.png");
            fs::write(root.path().join(OsStr::from_bytes(b"bad\xff.png")), b"").unwrap();

            assert_eq!(vec!["a.png".to_string()], list_images(root.path()).unwrap());
            assert_eq!(None, find_image(root.path(), "bad\u{fffd}").unwrap());
        }

        #[test]
        fn missing_directory() {
            let err = list_images(Path::new("/nonexistent/images")).unwrap_err();
            assert!(matches!(err, Error::ReadDir(..)));
        }

        #[test]
        fn table_sorted_by_filename() {
            let images = vec![
                "sunset.jpg".to_string(),
                "b.PNG".to_string(),
                "a.png".to_string(),
            ];

            let table = format_listing(&images);
            let rows: Vec<&str> = table.lines().collect();

            assert_eq!(
                vec![
                    format!("{:<25} [a.png]", "a"),
                    format!("{:<25} [b.PNG]", "b"),
                    format!("{:<25} [sunset.jpg]", "sunset"),
                ],
                rows
            );
        }

        #[test]
        fn long_stems_widen_the_column() {
            let long = "a_really_long_wallpaper_name_here";
            let images = vec![format!("{long}.png"), "x.png".to_string()];

            let table = format_listing(&images);

            assert!(table.contains(&format!("{long} [{long}.png]")));
            assert!(table.contains(&format!("{:<width$} [x.png]", "x", width = long.len())));
        }
    }

    mod random_tests {
        use super::*;

        #[test]
        fn single_image_always_chosen() {
            let images = vec!["only.png".to_string()];
            let mut rng = StdRng::seed_from_u64(7);
            for _ in 0..10 {
                assert_eq!(Some("only.png"), pick_random(&images, &mut rng));
            }
        }

        #[test]
        fn empty_catalog() {
            let mut rng = StdRng::seed_from_u64(7);
            assert_eq!(None, pick_random(&[], &mut rng));
        }
    }

    mod find_tests {
        use super::*;

        #[test]
        fn by_stem_and_by_filename() {
            let root = TempDir::new().unwrap();
            touch(root.path(), "beach.png");

            assert_eq!(
                Some("beach.png".to_string()),
                find_image(root.path(), "beach").unwrap()
            );
            assert_eq!(
                Some("beach.png".to_string()),
                find_image(root.path(), "beach.png").unwrap()
            );
        }

        #[test]
        fn descends_into_subdirectories() {
            let root = TempDir::new().unwrap();
            touch(root.path(), ".cache/x.png");
            touch(root.path(), "wallpapers/beach.png");

            assert_eq!(
                Some("beach.png".to_string()),
                find_image(root.path(), "beach").unwrap()
            );
        }

        #[test]
        fn hidden_directories_skipped() {
            let root = TempDir::new().unwrap();
            touch(root.path(), ".cache/x.png");
            touch(root.path(), "wallpapers/beach.png");

            assert_eq!(None, find_image(root.path(), "x").unwrap());
        }

        #[test]
        fn no_match() {
            let root = TempDir::new().unwrap();
            touch(root.path(), "beach.png");

            assert_eq!(None, find_image(root.path(), "forest").unwrap());
        }

        #[test]
        fn missing_directory() {
            let err = find_image(Path::new("/nonexistent/images"), "beach").unwrap_err();
            assert!(matches!(err, Error::ReadDir(..)));
        }
    }
}
