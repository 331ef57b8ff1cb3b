//! Render job model and destination naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension given to every rendered image.
pub const IMAGE_EXTENSION: &str = "png";

/// One source file being turned into one image.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub source_path: PathBuf,
    pub source_text: String,
    pub destination_path: PathBuf,
}

impl RenderJob {
    pub fn new(source_path: PathBuf, source_text: String, output_directory: &Path) -> Self {
        let destination_path = destination_for(&source_path, output_directory);
        Self { source_path, source_text, destination_path }
    }
}

/// Map a source file to its image path inside `output_directory`.
///
/// The extension (from the last `.`) is replaced with `.png`. Names without a
/// `.`, or starting with one, get `.png` appended. Non-UTF-8 names are kept
/// byte for byte.
pub fn destination_for(source_path: &Path, output_directory: &Path) -> PathBuf {
    let file_name = source_path.file_name().unwrap_or_default();

    let stem = if file_name.as_encoded_bytes().starts_with(b".") {
        file_name
    } else {
        source_path.file_stem().unwrap_or(file_name)
    };

    let mut destination = OsString::from(stem);
    destination.push(".");
    destination.push(IMAGE_EXTENSION);
    output_directory.join(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dest(name: &str) -> String {
        destination_for(&Path::new("src").join(name), Path::new("out"))
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn replaces_extension() {
        assert_eq!(dest("login.wsd"), "login.png");
        assert_eq!(dest("login.flow.txt"), "login.flow.png");
    }

    #[test]
    fn appends_when_no_extension() {
        assert_eq!(dest("login"), "login.png");
    }

    #[test]
    fn leading_dot_names_keep_their_full_name() {
        assert_eq!(dest(".hidden"), ".hidden.png");
        assert_eq!(dest(".a.b"), ".a.b.png");
    }

    #[test]
    fn trailing_dot_leaves_bare_stem() {
        assert_eq!(dest("login."), "login.png");
    }

    #[test]
    fn destination_lives_in_output_directory() {
        let path = destination_for(Path::new("/tmp/in/a.wsd"), Path::new("/tmp/out"));
        assert_eq!(path, Path::new("/tmp/out/a.png"));
    }

    #[test]
    fn job_derives_destination() {
        let job = RenderJob::new(PathBuf::from("in/a.wsd"), "A->B: hi".into(), Path::new("out"));
        assert_eq!(job.destination_path, Path::new("out/a.png"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_keep_distinct_destinations() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let first = destination_for(&Path::new("src").join(OsStr::from_bytes(b"\xFFa.wsd")), Path::new("out"));
        let second = destination_for(&Path::new("src").join(OsStr::from_bytes(b"\xFEa.wsd")), Path::new("out"));

        assert_ne!(first, second);
        assert_eq!(first.file_name().unwrap().as_bytes(), b"\xFFa.png");
        assert_eq!(second.file_name().unwrap().as_bytes(), b"\xFEa.png");
    }

    proptest! {
        #[test]
        fn base_name_survives_any_number_of_dots(
            parts in prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 1..5),
            ext in "[a-z]{1,4}",
        ) {
            let base = parts.join(".");
            let name = format!("{base}.{ext}");
            prop_assert_eq!(dest(&name), format!("{base}.png"));
        }

        #[test]
        fn dotless_names_get_png_appended(name in "[a-zA-Z0-9_-]{1,16}") {
            prop_assert_eq!(dest(&name), format!("{name}.png"));
        }
    }
}
