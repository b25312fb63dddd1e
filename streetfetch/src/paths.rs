//! Artifact path construction and location sanitising.
//!
//! Three files can be produced per queried location:
//!
//! ```text
//! <meta_dir>/meta<location>.json
//! <pic_dir>/pic_<location>
//! <header_dir>/header_<location>.json
//! ```
//!
//! `<location>` is the query location with `/` characters removed, nothing
//! else. The metadata file name has no underscore after its prefix; the
//! picture and header file names do.

use std::path::{Path, PathBuf};

/// Makes a location string usable as part of a file name.
///
/// Only `/` characters are removed. Everything else (spaces, commas,
/// non-ASCII) is kept verbatim so file names stay recognisable.
///
/// # Example
///
/// ```
/// use streetfetch::paths::artifact_name;
///
/// assert_eq!(artifact_name("123 Main St, Malmö"), "123 Main St, Malmö");
/// assert_eq!(artifact_name("N7/J9 Junction"), "N7J9 Junction");
/// ```
pub fn artifact_name(location: &str) -> String {
    location.replace('/', "")
}

/// Path of the metadata document for a location.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use streetfetch::paths::meta_path;
///
/// let path = meta_path(&PathBuf::from("./meta/"), "123 Main St, Malmö");
/// assert_eq!(path, PathBuf::from("./meta/meta123 Main St, Malmö.json"));
/// ```
pub fn meta_path(meta_dir: &Path, location: &str) -> PathBuf {
    meta_dir.join(format!("meta{}.json", artifact_name(location)))
}

/// Path of the picture file for a location. No extension is added; the
/// bytes are stored exactly as served.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use streetfetch::paths::picture_path;
///
/// let path = picture_path(&PathBuf::from("./pics"), "52.520,13.405");
/// assert_eq!(path, PathBuf::from("./pics/pic_52.520,13.405"));
/// ```
pub fn picture_path(pic_dir: &Path, location: &str) -> PathBuf {
    pic_dir.join(format!("pic_{}", artifact_name(location)))
}

/// Path of the header document for a location.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use streetfetch::paths::header_path;
///
/// let path = header_path(&PathBuf::from("./headers"), "52.520,13.405");
/// assert_eq!(path, PathBuf::from("./headers/header_52.520,13.405.json"));
/// ```
pub fn header_path(header_dir: &Path, location: &str) -> PathBuf {
    header_dir.join(format!("header_{}.json", artifact_name(location)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_path_with_trailing_slash_dir() {
        let path = meta_path(&PathBuf::from("./meta/"), "123 Main St, Malmö");

        assert_eq!(path, PathBuf::from("./meta/meta123 Main St, Malmö.json"));
    }

    #[test]
    fn test_meta_path_without_trailing_slash_dir() {
        let path = meta_path(&PathBuf::from("/data/meta"), "Times Square");

        assert_eq!(path, PathBuf::from("/data/meta/metaTimes Square.json"));
    }

    #[test]
    fn test_meta_filename_has_no_underscore() {
        let path = meta_path(&PathBuf::from("."), "Oslo");
        let filename = path.file_name().unwrap().to_string_lossy();

        assert_eq!(filename, "metaOslo.json");
    }

    #[test]
    fn test_picture_path() {
        let path = picture_path(&PathBuf::from("./pics/"), "123 Main St, Malmö");

        assert_eq!(path, PathBuf::from("./pics/pic_123 Main St, Malmö"));
    }

    #[test]
    fn test_picture_path_has_no_extension() {
        let path = picture_path(&PathBuf::from("."), "Oslo");

        assert_eq!(path.extension(), None);
        assert_eq!(path.file_name().unwrap().to_string_lossy(), "pic_Oslo");
    }

    #[test]
    fn test_header_path() {
        let path = header_path(&PathBuf::from("./headers/"), "123 Main St, Malmö");

        assert_eq!(
            path,
            PathBuf::from("./headers/header_123 Main St, Malmö.json")
        );
    }

    #[test]
    fn test_artifact_name_strips_slashes() {
        assert_eq!(artifact_name("a/b/c"), "abc");
        assert_eq!(artifact_name("/leading"), "leading");
        assert_eq!(artifact_name("trailing/"), "trailing");
        assert_eq!(artifact_name("N7/J9 Junction"), "N7J9 Junction");
    }

    #[test]
    fn test_artifact_name_keeps_everything_else() {
        // Spaces, commas, dots, and non-ASCII all pass through
        assert_eq!(artifact_name("123 Main St, Malmö"), "123 Main St, Malmö");
        assert_eq!(artifact_name("52.5200,13.4050"), "52.5200,13.4050");
        assert_eq!(artifact_name("東京タワー"), "東京タワー");
        // Backslashes are not path separators here and are kept
        assert_eq!(artifact_name("a\\b"), "a\\b");
    }

    #[test]
    fn test_lat_lng_location_paths() {
        let pic = picture_path(&PathBuf::from("/out"), "52.52,13.40");
        let header = header_path(&PathBuf::from("/out"), "52.52,13.40");

        assert_eq!(pic, PathBuf::from("/out/pic_52.52,13.40"));
        assert_eq!(header, PathBuf::from("/out/header_52.52,13.40.json"));
    }

    #[test]
    fn test_same_location_different_dirs() {
        let meta = meta_path(&PathBuf::from("/meta"), "Oslo");
        let pic = picture_path(&PathBuf::from("/pics"), "Oslo");
        let header = header_path(&PathBuf::from("/headers"), "Oslo");

        assert_eq!(meta, PathBuf::from("/meta/metaOslo.json"));
        assert_eq!(pic, PathBuf::from("/pics/pic_Oslo"));
        assert_eq!(header, PathBuf::from("/headers/header_Oslo.json"));
    }

    #[test]
    fn test_empty_location() {
        assert_eq!(meta_path(&PathBuf::from("."), ""), PathBuf::from("./meta.json"));
        assert_eq!(picture_path(&PathBuf::from("."), ""), PathBuf::from("./pic_"));
    }
}
