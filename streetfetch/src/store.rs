//! Artifact persistence for fetched metadata, pictures, and headers.

use crate::metadata::PanoramaMetadata;
use crate::paths;
use crate::query::ViewQuery;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors writing artifacts to disk.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The document could not be serialised
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk store for fetch artifacts.
///
/// One directory per artifact kind: metadata documents, picture bytes, and
/// header documents. The store never creates directories; writing into a
/// missing directory fails with the underlying I/O error. Every write is a
/// whole-file overwrite, and the file handle is opened and closed inside
/// the call.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    pic_dir: PathBuf,
    meta_dir: PathBuf,
    header_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store over the three artifact directories.
    pub fn new(
        pic_dir: impl Into<PathBuf>,
        meta_dir: impl Into<PathBuf>,
        header_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pic_dir: pic_dir.into(),
            meta_dir: meta_dir.into(),
            header_dir: header_dir.into(),
        }
    }

    /// Where the metadata document for this query lives.
    pub fn meta_path(&self, query: &ViewQuery) -> PathBuf {
        paths::meta_path(&self.meta_dir, &query.location)
    }

    /// Where the picture file for this query lives.
    pub fn picture_path(&self, query: &ViewQuery) -> PathBuf {
        paths::picture_path(&self.pic_dir, &query.location)
    }

    /// Where the header document for this query lives.
    pub fn header_path(&self, query: &ViewQuery) -> PathBuf {
        paths::header_path(&self.header_dir, &query.location)
    }

    /// Writes the metadata document as JSON, returning the path written.
    pub fn save_metadata(
        &self,
        query: &ViewQuery,
        metadata: &PanoramaMetadata,
    ) -> Result<PathBuf, StoreError> {
        let path = self.meta_path(query);
        let document = serde_json::to_vec_pretty(metadata)?;
        write_file(&path, &document)?;
        Ok(path)
    }

    /// Writes the picture bytes exactly as served, returning the path.
    pub fn save_picture(&self, query: &ViewQuery, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.picture_path(query);
        write_file(&path, bytes)?;
        Ok(path)
    }

    /// Writes the picture response headers as JSON, returning the path.
    pub fn save_headers(
        &self,
        query: &ViewQuery,
        headers: &BTreeMap<String, String>,
    ) -> Result<PathBuf, StoreError> {
        let path = self.header_path(query);
        let document = serde_json::to_vec_pretty(headers)?;
        write_file(&path, &document)?;
        Ok(path)
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    fs::write(path, data).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::PanoramaStatus;
    use crate::query::PicSize;
    use serde_json::Value;
    use tempfile::TempDir;

    fn create_temp_store() -> (ArtifactStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pic_dir = temp_dir.path().join("pics");
        let meta_dir = temp_dir.path().join("meta");
        let header_dir = temp_dir.path().join("headers");
        fs::create_dir_all(&pic_dir).unwrap();
        fs::create_dir_all(&meta_dir).unwrap();
        fs::create_dir_all(&header_dir).unwrap();

        let store = ArtifactStore::new(pic_dir, meta_dir, header_dir);
        (store, temp_dir)
    }

    fn test_query() -> ViewQuery {
        ViewQuery::new("123 Main St, Malmö", PicSize::default())
    }

    fn test_metadata() -> PanoramaMetadata {
        serde_json::from_str(r#"{"status": "OK", "pano_id": "abc123", "date": "2023-06"}"#)
            .unwrap()
    }

    #[test]
    fn test_save_metadata_round_trips() {
        let (store, _temp) = create_temp_store();
        let metadata = test_metadata();

        let path = store.save_metadata(&test_query(), &metadata).unwrap();

        assert!(path.exists());
        let written: PanoramaMetadata =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, metadata);
        assert_eq!(written.status, PanoramaStatus::Ok);
    }

    #[test]
    fn test_save_metadata_file_name() {
        let (store, _temp) = create_temp_store();

        let path = store.save_metadata(&test_query(), &test_metadata()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "meta123 Main St, Malmö.json"
        );
    }

    #[test]
    fn test_save_picture_stores_exact_bytes() {
        let (store, _temp) = create_temp_store();
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

        let path = store.save_picture(&test_query(), &bytes).unwrap();

        assert_eq!(fs::read(&path).unwrap(), bytes);
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "pic_123 Main St, Malmö"
        );
    }

    #[test]
    fn test_save_headers_as_json_object() {
        let (store, _temp) = create_temp_store();
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "image/jpeg".to_string());
        headers.insert("content-length".to_string(), "52790".to_string());

        let path = store.save_headers(&test_query(), &headers).unwrap();

        let written: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            written.get("content-type").and_then(|v| v.as_str()),
            Some("image/jpeg")
        );
        assert_eq!(
            written.get("content-length").and_then(|v| v.as_str()),
            Some("52790")
        );
    }

    #[test]
    fn test_saves_overwrite_in_place() {
        let (store, _temp) = create_temp_store();

        store.save_picture(&test_query(), b"first").unwrap();
        let path = store.save_picture(&test_query(), b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(
            temp_dir.path().join("nope"),
            temp_dir.path().join("nope"),
            temp_dir.path().join("nope"),
        );

        let err = store.save_picture(&test_query(), b"data").unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!temp_dir.path().join("nope").exists());
    }

    #[test]
    fn test_artifact_paths_share_the_derived_name() {
        let (store, _temp) = create_temp_store();
        let query = ViewQuery::new("a/b", PicSize::default());

        assert!(store
            .meta_path(&query)
            .to_string_lossy()
            .ends_with("metaab.json"));
        assert!(store
            .picture_path(&query)
            .to_string_lossy()
            .ends_with("pic_ab"));
        assert!(store
            .header_path(&query)
            .to_string_lossy()
            .ends_with("header_ab.json"));
    }
}
