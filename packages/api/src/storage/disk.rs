//! Filesystem-backed object store for uploaded images.

use std::path::{Path, PathBuf};

use super::Bucket;

/// Errors from the disk object store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    #[error("object already exists: {0}")]
    AlreadyExists(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Disk-backed object store serving public URLs under `/uploads`.
#[derive(Clone, Debug)]
pub struct DiskStorage {
    root: PathBuf,
    public_base: String,
}

impl DiskStorage {
    pub fn new(root: PathBuf, public_base: impl Into<String>) -> Self {
        let mut public_base = public_base.into();
        while public_base.ends_with('/') {
            public_base.pop();
        }
        Self { root, public_base }
    }

    /// Build the store from `UPLOADS_DIR` / `PUBLIC_BASE_URL`, with defaults
    /// suitable for local development.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let root = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());
        let base = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(PathBuf::from(root), base)
    }

    /// The directory served at `/uploads`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, bucket: Bucket, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(bucket.as_str()).join(key))
    }

    /// Store an object. With `upsert` an existing object is overwritten;
    /// without it a key collision is an error.
    pub fn store(
        &self,
        bucket: Bucket,
        key: &str,
        bytes: &[u8],
        upsert: bool,
    ) -> Result<(), StorageError> {
        let path = self.object_path(bucket, key)?;
        if !upsert && path.exists() {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        Ok(())
    }

    /// Remove an object. Used to clean up an image whose database row
    /// failed to write afterwards.
    pub fn remove(&self, bucket: Bucket, key: &str) -> Result<(), StorageError> {
        let path = self.object_path(bucket, key)?;
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }

    /// Remove every top-level object in a bucket whose key starts with
    /// `prefix`, except `keep`. Used when an object is re-uploaded under a
    /// key whose variable suffix changed, such as an avatar with a new file
    /// extension.
    pub fn remove_stale(
        &self,
        bucket: Bucket,
        prefix: &str,
        keep: &str,
    ) -> Result<(), StorageError> {
        validate_key(keep)?;
        let dir = self.root.join(bucket.as_str());
        if !dir.exists() {
            return Ok(());
        }
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(prefix) && name != keep && entry.path().is_file() {
                std::fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    /// Public URL of an object under the `/uploads` route.
    pub fn public_url(&self, bucket: Bucket, key: &str) -> Result<String, StorageError> {
        validate_key(key)?;
        Ok(format!(
            "{}/uploads/{}/{}",
            self.public_base,
            bucket.as_str(),
            key
        ))
    }
}

/// Reject keys that could escape the bucket directory: absolute paths,
/// `.`/`..` segments, empty segments, or more than one directory level.
fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.starts_with('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    let segments: Vec<&str> = key.split('/').collect();
    if segments.len() > 2 {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    for segment in &segments {
        if segment.is_empty() || *segment == "." || *segment == ".." {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
    }
    Ok(())
}

/// File extension for an uploaded filename, lowercased, defaulting to "bin".
pub fn file_ext(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(tag: &str) -> (DiskStorage, PathBuf) {
        let dir = std::env::temp_dir().join(format!("basqi_test_{}_{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        (
            DiskStorage::new(dir.clone(), "http://localhost:8080/"),
            dir,
        )
    }

    #[test]
    fn store_and_overwrite_with_upsert() {
        let (store, dir) = scratch_store("upsert");

        store
            .store(Bucket::Avatars, "u1-avatar.png", b"first", true)
            .unwrap();
        store
            .store(Bucket::Avatars, "u1-avatar.png", b"second", true)
            .unwrap();

        let on_disk = std::fs::read(dir.join("avatars/u1-avatar.png")).unwrap();
        assert_eq!(on_disk, b"second");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn collision_without_upsert_is_rejected() {
        let (store, dir) = scratch_store("collision");

        store
            .store(Bucket::Artworks, "u1/a.jpg", b"art", false)
            .unwrap();
        let err = store
            .store(Bucket::Artworks, "u1/a.jpg", b"other", false)
            .unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn remove_deletes_the_object() {
        let (store, dir) = scratch_store("remove");

        store
            .store(Bucket::Artworks, "u1/a.jpg", b"art", false)
            .unwrap();
        store.remove(Bucket::Artworks, "u1/a.jpg").unwrap();
        assert!(!dir.join("artworks/u1/a.jpg").exists());

        let err = store.remove(Bucket::Artworks, "u1/a.jpg").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn reupload_with_new_extension_leaves_one_avatar() {
        let (store, dir) = scratch_store("stale");

        store
            .store(Bucket::Avatars, "u1-avatar.png", b"old", true)
            .unwrap();
        store
            .store(Bucket::Avatars, "u1-avatar.jpg", b"new", true)
            .unwrap();
        // A different user's avatar shares the directory but not the prefix.
        store
            .store(Bucket::Avatars, "u2-avatar.png", b"other", true)
            .unwrap();

        store
            .remove_stale(Bucket::Avatars, "u1-avatar.", "u1-avatar.jpg")
            .unwrap();

        assert!(!dir.join("avatars/u1-avatar.png").exists());
        assert!(dir.join("avatars/u1-avatar.jpg").exists());
        assert!(dir.join("avatars/u2-avatar.png").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn traversal_keys_are_rejected() {
        let (store, dir) = scratch_store("traversal");

        for key in ["../escape.png", "a/../b.png", "/etc/passwd", "", "a//b", "a/b/c.png"] {
            let err = store.store(Bucket::Avatars, key, b"x", true).unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key {:?}", key);
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn public_url_shape() {
        let (store, dir) = scratch_store("url");
        assert_eq!(
            store.public_url(Bucket::Avatars, "u1-avatar.png").unwrap(),
            "http://localhost:8080/uploads/avatars/u1-avatar.png"
        );
        assert_eq!(
            store.public_url(Bucket::Artworks, "u1/a.jpg").unwrap(),
            "http://localhost:8080/uploads/artworks/u1/a.jpg"
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn extension_extraction() {
        assert_eq!(file_ext("photo.JPG"), "jpg");
        assert_eq!(file_ext("archive.tar.gz"), "gz");
        assert_eq!(file_ext("no_extension"), "bin");
    }
}
