use std::path::{Path, PathBuf};

/// Metadata for a file received in a multipart request body.
///
/// The crate only carries these values; it never opens `temp_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    content_type: Option<String>,
    size: u64,
    temp_path: PathBuf,
}

impl UploadedFile {
    pub fn new<N, P>(name: N, size: u64, temp_path: P) -> Self
    where
        N: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            content_type: None,
            size,
            temp_path: temp_path.into(),
        }
    }

    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Client-supplied file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }
}
