//! Text sources for the frequency pipeline.
//!
//! A [`TextSource`] yields the decoded text of one document. Reads are
//! asynchronous: the caller is suspended until the read completes or fails,
//! and any file handle is held only for that one read.
//!
//! Bytes are decoded as UTF-8 and a leading byte-order mark is dropped.
//! Invalid UTF-8 is a read error, like an I/O failure.
//!
//! ```
//! use wordtally::source::{MemorySource, TextSource};
//!
//! let source = MemorySource::new("upload.txt", "Hello world");
//! let text = tokio_test::block_on(source.read_text()).unwrap();
//! assert_eq!(text, "Hello world");
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, WordTallyError};

const UTF8_BOM: &str = "\u{feff}";

/// Something that can be read as a whole document.
pub trait TextSource {
    /// Read and decode the whole document.
    fn read_text(&self) -> impl Future<Output = Result<String>> + Send;

    /// A human readable label for logs and error messages.
    fn describe(&self) -> String;
}

/// Decode raw document bytes.
pub fn decode_text(bytes: Vec<u8>, label: &str) -> Result<String> {
    let text = String::from_utf8(bytes)
        .map_err(|e| WordTallyError::read(format!("{label} is not valid UTF-8: {e}")))?;

    match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

/// A document stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileSource { path: path.into() }
    }

    /// The path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    async fn read_text(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            WordTallyError::read(format!("cannot read {}: {e}", self.path.display()))
        })?;
        debug!("read {} bytes from {}", bytes.len(), self.path.display());

        decode_text(bytes, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document already held in memory, such as an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySource {
    name: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    /// Create a source from a name and its content.
    pub fn new<N: Into<String>, B: Into<Vec<u8>>>(name: N, bytes: B) -> Self {
        MemorySource {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// The name given to this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for MemorySource {
    fn from(text: &str) -> Self {
        MemorySource::new("<memory>", text)
    }
}

impl TextSource for MemorySource {
    async fn read_text(&self) -> Result<String> {
        decode_text(self.bytes.clone(), &self.name)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
