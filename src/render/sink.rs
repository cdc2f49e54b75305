//! Output sinks for rendered content.
//!
//! The renderer writes through the [`OutputSink`] trait rather than
//! addressing a page region directly, so tests can substitute an
//! in-memory sink for the on-disk HTML document.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while rendering into a sink.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The designated output region does not exist in the document.
    #[error("output target `#{target}` not found in document")]
    MissingOutputTarget {
        /// The element id that was searched for.
        target: String,
    },

    /// Grouped roster could not be serialized.
    #[error("failed to serialize grouped roster: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the hosting document failed.
    #[error("document i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A destination for one wholesale region replacement per render.
pub trait OutputSink {
    /// Replaces the sink's region content with `content`.
    ///
    /// Either the full replacement happens or nothing is written.
    fn replace(&mut self, content: &str) -> Result<(), RenderError>;
}

/// Sink backed by an HTML document on disk.
///
/// The region is the inner content of the element carrying
/// `id="<target>"`. The element is located before anything is touched;
/// if it is absent the document and the file are left as they were.
pub struct DocumentSink {
    path: PathBuf,
    target_id: String,
    document: String,
}

impl DocumentSink {
    /// Opens an existing document for rendering into `target_id`.
    pub fn open(path: impl AsRef<Path>, target_id: &str) -> Result<Self, RenderError> {
        let path = path.as_ref().to_path_buf();
        let document = fs::read_to_string(&path)?;
        debug!("Opened document: {} ({} bytes)", path.display(), document.len());

        Ok(Self {
            path,
            target_id: target_id.to_string(),
            document,
        })
    }

    /// The document text as currently held by the sink.
    #[allow(dead_code)] // Inspection helper, exercised by tests
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl OutputSink for DocumentSink {
    fn replace(&mut self, content: &str) -> Result<(), RenderError> {
        let (start, end) =
            locate_region(&self.document, &self.target_id).ok_or_else(|| {
                RenderError::MissingOutputTarget {
                    target: self.target_id.clone(),
                }
            })?;

        self.document.replace_range(start..end, content);
        fs::write(&self.path, &self.document)?;
        debug!(
            "Replaced #{} region and wrote {}",
            self.target_id,
            self.path.display()
        );

        Ok(())
    }
}

/// In-memory sink substitute for the on-disk document.
#[derive(Debug, Default)]
#[allow(dead_code)] // Test double for the injected sink capability
pub struct MemorySink {
    /// Last content written, if any.
    pub contents: Option<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[allow(dead_code)] // Test double constructor
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemorySink {
    fn replace(&mut self, content: &str) -> Result<(), RenderError> {
        self.contents = Some(content.to_string());
        Ok(())
    }
}

/// Finds the inner content span of the element carrying `id="<target>"`.
///
/// Pragmatic scan, not an HTML parser: the opening tag is the nearest `<`
/// before the id attribute, and the region ends at that element's next
/// closing tag. The fragments this tool writes never nest the host
/// element, so the scan is sufficient for re-renders as well.
fn locate_region(document: &str, target: &str) -> Option<(usize, usize)> {
    let double_quoted = format!("id=\"{}\"", target);
    let single_quoted = format!("id='{}'", target);

    let attr_pos = document
        .find(&double_quoted)
        .or_else(|| document.find(&single_quoted))?;

    let open = document[..attr_pos].rfind('<')?;
    let tag_name: String = document[open + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if tag_name.is_empty() {
        return None;
    }

    let start = open + document[open..].find('>')? + 1;
    let closing = format!("</{}>", tag_name);
    let end = start + document[start..].find(&closing)?;

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DOC: &str = "<html><body><div id=\"root\">old</div></body></html>";

    fn write_doc(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("index.html");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_locate_region() {
        let (start, end) = locate_region(DOC, "root").unwrap();
        assert_eq!(&DOC[start..end], "old");
    }

    #[test]
    fn test_locate_region_single_quotes() {
        let doc = "<div id='root'>x</div>";
        let (start, end) = locate_region(doc, "root").unwrap();
        assert_eq!(&doc[start..end], "x");
    }

    #[test]
    fn test_locate_region_missing() {
        assert!(locate_region(DOC, "app").is_none());
        assert!(locate_region("", "root").is_none());
    }

    #[test]
    fn test_document_sink_replaces_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, DOC);

        let mut sink = DocumentSink::open(&path, "root").unwrap();
        sink.replace("new content").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "<html><body><div id=\"root\">new content</div></body></html>"
        );
    }

    #[test]
    fn test_document_sink_rerender_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, DOC);

        let mut sink = DocumentSink::open(&path, "root").unwrap();
        sink.replace("first").unwrap();
        sink.replace("second").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains(">second</div>"));
        assert!(!written.contains("first"));
    }

    #[test]
    fn test_missing_target_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, DOC);

        let mut sink = DocumentSink::open(&path, "app").unwrap();
        let err = sink.replace("new content").unwrap_err();

        assert!(matches!(
            err,
            RenderError::MissingOutputTarget { ref target } if target == "app"
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), DOC);
        assert_eq!(sink.document(), DOC);
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        assert!(sink.contents.is_none());

        sink.replace("hello").unwrap();
        assert_eq!(sink.contents.as_deref(), Some("hello"));
    }
}
