//! Scoped image previews.
//!
//! Selecting a file creates a preview that the view renders by URI
//! (`preview://<n>`). The URI stays resolvable for exactly as long as the
//! [`PreviewHandle`] is alive; dropping the handle revokes it. Replacing or
//! resetting the selected file therefore releases the previous preview
//! without any explicit cleanup call.

use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use base64::Engine;

const URI_SCHEME: &str = "preview://";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Identifier of a preview entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

impl PreviewId {
    pub fn get(self) -> u64 {
        self.0
    }

    fn uri(self) -> String {
        format!("{URI_SCHEME}{}", self.0)
    }

    fn parse(uri: &str) -> Option<Self> {
        uri.strip_prefix(URI_SCHEME)?.parse().ok().map(Self)
    }
}

struct Entry {
    mime: Option<String>,
    bytes: Arc<[u8]>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: HashMap<u64, Entry>,
}

/// Issues and resolves preview URIs.
///
/// Cheap to clone; all clones share the same table.
#[derive(Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<Mutex<Inner>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `bytes` and return the handle that keeps the preview alive.
    ///
    /// Bytes that are not a recognised image still get a preview; the handle
    /// just reports no MIME type and no dimensions.
    pub fn create(&self, bytes: Arc<[u8]>) -> PreviewHandle {
        let mime = sniff_mime(&bytes);
        let dimensions = read_dimensions(&bytes);
        let byte_len = bytes.len();

        let id = {
            let mut inner = self.lock();
            inner.next_id += 1;
            let id = PreviewId(inner.next_id);
            inner.entries.insert(
                id.0,
                Entry {
                    mime: mime.clone(),
                    bytes,
                },
            );
            id
        };

        tracing::debug!(
            "Created preview {} ({} bytes, {:?})",
            id.uri(),
            byte_len,
            mime
        );

        PreviewHandle {
            id,
            uri: id.uri(),
            mime,
            dimensions,
            byte_len,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Resolve a live preview URI to a `data:` URI, or `None` once revoked
    pub fn resolve(&self, uri: &str) -> Option<String> {
        let id = PreviewId::parse(uri)?;
        let inner = self.lock();
        let entry = inner.entries.get(&id.0)?;
        let mime = entry.mime.as_deref().unwrap_or(FALLBACK_MIME);
        let encoded = base64::engine::general_purpose::STANDARD.encode(&entry.bytes);
        Some(format!("data:{mime};base64,{encoded}"))
    }

    pub fn is_live(&self, id: PreviewId) -> bool {
        self.lock().entries.contains_key(&id.0)
    }

    /// Number of previews not yet released
    pub fn live_count(&self) -> usize {
        self.lock().entries.len()
    }
}

impl fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewRegistry")
            .field("live", &self.live_count())
            .finish()
    }
}

/// Keeps one preview URI alive
pub struct PreviewHandle {
    id: PreviewId,
    uri: String,
    mime: Option<String>,
    dimensions: Option<(u32, u32)>,
    byte_len: usize,
    registry: Weak<Mutex<Inner>>,
}

impl PreviewHandle {
    pub fn id(&self) -> PreviewId {
        self.id
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// Pixel size as `(width, height)` when the header could be read
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Short format name for display, e.g. `"PNG"`
    pub fn format_label(&self) -> Option<String> {
        self.mime
            .as_deref()
            .and_then(|m| m.strip_prefix("image/"))
            .map(str::to_uppercase)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        // Registry already gone means nothing left to revoke
        if let Some(inner) = self.registry.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.entries.remove(&self.id.0);
            tracing::debug!("Released preview {}", self.uri);
        }
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("uri", &self.uri)
            .field("mime", &self.mime)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<String> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}
