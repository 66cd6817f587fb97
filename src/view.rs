//! Renderable content for toasts
//!
//! A [`ToastView`] is the opaque unit a renderer attaches to a window. Views
//! are shared by reference between a caller-held descriptor and the clones the
//! queue holds, so the caller can observe visibility of its own submission
//! through [`ToastView::is_attached`].

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Inflates the default view for a rendering context.
///
/// Collaborator seam for the platform's layout-inflation mechanism. An
/// implementation returns `None` when the underlying service is unavailable,
/// which makes descriptor construction fail immediately.
pub trait ViewFactory: Send + Sync {
    fn inflate_default(&self) -> Option<Arc<ToastView>>;
}

/// Handle to the rendering context a toast is bound to.
///
/// Cheap to clone; clones share the same underlying context, matching the
/// shared rendering identity of a cloned descriptor.
#[derive(Clone)]
pub struct RenderContext {
    factory: Arc<dyn ViewFactory>,
}

impl RenderContext {
    pub fn new(factory: Arc<dyn ViewFactory>) -> Self {
        Self { factory }
    }

    /// A context whose default view is a plain text bubble.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(Arc::new(TextViewFactory { text }))
    }

    pub(crate) fn inflate_default(&self) -> Result<Arc<ToastView>, ViewError> {
        self.factory
            .inflate_default()
            .ok_or(ViewError::InflaterUnavailable)
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext").finish_non_exhaustive()
    }
}

struct TextViewFactory {
    text: String,
}

impl ViewFactory for TextViewFactory {
    fn inflate_default(&self) -> Option<Arc<ToastView>> {
        Some(Arc::new(ToastView::new(self.text.clone())))
    }
}

/// The renderable content of one toast.
#[derive(Debug)]
pub struct ToastView {
    id: u64,
    text: String,
    attached: AtomicBool,
}

impl ToastView {
    /// Create a view holding the given text payload.
    pub fn new(text: impl Into<String>) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
            attached: AtomicBool::new(false),
        }
    }

    /// Process-unique view id, used by renderers to track attachments.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The text payload of the view.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the view is currently attached to a window and visible.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    /// Record attachment state. Called by renderer implementations on
    /// attach/detach; the queue itself never touches this flag.
    pub fn set_attached(&self, attached: bool) {
        self.attached.store(attached, Ordering::Release);
    }
}

/// View inflation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The layout-inflation service backing the rendering context is gone
    InflaterUnavailable,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::InflaterUnavailable => {
                write!(f, "rendering context cannot inflate a default view")
            }
        }
    }
}

impl std::error::Error for ViewError {}
