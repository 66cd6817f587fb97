//! Renderer seam between the queue and the platform windowing subsystem
//!
//! The runner drives a [`Renderer`] and nothing else; which kind of window a
//! toast actually lands in is the renderer's business. [`FallbackRenderer`]
//! pairs an overlay-window strategy with an activity-attached one for
//! platforms that reject the overlay token when notification permissions are
//! revoked.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::toast::Toast;

/// Errors raised while attaching a toast view to a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The platform refused to attach the window, typically because the
    /// overlay permission is revoked
    TokenRejected,
    /// The rendering surface is gone or was never available
    SurfaceUnavailable(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TokenRejected => write!(f, "window token rejected by the platform"),
            RenderError::SurfaceUnavailable(why) => {
                write!(f, "rendering surface unavailable: {}", why)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Displays and dismisses toast views.
///
/// Implementations own the view's attachment state: a successful
/// [`attach`](Renderer::attach) must mark the toast's view attached via
/// [`ToastView::set_attached`](crate::ToastView::set_attached), and
/// [`detach`](Renderer::detach) must clear it. The queue only ever calls
/// `detach` for a toast it successfully attached.
pub trait Renderer: Send + Sync {
    /// Attach the toast's view in a window built from its
    /// [`WindowSpec`](crate::WindowSpec).
    fn attach(&self, toast: &Toast) -> Result<(), RenderError>;

    /// Tear the toast's window down and detach its view.
    fn detach(&self, toast: &Toast);
}

/// Strategy pair that retries a rejected overlay attach with an alternate
/// renderer.
///
/// Only [`RenderError::TokenRejected`] triggers the fallback; other failures
/// propagate unchanged.
pub struct FallbackRenderer {
    primary: Arc<dyn Renderer>,
    fallback: Arc<dyn Renderer>,
    // View ids currently attached through the fallback strategy, so detach
    // reaches the renderer that owns the window.
    fallen_back: Mutex<HashSet<u64>>,
}

impl FallbackRenderer {
    pub fn new(primary: Arc<dyn Renderer>, fallback: Arc<dyn Renderer>) -> Self {
        Self {
            primary,
            fallback,
            fallen_back: Mutex::new(HashSet::new()),
        }
    }
}

impl Renderer for FallbackRenderer {
    fn attach(&self, toast: &Toast) -> Result<(), RenderError> {
        match self.primary.attach(toast) {
            Ok(()) => Ok(()),
            Err(RenderError::TokenRejected) => {
                warn!(
                    view = toast.view().id(),
                    "overlay token rejected, retrying with fallback renderer"
                );
                self.fallback.attach(toast)?;
                self.fallen_back
                    .lock()
                    .expect("fallback renderer lock poisoned")
                    .insert(toast.view().id());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn detach(&self, toast: &Toast) {
        let fell_back = self
            .fallen_back
            .lock()
            .expect("fallback renderer lock poisoned")
            .remove(&toast.view().id());
        if fell_back {
            self.fallback.detach(toast);
        } else {
            self.primary.detach(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RenderContext;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRenderer {
        attaches: AtomicUsize,
        detaches: AtomicUsize,
        fail_with: Option<RenderError>,
    }

    impl CountingRenderer {
        fn ok() -> Self {
            Self {
                attaches: AtomicUsize::new(0),
                detaches: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(err: RenderError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::ok()
            }
        }
    }

    impl Renderer for CountingRenderer {
        fn attach(&self, toast: &Toast) -> Result<(), RenderError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.attaches.fetch_add(1, Ordering::SeqCst);
            toast.view().set_attached(true);
            Ok(())
        }

        fn detach(&self, toast: &Toast) {
            self.detaches.fetch_add(1, Ordering::SeqCst);
            toast.view().set_attached(false);
        }
    }

    fn toast() -> Toast {
        Toast::new(RenderContext::text("hi")).unwrap()
    }

    #[test]
    fn test_fallback_not_used_when_primary_succeeds() {
        let primary = Arc::new(CountingRenderer::ok());
        let fallback = Arc::new(CountingRenderer::ok());
        let renderer = FallbackRenderer::new(primary.clone(), fallback.clone());

        let toast = toast();
        renderer.attach(&toast).unwrap();
        renderer.detach(&toast);

        assert_eq!(primary.attaches.load(Ordering::SeqCst), 1);
        assert_eq!(primary.detaches.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.attaches.load(Ordering::SeqCst), 0);
        assert_eq!(fallback.detaches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_token_rejection_falls_back() {
        let primary = Arc::new(CountingRenderer::failing(RenderError::TokenRejected));
        let fallback = Arc::new(CountingRenderer::ok());
        let renderer = FallbackRenderer::new(primary, fallback.clone());

        let toast = toast();
        renderer.attach(&toast).unwrap();
        assert!(toast.is_showing());

        // Teardown goes to the renderer that owns the window
        renderer.detach(&toast);
        assert_eq!(fallback.attaches.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.detaches.load(Ordering::SeqCst), 1);
        assert!(!toast.is_showing());
    }

    #[test]
    fn test_other_errors_propagate() {
        let primary = Arc::new(CountingRenderer::failing(RenderError::SurfaceUnavailable(
            "display lost".into(),
        )));
        let fallback = Arc::new(CountingRenderer::ok());
        let renderer = FallbackRenderer::new(primary, fallback.clone());

        let toast = toast();
        let err = renderer.attach(&toast).unwrap_err();
        assert!(matches!(err, RenderError::SurfaceUnavailable(_)));
        assert_eq!(fallback.attaches.load(Ordering::SeqCst), 0);
    }
}
