//! The toast descriptor
//!
//! A [`Toast`] fully specifies one overlay request: content, placement,
//! duration, animation and priority. It is built with chainable setters and
//! cloned at the queue boundary, so the copy the runner holds is never
//! reachable from the caller. The view and rendering context are shared by
//! reference across clones; everything else is value-copied.

use std::sync::Arc;

use toast_overlay_config::Gravity;

use crate::duration::ToastDuration;
use crate::runner::ToastRunner;
use crate::view::{RenderContext, ToastView, ViewError};
use crate::window::{AnimationId, PixelFormat, SizeSpec, WindowSpec, WindowType};

#[derive(Debug, Clone)]
pub struct Toast {
    context: RenderContext,
    view: Arc<ToastView>,
    animation: AnimationId,
    gravity: Gravity,
    x_offset: i32,
    y_offset: i32,
    width: SizeSpec,
    height: SizeSpec,
    priority: i32,
    duration: ToastDuration,
}

impl Toast {
    /// Build a descriptor bound to a rendering context, with the context's
    /// default view as content.
    ///
    /// Fails if the context cannot inflate its default view, which means the
    /// platform service backing it is gone.
    pub fn new(context: RenderContext) -> Result<Self, ViewError> {
        let view = context.inflate_default()?;
        Ok(Self {
            context,
            view,
            animation: AnimationId::default(),
            gravity: Gravity::default(),
            x_offset: 0,
            y_offset: 0,
            width: SizeSpec::WrapContent,
            height: SizeSpec::WrapContent,
            priority: 0,
            duration: ToastDuration::default(),
        })
    }

    /// Set the anchor position along with pixel offsets from it.
    pub fn set_gravity_offset(mut self, gravity: Gravity, x_offset: i32, y_offset: i32) -> Self {
        self.gravity = gravity;
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Set the anchor position, resetting offsets to zero.
    pub fn set_gravity(self, gravity: Gravity) -> Self {
        self.set_gravity_offset(gravity, 0, 0)
    }

    pub fn set_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Higher priority toasts are displayed sooner. Any integer is allowed.
    pub fn set_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn set_animation(mut self, animation: AnimationId) -> Self {
        self.animation = animation;
        self
    }

    /// Replace the content view.
    pub fn set_view(mut self, view: Arc<ToastView>) -> Self {
        self.view = view;
        self
    }

    pub fn set_size(mut self, width: SizeSpec, height: SizeSpec) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn view(&self) -> &Arc<ToastView> {
        &self.view
    }

    pub fn animation(&self) -> AnimationId {
        self.animation
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    pub fn width(&self) -> SizeSpec {
        self.width
    }

    pub fn height(&self) -> SizeSpec {
        self.height
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Whether this toast's view is currently attached and visible.
    ///
    /// This is a live check against the rendering subsystem through the shared
    /// view, so it also reflects clones of this descriptor held by the queue.
    pub fn is_showing(&self) -> bool {
        self.view.is_attached()
    }

    /// Derive the platform window specification for this toast.
    ///
    /// Toast windows are never focusable and always translucent; the window
    /// type defaults to overlay, renderers may substitute an application
    /// panel when the platform refuses the overlay token.
    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec {
            focusable: false,
            format: PixelFormat::Translucent,
            window_type: WindowType::Overlay,
            width: self.width,
            height: self.height,
            animation: self.animation,
            gravity: self.gravity,
            x: self.x_offset,
            y: self.y_offset,
        }
    }

    /// Submit a copy of this toast for display.
    ///
    /// The runner only ever holds the copy, so later changes to this
    /// descriptor never affect what gets displayed.
    pub fn show(&self, runner: &ToastRunner) {
        runner.add(self.clone());
    }

    /// Dismiss whatever is showing and clear the whole pending list.
    ///
    /// This is a global operation: the queue holds clones, so there is no
    /// handle with which to cancel one specific queued toast.
    pub fn cancel(&self, runner: &ToastRunner) {
        runner.cancel_all();
    }
}
