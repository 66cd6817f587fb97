//! Custom on-screen toast overlay
//!
//! A replacement for the platform's transient-message widget, for vendors
//! that suppress it when notification permissions are revoked. Build a
//! [`Toast`] descriptor with the chainable setters, then [`Toast::show`] it
//! on a [`ToastRunner`]: the runner displays one toast at a time, highest
//! priority first, and tears each down when its duration elapses.
//!
//! Rendering is delegated through the [`Renderer`] trait; [`FallbackRenderer`]
//! covers platforms that reject the overlay window token by retrying with an
//! activity-attached strategy.

pub mod constants;
pub mod duration;
pub mod render;
pub mod runner;
mod state;
pub mod toast;
pub mod view;
pub mod window;

pub use duration::ToastDuration;
pub use render::{FallbackRenderer, RenderError, Renderer};
pub use runner::ToastRunner;
pub use toast::Toast;
pub use view::{RenderContext, ToastView, ViewError, ViewFactory};
pub use window::{AnimationId, PixelFormat, SizeSpec, WindowSpec, WindowType};

pub use toast_overlay_config::{Gravity, ToastsConfig};
