//! Platform window specification derived from a toast descriptor
//!
//! Consumed by renderer implementations only; the queue never inspects it.

use serde::{Deserialize, Serialize};
use toast_overlay_config::Gravity;

/// Sizing of one window dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeSpec {
    /// Size the dimension to fit the view's content
    #[default]
    WrapContent,
    /// Fixed size in pixels
    Fixed(u32),
}

/// Which kind of platform window the toast is rendered into.
///
/// `Overlay` is the default; a renderer may substitute `ApplicationPanel`
/// when the platform rejects the overlay token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindowType {
    #[default]
    Overlay,
    ApplicationPanel,
}

/// Pixel format of the toast window surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    #[default]
    Translucent,
    Opaque,
}

/// Opaque reference to an enter/exit animation resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u32);

impl AnimationId {
    /// No animation
    pub const NONE: Self = Self(0);
    /// The platform's stock toast fade animation
    pub const TOAST: Self = Self(1);
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::TOAST
    }
}

/// Window parameters for one toast, handed to the rendering collaborator.
///
/// Toast windows are always non-focusable and translucent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub focusable: bool,
    pub format: PixelFormat,
    pub window_type: WindowType,
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub animation: AnimationId,
    pub gravity: Gravity,
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_spec_default_wraps_content() {
        assert_eq!(SizeSpec::default(), SizeSpec::WrapContent);
    }

    #[test]
    fn test_window_type_default_is_overlay() {
        assert_eq!(WindowType::default(), WindowType::Overlay);
    }

    #[test]
    fn test_animation_default_is_toast() {
        assert_eq!(AnimationId::default(), AnimationId::TOAST);
        assert_ne!(AnimationId::TOAST, AnimationId::NONE);
    }

    #[test]
    fn test_window_spec_serialization() {
        let spec = WindowSpec {
            focusable: false,
            format: PixelFormat::Translucent,
            window_type: WindowType::Overlay,
            width: SizeSpec::Fixed(320),
            height: SizeSpec::WrapContent,
            animation: AnimationId::TOAST,
            gravity: Gravity::Bottom,
            x: 0,
            y: 64,
        };

        let json = serde_json::to_string(&spec).unwrap();
        let back: WindowSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
