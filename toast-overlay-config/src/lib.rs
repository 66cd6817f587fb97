pub const ID: &str = "dev.toast-overlay";

/// Anchor position of a toast window on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Gravity {
    Top,
    #[default]
    Bottom,
    Right,
    Left,
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ToastsConfig {
    /// The maximum number of pending toasts held while one is displayed.
    /// Arrivals that would rank below every queued entry are dropped once
    /// the list is full.
    #[serde(default = "default_max_pending")]
    pub max_pending: u32,
    /// Display time in milliseconds for short-duration toasts.
    #[serde(default = "default_short_timeout")]
    pub short_timeout_ms: u32,
    /// Display time in milliseconds for long-duration toasts.
    #[serde(default = "default_long_timeout")]
    pub long_timeout_ms: u32,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            max_pending: default_max_pending(),
            short_timeout_ms: default_short_timeout(),
            long_timeout_ms: default_long_timeout(),
        }
    }
}

// Default value helpers for serde
const fn default_max_pending() -> u32 {
    16
}

const fn default_short_timeout() -> u32 {
    2000
}

const fn default_long_timeout() -> u32 {
    3500
}
