use crate::constants::{DURATION_LONG_MS, DURATION_SHORT_MS};

/// How long a toast stays on screen once displayed.
///
/// The two buckets match the platform's transient-message widget; the
/// concrete millisecond values can be overridden per runner through
/// [`ToastsConfig`](toast_overlay_config::ToastsConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum ToastDuration {
    /// Short display time (2000ms by default)
    #[default]
    Short,
    /// Long display time (3500ms by default)
    Long,
}

impl ToastDuration {
    /// The default display time in milliseconds for this bucket.
    pub fn as_millis(self) -> u32 {
        match self {
            Self::Short => DURATION_SHORT_MS,
            Self::Long => DURATION_LONG_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_default_is_short() {
        let duration: ToastDuration = Default::default();
        assert_eq!(duration, ToastDuration::Short);
    }

    #[test]
    fn test_duration_millis() {
        assert_eq!(ToastDuration::Short.as_millis(), 2000);
        assert_eq!(ToastDuration::Long.as_millis(), 3500);
    }

    #[test]
    fn test_duration_copy() {
        let duration = ToastDuration::Long;
        let copied = duration;
        assert_eq!(duration, copied);
        // Verify original is still usable (copy trait)
        assert_eq!(duration, ToastDuration::Long);
    }

    #[test]
    fn test_duration_debug_format() {
        assert_eq!(format!("{:?}", ToastDuration::Short), "Short");
        assert_eq!(format!("{:?}", ToastDuration::Long), "Long");
    }
}
