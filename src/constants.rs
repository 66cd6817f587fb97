// Centralizes magic numbers for better maintainability

// ============================================================================
// Duration Constants
// ============================================================================

/// Display time in milliseconds for short-duration toasts
pub const DURATION_SHORT_MS: u32 = 2000;

/// Display time in milliseconds for long-duration toasts
pub const DURATION_LONG_MS: u32 = 3500;

// ============================================================================
// Queue Constants
// ============================================================================

/// Buffer size for the runner command channel
pub(crate) const CHANNEL_BUFFER_SIZE: usize = 100;

/// Initial capacity for the pending toast list
pub(crate) const INITIAL_PENDING_CAPACITY: usize = 8;
