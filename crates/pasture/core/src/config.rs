/// Pasture configuration constants and defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PastureConfig {
    pub columns: u32,
    pub rows: u32,
    pub animation: AnimationMode,
}

impl PastureConfig {
    // ===== identity =====
    /// Highest identity the generator hands out before wrapping back to 1.
    pub const MAX_ELEMENT_ID: u32 = 0x00FF_FFFF;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COLUMNS: u32 = 3;
    pub const DEFAULT_ROWS: u32 = 4;
    pub const DEFAULT_ANIMATION: AnimationMode = AnimationMode::AsynchronousNoWait;

    pub const fn new() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            rows: Self::DEFAULT_ROWS,
            animation: Self::DEFAULT_ANIMATION,
        }
    }

    pub const fn with_size(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            animation: Self::DEFAULT_ANIMATION,
        }
    }

    pub const fn with_animation(mut self, animation: AnimationMode) -> Self {
        self.animation = animation;
        self
    }
}

impl Default for PastureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a rendering layer should play back visual effects for model changes.
///
/// The field only stores and broadcasts this value; interpreting it is up to
/// whoever animates the events.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnimationMode {
    /// Each effect finishes before the mutating call returns.
    Synchronous,
    /// Effects play on another thread; callers wait between effects.
    Asynchronous,
    /// Effects are queued and callers never wait.
    #[default]
    AsynchronousNoWait,
}
