//! Digest configuration.

use chrono::FixedOffset;

use crate::condition::DEFAULT_ICON_EXT;
use crate::resolve::DominantStrategy;
use crate::tz::default_offset;

/// Default region shown under the location name.
pub const DEFAULT_SUBNAME: &str = "Chaco";

/// Options for turning a raw response into a digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestConfig {
    /// Target civil offset for day and hour computations.
    pub offset: FixedOffset,
    /// How a day's samples collapse into one condition.
    pub strategy: DominantStrategy,
    /// Icon file extension, without the dot.
    pub icon_ext: String,
    /// Subname attached to the location until the caller overrides it.
    pub subname: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            strategy: DominantStrategy::default(),
            icon_ext: DEFAULT_ICON_EXT.to_string(),
            subname: DEFAULT_SUBNAME.to_string(),
        }
    }
}

impl DigestConfig {
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_strategy(mut self, strategy: DominantStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_icon_ext(mut self, ext: impl Into<String>) -> Self {
        self.icon_ext = ext.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_subname(mut self, subname: impl Into<String>) -> Self {
        self.subname = subname.into();
        self
    }
}
