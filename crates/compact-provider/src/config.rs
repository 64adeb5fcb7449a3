//! # Purchase-Rule Configuration
//!
//! Compact-level knobs for the purchase flow, loaded from a YAML file the
//! same way jurisdiction/zone configuration is elsewhere in the stack. The
//! domain predicates stay pure — they take the wait period as a parameter —
//! and this type is how the application layer supplies it.

use serde::{Deserialize, Serialize};

use compact_core::CompactError;

/// Default encumbrance wait period: two years.
pub const DEFAULT_ENCUMBRANCE_WAIT_PERIOD_DAYS: u32 = 730;

/// Compact-level purchase-rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactConfig {
    /// Days that must elapse after an encumbrance is lifted before the
    /// affected privilege stops counting against the purchase flow.
    #[serde(default = "default_wait_period")]
    pub encumbrance_wait_period_days: u32,
}

fn default_wait_period() -> u32 {
    DEFAULT_ENCUMBRANCE_WAIT_PERIOD_DAYS
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self {
            encumbrance_wait_period_days: DEFAULT_ENCUMBRANCE_WAIT_PERIOD_DAYS,
        }
    }
}

impl CompactConfig {
    /// Parse a configuration document from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CompactError::Config`] when the document does not parse.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CompactError> {
        serde_yaml::from_str(yaml).map_err(|e| CompactError::Config(e.to_string()))
    }
}
