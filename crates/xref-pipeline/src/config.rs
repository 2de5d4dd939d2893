//! Pipeline configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pipeline configuration
///
/// Loadable from JSON; every field has a default matching the original
/// site's behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root URL of the chapter data tree (no trailing slash)
    pub data_root: String,
    /// Prefix for deep links; empty for root-hosted sites
    pub site_root: String,
    /// Debounce before a hover triggers a fetch, in ms
    pub hover_delay_ms: u64,
    /// Grace period before hiding, so the pointer can reach the card, in ms
    pub hide_delay_ms: u64,
}

impl PipelineConfig {
    /// Hover debounce as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    /// Hide grace period as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_root: "data".to_string(),
            site_root: String::new(),
            hover_delay_ms: 120,
            hide_delay_ms: 130,
        }
    }
}
