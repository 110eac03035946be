//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_validate_selection() -> bool {
    true
}

/// What to do when a migration is requested while another is still running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InFlightPolicy {
    /// Reject overlapping activations.
    #[default]
    SingleFlight,
    /// Let overlapping read/write chains run independently.
    Parallel,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub in_flight: InFlightPolicy,

    /// Refuse to send requests for an empty school or district selection.
    #[serde(default = "default_validate_selection")]
    pub validate_selection: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            in_flight: InFlightPolicy::default(),
            validate_selection: default_validate_selection(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.in_flight, InFlightPolicy::SingleFlight);
        assert!(config.validate_selection);
    }
}
