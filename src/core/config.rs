use serde::{Deserialize, Serialize};

use super::amount::DISPLAY_SEPARATOR;

/// Rendering options for the display forms of a ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Decimal separator for amount columns (default `,`).
    pub decimal_separator: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DISPLAY_SEPARATOR,
        }
    }
}

/// Builder for [`RenderConfig`].
///
/// # Example
///
/// ```
/// use ledgerline::core::RenderConfigBuilder;
///
/// let config = RenderConfigBuilder::new().decimal_separator('.').build();
/// assert_eq!(config.decimal_separator, '.');
/// ```
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal separator used for amounts.
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    pub fn build(self) -> RenderConfig {
        self.config
    }
}
