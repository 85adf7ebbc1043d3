//! Spacing configuration for flow layouts.

use flowlayout_core::LayoutError;

/// Default gap between adjacent items and between lines, in points.
pub const DEFAULT_MIN_SPACING: f32 = 4.0;

/// Immutable parameters of a flow layout pass.
///
/// ```
/// use flowlayout_layout::LayoutConfig;
///
/// let config = LayoutConfig::default().spacing(8.0).justified(true);
/// assert_eq!(config.min_spacing, 8.0);
/// assert!(config.should_justify);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Minimum gap between adjacent items on a line and between lines.
    pub min_spacing: f32,
    /// Give every item the slot width of the widest item.
    pub should_justify: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SPACING, false)
    }
}

impl LayoutConfig {
    /// Creates a configuration with explicit spacing and justification.
    #[must_use]
    pub const fn new(min_spacing: f32, should_justify: bool) -> Self {
        Self {
            min_spacing,
            should_justify,
        }
    }

    /// Sets the minimum spacing.
    #[must_use]
    pub const fn spacing(mut self, min_spacing: f32) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    /// Enables or disables justified mode.
    #[must_use]
    pub const fn justified(mut self, should_justify: bool) -> Self {
        self.should_justify = should_justify;
        self
    }

    /// Checks that the spacing is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSpacing`] otherwise.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.min_spacing.is_finite() && self.min_spacing >= 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidSpacing(self.min_spacing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.min_spacing, 4.0);
        assert!(!config.should_justify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_spacing() {
        assert_eq!(
            LayoutConfig::default().spacing(-1.0).validate(),
            Err(LayoutError::InvalidSpacing(-1.0))
        );
        assert!(LayoutConfig::default().spacing(f32::NAN).validate().is_err());
        assert!(LayoutConfig::default().spacing(f32::INFINITY).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: LayoutConfig = serde_json::from_str(r#"{"should_justify": true}"#).unwrap();
        assert_eq!(config, LayoutConfig::new(4.0, true));

        let config: LayoutConfig = serde_json::from_str(r#"{"min_spacing": 12.0}"#).unwrap();
        assert_eq!(config, LayoutConfig::new(12.0, false));
    }
}
