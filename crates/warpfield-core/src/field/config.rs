//! Raster field configuration.

use serde::{Deserialize, Serialize};

/// How coordinate axes map onto the spatial axes of a raster.
///
/// A raster of shape `[K, n1, ..., nD]` always carries the vector
/// component on axis 0. The remaining axes are addressed either in
/// order, or reversed for tensors laid out as `[K, Z, Y, X]` that are
/// sampled with `(x, y, z)` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisOrder {
    /// Coordinate axis `d` indexes raster axis `d + 1`.
    #[default]
    Natural,
    /// Coordinate axis `d` indexes raster axis `D - d`.
    Reversed,
}

/// Configuration for building a field from a raster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RasterFieldConfig {
    /// Mapping from coordinate axes to raster axes.
    pub axis_order: AxisOrder,
}

impl RasterFieldConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis order.
    pub fn with_axis_order(mut self, axis_order: AxisOrder) -> Self {
        self.axis_order = axis_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_natural() {
        assert_eq!(RasterFieldConfig::new().axis_order, AxisOrder::Natural);
    }

    #[test]
    fn test_with_axis_order() {
        let config = RasterFieldConfig::new().with_axis_order(AxisOrder::Reversed);
        assert_eq!(config.axis_order, AxisOrder::Reversed);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RasterFieldConfig::new().with_axis_order(AxisOrder::Reversed);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"axis_order":"Reversed"}"#);

        let restored: RasterFieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_unknown_axis_order_rejected() {
        assert!(serde_json::from_str::<AxisOrder>(r#""Diagonal""#).is_err());
    }
}
