// Indicator Defaults
// Defaults compiled from config.yaml at build time
// Modify the `indicator_defaults` section of config.yaml and rebuild to change these values

use crate::core::geometry::IndicatorConfig;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            style: compiled::INDICATOR_STYLE,
            width: compiled::INDICATOR_WIDTH,
            height: compiled::INDICATOR_HEIGHT,
            width_offset: compiled::WIDTH_OFFSET,
            height_offset: compiled::HEIGHT_OFFSET,
            x_offset: compiled::X_OFFSET,
            y_offset: compiled::Y_OFFSET,
            content_index: compiled::CONTENT_INDEX,
        }
    }
}

/// Accent colour name used when a tab strip config does not set one
pub fn default_accent_color() -> String {
    compiled::ACCENT_COLOR.to_string()
}
