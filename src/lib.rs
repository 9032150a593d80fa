// Tab Indicator Library
// Selection indicator (underline / background highlight) for terminal tab strips

// Core infrastructure - geometry types, host contract, compiled defaults
pub mod core;

// GUI elements - indicator, decorations and the host tab strip
pub mod elements;

// OOP-style manager wrappers and YAML conversion
pub mod managers;

// Utilities and helpers
pub mod utilities;

// Configuration loading
pub mod config;

// Error types
pub mod error;

// Re-export commonly used items for convenience
pub use crate::core::{ChildBox, DrawRect, IndicatorConfig, IndicatorHost, IndicatorStyle, ItemBox, SizeMode};
pub use elements::{Decoration, FillDecoration, TabIndicator, TabStrip, TabStripItem, TabStripSpacing};
pub use managers::TabStripManager;
pub use error::{ConfigError, ParseSizeModeError};
