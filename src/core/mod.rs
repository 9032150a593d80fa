// Core infrastructure module
// Geometry types, the host contract and compiled defaults

pub mod app_config;
pub mod geometry;
pub mod host;

pub use app_config::default_accent_color;
pub use geometry::{ChildBox, DrawRect, IndicatorConfig, IndicatorStyle, ItemBox, SizeMode};
pub use host::IndicatorHost;
