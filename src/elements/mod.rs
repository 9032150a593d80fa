// GUI Elements module
// Visual components that render UI elements

pub mod decoration;
pub mod tab_indicator;
pub mod tab_strip;

pub use decoration::*;
pub use tab_indicator::*;
pub use tab_strip::*;
