// Managers module
// Provides OOP-style manager wrappers and YAML configuration helpers

pub mod tab_strip;

pub use tab_strip::TabStripManager;

// Re-export YAML configuration types from tab_strip module
pub use tab_strip::{
    DecorationConfigYaml,
    DecorationKind,
    IndicatorConfigYaml,
    TabConfigYaml,
    TabStripConfigYaml,
    convert_indicator_config,
    convert_spacing,
    create_decoration,
    create_indicator,
    create_tab_items,
};
