// Tab Strip Manager
// Provides YAML configuration helpers and an OOP-style wrapper owning a strip and its indicator

use ratatui::{layout::Rect, Frame};
use serde::Deserialize;
use tracing::debug;

use crate::core::{default_accent_color, IndicatorConfig, IndicatorStyle, SizeMode};
use crate::elements::decoration::FillDecoration;
use crate::elements::tab_indicator::TabIndicator;
use crate::elements::tab_strip::{TabStrip, TabStripItem, TabStripSpacing};
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab strip configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabStripConfigYaml {
    /// Handle name (HWND)
    pub hwnd: String,
    pub padding_left: Option<u16>,
    pub padding_top: Option<u16>,
    pub padding_bottom: Option<u16>,
    pub item_padding: Option<u16>,
    pub gap: Option<u16>,
    /// Accent colour for the selected label and the default decoration
    #[serde(default = "default_accent_color")]
    pub color: String,
    /// List of tabs
    pub tabs: Vec<TabConfigYaml>,
    #[serde(default)]
    pub indicator: IndicatorConfigYaml,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    pub id: String,
    pub name: String,
    /// "active" marks the initially selected tab
    pub default: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    pub badge: Option<String>,
    /// Content child the indicator targets for this tab (0 = label, 1 = badge)
    pub indicator_content_index: Option<usize>,
}

/// Indicator configuration from YAML; omitted fields use the compiled defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorConfigYaml {
    pub style: Option<IndicatorStyle>,
    pub width: Option<SizeMode>,
    pub height: Option<SizeMode>,
    pub width_offset: Option<i32>,
    pub height_offset: Option<i32>,
    pub x_offset: Option<i32>,
    pub y_offset: Option<i32>,
    pub content_index: Option<usize>,
    pub visible: Option<bool>,
    pub decoration: Option<DecorationConfigYaml>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    /// No decoration: the indicator never draws
    None,
    Underline,
    Highlight,
}

/// Decoration configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct DecorationConfigYaml {
    pub kind: DecorationKind,
    /// Defaults to the strip colour
    pub color: Option<String>,
    /// Replacement symbol (underline defaults to ▔, highlight keeps the text)
    pub symbol: Option<String>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Convert YAML indicator configuration, filling gaps from the compiled defaults
pub fn convert_indicator_config(config: &IndicatorConfigYaml) -> IndicatorConfig {
    let defaults = IndicatorConfig::default();
    IndicatorConfig {
        style: config.style.unwrap_or(defaults.style),
        width: config.width.unwrap_or(defaults.width),
        height: config.height.unwrap_or(defaults.height),
        width_offset: config.width_offset.unwrap_or(defaults.width_offset),
        height_offset: config.height_offset.unwrap_or(defaults.height_offset),
        x_offset: config.x_offset.unwrap_or(defaults.x_offset),
        y_offset: config.y_offset.unwrap_or(defaults.y_offset),
        content_index: config.content_index.or(defaults.content_index),
    }
}

/// Build the decoration; None when the kind is `none`.
/// A missing decoration section means an underline in the strip colour.
pub fn create_decoration(config: Option<&DecorationConfigYaml>, strip_color: &str) -> Option<FillDecoration> {
    let Some(config) = config else {
        return Some(FillDecoration::underline(parse_color(strip_color)));
    };

    let color = parse_color(config.color.as_deref().unwrap_or(strip_color));
    let decoration = match config.kind {
        DecorationKind::None => return None,
        DecorationKind::Underline => FillDecoration::underline(color),
        DecorationKind::Highlight => FillDecoration::highlight(color),
    };

    Some(match &config.symbol {
        Some(symbol) => decoration.with_symbol(symbol.clone()),
        None => decoration,
    })
}

/// Convert YAML tab configurations to strip items
pub fn create_tab_items(config: &TabStripConfigYaml) -> Vec<TabStripItem> {
    config
        .tabs
        .iter()
        .map(|t| TabStripItem {
            id: t.id.clone(),
            name: t.name.clone(),
            hidden: t.hidden,
            badge: t.badge.clone(),
            content_index: t.indicator_content_index,
        })
        .collect()
}

pub fn convert_spacing(config: &TabStripConfigYaml) -> TabStripSpacing {
    let defaults = TabStripSpacing::default();
    TabStripSpacing {
        padding_left: config.padding_left.unwrap_or(defaults.padding_left),
        padding_top: config.padding_top.unwrap_or(defaults.padding_top),
        padding_bottom: config.padding_bottom.unwrap_or(defaults.padding_bottom),
        item_padding: config.item_padding.unwrap_or(defaults.item_padding),
        gap: config.gap.unwrap_or(defaults.gap),
    }
}

/// Visible index of the tab marked `default: active`, if any
fn initial_active_index(config: &TabStripConfigYaml) -> Option<usize> {
    config
        .tabs
        .iter()
        .filter(|t| !t.hidden)
        .position(|t| t.default.as_deref() == Some("active"))
}

/// Create the indicator described by a strip configuration
pub fn create_indicator(config: &TabStripConfigYaml) -> TabIndicator {
    let mut indicator = TabIndicator::new(convert_indicator_config(&config.indicator));
    if let Some(decoration) = create_decoration(config.indicator.decoration.as_ref(), &config.color) {
        indicator = indicator.with_decoration(decoration);
    }
    indicator.set_visible(config.indicator.visible.unwrap_or(true));
    indicator
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                         Tab Strip Manager - OOP Style Strip Operations                         │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Owns a tab strip and the indicator drawn on it
pub struct TabStripManager {
    hwnd: String,
    strip: TabStrip,
    indicator: TabIndicator,
}

impl TabStripManager {
    /// Create a strip and its indicator from config
    pub fn create(config: &TabStripConfigYaml) -> Self {
        let mut strip = TabStrip::new(create_tab_items(config))
            .with_spacing(convert_spacing(config))
            .with_color(parse_color(&config.color));
        if let Some(index) = initial_active_index(config) {
            strip.select(index);
        }

        debug!(hwnd = %config.hwnd, tabs = config.tabs.len(), "tab strip created");

        Self {
            hwnd: config.hwnd.clone(),
            strip,
            indicator: create_indicator(config),
        }
    }

    pub fn hwnd(&self) -> &str {
        &self.hwnd
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut TabStrip {
        &mut self.strip
    }

    pub fn indicator(&self) -> &TabIndicator {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut TabIndicator {
        &mut self.indicator
    }

    /// Lay out and draw the strip with its indicator
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.strip.layout(area);
        self.strip.render(f, &self.indicator);
    }

    pub fn navigate_previous(&mut self) -> bool {
        self.strip.select_previous()
    }

    pub fn navigate_next(&mut self) -> bool {
        self.strip.select_next()
    }

    /// Set the selected tab by visible index
    pub fn set_active(&mut self, index: usize) -> bool {
        self.strip.select(index)
    }

    /// Select the tab under a clicked cell
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.strip.item_at(column, row) {
            Some(index) => self.strip.select(index),
            None => false,
        }
    }

    /// Cycle none -> bottom -> background
    pub fn cycle_style(&mut self) -> IndicatorStyle {
        let mut config = self.indicator.config().clone();
        config.style = config.style.next();
        let style = config.style;
        self.indicator.set_config(config);
        style
    }

    /// Cycle fit_content -> fill_parent -> fixed(4)
    pub fn cycle_width(&mut self) -> SizeMode {
        let mut config = self.indicator.config().clone();
        config.width = match config.width {
            SizeMode::FitContent => SizeMode::FillParent,
            SizeMode::FillParent => SizeMode::Fixed(4),
            SizeMode::Fixed(_) => SizeMode::FitContent,
        };
        let width = config.width;
        self.indicator.set_config(config);
        width
    }

    /// Toggle the default content target between the item box and the label child
    pub fn toggle_content_index(&mut self) -> Option<usize> {
        let mut config = self.indicator.config().clone();
        config.content_index = match config.content_index {
            Some(_) => None,
            None => Some(0),
        };
        let content_index = config.content_index;
        self.indicator.set_config(config);
        content_index
    }

    pub fn toggle_indicator(&mut self) -> bool {
        let visible = !self.indicator.is_visible();
        self.indicator.set_visible(visible);
        visible
    }
}
