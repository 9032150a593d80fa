// Indicator geometry types
// Item boxes reported by the host strip, sizing modes and the resulting draw rectangle
//
// All values are terminal cells. Geometry is signed so offsets can push the
// indicator partially (or fully) outside the host's area.

use std::fmt;
use std::str::FromStr;

use ratatui::layout::Rect;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::ParseSizeModeError;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                        Layout boxes                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Nested content element inside an item (label, badge, icon...)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildBox {
    pub padding_left: i32,
    pub padding_top: i32,
    pub content_width: i32,
    pub content_height: i32,
    /// Offset from the item's content start
    pub margin_left: Option<i32>,
}

/// Laid-out geometry of one visible tab item, in host-local coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemBox {
    pub left: i32,
    pub padding_left: i32,
    pub padding_top: i32,
    pub content_width: i32,
    pub content_height: i32,
    /// Whole laid-out width including padding
    pub measured_width: i32,
    /// Whole laid-out height including padding
    pub measured_height: i32,
    pub children: Vec<ChildBox>,
    /// Per-item override of the indicator's content index
    pub content_index: Option<usize>,
}

impl ItemBox {
    /// Resolve the child the indicator should target.
    /// The item's own override wins over `default_index`; an index past the
    /// last child resolves to nothing and the item's own box is used instead.
    pub fn content_child(&self, default_index: Option<usize>) -> Option<&ChildBox> {
        self.content_index
            .or(default_index)
            .and_then(|index| self.children.get(index))
    }

    /// Right edge (exclusive) of the measured box
    pub fn right(&self) -> i32 {
        self.left + self.measured_width
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                     Indicator parameters                                       │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Where (and whether) the indicator is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStyle {
    /// Never drawn
    None,
    /// Along the bottom edge of the host strip
    Bottom,
    /// Vertically centred behind the selected item
    Background,
}

impl IndicatorStyle {
    /// Next style in the cycle None -> Bottom -> Background -> None
    pub fn next(self) -> Self {
        match self {
            IndicatorStyle::None => IndicatorStyle::Bottom,
            IndicatorStyle::Bottom => IndicatorStyle::Background,
            IndicatorStyle::Background => IndicatorStyle::None,
        }
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndicatorStyle::None => "none",
            IndicatorStyle::Bottom => "bottom",
            IndicatorStyle::Background => "background",
        };
        f.write_str(name)
    }
}

/// Sizing mode for one indicator dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMode {
    /// Literal size in cells
    Fixed(i32),
    /// Size of the item's content (or its targeted content child)
    FitContent,
    /// Whole measured size of the item, padding included
    FillParent,
}

impl SizeMode {
    /// Value used when the selected item cannot be resolved
    pub fn placeholder(self) -> i32 {
        match self {
            SizeMode::Fixed(cells) => cells,
            SizeMode::FitContent | SizeMode::FillParent => 0,
        }
    }
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeMode::Fixed(cells) => write!(f, "{}", cells),
            SizeMode::FitContent => f.write_str("fit_content"),
            SizeMode::FillParent => f.write_str("fill_parent"),
        }
    }
}

impl FromStr for SizeMode {
    type Err = ParseSizeModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "fit_content" | "wrap_content" => Ok(SizeMode::FitContent),
            "fill_parent" | "match_parent" => Ok(SizeMode::FillParent),
            other => other
                .parse::<i32>()
                .map(SizeMode::Fixed)
                .map_err(|_| ParseSizeModeError(value.to_string())),
        }
    }
}

/// YAML accepts either a bare integer or a keyword string
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeModeRepr {
    Cells(i32),
    Keyword(String),
}

impl<'de> Deserialize<'de> for SizeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match SizeModeRepr::deserialize(deserializer)? {
            SizeModeRepr::Cells(cells) => Ok(SizeMode::Fixed(cells)),
            SizeModeRepr::Keyword(keyword) => keyword.parse().map_err(de::Error::custom),
        }
    }
}

/// Style, sizing and offsets of the indicator.
/// `Default` comes from the compiled-in `indicator_defaults` (see `core::app_config`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorConfig {
    pub style: IndicatorStyle,
    pub width: SizeMode,
    pub height: SizeMode,
    /// Added to the computed width in every mode
    pub width_offset: i32,
    /// Added to the computed height in every mode
    pub height_offset: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Content child targeted when an item has no override of its own
    pub content_index: Option<usize>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Draw rectangle                                         │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Signed rectangle the indicator is painted into (right/bottom exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DrawRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(width),
            bottom: top.saturating_add(height),
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Zero or negative extent in either dimension
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            right: self.right.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
        }
    }

    /// Intersect with a buffer area.
    /// Returns None when nothing of the rectangle lies inside `area`.
    pub fn clip(&self, area: Rect) -> Option<Rect> {
        let left = self.left.max(area.x as i32);
        let top = self.top.max(area.y as i32);
        let right = self.right.min(area.right() as i32);
        let bottom = self.bottom.min(area.bottom() as i32);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}
