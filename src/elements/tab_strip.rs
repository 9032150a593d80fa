// Tab Strip Component
// Single-row strip of labelled tabs that hosts a TabIndicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::{ChildBox, IndicatorHost, ItemBox};
use crate::elements::tab_indicator::TabIndicator;

/// Labels and badges occupy a single row
const LABEL_HEIGHT: i32 = 1;

/// One tab entry as configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStripItem {
    pub id: String,
    pub name: String,
    /// Hidden items are neither laid out nor selectable
    pub hidden: bool,
    /// Short text shown after the label (counter, marker...)
    pub badge: Option<String>,
    /// Content child the indicator should target for this item (0 = label, 1 = badge)
    pub content_index: Option<usize>,
}

impl TabStripItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hidden: false,
            badge: None,
            content_index: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_content_index(mut self, index: usize) -> Self {
        self.content_index = Some(index);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Spacing of the strip, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStripSpacing {
    /// Before the first item
    pub padding_left: u16,
    pub padding_top: u16,
    pub padding_bottom: u16,
    /// Inside each item, on both sides of its content
    pub item_padding: u16,
    /// Between neighbouring items
    pub gap: u16,
}

impl Default for TabStripSpacing {
    fn default() -> Self {
        Self {
            padding_left: 1,
            padding_top: 1,
            padding_bottom: 1,
            item_padding: 1,
            gap: 1,
        }
    }
}

pub struct TabStrip {
    items: Vec<TabStripItem>,
    spacing: TabStripSpacing,
    color: Color,
    /// Index into the visible items
    selected: Option<usize>,
    area: Rect,
    /// Boxes of the visible items from the last layout, host-local
    boxes: Vec<ItemBox>,
    /// Position of each box in `items`
    visible_to_item: Vec<usize>,
}

impl TabStrip {
    pub fn new(items: Vec<TabStripItem>) -> Self {
        let mut strip = Self {
            items,
            spacing: TabStripSpacing::default(),
            color: Color::Cyan,
            selected: None,
            area: Rect::default(),
            boxes: Vec::new(),
            visible_to_item: Vec::new(),
        };
        strip.layout(Rect::default());
        strip
    }

    pub fn with_spacing(mut self, spacing: TabStripSpacing) -> Self {
        self.spacing = spacing;
        self.layout(self.area);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn items(&self) -> &[TabStripItem] {
        &self.items
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Lay visible items out left to right inside `area`.
    /// Boxes are relative to `area`; the selection is clamped to the new visible count
    /// and falls back to the first item when there was none.
    pub fn layout(&mut self, area: Rect) {
        self.area = area;
        self.boxes.clear();
        self.visible_to_item.clear();

        let padding = self.spacing.item_padding as i32;
        let mut cursor = self.spacing.padding_left as i32;

        for (idx, item) in self.items.iter().enumerate() {
            if item.hidden {
                continue;
            }

            let label_width = item.name.width() as i32;
            let mut children = vec![ChildBox {
                content_width: label_width,
                content_height: LABEL_HEIGHT,
                margin_left: Some(0),
                ..Default::default()
            }];
            let mut content_width = label_width;

            if let Some(badge) = &item.badge {
                let badge_width = badge.width() as i32;
                children.push(ChildBox {
                    content_width: badge_width,
                    content_height: LABEL_HEIGHT,
                    margin_left: Some(label_width + 1),
                    ..Default::default()
                });
                content_width += 1 + badge_width;
            }

            let measured_width = content_width + 2 * padding;
            self.boxes.push(ItemBox {
                left: cursor,
                padding_left: padding,
                padding_top: self.spacing.padding_top as i32,
                content_width,
                content_height: LABEL_HEIGHT,
                measured_width,
                measured_height: LABEL_HEIGHT,
                children,
                content_index: item.content_index,
            });
            self.visible_to_item.push(idx);

            cursor += measured_width + self.spacing.gap as i32;
        }

        self.selected = if self.boxes.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.boxes.len() - 1))
        };
    }

    /// Row (host-local) the labels are drawn on, centred in the content height
    fn label_row(&self) -> i32 {
        self.padding_top() + self.content_height() / 2 - LABEL_HEIGHT / 2
    }

    pub fn selected_item(&self) -> Option<&TabStripItem> {
        let index = self.selected?;
        self.visible_to_item.get(index).map(|&idx| &self.items[idx])
    }

    /// Select a visible item; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.boxes.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) -> bool {
        self.navigate(1)
    }

    pub fn select_previous(&mut self) -> bool {
        self.navigate(-1)
    }

    fn navigate(&mut self, direction: i32) -> bool {
        let count = self.boxes.len() as i32;
        if count == 0 {
            return false;
        }
        let current = self.selected.map(|i| i as i32).unwrap_or(0);
        let next = (current + direction).rem_euclid(count) as usize;
        self.selected = Some(next);
        true
    }

    /// Show or hide an item by id; the selection stays on the same item when it is still visible
    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let selected_id = self.selected_item().map(|item| item.id.clone());

        self.items[pos].hidden = hidden;
        self.layout(self.area);

        if let Some(selected_id) = selected_id {
            if let Some(index) = self
                .visible_to_item
                .iter()
                .position(|&idx| self.items[idx].id == selected_id)
            {
                self.selected = Some(index);
            }
        }
        true
    }

    /// Visible index of the item under a buffer cell (for click handling)
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains((column, row).into()) {
            return None;
        }
        let x = column as i32 - self.area.x as i32;
        self.boxes
            .iter()
            .position(|item| x >= item.left && x < item.right())
    }

    pub fn render(&self, f: &mut Frame, indicator: &TabIndicator) {
        self.render_buffer(f.buffer_mut(), indicator);
    }

    /// Labels first, then the indicator on top
    pub fn render_buffer(&self, buf: &mut Buffer, indicator: &TabIndicator) {
        let row = self.area.y as i32 + self.label_row();
        if row >= self.area.top() as i32 && row < self.area.bottom() as i32 {
            self.render_labels(buf, row as u16);
        }

        indicator.on_draw(self, buf);
    }

    fn render_labels(&self, buf: &mut Buffer, row: u16) {
        for (index, (item_box, &idx)) in self.boxes.iter().zip(&self.visible_to_item).enumerate() {
            let item = &self.items[idx];
            let x = self.area.x as i32 + item_box.left + item_box.padding_left;
            if x >= self.area.right() as i32 {
                break;
            }
            let max_width = (self.area.right() as i32 - x) as usize;

            let label_style = if self.selected == Some(index) {
                Style::default().fg(self.color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let (end_x, _) = buf.set_stringn(x as u16, row, &item.name, max_width, label_style);

            if let Some(badge) = &item.badge {
                let badge_x = end_x as i32 + 1;
                if badge_x < self.area.right() as i32 {
                    let max_width = (self.area.right() as i32 - badge_x) as usize;
                    buf.set_stringn(badge_x as u16, row, badge, max_width, Style::default().fg(Color::DarkGray));
                }
            }
        }
    }
}

impl IndicatorHost for TabStrip {
    fn visible_items(&self) -> &[ItemBox] {
        &self.boxes
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn view_height(&self) -> i32 {
        self.area.height as i32
    }

    fn padding_top(&self) -> i32 {
        self.spacing.padding_top as i32
    }

    fn content_height(&self) -> i32 {
        self.area.height as i32 - self.spacing.padding_top as i32 - self.spacing.padding_bottom as i32
    }

    fn origin(&self) -> (i32, i32) {
        (self.area.x as i32, self.area.y as i32)
    }
}
