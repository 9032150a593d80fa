// Tab Indicator
// Underline / background highlight that follows the selected item of a tab strip
//
// Every draw reads the host's layout and selection fresh; nothing is cached
// between frames. Bad indices and missing content children fall back to
// neutral values instead of failing, so a transient bad frame never panics.

use ratatui::buffer::Buffer;
use tracing::{debug, trace};

use crate::core::{ChildBox, DrawRect, IndicatorConfig, IndicatorHost, IndicatorStyle, ItemBox, SizeMode};
use crate::elements::decoration::Decoration;

/// Which dimension a size computation is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug)]
pub struct TabIndicator {
    config: IndicatorConfig,
    decoration: Option<Box<dyn Decoration>>,
    visible: bool,
}

impl Default for TabIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl TabIndicator {
    /// Indicator without a decoration; nothing is drawn until one is set
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            decoration: None,
            visible: true,
        }
    }

    pub fn with_decoration(mut self, decoration: impl Decoration + 'static) -> Self {
        self.decoration = Some(Box::new(decoration));
        self
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Replace style, sizing and offset parameters
    pub fn set_config(&mut self, config: IndicatorConfig) {
        debug!(?config, "indicator config replaced");
        self.config = config;
    }

    pub fn set_decoration(&mut self, decoration: Option<Box<dyn Decoration>>) {
        self.decoration = decoration;
    }

    pub fn has_decoration(&self) -> bool {
        self.decoration.is_some()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Item at `index` plus the content child it targets, if any
    fn resolve<'a, H>(&self, host: &'a H, index: usize) -> Option<(&'a ItemBox, Option<&'a ChildBox>)>
    where
        H: IndicatorHost + ?Sized,
    {
        let item = host.visible_items().get(index)?;
        Some((item, item.content_child(self.config.content_index)))
    }

    /// Horizontal centre of the item (or its targeted content child), 0 when `index` is out of range
    pub fn center_x<H>(&self, host: &H, index: usize) -> i32
    where
        H: IndicatorHost + ?Sized,
    {
        let Some((item, child)) = self.resolve(host, index) else {
            trace!(index, "center_x: no visible item at index");
            return 0;
        };

        let content_start = item.left.saturating_add(item.padding_left);
        match child {
            Some(child) => content_start
                .saturating_add(child.margin_left.unwrap_or(0))
                .saturating_add(child.padding_left)
                .saturating_add(child.content_width / 2),
            None => content_start.saturating_add(item.content_width / 2),
        }
    }

    /// Indicator width for the item at `index`, width offset included
    pub fn draw_width<H>(&self, host: &H, index: usize) -> i32
    where
        H: IndicatorHost + ?Sized,
    {
        self.draw_size(host, index, Axis::Horizontal)
    }

    /// Indicator height for the item at `index`, height offset included
    pub fn draw_height<H>(&self, host: &H, index: usize) -> i32
    where
        H: IndicatorHost + ?Sized,
    {
        self.draw_size(host, index, Axis::Vertical)
    }

    fn draw_size<H>(&self, host: &H, index: usize, axis: Axis) -> i32
    where
        H: IndicatorHost + ?Sized,
    {
        let (mode, offset) = match axis {
            Axis::Horizontal => (self.config.width, self.config.width_offset),
            Axis::Vertical => (self.config.height, self.config.height_offset),
        };

        let size = match mode {
            SizeMode::Fixed(cells) => cells,
            SizeMode::FitContent => match self.resolve(host, index) {
                Some((_, Some(child))) => match axis {
                    Axis::Horizontal => child.content_width,
                    Axis::Vertical => child.content_height,
                },
                Some((item, None)) => match axis {
                    Axis::Horizontal => item.content_width,
                    Axis::Vertical => item.content_height,
                },
                None => mode.placeholder(),
            },
            SizeMode::FillParent => match self.resolve(host, index) {
                Some((item, _)) => match axis {
                    Axis::Horizontal => item.measured_width,
                    Axis::Vertical => item.measured_height,
                },
                None => mode.placeholder(),
            },
        };

        size.saturating_add(offset)
    }

    /// Rectangle for the current selection in host-local coordinates.
    /// None means "draw nothing": hidden indicator, style `None`, no decoration,
    /// or a selection that does not resolve to a visible item.
    pub fn compute_draw_rect<H>(&self, host: &H) -> Option<DrawRect>
    where
        H: IndicatorHost + ?Sized,
    {
        if !self.visible || self.config.style == IndicatorStyle::None || self.decoration.is_none() {
            trace!(
                visible = self.visible,
                style = %self.config.style,
                has_decoration = self.decoration.is_some(),
                "indicator draw skipped"
            );
            return None;
        }

        let Some(index) = host.selected_index() else {
            trace!("indicator draw skipped: no selection");
            return None;
        };
        let count = host.visible_items().len();
        if index >= count {
            trace!(index, count, "indicator draw skipped: selection out of range");
            return None;
        }

        let center_x = self.center_x(host, index);
        let width = self.draw_width(host, index);
        let height = self.draw_height(host, index);

        let left = center_x.saturating_sub(width / 2).saturating_add(self.config.x_offset);
        let top = match self.config.style {
            IndicatorStyle::Bottom => host.view_height().saturating_sub(height),
            _ => host
                .padding_top()
                .saturating_add(host.content_height() / 2)
                .saturating_sub(height / 2),
        }
        .saturating_add(self.config.y_offset);

        Some(DrawRect::new(left, top, width, height))
    }

    /// Paint the decoration into `rect` (buffer coordinates), clipped to the buffer
    pub fn render(&self, buf: &mut Buffer, rect: DrawRect) {
        let Some(decoration) = &self.decoration else {
            return;
        };

        match rect.clip(buf.area) {
            Some(area) => decoration.draw(area, buf),
            None => trace!(?rect, "indicator rect empty or outside buffer"),
        }
    }

    /// Compute-and-render for one paint pass of the host
    pub fn on_draw<H>(&self, host: &H, buf: &mut Buffer)
    where
        H: IndicatorHost + ?Sized,
    {
        if let Some(rect) = self.compute_draw_rect(host) {
            let (dx, dy) = host.origin();
            self.render(buf, rect.translate(dx, dy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::decoration::{FillDecoration, UNDERLINE_SYMBOL};
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    struct TestHost {
        items: Vec<ItemBox>,
        selected: Option<usize>,
        view_height: i32,
        padding_top: i32,
        content_height: i32,
        origin: (i32, i32),
    }

    impl TestHost {
        fn new(items: Vec<ItemBox>) -> Self {
            Self {
                items,
                selected: Some(0),
                view_height: 50,
                padding_top: 0,
                content_height: 50,
                origin: (0, 0),
            }
        }
    }

    impl IndicatorHost for TestHost {
        fn visible_items(&self) -> &[ItemBox] {
            &self.items
        }

        fn selected_index(&self) -> Option<usize> {
            self.selected
        }

        fn view_height(&self) -> i32 {
            self.view_height
        }

        fn padding_top(&self) -> i32 {
            self.padding_top
        }

        fn content_height(&self) -> i32 {
            self.content_height
        }

        fn origin(&self) -> (i32, i32) {
            self.origin
        }
    }

    fn config(width: SizeMode, height: SizeMode) -> IndicatorConfig {
        IndicatorConfig {
            style: IndicatorStyle::Bottom,
            width,
            height,
            width_offset: 0,
            height_offset: 0,
            x_offset: 0,
            y_offset: 0,
            content_index: None,
        }
    }

    fn indicator(config: IndicatorConfig) -> TabIndicator {
        TabIndicator::new(config).with_decoration(FillDecoration::underline(Color::Cyan))
    }

    /// Item with a label child and a badge child, like the tab strip produces
    fn labelled_item(left: i32) -> ItemBox {
        ItemBox {
            left,
            padding_left: 2,
            padding_top: 1,
            content_width: 10,
            content_height: 1,
            measured_width: 14,
            measured_height: 3,
            children: vec![
                ChildBox {
                    content_width: 6,
                    content_height: 1,
                    margin_left: Some(0),
                    ..Default::default()
                },
                ChildBox {
                    padding_left: 1,
                    content_width: 2,
                    content_height: 2,
                    margin_left: Some(7),
                    ..Default::default()
                },
            ],
            content_index: None,
        }
    }

    #[test]
    fn test_center_x_uses_item_content_box() {
        let host = TestHost::new(vec![labelled_item(0), labelled_item(20)]);
        let indicator = indicator(config(SizeMode::FitContent, SizeMode::Fixed(1)));

        assert_eq!(indicator.center_x(&host, 0), 0 + 2 + 10 / 2);
        assert_eq!(indicator.center_x(&host, 1), 20 + 2 + 10 / 2);
    }

    #[test]
    fn test_default_content_index_targets_child() {
        let host = TestHost::new(vec![labelled_item(4)]);
        let mut cfg = config(SizeMode::FitContent, SizeMode::FitContent);
        cfg.content_index = Some(1);
        let indicator = indicator(cfg);

        // left + padding + margin + child padding + child width / 2
        assert_eq!(indicator.center_x(&host, 0), 4 + 2 + 7 + 1 + 1);
        assert_eq!(indicator.draw_width(&host, 0), 2);
        assert_eq!(indicator.draw_height(&host, 0), 2);
    }

    #[test]
    fn test_item_override_beats_default_content_index() {
        let mut item = labelled_item(0);
        item.content_index = Some(0);
        let host = TestHost::new(vec![item]);
        let mut cfg = config(SizeMode::FitContent, SizeMode::FitContent);
        cfg.content_index = Some(1);
        let indicator = indicator(cfg);

        assert_eq!(indicator.center_x(&host, 0), 0 + 2 + 0 + 0 + 3);
        assert_eq!(indicator.draw_width(&host, 0), 6);
        assert_eq!(indicator.draw_height(&host, 0), 1);
    }

    #[test]
    fn test_missing_child_falls_back_to_item_box() {
        let host = TestHost::new(vec![labelled_item(0)]);
        let mut cfg = config(SizeMode::FitContent, SizeMode::FitContent);
        cfg.content_index = Some(9);
        let indicator = indicator(cfg);

        assert_eq!(indicator.center_x(&host, 0), 2 + 5);
        assert_eq!(indicator.draw_width(&host, 0), 10);
        assert_eq!(indicator.draw_height(&host, 0), 1);
    }

    #[test]
    fn test_child_without_margin() {
        let mut item = labelled_item(0);
        item.children[1].margin_left = None;
        let host = TestHost::new(vec![item]);
        let mut cfg = config(SizeMode::FitContent, SizeMode::Fixed(1));
        cfg.content_index = Some(1);

        assert_eq!(indicator(cfg).center_x(&host, 0), 2 + 0 + 1 + 1);
    }

    #[test]
    fn test_fill_parent_uses_measured_size() {
        let host = TestHost::new(vec![labelled_item(0)]);
        let mut cfg = config(SizeMode::FillParent, SizeMode::FillParent);
        cfg.content_index = Some(1);
        let indicator = indicator(cfg);

        assert_eq!(indicator.draw_width(&host, 0), 14);
        assert_eq!(indicator.draw_height(&host, 0), 3);
    }

    #[test]
    fn test_fixed_size_ignores_index_validity() {
        let host = TestHost::new(vec![labelled_item(0)]);
        let mut cfg = config(SizeMode::Fixed(8), SizeMode::Fixed(2));
        cfg.width_offset = 3;
        cfg.height_offset = -1;
        let indicator = indicator(cfg);

        for index in [0, 1, 42] {
            assert_eq!(indicator.draw_width(&host, index), 11);
            assert_eq!(indicator.draw_height(&host, index), 1);
        }
    }

    #[test]
    fn test_bottom_scenario_single_item() {
        let item = ItemBox {
            content_width: 100,
            content_height: 4,
            measured_width: 100,
            measured_height: 4,
            ..Default::default()
        };
        let host = TestHost::new(vec![item]);
        let mut cfg = config(SizeMode::FitContent, SizeMode::FitContent);
        cfg.y_offset = -2;
        let indicator = indicator(cfg);

        assert_eq!(indicator.center_x(&host, 0), 50);
        assert_eq!(indicator.draw_width(&host, 0), 100);
        assert_eq!(
            indicator.compute_draw_rect(&host),
            Some(DrawRect { left: 0, top: 44, right: 100, bottom: 48 })
        );
    }

    #[test]
    fn test_background_centres_vertically() {
        let mut host = TestHost::new(vec![labelled_item(0)]);
        host.view_height = 9;
        host.padding_top = 2;
        host.content_height = 6;
        let mut cfg = config(SizeMode::FitContent, SizeMode::Fixed(3));
        cfg.style = IndicatorStyle::Background;
        cfg.x_offset = 1;
        cfg.y_offset = 1;
        let indicator = indicator(cfg);

        let rect = indicator.compute_draw_rect(&host).unwrap();
        // centre 7, width 10 -> left 2 (+1)
        assert_eq!(rect.left, 3);
        assert_eq!(rect.width(), 10);
        // 2 + 6/2 - 3/2 + 1
        assert_eq!(rect.top, 2 + 3 - 1 + 1);
        assert_eq!(rect.height(), 3);
    }

    #[test]
    fn test_style_none_draws_nothing() {
        let host = TestHost::new(vec![labelled_item(0)]);
        let mut cfg = config(SizeMode::FillParent, SizeMode::Fixed(1));
        cfg.style = IndicatorStyle::None;

        assert_eq!(indicator(cfg).compute_draw_rect(&host), None);
    }

    #[test]
    fn test_missing_decoration_or_hidden_draws_nothing() {
        let host = TestHost::new(vec![labelled_item(0)]);
        let cfg = config(SizeMode::FitContent, SizeMode::Fixed(1));

        let bare = TabIndicator::new(cfg.clone());
        assert!(!bare.has_decoration());
        assert_eq!(bare.compute_draw_rect(&host), None);

        let mut hidden = indicator(cfg);
        hidden.set_visible(false);
        assert_eq!(hidden.compute_draw_rect(&host), None);
        hidden.set_visible(true);
        assert!(hidden.compute_draw_rect(&host).is_some());
    }

    #[test]
    fn test_out_of_range_selection_degrades_silently() {
        let mut host = TestHost::new(vec![labelled_item(0), labelled_item(14)]);
        host.selected = Some(5);
        let mut cfg = config(SizeMode::FitContent, SizeMode::FillParent);
        cfg.width_offset = 2;
        cfg.height_offset = 1;
        let indicator = indicator(cfg);

        assert_eq!(indicator.center_x(&host, 5), 0);
        assert_eq!(indicator.draw_width(&host, 5), 0 + 2);
        assert_eq!(indicator.draw_height(&host, 5), 0 + 1);
        assert_eq!(indicator.compute_draw_rect(&host), None);

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));
        let before = buf.clone();
        indicator.on_draw(&host, &mut buf);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_no_selection_draws_nothing() {
        let mut host = TestHost::new(vec![labelled_item(0)]);
        host.selected = None;
        let indicator = indicator(config(SizeMode::FitContent, SizeMode::Fixed(1)));

        assert_eq!(indicator.compute_draw_rect(&host), None);
    }

    #[test]
    fn test_on_draw_paints_translated_rect() {
        let mut host = TestHost::new(vec![labelled_item(0)]);
        host.view_height = 3;
        host.content_height = 1;
        host.origin = (2, 1);
        let indicator = indicator(config(SizeMode::FitContent, SizeMode::Fixed(1)));

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 5));
        indicator.on_draw(&host, &mut buf);

        // local rect x 2..12, y 2..3 -> buffer x 4..14, y 3
        assert_eq!(buf[(3, 3)].symbol(), " ");
        assert_eq!(buf[(4, 3)].symbol(), UNDERLINE_SYMBOL);
        assert_eq!(buf[(13, 3)].symbol(), UNDERLINE_SYMBOL);
        assert_eq!(buf[(14, 3)].symbol(), " ");
        assert_eq!(buf[(4, 2)].symbol(), " ");
    }

    #[test]
    fn test_negative_size_is_skipped_without_panic() {
        let mut host = TestHost::new(vec![labelled_item(0)]);
        host.view_height = 3;
        let mut cfg = config(SizeMode::FitContent, SizeMode::Fixed(1));
        cfg.width_offset = -20;
        let indicator = indicator(cfg);

        let rect = indicator.compute_draw_rect(&host).unwrap();
        assert!(rect.is_empty());

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let before = buf.clone();
        indicator.on_draw(&host, &mut buf);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_extreme_config_values_saturate() {
        let mut host = TestHost::new(vec![labelled_item(0)]);
        host.view_height = 3;
        host.origin = (2, 0);
        let mut cfg = config(SizeMode::Fixed(i32::MAX), SizeMode::Fixed(1));
        cfg.width_offset = 1;
        let wide = indicator(cfg.clone());

        assert_eq!(wide.draw_width(&host, 0), i32::MAX);

        // Spans far past both edges: the whole bottom row gets the underline
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        wide.on_draw(&host, &mut buf);
        assert_eq!(buf[(0, 2)].symbol(), UNDERLINE_SYMBOL);
        assert_eq!(buf[(19, 2)].symbol(), UNDERLINE_SYMBOL);

        // Pushed out of the buffer entirely: nothing drawn
        cfg.x_offset = i32::MIN;
        cfg.y_offset = i32::MAX;
        cfg.height_offset = i32::MIN;
        let pushed = indicator(cfg);
        let rect = pushed.compute_draw_rect(&host).unwrap();
        assert_eq!(rect.left, i32::MIN);

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let before = buf.clone();
        pushed.on_draw(&host, &mut buf);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_set_config_takes_effect_next_draw() {
        let host = TestHost::new(vec![labelled_item(0)]);
        let mut indicator = indicator(config(SizeMode::FitContent, SizeMode::Fixed(1)));
        assert_eq!(indicator.compute_draw_rect(&host).map(|r| r.width()), Some(10));

        let mut cfg = indicator.config().clone();
        cfg.width = SizeMode::FillParent;
        indicator.set_config(cfg);
        assert_eq!(indicator.compute_draw_rect(&host).map(|r| r.width()), Some(14));
    }
}
