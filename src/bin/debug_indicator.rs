// Debug script to show indicator geometry for every visible tab

use anyhow::Context;
use ratatui::layout::Rect;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tab_indicator::config::load_config;
use tab_indicator::{IndicatorHost, TabStripManager};

const HWND_MAIN_TAB_STRIP: &str = "main-tab-strip";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let app_config = load_config(config_path).context("loading configuration")?;
    let strip_config = app_config.tab_strip(HWND_MAIN_TAB_STRIP)?;

    let mut manager = TabStripManager::create(strip_config);
    let area = Rect::new(0, 0, 80, 3);
    manager.strip_mut().layout(area);

    let indicator = manager.indicator();
    let config = indicator.config();

    println!("=== INDICATOR CONFIG ===");
    println!("  style:         {}", config.style);
    println!("  width:         {} (offset {})", config.width, config.width_offset);
    println!("  height:        {} (offset {})", config.height, config.height_offset);
    println!("  offset x/y:    {}/{}", config.x_offset, config.y_offset);
    println!(
        "  content index: {}",
        config.content_index.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("  visible:       {}", indicator.is_visible());
    println!("  decoration:    {}", indicator.has_decoration());
    println!();

    let strip = manager.strip();
    println!("=== STRIP ({}x{}) ===", area.width, area.height);
    println!(
        "  view height {}, padding top {}, content height {}",
        strip.view_height(),
        strip.padding_top(),
        strip.content_height()
    );
    println!();

    println!("=== VISIBLE ITEMS ===");
    for (idx, item) in strip.visible_items().iter().enumerate() {
        println!(
            "  [{}] left {:>3}  padding {}  content {}x{}  measured {}x{}  children {}  override {}",
            idx,
            item.left,
            item.padding_left,
            item.content_width,
            item.content_height,
            item.measured_width,
            item.measured_height,
            item.children.len(),
            item.content_index.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string()),
        );
    }
    println!();

    println!("=== INDICATOR PER INDEX ===");
    for idx in 0..strip.visible_items().len() {
        let center_x = indicator.center_x(strip, idx);
        let width = indicator.draw_width(strip, idx);
        let height = indicator.draw_height(strip, idx);
        println!("  [{}] center_x {:>3}  width {:>3}  height {:>2}", idx, center_x, width, height);
    }
    println!();

    println!("=== CURRENT SELECTION ===");
    match indicator.compute_draw_rect(strip) {
        Some(rect) => println!(
            "  index {:?} -> rect ({}, {}, {}, {})",
            strip.selected_index(),
            rect.left,
            rect.top,
            rect.right,
            rect.bottom
        ),
        None => println!("  index {:?} -> nothing drawn", strip.selected_index()),
    }

    Ok(())
}
