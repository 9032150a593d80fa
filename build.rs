// Build script - reads config.yaml at compile time and generates indicator defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const INDICATOR_STYLE: crate::core::IndicatorStyle = crate::core::IndicatorStyle::{style};
pub const INDICATOR_WIDTH: crate::core::SizeMode = {width};
pub const INDICATOR_HEIGHT: crate::core::SizeMode = {height};
pub const WIDTH_OFFSET: i32 = {width_offset};
pub const HEIGHT_OFFSET: i32 = {height_offset};
pub const X_OFFSET: i32 = {x_offset};
pub const Y_OFFSET: i32 = {y_offset};
pub const CONTENT_INDEX: Option<usize> = {content_index};
pub const ACCENT_COLOR: &str = "{accent_color}";
"#,
        style = config.style,
        width = config.width,
        height = config.height,
        width_offset = config.width_offset,
        height_offset = config.height_offset,
        x_offset = config.x_offset,
        y_offset = config.y_offset,
        content_index = match config.content_index {
            Some(index) => format!("Some({})", index),
            None => "None".to_string(),
        },
        accent_color = config.accent_color,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    style: String,
    width: String,
    height: String,
    width_offset: i32,
    height_offset: i32,
    x_offset: i32,
    y_offset: i32,
    content_index: Option<usize>,
    accent_color: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            style: "Bottom".to_string(),
            width: "crate::core::SizeMode::FitContent".to_string(),
            height: "crate::core::SizeMode::Fixed(1)".to_string(),
            width_offset: 0,
            height_offset: 0,
            x_offset: 0,
            y_offset: 0,
            content_index: None,
            accent_color: "cyan".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_defaults = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("indicator_defaults:") {
            in_defaults = true;
            continue;
        }

        // Any top-level key ends the section
        if in_defaults
            && !trimmed.is_empty()
            && !trimmed.starts_with('#')
            && !line.starts_with(' ')
            && !line.starts_with('\t')
        {
            in_defaults = false;
        }

        if !in_defaults {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "style" => {
                    if let Some(style) = parse_style(value) {
                        config.style = style.to_string();
                    }
                }
                "width" => {
                    if let Some(mode) = parse_size_mode(value) {
                        config.width = mode;
                    }
                }
                "height" => {
                    if let Some(mode) = parse_size_mode(value) {
                        config.height = mode;
                    }
                }
                "width_offset" => config.width_offset = value.parse().unwrap_or(0),
                "height_offset" => config.height_offset = value.parse().unwrap_or(0),
                "x_offset" => config.x_offset = value.parse().unwrap_or(0),
                "y_offset" => config.y_offset = value.parse().unwrap_or(0),
                "content_index" => config.content_index = value.parse().ok(),
                "accent_color" => config.accent_color = unquote(value).to_string(),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}

fn parse_style(value: &str) -> Option<&'static str> {
    match unquote(value).to_lowercase().as_str() {
        "none" => Some("None"),
        "bottom" => Some("Bottom"),
        "background" => Some("Background"),
        _ => None,
    }
}

fn parse_size_mode(value: &str) -> Option<String> {
    let value = unquote(value).to_lowercase();
    match value.as_str() {
        "fit_content" | "wrap_content" => Some("crate::core::SizeMode::FitContent".to_string()),
        "fill_parent" | "match_parent" => Some("crate::core::SizeMode::FillParent".to_string()),
        other => other
            .parse::<i32>()
            .ok()
            .map(|cells| format!("crate::core::SizeMode::Fixed({})", cells)),
    }
}
