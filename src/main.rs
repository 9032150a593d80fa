// Tab Indicator Demo
// TUI showing a tab strip whose selection indicator can be restyled live

// IMPORTS ------------------>>

use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use tab_indicator::config::{load_config, BindingConfigYaml};
use tab_indicator::{IndicatorHost, TabStripManager};

//--------------------------------------------------------<<

const HWND_MAIN_TAB_STRIP: &str = "main-tab-strip";
const LOG_FILE: &str = "tab-indicator.log";

/// Height of the strip: top padding, label row, indicator row
const STRIP_HEIGHT: u16 = 3;

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Load configuration from YAML file (optional path as first argument)
    let config_path = std::env::args().nth(1).map(Into::into);
    let app_config = load_config(config_path).context("loading configuration")?;
    let strip_config = app_config.tab_strip(HWND_MAIN_TAB_STRIP)?;

    let mut manager = TabStripManager::create(strip_config);
    tracing::info!(title = %app_config.application.title, "starting demo");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut manager, &app_config.application.title, &app_config.application.bindings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file only when RUST_LOG is set; stderr would corrupt the alternate screen
fn init_logging() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE).with_context(|| format!("creating {}", LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &mut TabStripManager,
    title: &str,
    bindings: &[BindingConfigYaml],
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let outer = Block::default().borders(Borders::ALL).title(format!(" {} ", title));
            let inner = outer.inner(f.area());
            f.render_widget(outer, f.area());

            let [strip_area, body_area, status_area] = Layout::vertical([
                Constraint::Length(STRIP_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(inner);

            manager.render(f, strip_area);

            let body = Paragraph::new(describe(manager)).block(Block::default().borders(Borders::TOP));
            f.render_widget(body, body_area);

            f.render_widget(Paragraph::new(bindings_line(bindings)), status_area);
        })?;

        // ┌──────────────────────────────────────────────────────────────────────────────────────────────┐
        // │                              Handle events (keyboard and mouse)                              │
        // └──────────────────────────────────────────────────────────────────────────────────────────────┘

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Left => {
                        manager.navigate_previous();
                    }
                    KeyCode::Right | KeyCode::Tab => {
                        manager.navigate_next();
                    }
                    KeyCode::Char('s') => {
                        manager.cycle_style();
                    }
                    KeyCode::Char('w') => {
                        manager.cycle_width();
                    }
                    KeyCode::Char('c') => {
                        manager.toggle_content_index();
                    }
                    KeyCode::Char('v') => {
                        manager.toggle_indicator();
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse_event) => {
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
                    manager.click(mouse_event.column, mouse_event.row);
                }
            }
            // Terminal resize - handled on next draw
            _ => {}
        }
    }

    Ok(())
}

/// Current indicator state, one line per setting
fn describe(manager: &TabStripManager) -> Vec<Line<'static>> {
    let config = manager.indicator().config();
    let strip = manager.strip();
    let selected = strip
        .selected_item()
        .map(|item| item.name.clone())
        .unwrap_or_else(|| "-".to_string());
    let rect = manager
        .indicator()
        .compute_draw_rect(strip)
        .map(|r| format!("({}, {}, {}, {})", r.left, r.top, r.right, r.bottom))
        .unwrap_or_else(|| "not drawn".to_string());
    let content_index = config
        .content_index
        .map(|i| i.to_string())
        .unwrap_or_else(|| "item".to_string());

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };

    vec![
        row("selected", format!("{} ({} visible)", selected, strip.visible_items().len())),
        row("style", config.style.to_string()),
        row("width", config.width.to_string()),
        row("height", config.height.to_string()),
        row("target", content_index),
        row("visible", manager.indicator().is_visible().to_string()),
        row("rect", rect),
    ]
}

fn bindings_line(bindings: &[BindingConfigYaml]) -> Line<'static> {
    let mut spans = Vec::new();
    for binding in bindings {
        spans.push(Span::styled(format!(" {} ", binding.key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!("{}  ", binding.description), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}
