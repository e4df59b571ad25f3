//! Fly the W simulator - Terminal host loop for the celebration display
//!
//! Drives the plugin exactly the way a display host would: periodic
//! `update` calls, `display` every tick, `cleanup` on demand. Runs with
//! `simulate_win` enabled so no network access is needed, and renders the
//! produced frames as half-block pixels in the terminal.

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use flythew::{CelebrationConfig, DisplayPlugin, FlyTheWPlugin, Frame};

/// Simulated LED matrix dimensions
const DISPLAY_WIDTH: usize = 64;
const DISPLAY_HEIGHT: usize = 32;

/// Terminal redraw cadence; comfortably above the default animation fps
const TICK: Duration = Duration::from_millis(40);

fn main() -> Result<()> {
    // Note: logging is disabled for the TUI - it would corrupt the
    // alternate screen display.

    let config = CelebrationConfig {
        simulate_win: true,
        ..Default::default()
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let mut plugin = FlyTheWPlugin::with_live_feed(DISPLAY_WIDTH, DISPLAY_HEIGHT, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &runtime, &mut plugin);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    runtime: &tokio::runtime::Runtime,
    plugin: &mut FlyTheWPlugin,
) -> Result<()> {
    loop {
        let now = Utc::now();
        runtime.block_on(plugin.update(now));

        let frame = plugin.display(now);
        let celebrating = plugin.has_live_content(now);

        terminal.draw(|f| {
            let chunks = ratatui::layout::Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([
                    ratatui::layout::Constraint::Length(1),
                    ratatui::layout::Constraint::Min(0),
                    ratatui::layout::Constraint::Length(1),
                ])
                .split(f.area());

            let status = if celebrating { "CELEBRATING" } else { "idle" };
            f.render_widget(
                Paragraph::new(format!(" fly_the_w sim | {}", status)),
                chunks[0],
            );

            let canvas = Paragraph::new(frame_lines(&frame)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {}x{} ", frame.width(), frame.height())),
            );
            f.render_widget(canvas, chunks[1]);

            f.render_widget(Paragraph::new(" q=quit c=cleanup u=update"), chunks[2]);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('c') => plugin.cleanup(),
                        KeyCode::Char('u') => runtime.block_on(plugin.update(Utc::now())),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Render a pixel frame as terminal lines, two pixel rows per text row
/// using the upper-half-block glyph (fg = top pixel, bg = bottom pixel).
fn frame_lines(frame: &Frame) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(frame.height().div_ceil(2));

    for top in (0..frame.height()).step_by(2) {
        let mut spans = Vec::with_capacity(frame.width());
        for x in 0..frame.width() {
            let fg = frame.get(x, top).unwrap_or(flythew::Rgb::BLACK);
            let bg = frame.get(x, top + 1).unwrap_or(flythew::Rgb::BLACK);
            spans.push(Span::styled(
                "▀",
                Style::default()
                    .fg(Color::Rgb(fg.0, fg.1, fg.2))
                    .bg(Color::Rgb(bg.0, bg.1, bg.2)),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}
