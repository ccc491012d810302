//! widget-calc: the calculator widget in a terminal
//!
//! ## Usage
//!
//! ```bash
//! widget-calc                           # Interactive, default theme
//! widget-calc --theme '#1e293b'         # Start with a dark base color
//! widget-calc --keys '100 - 10 % ='     # Headless: print history and readout
//! widget-calc --log-file calc.log -vv   # Log every token to a file
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;
use widget_calc::{
    cli::Cli,
    config::WidgetConfig,
    error::WidgetResult,
    tui::{render, CalculatorApp, InputHandler, UiLayout},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> WidgetResult<()> {
    let cli = Cli::parse();
    let config = cli.to_config();
    config.validate()?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    match cli.tokens() {
        Some(tokens) => {
            init_logging(&config, true)?;
            run_headless(&config, &tokens, cli.json)
        }
        None => {
            init_logging(&config, false)?;
            run_interactive(&config)
        }
    }
}

/// Installs the log subscriber
///
/// `RUST_LOG` overrides the verbosity flags. Logs go to the configured file;
/// without one they go to stderr in headless mode and nowhere otherwise,
/// since the interactive screen owns the terminal.
fn init_logging(config: &WidgetConfig, headless: bool) -> WidgetResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_headless(config: &WidgetConfig, tokens: &[&str], json: bool) -> WidgetResult<()> {
    let mut app = CalculatorApp::with_config(config)?;
    for token in tokens {
        app.press(token);
    }
    info!(tokens = tokens.len(), "headless run finished");

    if json {
        println!("{}", app.widget().history().to_json()?);
    } else {
        let history = app.widget().history();
        if !history.is_empty() {
            println!("{}", history.export_formatted());
        }
        println!("{}", app.screen().readout);
    }
    Ok(())
}

/// Raw mode and the alternate screen, restored on drop
///
/// Dropping also runs while unwinding, so an error or panic inside the draw
/// loop still hands the shell back a usable terminal.
#[derive(Debug)]
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W, raw_mode: bool) -> WidgetResult<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        let mut guard = Self { out, raw_mode };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Best effort restore - ignore errors during drop
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(
            self.out,
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        );
    }
}

fn run_interactive(config: &WidgetConfig) -> WidgetResult<()> {
    let mut app = CalculatorApp::with_config(config)?;

    let _guard = TerminalGuard::enter(io::stdout(), true)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_app(&mut terminal, &mut app)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> WidgetResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(app, f))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.apply(input_handler.handle_key(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(keypad) = UiLayout::new(area, app.show_keypad()).keypad {
                    app.click(keypad, mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
