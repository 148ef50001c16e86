use std::fs;
use std::io::{self, IsTerminal, Read};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use pickbox::app::{App, AppSettings};
use pickbox::autocomplete::Selection;
use pickbox::choice::Item;
use pickbox::cli::Args;
use pickbox::config::load_config;
use pickbox::error::PickError;
use pickbox::logging;
use pickbox::source::parse_options;
use pickbox::terminal::MouseCapture;

/// Poll interval when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let config = load_config(args.config.as_deref())?;
    let settings = AppSettings::from_sources(&args, &config);

    // Options are read before the TUI takes over the terminal
    let input = read_input(&args)?;
    let options = parse_options(&input)?;
    log::info!("loaded {} option(s)", options.len());

    let terminal = ratatui::init();
    let result = run(terminal, options, &settings);
    ratatui::restore();

    if let Some(selection) = result? {
        println!("{}", serde_json::to_string(&selection)?);
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path).map_err(PickError::from)?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(PickError::NoOptions.into());
    }

    let mut input = String::new();
    stdin.lock().read_to_string(&mut input)?;
    Ok(input)
}

fn run(
    mut terminal: DefaultTerminal,
    options: Vec<Item>,
    settings: &AppSettings,
) -> Result<Option<Selection<Item>>> {
    let _mouse = MouseCapture::acquire(io::stdout())?;
    let mut app = App::new(options, settings, Instant::now());

    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.next_wakeup(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(app.output().cloned())
}
