mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use tracing::{error, info};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = career_ladder::config::init_app_config()?;
    let headless = args.headless || args.json || !is_terminal();
    logging::init(&config, headless)?;

    let catalog = career_ladder::config::load_catalog(&config)?;
    let initial_state = config.initial_state.clone();
    let mut app = App::new(catalog, config);
    if let Some(token) = initial_state {
        app.restore(&token);
    }

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup_terminal()?;
    info!("starting interactive session");

    let result = event::run(&mut terminal, &mut app);

    terminal::cleanup_terminal_state(true, true);
    if let Err(e) = &result {
        error!(error = %e, "interactive session failed");
    }

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
