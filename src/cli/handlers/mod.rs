mod run;
pub use run::{cmd_session, run_session};

use std::error::Error;

use crate::cli::commands::{Cli, Commands};
use crate::cli::output::{render_count, render_rows};
use crate::io::config_io::{self, load_config};
use crate::io::logging;
use crate::model::config::Config;
use crate::ops::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    logging::init(&config.log, cli.verbose);
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| cwd.join(config_io::DEFAULT_CONFIG_FILE));
    tracing::debug!(
        path = %path.display(),
        from_file = path.exists(),
        ?config,
        "configuration loaded"
    );

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => cmd_session(&config, cli.json),
        Commands::Show => cmd_show(&config, cli.json),
        Commands::Config => cmd_config(&config),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    let store = TaskStore::new(config);
    println!("{}", render_count(&store, json)?);
    for row in render_rows(&store, json)? {
        println!("{}", row);
    }
    Ok(())
}

fn cmd_config(config: &Config) -> Result<(), Box<dyn Error>> {
    print!("{}", config_io::to_toml(config)?);
    Ok(())
}
