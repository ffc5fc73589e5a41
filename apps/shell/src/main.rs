#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod session;

use crate::handlers::script;
use crate::models::args::{AppCommands, Cli};
use crate::session::Session;

use anyhow::Result;
use clap::Parser;
use ectl_kernel::config::load_control_config;
use ectl_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_control_config(cli.config.as_deref())?;
    let _logger = Logger::from_config(&config.logging)?;
    let mut session = Session::new(&config);

    match cli.command {
        AppCommands::Control(command) => session.execute(command)?,
        AppCommands::Script { path } => {
            let rejected = script::run(&mut session, &path)?;
            if rejected > 0 {
                println!("ℹ️ {rejected} operation(s) rejected");
            }
        },
    }

    Ok(())
}
