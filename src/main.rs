//! Rconsole CLI entry point.
//!
//! This binary provides the `rconsole` command for sending a single command
//! to a Source RCON server and printing the response.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rconsole::cli::Cli;
use rconsole::client::TcpConnector;
use rconsole::error::Result;
use rconsole::settings::{self, Settings};
use rconsole::{params, runner};

fn main() {
    // Logging goes to stderr; stdout carries only the command result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        if e.is_categorized() {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}

/// Main application logic: merge inputs, validate, run, render, persist.
fn run(cli: &Cli) -> Result<()> {
    let cache_path = cache_path(cli);
    let mut settings = cache_path
        .as_deref()
        .and_then(settings::load)
        .unwrap_or_default();

    let (host, port, password, command, savepw) = merge_inputs(cli, &settings);

    // Current inputs are remembered whether or not the run succeeds, just
    // like the previous result is kept when this run fails.
    settings.host = host.clone();
    settings.port = port.clone();
    settings.command = command.clone();
    settings.savepw = savepw;
    settings.passwd = if savepw { Some(password.clone()) } else { None };

    // Validation failures never reach the network layer.
    let outcome = params::validate(&host, &port, &password, &command)
        .and_then(|params| runner::run_command(&TcpConnector, &params));

    if let Ok(ref result) = outcome {
        println!("{}", result);
        settings.result = result.clone();
    }

    if let Some(ref path) = cache_path {
        settings::save(path, &settings);
    }

    outcome.map(|_| ())
}

/// Resolve the cache file: CLI override or the platform default.
fn cache_path(cli: &Cli) -> Option<PathBuf> {
    cli.cache.clone().or_else(settings::default_cache_path)
}

/// Combine CLI arguments with cached settings. CLI values win.
///
/// The cached password is only ever present when it was saved with the
/// save-password toggle, so falling back to it honors that opt-in.
fn merge_inputs(cli: &Cli, settings: &Settings) -> (String, String, String, String, bool) {
    let host = cli.host.clone().unwrap_or_else(|| settings.host.clone());
    let port = cli.port.clone().unwrap_or_else(|| settings.port.clone());
    let password = cli
        .password
        .clone()
        .or_else(|| settings.passwd.clone())
        .unwrap_or_default();
    let command = cli
        .command_line()
        .unwrap_or_else(|| settings.command.clone());
    let savepw = cli.save_password || settings.savepw;

    (host, port, password, command, savepw)
}
