//! Command-line interface for rconsole.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options. Every connection flag is optional; missing
//! values fall back to the cached settings from the previous run.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for rconsole.
///
/// # Examples
///
/// ```bash
/// # Run one command against a game server
/// rconsole -H 192.168.1.10 -p 27015 -P hunter2 status
///
/// # Reuse the cached host/port/password from the last run
/// rconsole "say server restarting in 5 minutes"
///
/// # Cache the password for next time
/// rconsole -H 192.168.1.10 -p 27015 -P hunter2 --save-password status
/// ```
#[derive(Parser, Debug)]
#[command(name = "rconsole")]
#[command(version)]
#[command(about = "Source RCON console client - run a remote admin command")]
#[command(long_about = "Rconsole sends a single command to a Source RCON server\n\
    and prints the response.\n\n\
    Host, port, password, and command are remembered between runs; any flag\n\
    you omit falls back to the value from the previous invocation.")]
pub struct Cli {
    /// Server host name or address.
    #[arg(short = 'H', long, value_name = "HOST")]
    pub host: Option<String>,

    /// Server RCON port (0-65535).
    ///
    /// Kept as entered; validation happens together with the other fields.
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<String>,

    /// RCON password. May be empty for servers that run without one.
    #[arg(short = 'P', long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Remember the password in the cache file for later runs.
    #[arg(short = 's', long)]
    pub save_password: bool,

    /// Cache file to use instead of the platform default.
    #[arg(long, value_name = "FILE")]
    pub cache: Option<PathBuf>,

    /// The command to send. Multiple words are joined with spaces.
    #[arg(value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The command as a single string, or `None` if no words were given.
    ///
    /// When `None`, the command falls back to the cached value.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_words_joined() {
        let cli = Cli::parse_from(["rconsole", "say", "hello", "world"]);
        assert_eq!(cli.command_line(), Some("say hello world".to_string()));
    }

    #[test]
    fn test_no_command_falls_back() {
        let cli = Cli::parse_from(["rconsole", "-H", "example.com"]);
        assert_eq!(cli.command_line(), None);
        assert_eq!(cli.host.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "rconsole",
            "-H",
            "example.com",
            "-p",
            "27015",
            "-P",
            "secret",
            "--save-password",
            "status",
        ]);
        assert_eq!(cli.port.as_deref(), Some("27015"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert!(cli.save_password);
    }
}
