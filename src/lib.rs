//! # Rconsole
//!
//! A Source RCON console client that sends a single command to a remote
//! game server and reports the textual result, or a categorized reason why
//! the exchange failed.
//!
//! Rconsole is built around a one-shot session: validate the inputs, open a
//! connection, authenticate, run exactly one command, release the
//! connection. Previous inputs are cached in a small JSON file so repeat
//! invocations only need the command.
//!
//! ## Quick Example
//!
//! ```bash
//! $ rconsole -H 192.168.1.10 -p 27015 -P hunter2 status
//! hostname: my game server
//! players : 3 humans, 0 bots
//!
//! $ rconsole "say restarting soon"
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`params`]: Raw input validation into [`params::RequestParams`]
//! - [`runner`]: The single-command session runner and error classification
//! - [`client`]: Blocking TCP implementation of the RCON session
//! - [`packet`]: Source RCON wire format (framing, packet types, request ids)
//! - [`settings`]: JSON cache of the previous inputs
//! - [`cli`]: Command-line argument parsing with clap
//! - [`error`]: Error types
//!
//! The runner talks to the server through the [`runner::Connector`] and
//! [`runner::Session`] traits, so everything above the socket can be tested
//! against doubles.

pub mod cli;
pub mod client;
pub mod error;
pub mod packet;
pub mod params;
pub mod runner;
pub mod settings;

pub use client::{RconClient, TcpConnector};
pub use error::{RconError, Result};
pub use params::{RequestParams, validate};
pub use runner::{Connector, Session, run_command};
pub use settings::Settings;
