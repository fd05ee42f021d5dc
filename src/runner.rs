//! The command session runner.
//!
//! Owns the one-shot "connect, authenticate, run, release" exchange and the
//! mapping of transport faults into the closed error taxonomy. The remote
//! client is consumed through the [`Connector`] and [`Session`] traits so the
//! runner can be exercised against test doubles; the real implementation
//! lives in [`crate::client`].
//!
//! Per call the runner moves through connect -> authenticate -> execute and
//! closes the session exactly once on every path where one was established.
//! There are no retries and no cancellation: the call blocks until the
//! exchange succeeds or fails.

use std::io::ErrorKind;

use tracing::{debug, warn};

use crate::error::{RconError, Result};
use crate::params::RequestParams;

/// One live, exclusively owned connection to the remote service.
///
/// A session is good for a single authenticated command exchange and is not
/// reusable after [`Session::close`].
pub trait Session {
    /// Authenticate with the given password.
    ///
    /// # Errors
    ///
    /// [`RconError::WrongPassword`] if the server rejects the credentials,
    /// or a transport fault.
    fn authenticate(&mut self, password: &str) -> Result<()>;

    /// Execute one command and return its textual response.
    ///
    /// # Errors
    ///
    /// [`RconError::RequestIdMismatch`] if the response does not correlate
    /// with the request, or a transport fault.
    fn run(&mut self, command: &str) -> Result<String>;

    /// Release the connection. Idempotent at the transport level.
    fn close(&mut self) -> Result<()>;
}

/// Factory for sessions; the single point where network failures surface.
pub trait Connector {
    /// The session type this connector produces.
    type Session: Session;

    /// Open a connection to `host:port`.
    ///
    /// # Errors
    ///
    /// Transport faults (connection refused, timeout, anything else the OS
    /// reports) as [`RconError::Io`]; the runner classifies them.
    fn connect(&self, host: &str, port: u16) -> Result<Self::Session>;
}

/// Run exactly one authenticated command against the remote service.
///
/// Acquires a session, authenticates, executes `params.command`, and closes
/// the session on every exit path before returning. Faults are classified
/// into the fixed taxonomy; anything unrecognized stays [`RconError::Io`]
/// and is surfaced, never swallowed.
///
/// # Errors
///
/// - [`RconError::ConnectionRefused`] if the remote refused the connection
/// - [`RconError::Timeout`] if the transport deadline expired
/// - [`RconError::WrongPassword`] if authentication was rejected
/// - [`RconError::RequestIdMismatch`] on a correlation failure
/// - [`RconError::Io`] for any other fault
pub fn run_command<C: Connector>(connector: &C, params: &RequestParams) -> Result<String> {
    debug!(host = %params.host, port = params.port, "connecting");
    let mut session = connector
        .connect(&params.host, params.port)
        .map_err(classify)?;

    let outcome = exchange(&mut session, params);

    // Release happens before the outcome is inspected, so no path leaks
    // the connection. A close failure is logged, not propagated; the
    // exchange outcome is what the caller cares about.
    if let Err(err) = session.close() {
        warn!(error = %err, "session close failed");
    }

    outcome.map_err(classify)
}

fn exchange<S: Session>(session: &mut S, params: &RequestParams) -> Result<String> {
    session.authenticate(&params.password)?;
    debug!(command = %params.command, "executing");
    session.run(&params.command)
}

/// Map raw transport faults into the user-presentable taxonomy.
///
/// Blocking sockets report an expired read deadline as `WouldBlock` on Unix
/// and `TimedOut` on Windows; both become [`RconError::Timeout`]. Everything
/// not recognized here passes through untouched.
fn classify(err: RconError) -> RconError {
    match err {
        RconError::Io(io_err) => match io_err.kind() {
            ErrorKind::ConnectionRefused => RconError::ConnectionRefused,
            ErrorKind::TimedOut | ErrorKind::WouldBlock => RconError::Timeout,
            _ => RconError::Io(io_err),
        },
        other => other,
    }
}
