//! Blocking Source RCON client over TCP.
//!
//! [`RconClient`] is the real implementation of the [`Session`] trait:
//! one TCP connection, one authentication, one command exchange. The
//! zero-sized [`TcpConnector`] plugs it into [`crate::runner::run_command`].
//!
//! No timeouts are configured here; whatever the OS transport defaults to
//! surfaces through the runner as a timeout category.

use std::io::ErrorKind;
use std::net::{Shutdown, TcpStream};

use tracing::debug;

use crate::error::{RconError, Result};
use crate::packet::{Packet, SERVERDATA_RESPONSE_VALUE};
use crate::runner::{Connector, Session};

/// Opens [`RconClient`] sessions over plain TCP.
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Session = RconClient;

    fn connect(&self, host: &str, port: u16) -> Result<RconClient> {
        RconClient::connect(host, port)
    }
}

/// One live RCON connection.
pub struct RconClient {
    stream: TcpStream,
}

impl RconClient {
    /// Connect to the server. Uses the transport's default deadlines.
    ///
    /// # Errors
    ///
    /// Propagates the OS connect error (refused, unreachable, timed out).
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port))?;
        debug!(host, port, "connected");
        Ok(RconClient { stream })
    }
}

impl Session for RconClient {
    fn authenticate(&mut self, password: &str) -> Result<()> {
        let request = Packet::login(password);
        request.write_to(&mut self.stream)?;

        // Some servers send an empty SERVERDATA_RESPONSE_VALUE before the
        // auth response; skip those. An auth response with id -1 means the
        // password was rejected.
        loop {
            let response = Packet::read_from(&mut self.stream)?;
            if response.ptype == SERVERDATA_RESPONSE_VALUE {
                continue;
            }
            if response.id == -1 {
                return Err(RconError::WrongPassword);
            }
            return Ok(());
        }
    }

    fn run(&mut self, command: &str) -> Result<String> {
        let request = Packet::command(command);
        request.write_to(&mut self.stream)?;

        let response = Packet::read_from(&mut self.stream)?;
        if response.id != request.id {
            return Err(RconError::RequestIdMismatch);
        }
        Ok(response.payload_text())
    }

    fn close(&mut self) -> Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            // Already gone is fine; close must be idempotent.
            Err(err) if err.kind() != ErrorKind::NotConnected => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::{SERVERDATA_AUTH_RESPONSE, SERVERDATA_EXECCOMMAND};
    use crate::runner::run_command;
    use std::net::TcpListener;
    use std::thread;

    /// How the fake server should misbehave, if at all.
    enum ServerMode {
        Normal,
        RejectPassword,
        MangleRequestId,
    }

    /// Spawn a single-connection fake RCON server; returns its port.
    fn spawn_server(mode: ServerMode) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let login = Packet::read_from(&mut stream).unwrap();
            let auth_id = match mode {
                ServerMode::RejectPassword => -1,
                _ => login.id,
            };
            let auth = Packet {
                id: auth_id,
                ptype: SERVERDATA_AUTH_RESPONSE,
                payload: Vec::new(),
            };
            auth.write_to(&mut stream).unwrap();
            if auth_id == -1 {
                return;
            }

            let exec = Packet::read_from(&mut stream).unwrap();
            assert_eq!(exec.ptype, SERVERDATA_EXECCOMMAND);
            let response_id = match mode {
                ServerMode::MangleRequestId => exec.id.wrapping_add(1),
                _ => exec.id,
            };
            let response = Packet {
                id: response_id,
                ptype: SERVERDATA_RESPONSE_VALUE,
                payload: b"players: 3".to_vec(),
            };
            response.write_to(&mut stream).unwrap();
        });

        port
    }

    fn params_for(port: u16) -> crate::params::RequestParams {
        crate::params::validate("127.0.0.1", &port.to_string(), "secret", "status").unwrap()
    }

    #[test]
    fn test_full_exchange() {
        let port = spawn_server(ServerMode::Normal);
        let result = run_command(&TcpConnector, &params_for(port)).unwrap();
        assert_eq!(result, "players: 3");
    }

    #[test]
    fn test_rejected_password() {
        let port = spawn_server(ServerMode::RejectPassword);
        let err = run_command(&TcpConnector, &params_for(port)).unwrap_err();
        assert!(matches!(err, RconError::WrongPassword));
    }

    #[test]
    fn test_request_id_mismatch() {
        let port = spawn_server(ServerMode::MangleRequestId);
        let err = run_command(&TcpConnector, &params_for(port)).unwrap_err();
        assert!(matches!(err, RconError::RequestIdMismatch));
    }

    #[test]
    fn test_connection_refused() {
        // Bind then drop to find a port with no listener.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = run_command(&TcpConnector, &params_for(port)).unwrap_err();
        assert!(matches!(err, RconError::ConnectionRefused));
    }

    #[test]
    fn test_close_is_idempotent() {
        let port = spawn_server(ServerMode::Normal);
        let mut client = RconClient::connect("127.0.0.1", port).unwrap();
        client.close().unwrap();
        client.close().unwrap();
    }
}
