//! UDP transport to the console.
//!
//! The X32 accepts OSC over UDP on port 10023.  OSC over UDP has no framing
//! of its own: the datagram boundary is the message boundary.  [`UdpSink`]
//! therefore maps one `write` call to one `send`, and never buffers.

use std::io::{self, Write};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use tracing::debug;

/// A connected UDP socket usable as a [`x32_core::Mixer`] sink.
#[derive(Debug)]
pub struct UdpSink {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpSink {
    /// Binds an ephemeral port on `bind_address` and connects it to `console`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from binding, resolving or connecting.
    pub fn connect(bind_address: &str, console: impl ToSocketAddrs) -> io::Result<Self> {
        let socket = UdpSocket::bind((bind_address, 0))?;
        socket.connect(console)?;
        Self::from_connected(socket)
    }

    /// Wraps a socket that has already been connected.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::NotConnected`] if the socket has no peer.
    pub fn from_connected(socket: UdpSocket) -> io::Result<Self> {
        let peer = socket.peer_addr()?;
        debug!(local = ?socket.local_addr().ok(), %peer, "UDP sink ready");
        Ok(Self { socket, peer })
    }

    /// Address of the console this sink sends to.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Write for UdpSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.socket.send(buf)
    }

    // Datagrams are sent immediately.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_connected_rejects_unconnected_socket() {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let err = UdpSink::from_connected(socket).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }

    #[test]
    fn test_connect_records_peer_address() {
        // Arrange
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let target = receiver.local_addr().unwrap();

        // Act
        let sink = UdpSink::connect("127.0.0.1", target).unwrap();

        // Assert
        assert_eq!(sink.peer_addr(), target);
        assert_ne!(sink.local_addr().unwrap().port(), 0);
    }

    #[test]
    fn test_flush_is_a_no_op() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut sink = UdpSink::connect("127.0.0.1", receiver.local_addr().unwrap()).unwrap();
        assert!(sink.flush().is_ok());
    }
}
