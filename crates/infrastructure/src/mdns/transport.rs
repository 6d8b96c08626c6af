use super::codec::MdnsCodec;
use ferrous_mdns_application::ports::ResponseSender;
use ferrous_mdns_domain::{DomainError, MdnsResponse};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::debug;

/// Sends encoded responses to a fixed destination over the shared socket.
pub struct UdpResponseSender {
    socket: Arc<UdpSocket>,
    destination: SocketAddr,
}

impl UdpResponseSender {
    pub fn new(socket: Arc<UdpSocket>, destination: SocketAddr) -> Self {
        Self {
            socket,
            destination,
        }
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    fn transmission_failed(&self, reason: impl std::fmt::Display) -> DomainError {
        DomainError::TransmissionFailed {
            destination: self.destination.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ResponseSender for UdpResponseSender {
    fn respond(&self, response: &MdnsResponse) -> Result<(), DomainError> {
        let packet =
            MdnsCodec::encode_response(response).map_err(|e| self.transmission_failed(e))?;

        let sent = self
            .socket
            .try_send_to(&packet, self.destination)
            .map_err(|e| self.transmission_failed(e))?;

        debug!(
            destination = %self.destination,
            bytes = sent,
            answers = response.answers.len(),
            additionals = response.additionals.len(),
            "mDNS response sent"
        );
        Ok(())
    }
}
