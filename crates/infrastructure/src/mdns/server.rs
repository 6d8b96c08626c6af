use super::codec::MdnsCodec;
use super::handle::{ResponderCommand, ResponderHandle, COMMAND_QUEUE_CAPACITY};
use super::socket::create_socket;
use super::transport::UdpResponseSender;
use ferrous_mdns_application::ports::SystemClock;
use ferrous_mdns_application::use_cases::MdnsResponder;
use ferrous_mdns_domain::{Config, DomainError};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Runs the responder on a single task: packets and registry commands are
/// processed one at a time, so the registry and suppression state never see
/// concurrent access.
pub struct MdnsServer {
    socket: Arc<UdpSocket>,
    responder: MdnsResponder,
    commands: mpsc::Receiver<ResponderCommand>,
    commands_tx: mpsc::Sender<ResponderCommand>,
    max_packet_size: usize,
    shutdown: CancellationToken,
}

impl MdnsServer {
    /// Binds the socket and loads the records listed in `config`.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn bind(config: &Config) -> Result<Self, DomainError> {
        let std_socket = create_socket(&config.server).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to bind mDNS socket on {}: {}",
                config.server.bind_socket_addr(),
                e
            ))
        })?;
        let socket = Arc::new(
            UdpSocket::from_std(std_socket).map_err(|e| DomainError::IoError(e.to_string()))?,
        );

        let destination = config.server.response_destination();
        let sender = Arc::new(UdpResponseSender::new(socket.clone(), destination));
        let mut responder = MdnsResponder::new(
            sender,
            Arc::new(SystemClock),
            config.responder.cache_window(),
        );
        responder.register(config.records.iter().cloned());

        let (commands_tx, commands) = mpsc::channel(COMMAND_QUEUE_CAPACITY);

        info!(
            local_addr = ?socket.local_addr().ok(),
            destination = %destination,
            records = responder.registry().len(),
            cache_window_ms = config.responder.cache_window_ms,
            "mDNS server bound"
        );

        Ok(Self {
            socket,
            responder,
            commands,
            commands_tx,
            max_packet_size: config.server.max_packet_size,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub fn handle(&self) -> ResponderHandle {
        ResponderHandle::new(self.commands_tx.clone())
    }

    /// Serves until the cancellation token fires.
    pub async fn run(self) {
        let Self {
            socket,
            mut responder,
            mut commands,
            commands_tx,
            max_packet_size,
            shutdown,
        } = self;
        // Only handles keep the command queue open from here on.
        drop(commands_tx);

        let mut buf = vec![0u8; max_packet_size];
        info!("mDNS server running");

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("mDNS server: shutting down");
                    break;
                }
                Some(command) = commands.recv() => {
                    apply_command(&mut responder, command);
                }
                received = socket.recv_from(&mut buf) => match received {
                    Ok((len, source)) => handle_packet(&mut responder, &buf[..len], source),
                    Err(e) => warn!(error = %e, "mDNS receive failed"),
                }
            }
        }

        responder.shutdown();
        info!("mDNS server stopped");
    }
}

fn apply_command(responder: &mut MdnsResponder, command: ResponderCommand) {
    match command {
        ResponderCommand::Register { records, done } => {
            responder.register(records);
            let _ = done.send(());
        }
        ResponderCommand::Unregister { records, done } => {
            responder.unregister(&records);
            let _ = done.send(());
        }
    }
}

fn handle_packet(responder: &mut MdnsResponder, packet: &[u8], source: SocketAddr) {
    let event = match MdnsCodec::decode_query(packet, source) {
        Ok(Some(event)) => event,
        Ok(None) => return,
        Err(e) => {
            warn!(source = %source, error = %e, "Dropping undecodable packet");
            return;
        }
    };

    let outcome = responder.handle_query(&event);
    debug!(
        source = %source,
        questions = event.query.questions.len(),
        sent = outcome.sent,
        suppressed = outcome.suppressed,
        unanswered = outcome.unanswered,
        failed = outcome.failures.len(),
        "mDNS query handled"
    );
}
