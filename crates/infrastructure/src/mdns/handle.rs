use ferrous_mdns_domain::{DomainError, Record};
use tokio::sync::{mpsc, oneshot};

/// Capacity of the command queue feeding the server task.
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Registry changes applied by the server task between packets.
#[derive(Debug)]
pub enum ResponderCommand {
    Register {
        records: Vec<Record>,
        done: oneshot::Sender<()>,
    },
    Unregister {
        records: Vec<Record>,
        done: oneshot::Sender<()>,
    },
}

/// Cloneable publisher-side handle to a running `MdnsServer`.
///
/// Each call resolves once the server has applied the change, so a query
/// arriving afterwards already sees it.
#[derive(Debug, Clone)]
pub struct ResponderHandle {
    tx: mpsc::Sender<ResponderCommand>,
}

impl ResponderHandle {
    pub(crate) fn new(tx: mpsc::Sender<ResponderCommand>) -> Self {
        Self { tx }
    }

    pub async fn register(&self, records: Vec<Record>) -> Result<(), DomainError> {
        let (done, applied) = oneshot::channel();
        self.send(ResponderCommand::Register { records, done }).await?;
        applied.await.map_err(|_| DomainError::ResponderClosed)
    }

    pub async fn unregister(&self, records: Vec<Record>) -> Result<(), DomainError> {
        let (done, applied) = oneshot::channel();
        self.send(ResponderCommand::Unregister { records, done })
            .await?;
        applied.await.map_err(|_| DomainError::ResponderClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    async fn send(&self, command: ResponderCommand) -> Result<(), DomainError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| DomainError::ResponderClosed)
    }
}
