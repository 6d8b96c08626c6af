use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to transmit response to {destination}: {reason}")]
    TransmissionFailed { destination: String, reason: String },

    #[error("Failed to encode DNS message: {0}")]
    EncodeFailed(String),

    #[error("Failed to decode DNS message: {0}")]
    DecodeFailed(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Responder is no longer running")]
    ResponderClosed,

    #[error("I/O error: {0}")]
    IoError(String),
}
