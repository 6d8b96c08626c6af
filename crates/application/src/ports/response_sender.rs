use ferrous_mdns_domain::{DomainError, MdnsResponse};

/// Outbound side of the transport.
///
/// Implementations must not block: the call hands the response off and
/// returns. A failure is reported as `DomainError::TransmissionFailed` and
/// only concerns the response passed in.
pub trait ResponseSender: Send + Sync {
    fn respond(&self, response: &MdnsResponse) -> Result<(), DomainError>;
}
