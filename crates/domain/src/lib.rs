//! Ferrous mDNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod mdns_response;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{AddressFamily, Query, QueryEvent, Question, RemoteInfo};
pub use dns_record::{QueryType, Record, RecordData, RecordType, SrvData, DEFAULT_RECORD_TTL};
pub use errors::DomainError;
pub use mdns_response::MdnsResponse;
