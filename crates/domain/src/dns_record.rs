pub mod name;
mod record;
mod record_type;

pub use record::{Record, RecordData, SrvData, DEFAULT_RECORD_TTL};
pub use record_type::{QueryType, RecordType};
