//! Mapping between `ferrous_mdns_domain::RecordType` and `hickory_proto::rr::RecordType`.

use ferrous_mdns_domain::{QueryType, RecordType};
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for encoding responses)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::Unknown(code) => HickoryRecordType::from(code),
        }
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Types without a dedicated variant keep their wire code in `Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::SRV => RecordType::SRV,
            other => RecordType::from_u16(u16::from(other)),
        }
    }

    /// Convert the type of an incoming question, recognising the `ANY` wildcard.
    pub fn query_type_from_hickory(hickory_type: HickoryRecordType) -> QueryType {
        match hickory_type {
            HickoryRecordType::ANY => QueryType::Any,
            other => QueryType::Type(Self::from_hickory(other)),
        }
    }
}
