use super::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// TTL applied to records that do not carry one, in seconds.
pub const DEFAULT_RECORD_TTL: u32 = 120;

/// A resource record advertised by this host.
///
/// The record type is derived from the payload, so a record always lands in
/// the registry bucket matching its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(flatten)]
    pub data: RecordData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    PTR(String),
    CNAME(String),
    NS(String),
    SRV(SrvData),
    TXT(#[serde(with = "txt_strings")] Vec<Vec<u8>>),
    Unknown { record_type: u16, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvData {
    #[serde(default)]
    pub priority: u16,

    #[serde(default)]
    pub weight: u16,

    pub port: u16,

    pub target: String,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self::new(name, DEFAULT_RECORD_TTL, RecordData::A(address))
    }

    pub fn aaaa(name: impl Into<String>, address: Ipv6Addr) -> Self {
        Self::new(name, DEFAULT_RECORD_TTL, RecordData::AAAA(address))
    }

    pub fn ptr(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_RECORD_TTL, RecordData::PTR(target.into()))
    }

    pub fn srv(name: impl Into<String>, target: impl Into<String>, port: u16) -> Self {
        Self::new(
            name,
            DEFAULT_RECORD_TTL,
            RecordData::SRV(SrvData {
                priority: 0,
                weight: 0,
                port,
                target: target.into(),
            }),
        )
    }

    pub fn txt<I, T>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        let entries = entries.into_iter().map(Into::into).collect();
        Self::new(name, DEFAULT_RECORD_TTL, RecordData::TXT(entries))
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Same type, same name and same payload. The TTL does not take part.
    pub fn is_duplicate_of(&self, other: &Record) -> bool {
        self.record_type() == other.record_type()
            && self.name == other.name
            && self.data == other.data
    }
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::SRV(_) => RecordType::SRV,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::Unknown { record_type, .. } => RecordType::from_u16(*record_type),
        }
    }

    /// Instance name a PTR record points at.
    pub fn ptr_target(&self) -> Option<&str> {
        match self {
            RecordData::PTR(target) => Some(target),
            _ => None,
        }
    }

    /// The named type an opaque payload's code belongs to, if any. Such a
    /// payload would land in that type's bucket without its typed data.
    pub fn shadowed_type(&self) -> Option<RecordType> {
        match self {
            RecordData::Unknown { record_type, .. } => match RecordType::from_u16(*record_type) {
                RecordType::Unknown(_) => None,
                named => Some(named),
            },
            _ => None,
        }
    }

    /// Host name an SRV record points at.
    pub fn srv_target(&self) -> Option<&str> {
        match self {
            RecordData::SRV(srv) => Some(&srv.target),
            _ => None,
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}

mod txt_strings {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(entries: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        entries
            .iter()
            .map(|entry| String::from_utf8_lossy(entry).into_owned())
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<String>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(String::into_bytes).collect())
    }
}
