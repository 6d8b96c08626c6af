use super::QueryType;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub query_type: QueryType,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: impl Into<QueryType>) -> Self {
        Self {
            name: name.into(),
            query_type: query_type.into(),
        }
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, QueryType::Any)
    }
}

/// All questions carried by one inbound packet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub questions: Vec<Question>,
}

impl Query {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn single(question: Question) -> Self {
        Self {
            questions: vec![question],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::IPv4 => f.write_str("IPv4"),
            AddressFamily::IPv6 => f.write_str("IPv6"),
        }
    }
}

/// Where a query came from. Carried alongside the query for observers only;
/// it never influences matching or deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteInfo {
    pub address: IpAddr,
    pub port: u16,
    pub family: AddressFamily,
    pub size: usize,
}

impl RemoteInfo {
    pub fn new(source: SocketAddr, size: usize) -> Self {
        let family = match source.ip() {
            IpAddr::V4(_) => AddressFamily::IPv4,
            IpAddr::V6(_) => AddressFamily::IPv6,
        };
        Self {
            address: source.ip(),
            port: source.port(),
            family,
            size,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEvent {
    pub query: Query,
    pub remote: RemoteInfo,
}

impl QueryEvent {
    pub fn new(query: Query, remote: RemoteInfo) -> Self {
        Self { query, remote }
    }
}
