//! mDNS wire codec
//!
//! Translates between the domain's query/response types and DNS wire format
//! using `hickory-proto`. Only standard queries become `QueryEvent`s; response
//! packets seen on the link, our own included, are dropped here.

use super::record_type_map::RecordTypeMapper;
use ferrous_mdns_domain::dns_record::name::trim_root;
use ferrous_mdns_domain::{
    DomainError, MdnsResponse, Query, QueryEvent, QueryType, Question, Record, RecordData,
    RemoteInfo, SrvData,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query as HickoryQuery};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, NULL, PTR, SRV, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record as HickoryRecord, RecordType as HRT};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use tracing::trace;

/// mDNS responses always carry message id 0 (RFC 6762 §18.1).
const RESPONSE_ID: u16 = 0;

pub struct MdnsCodec;

impl MdnsCodec {
    /// Decode an inbound packet.
    ///
    /// Returns `Ok(None)` for packets that are not queries or carry no
    /// questions.
    pub fn decode_query(
        bytes: &[u8],
        source: SocketAddr,
    ) -> Result<Option<QueryEvent>, DomainError> {
        let message = Self::parse(bytes)?;

        if message.message_type() != MessageType::Query || message.op_code() != OpCode::Query {
            trace!(source = %source, "Ignoring non-query packet");
            return Ok(None);
        }

        let questions: Vec<Question> = message
            .queries()
            .iter()
            .map(|q| Question {
                name: name_to_string(q.name()),
                query_type: RecordTypeMapper::query_type_from_hickory(q.query_type()),
            })
            .collect();

        if questions.is_empty() {
            return Ok(None);
        }

        Ok(Some(QueryEvent::new(
            Query::new(questions),
            RemoteInfo::new(source, bytes.len()),
        )))
    }

    /// Encode a response as an authoritative mDNS answer.
    pub fn encode_response(response: &MdnsResponse) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new(RESPONSE_ID, MessageType::Response, OpCode::Query);
        message.set_authoritative(true);

        for record in &response.answers {
            message.add_answer(to_hickory_record(record)?);
        }
        for record in &response.additionals {
            message.add_additional(to_hickory_record(record)?);
        }

        Self::serialize_message(&message)
    }

    /// Encode a query; the question class is always IN.
    pub fn encode_query(query: &Query) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new(RESPONSE_ID, MessageType::Query, OpCode::Query);

        for question in &query.questions {
            let query_type = match question.query_type {
                QueryType::Any => HRT::ANY,
                QueryType::Type(record_type) => RecordTypeMapper::to_hickory(record_type),
            };

            let mut hickory_query = HickoryQuery::new();
            hickory_query.set_name(to_name(&question.name)?);
            hickory_query.set_query_type(query_type);
            hickory_query.set_query_class(DNSClass::IN);
            message.add_query(hickory_query);
        }

        Self::serialize_message(&message)
    }

    /// Decode a response packet back into domain records.
    ///
    /// Returns `Ok(None)` for packets that are not responses.
    pub fn decode_response(bytes: &[u8]) -> Result<Option<MdnsResponse>, DomainError> {
        let message = Self::parse(bytes)?;

        if message.message_type() != MessageType::Response {
            return Ok(None);
        }

        let answers = message.answers().iter().map(from_hickory_record).collect();
        let additionals = message.additionals().iter().map(from_hickory_record).collect();

        Ok(Some(MdnsResponse::new(answers, additionals)))
    }

    fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(bytes)
            .map_err(|e| DomainError::DecodeFailed(format!("Malformed mDNS packet: {}", e)))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::EncodeFailed(e.to_string()))?;

        Ok(buf)
    }
}

/// Builds a hickory name from raw labels so instance names with spaces or
/// other non-hostname characters survive unchanged.
fn to_name(name: &str) -> Result<Name, DomainError> {
    let labels = trim_root(name)
        .split('.')
        .filter(|label| !label.is_empty())
        .map(str::as_bytes);

    let mut parsed = Name::from_labels(labels)
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", name, e)))?;
    parsed.set_fqdn(true);
    Ok(parsed)
}

/// Joins labels with '.' without escaping. A label holding a literal '.'
/// reads back as two labels, and non-UTF-8 bytes become U+FFFD.
fn name_to_string(name: &Name) -> String {
    name.iter()
        .map(|label| String::from_utf8_lossy(label))
        .collect::<Vec<_>>()
        .join(".")
}

fn to_hickory_record(record: &Record) -> Result<HickoryRecord, DomainError> {
    let rdata = match &record.data {
        RecordData::A(address) => RData::A(A(*address)),
        RecordData::AAAA(address) => RData::AAAA(AAAA(*address)),
        RecordData::PTR(target) => RData::PTR(PTR(to_name(target)?)),
        RecordData::CNAME(target) => RData::CNAME(CNAME(to_name(target)?)),
        RecordData::NS(target) => RData::NS(NS(to_name(target)?)),
        RecordData::SRV(srv) => RData::SRV(SRV::new(
            srv.priority,
            srv.weight,
            srv.port,
            to_name(&srv.target)?,
        )),
        RecordData::TXT(entries) => {
            RData::TXT(TXT::from_bytes(entries.iter().map(Vec::as_slice).collect()))
        }
        RecordData::Unknown { record_type, data } => {
            if let Some(named) = record.data.shadowed_type() {
                return Err(DomainError::EncodeFailed(format!(
                    "'{}': opaque payload for {} record",
                    record.name, named
                )));
            }
            let rdata = if data.is_empty() {
                NULL::new()
            } else {
                NULL::with(data.clone())
            };
            RData::Unknown {
                code: HRT::from(*record_type),
                rdata,
            }
        }
    };

    Ok(HickoryRecord::from_rdata(
        to_name(&record.name)?,
        record.ttl,
        rdata,
    ))
}

fn from_hickory_record(record: &HickoryRecord) -> Record {
    let data = match record.data() {
        RData::A(a) => RecordData::A(a.0),
        RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
        RData::PTR(ptr) => RecordData::PTR(name_to_string(&ptr.0)),
        RData::CNAME(cname) => RecordData::CNAME(name_to_string(&cname.0)),
        RData::NS(ns) => RecordData::NS(name_to_string(&ns.0)),
        RData::SRV(srv) => RecordData::SRV(SrvData {
            priority: srv.priority(),
            weight: srv.weight(),
            port: srv.port(),
            target: name_to_string(srv.target()),
        }),
        RData::TXT(txt) => RecordData::TXT(txt.txt_data().iter().map(|e| e.to_vec()).collect()),
        RData::Unknown { code, rdata } => RecordData::Unknown {
            record_type: u16::from(*code),
            data: rdata.anything().to_vec(),
        },
        other => RecordData::Unknown {
            record_type: u16::from(other.record_type()),
            data: other.to_bytes().unwrap_or_default(),
        },
    };

    Record::new(name_to_string(record.name()), record.ttl(), data)
}
