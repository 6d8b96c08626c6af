use ferrous_mdns_domain::{
    Query, QueryEvent, QueryType, Question, Record, RecordType, RemoteInfo,
};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

pub const SERVICE_TYPE: &str = "_http._tcp.local";
pub const INSTANCE: &str = "Inst._http._tcp.local";
pub const HOST: &str = "host.local";

pub fn host_a() -> Record {
    Record::a(HOST, Ipv4Addr::new(192, 168, 1, 10))
}

pub fn host_aaaa() -> Record {
    Record::aaaa(HOST, Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0x10))
}

pub fn service_ptr() -> Record {
    Record::ptr(SERVICE_TYPE, INSTANCE)
}

pub fn instance_srv() -> Record {
    Record::srv(INSTANCE, HOST, 80)
}

pub fn instance_txt() -> Record {
    Record::txt(INSTANCE, ["path=/"])
}

/// PTR, SRV, TXT, A and AAAA for one HTTP service instance.
pub fn http_service_records() -> Vec<Record> {
    vec![
        service_ptr(),
        instance_srv(),
        instance_txt(),
        host_a(),
        host_aaaa(),
    ]
}

pub fn remote() -> RemoteInfo {
    RemoteInfo::new(SocketAddr::from(([192, 168, 1, 50], 5353)), 64)
}

pub fn query_event(questions: Vec<Question>) -> QueryEvent {
    QueryEvent::new(Query::new(questions), remote())
}

pub fn question(name: &str, record_type: RecordType) -> Question {
    Question::new(name, record_type)
}

pub fn any_question(name: &str) -> Question {
    Question::new(name, QueryType::Any)
}
