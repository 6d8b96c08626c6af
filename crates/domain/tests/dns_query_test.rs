use ferrous_mdns_domain::{
    AddressFamily, MdnsResponse, Query, QueryType, Question, Record, RecordType, RemoteInfo,
};
use std::net::{Ipv4Addr, SocketAddr};

#[test]
fn test_question_constructors() {
    let typed = Question::new("host.local", RecordType::A);
    let any = Question::any("host.local");

    assert_eq!(typed.query_type, QueryType::Type(RecordType::A));
    assert_eq!(any.query_type, QueryType::Any);
}

#[test]
fn test_query_single_and_empty() {
    assert!(Query::default().is_empty());
    assert_eq!(Query::single(Question::any("x")).questions.len(), 1);
}

#[test]
fn test_remote_info_from_ipv4_source() {
    let source: SocketAddr = "192.168.1.50:5353".parse().unwrap();

    let remote = RemoteInfo::new(source, 42);

    assert_eq!(remote.family, AddressFamily::IPv4);
    assert_eq!(remote.port, 5353);
    assert_eq!(remote.size, 42);
    assert_eq!(remote.socket_addr(), source);
}

#[test]
fn test_remote_info_from_ipv6_source() {
    let source: SocketAddr = "[fe80::1]:5353".parse().unwrap();

    let remote = RemoteInfo::new(source, 12);

    assert_eq!(remote.family, AddressFamily::IPv6);
    assert_eq!(remote.family.to_string(), "IPv6");
}

#[test]
fn test_response_equality_covers_both_sections() {
    let a = Record::a("host.local", Ipv4Addr::new(10, 0, 0, 1));

    assert_eq!(
        MdnsResponse::new(vec![a.clone()], vec![]),
        MdnsResponse::new(vec![a.clone()], vec![])
    );
    assert_ne!(
        MdnsResponse::new(vec![a.clone()], vec![]),
        MdnsResponse::new(vec![], vec![a.clone()])
    );
    assert!(MdnsResponse::new(vec![a], vec![]).has_answers());
    assert!(!MdnsResponse::default().has_answers());
}
