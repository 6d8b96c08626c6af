#![allow(dead_code)]

use ferrous_mdns_domain::{Config, Record};
use ferrous_mdns_infrastructure::mdns::MdnsCodec;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

pub const SERVICE_TYPE: &str = "_http._tcp.local";
pub const INSTANCE: &str = "Web Server._http._tcp.local";
pub const HOST: &str = "host.local";

pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);
pub const SILENCE_TIMEOUT: Duration = Duration::from_millis(300);

pub fn host_a() -> Record {
    Record::a(HOST, Ipv4Addr::new(192, 168, 1, 10))
}

pub fn host_aaaa() -> Record {
    Record::aaaa(HOST, Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0x10))
}

pub fn service_records() -> Vec<Record> {
    vec![
        Record::ptr(SERVICE_TYPE, INSTANCE),
        Record::srv(INSTANCE, HOST, 8080),
        Record::txt(INSTANCE, ["path=/", "version=2"]),
        host_a(),
        host_aaaa(),
    ]
}

pub fn source() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50)), 5353)
}

/// Unicast loopback config that answers straight back to `client`.
pub fn loopback_config(client: SocketAddr, records: Vec<Record>) -> Config {
    let mut config = Config::default();
    config.server.bind_address = IpAddr::V4(Ipv4Addr::LOCALHOST);
    config.server.port = 0;
    config.server.multicast = false;
    config.server.response_address = Some(client);
    config.records = records;
    config
}

pub async fn client_socket() -> UdpSocket {
    UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap()
}

pub async fn recv_packet(socket: &UdpSocket, timeout: Duration) -> Option<Vec<u8>> {
    let mut buf = vec![0u8; 9000];
    match tokio::time::timeout(timeout, socket.recv_from(&mut buf)).await {
        Ok(Ok((len, _))) => {
            buf.truncate(len);
            Some(buf)
        }
        _ => None,
    }
}

pub async fn recv_response(socket: &UdpSocket) -> Option<ferrous_mdns_domain::MdnsResponse> {
    let packet = recv_packet(socket, RECV_TIMEOUT).await?;
    MdnsCodec::decode_response(&packet).unwrap()
}
