use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const MDNS_PORT: u16 = 5353;
pub const MDNS_IPV4_GROUP: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_multicast_address")]
    pub multicast_address: IpAddr,

    /// IPv4 interface used for the group join. Unspecified lets the OS pick.
    #[serde(default)]
    pub interface: Option<Ipv4Addr>,

    /// IPv6 interface index used for the group join.
    #[serde(default)]
    pub interface_index: u32,

    /// When false the socket is a plain unicast socket and no group is joined.
    #[serde(default = "default_true")]
    pub multicast: bool,

    #[serde(default = "default_multicast_ttl")]
    pub multicast_ttl: u32,

    #[serde(default = "default_true")]
    pub multicast_loop: bool,

    /// Where responses go. Defaults to the multicast group on `port`.
    #[serde(default)]
    pub response_address: Option<SocketAddr>,

    #[serde(default = "default_max_packet_size")]
    pub max_packet_size: usize,
}

impl ServerConfig {
    pub fn bind_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn response_destination(&self) -> SocketAddr {
        self.response_address
            .unwrap_or_else(|| SocketAddr::new(self.multicast_address, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            multicast_address: default_multicast_address(),
            interface: None,
            interface_index: 0,
            multicast: true,
            multicast_ttl: default_multicast_ttl(),
            multicast_loop: true,
            response_address: None,
            max_packet_size: default_max_packet_size(),
        }
    }
}

fn default_bind_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    MDNS_PORT
}

fn default_multicast_address() -> IpAddr {
    IpAddr::V4(MDNS_IPV4_GROUP)
}

fn default_multicast_ttl() -> u32 {
    255
}

fn default_max_packet_size() -> usize {
    9000
}

fn default_true() -> bool {
    true
}
