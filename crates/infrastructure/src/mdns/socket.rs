use ferrous_mdns_domain::config::ServerConfig;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::debug;

/// Builds the responder's UDP socket.
///
/// In multicast mode the socket shares the port with other responders on the
/// host and joins the configured group. Otherwise it is a plain unicast socket.
pub fn create_socket(config: &ServerConfig) -> io::Result<std::net::UdpSocket> {
    let bind_addr = config.bind_socket_addr();
    let domain = match bind_addr {
        SocketAddr::V4(_) => Domain::IPV4,
        SocketAddr::V6(_) => Domain::IPV6,
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

    if config.multicast {
        socket.set_reuse_address(true)?;
        #[cfg(unix)]
        socket.set_reuse_port(true)?;
        join_group(&socket, config)?;
    }

    socket.bind(&bind_addr.into())?;
    socket.set_nonblocking(true)?;

    debug!(
        bind_address = %bind_addr,
        multicast = config.multicast,
        group = %config.multicast_address,
        "mDNS socket ready"
    );

    Ok(socket.into())
}

fn join_group(socket: &Socket, config: &ServerConfig) -> io::Result<()> {
    match (config.multicast_address, config.bind_address) {
        (IpAddr::V4(group), IpAddr::V4(_)) => {
            let interface = config.interface.unwrap_or(Ipv4Addr::UNSPECIFIED);
            socket.join_multicast_v4(&group, &interface)?;
            if let Some(interface) = config.interface {
                socket.set_multicast_if_v4(&interface)?;
            }
            socket.set_multicast_ttl_v4(config.multicast_ttl)?;
            socket.set_multicast_loop_v4(config.multicast_loop)?;
        }
        (IpAddr::V6(group), IpAddr::V6(_)) => {
            socket.set_only_v6(true)?;
            socket.join_multicast_v6(&group, config.interface_index)?;
            socket.set_multicast_if_v6(config.interface_index)?;
            socket.set_multicast_hops_v6(config.multicast_ttl)?;
            socket.set_multicast_loop_v6(config.multicast_loop)?;
        }
        (group, bind) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "multicast group {} and bind address {} are different families",
                    group, bind
                ),
            ));
        }
    }
    Ok(())
}
