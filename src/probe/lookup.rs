//! Host lookups sent straight to one DNS server.
//!
//! Asks for `A` and `AAAA` concurrently over a connected UDP socket and
//! retries a truncated answer over TCP. The lookup succeeds when either query
//! returns an address.

// Standard library
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use futures::future::join;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RData, RecordType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::Instant;
use tracing::{debug, trace};

// Current module imports
use super::constants::MAX_UDP_RESPONSE_SIZE;
use super::errors::LookupError;
use super::traits::HostLookup;

/// Production [`HostLookup`] speaking the DNS wire protocol
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsLookup;

impl DnsLookup {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostLookup for DnsLookup {
    async fn lookup_host(
        &self,
        server: SocketAddr,
        name: &str,
        timeout: Duration,
    ) -> Result<Vec<IpAddr>, LookupError> {
        let fqdn = fqdn(name)?;

        // One deadline for both queries, each one gives up on its own
        let deadline = Instant::now() + timeout;
        let (v4, v6) = join(
            resolve_until(deadline, timeout, server, &fqdn, RecordType::A),
            resolve_until(deadline, timeout, server, &fqdn, RecordType::AAAA),
        )
        .await;

        merge(v4, v6)
    }
}

fn fqdn(name: &str) -> Result<Name, LookupError> {
    let mut fqdn = Name::from_utf8(name).map_err(|error| LookupError::InvalidName {
        name: name.to_string(),
        error,
    })?;
    fqdn.set_fqdn(true);
    Ok(fqdn)
}

/// Either family answering is enough. With both failing the `A` error wins.
fn merge(
    v4: Result<Vec<IpAddr>, LookupError>,
    v6: Result<Vec<IpAddr>, LookupError>,
) -> Result<Vec<IpAddr>, LookupError> {
    match (v4, v6) {
        (Ok(mut v4), Ok(v6)) => {
            v4.extend(v6);
            Ok(v4)
        }
        (Ok(addrs), Err(e)) | (Err(e), Ok(addrs)) => {
            trace!("Ignoring partial lookup failure: {}", e);
            Ok(addrs)
        }
        (Err(e), Err(_)) => Err(e),
    }
}

async fn resolve_until(
    deadline: Instant,
    timeout: Duration,
    server: SocketAddr,
    name: &Name,
    record_type: RecordType,
) -> Result<Vec<IpAddr>, LookupError> {
    match tokio::time::timeout_at(deadline, resolve(server, name, record_type)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout {
            name: name.to_string(),
            server,
            timeout,
        }),
    }
}

async fn resolve(
    server: SocketAddr,
    name: &Name,
    record_type: RecordType,
) -> Result<Vec<IpAddr>, LookupError> {
    let id: u16 = rand::random();

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name.clone(), record_type));

    let query = message.to_vec().map_err(|error| LookupError::Encode {
        name: name.to_string(),
        error,
    })?;

    let mut response = query_udp(server, id, &query).await?;
    if response.truncated() {
        debug!(
            "Truncated {} answer for {} from {}, retrying over TCP",
            record_type, name, server
        );
        response = query_tcp(server, id, &query).await?;
    }

    addresses(&response, name, server)
}

fn addresses(
    response: &Message,
    name: &Name,
    server: SocketAddr,
) -> Result<Vec<IpAddr>, LookupError> {
    match response.response_code() {
        ResponseCode::NoError => {}
        ResponseCode::NXDomain => {
            return Err(LookupError::NxDomain {
                name: name.to_string(),
                server,
            })
        }
        code => {
            return Err(LookupError::ResponseCode {
                name: name.to_string(),
                server,
                code,
            })
        }
    }

    let addrs: Vec<IpAddr> = response
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
            _ => None,
        })
        .collect();

    if addrs.is_empty() {
        return Err(LookupError::NoAddresses {
            name: name.to_string(),
            server,
        });
    }

    Ok(addrs)
}

fn network(server: SocketAddr) -> impl Fn(std::io::Error) -> LookupError {
    move |error| LookupError::Network { server, error }
}

/// Decodes an answer to query `id`, anything else is skipped
fn decode(server: SocketAddr, id: u16, bytes: &[u8]) -> Option<Message> {
    match Message::from_vec(bytes) {
        Ok(response) if response.id() == id => Some(response),
        Ok(response) => {
            debug!("Dropping response with unexpected id {} from {}", response.id(), server);
            None
        }
        Err(e) => {
            debug!("Dropping malformed response from {}: {}", server, e);
            None
        }
    }
}

async fn query_udp(server: SocketAddr, id: u16, query: &[u8]) -> Result<Message, LookupError> {
    let bind_addr = if server.is_ipv6() {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    };

    // Connected so ICMP port unreachable surfaces as a refused error
    let socket = UdpSocket::bind(bind_addr).await.map_err(network(server))?;
    socket.connect(server).await.map_err(network(server))?;
    socket.send(query).await.map_err(network(server))?;

    let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
    loop {
        let len = socket.recv(&mut buf).await.map_err(network(server))?;
        if let Some(response) = decode(server, id, &buf[..len]) {
            return Ok(response);
        }
    }
}

async fn query_tcp(server: SocketAddr, id: u16, query: &[u8]) -> Result<Message, LookupError> {
    let mut stream = TcpStream::connect(server).await.map_err(network(server))?;

    let len = query.len() as u16;
    let mut msg = Vec::with_capacity(2 + query.len());
    msg.extend_from_slice(&len.to_be_bytes());
    msg.extend_from_slice(query);
    stream.write_all(&msg).await.map_err(network(server))?;

    loop {
        let len = stream.read_u16().await.map_err(network(server))? as usize;
        let mut buf = vec![0u8; len];
        stream
            .read_exact(&mut buf)
            .await
            .map_err(network(server))?;

        if let Some(response) = decode(server, id, &buf) {
            return Ok(response);
        }
    }
}
