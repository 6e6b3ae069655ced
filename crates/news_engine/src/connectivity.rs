use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use news_logging::news_debug;

/// Synchronous network precondition checked before a fetch is started.
pub trait Connectivity: Send + Sync {
    fn is_connected(&self) -> bool;
}

/// Reports connectivity by opening (and immediately closing) a TCP connection.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe for the Guardian content API over HTTPS.
    pub fn guardian() -> Self {
        Self::new("content.guardianapis.com", 443, Duration::from_secs(3))
    }
}

impl Connectivity for TcpProbe {
    fn is_connected(&self) -> bool {
        let addrs = match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(err) => {
                news_debug!("Connectivity probe could not resolve {}: {}", self.host, err);
                return false;
            }
        };

        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => return true,
                Err(err) => news_debug!("Connectivity probe to {} failed: {}", addr, err),
            }
        }
        false
    }
}
