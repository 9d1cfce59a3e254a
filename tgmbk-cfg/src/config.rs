use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// IANA name of the zone "today" is computed in.
    pub timezone: String,
    /// Base URL of the Bot API, without the `/bot<token>` part.
    pub api_url: String,
}

impl Config {
    #[must_use]
    pub const fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            timezone: "Asia/Hong_Kong".to_string(),
            api_url: "https://api.telegram.org".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address() {
        let cfg = Config::default();
        assert_eq!(cfg.address().to_string(), "0.0.0.0:8080");
    }
}
