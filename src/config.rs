use std::net::SocketAddr;
use std::time::Duration;

/// Default listen address for the streamable HTTP transport.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default idle timeout before a session is swept (5 minutes).
const DEFAULT_SESSION_IDLE_SECS: u64 = 300;

/// Server configuration loaded from environment variables. Loaded once at
/// startup and passed explicitly; immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub netbox_url: String,
    /// May be empty: the server starts, `/health` reports it, and every
    /// `tools/call` returns a "token not configured" error.
    pub netbox_token: String,
    pub listen_addr: SocketAddr,
    pub session_idle_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `NETBOX_URL` (required) — base URL of the NetBox instance
    /// - `NETBOX_TOKEN` (optional) — API token forwarded as a bearer credential
    /// - `MCP_LISTEN_ADDR` (optional, default 0.0.0.0:8080)
    /// - `MCP_SESSION_IDLE_SECS` (optional, default 300) — idle session timeout
    pub fn from_env() -> Result<Self, String> {
        let netbox_url = std::env::var("NETBOX_URL")
            .map_err(|_| "NETBOX_URL environment variable is not set".to_string())?;

        let netbox_token = std::env::var("NETBOX_TOKEN").unwrap_or_default();

        let listen_addr = std::env::var("MCP_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| "MCP_LISTEN_ADDR must be a host:port address".to_string())?;

        let idle_secs = match std::env::var("MCP_SESSION_IDLE_SECS") {
            Ok(val) => val
                .parse::<u64>()
                .map_err(|_| "MCP_SESSION_IDLE_SECS must be a positive integer".to_string())?,
            Err(_) => DEFAULT_SESSION_IDLE_SECS,
        };

        Ok(Self {
            netbox_url,
            netbox_token,
            listen_addr,
            session_idle_timeout: Duration::from_secs(idle_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so concurrent tests never race on process environment.
    #[test]
    fn environment_loading() {
        std::env::remove_var("NETBOX_URL");
        std::env::remove_var("NETBOX_TOKEN");
        std::env::remove_var("MCP_LISTEN_ADDR");
        std::env::remove_var("MCP_SESSION_IDLE_SECS");

        assert!(ServerConfig::from_env().is_err());

        std::env::set_var("NETBOX_URL", "https://netbox.example.com");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.netbox_url, "https://netbox.example.com");
        assert!(config.netbox_token.is_empty());
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(300));

        std::env::set_var("NETBOX_TOKEN", "abc123");
        std::env::set_var("MCP_LISTEN_ADDR", "127.0.0.1:9100");
        std::env::set_var("MCP_SESSION_IDLE_SECS", "60");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.netbox_token, "abc123");
        assert_eq!(config.listen_addr.port(), 9100);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(60));

        std::env::set_var("MCP_SESSION_IDLE_SECS", "soon");
        assert!(ServerConfig::from_env().is_err());
        std::env::remove_var("MCP_SESSION_IDLE_SECS");
        std::env::remove_var("MCP_LISTEN_ADDR");
        std::env::remove_var("NETBOX_TOKEN");
        std::env::remove_var("NETBOX_URL");
    }
}
