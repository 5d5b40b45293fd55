use mcp_netbox_server::config::ServerConfig;
use mcp_netbox_server::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-netbox-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::serve(config).await {
        eprintln!("mcp-netbox-server: fatal error: {e}");
        std::process::exit(1);
    }
}
