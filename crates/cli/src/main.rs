use clap::Parser;
use flipdns_api::AppState;
use flipdns_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "flipdns")]
#[command(version)]
#[command(about = "flipdns - authoritative DNS responder for static A records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path (records stay in memory when unset)
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting flipdns v{}", env!("CARGO_PKG_VERSION"));

    let store = di::build_record_store(&config).await?;
    let dns_services = di::DnsServices::new(&config, store.clone());

    let app_state = AppState {
        store,
        metrics: dns_services.metrics.clone(),
    };

    // bind errors are fatal and surface here
    let dispatcher = server::bind_dns_server(&config, dns_services.handler)?;
    let dns_task = tokio::spawn(dispatcher.run());

    let web_task = if config.server.web_enabled {
        let web_addr: SocketAddr = config.server.web_addr().parse()?;
        Some(tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, app_state).await {
                error!(error = %e, "Web server error");
            }
        }))
    } else {
        info!("Web server disabled");
        None
    };

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    dns_task.abort();
    if let Some(task) = web_task {
        task.abort();
    }

    info!("Server shutdown complete");
    Ok(())
}
