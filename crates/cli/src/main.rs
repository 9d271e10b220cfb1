use clap::Parser;
use pokedex_api::{AppState, PokedexState};
use pokedex_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version)]
#[command(about = "Pokedex - CRUD catalog service backed by SQLite")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
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
        web_port: cli.port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Pokedex v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database_url(), &config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&repos);

    let app_state = AppState {
        pokedex: PokedexState {
            create_pokemon: use_cases.create_pokemon,
            get_pokemon: use_cases.get_pokemon,
            update_pokemon: use_cases.update_pokemon,
            delete_pokemon: use_cases.delete_pokemon,
        },
    };

    let web_addr: SocketAddr = config.web_address().parse().map_err(|e| {
        anyhow::anyhow!("Invalid bind address '{}': {}", config.web_address(), e)
    })?;

    server::start_web_server(web_addr, app_state).await?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}
