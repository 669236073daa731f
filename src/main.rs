use clap::Parser;
use timelog_ws::{
    app::App,
    clock::SystemClock,
    init::{logging::init_tracing, settings::Settings, setup::setup_database},
    store::MySqlStore,
    SharedState,
};

/// Time log webserver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Server address
    #[arg(short, long)]
    address: Option<String>,
    /// HTTP port
    #[arg(short, long)]
    port_http: Option<u16>,
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = Settings::new(args.config_file, args.address, args.port_http)?;
    init_tracing(&settings.log_level);
    settings.print();

    let clock = SystemClock::new(&settings.timezone).inspect_err(|e| {
        tracing::error!("Failed to load timezone: {}", e);
    })?;

    let db = setup_database(&settings).await.inspect_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
    })?;

    let app = App::new(SharedState::new(MySqlStore::new(db), clock));

    if let Err(e) = app.serve(&settings.bind_address()).await {
        tracing::error!("Server exited with error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
