use clap::{arg, command};
use tracing::error;
use tracing_subscriber::EnvFilter;

use abi::config::Config;

#[tokio::main]
async fn main() {
    // init tracing
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = command!()
        .arg(
            arg!(-c --config <FILE> "path to the yaml config file")
                .default_value("./abi/fixtures/cinemate.yml"),
        )
        .get_matches();
    let path = matches.get_one::<String>("config").unwrap();

    let config = Config::load(path).unwrap();
    if let Err(e) = api::start(config).await {
        error!("server exited: {}", e);
    }
}
