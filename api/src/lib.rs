use std::sync::Arc;

use abi::config::Config;
use abi::errors::Error;
use db::DbRepo;
use service::{FilmService, UserService};

mod api_utils;
pub(crate) mod handlers;
mod routes;

pub use routes::app_routes;

#[derive(Clone)]
pub struct AppState {
    pub film: FilmService,
    pub user: UserService,
    pub db: Arc<DbRepo>,
}

impl AppState {
    pub fn new(db: Arc<DbRepo>) -> Self {
        Self {
            film: FilmService::new(db.clone()),
            user: UserService::new(db.clone()),
            db,
        }
    }
}

pub async fn start(config: Config) -> Result<(), Error> {
    let db = Arc::new(DbRepo::new(&config).await?);
    let state = AppState::new(db);
    let app = routes::app_routes(state);

    let listener = tokio::net::TcpListener::bind(config.server.server_url()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
