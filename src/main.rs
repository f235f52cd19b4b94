use std::net::SocketAddr;
use std::sync::Arc;
use flickr_gallery::flickr::{ReqwestTransport, SearchService};
use flickr_gallery::utils::config::Config;
use flickr_gallery::utils::logging;
use flickr_gallery::AppState;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();
    let cfg = Config::from_env();
    let _log_guard = logging::init(cfg.log_dir.as_deref())?;

    let transport = Arc::new(ReqwestTransport::new()?);
    let service = match SearchService::new(cfg.flickr.clone(), transport) {
        Ok(service) => service,
        Err(e) => {
            error!("{}. Set FLICKR_API_KEY and FLICKR_API_SECRET in the environment or .env file.", e);
            return Err(e.into());
        }
    };
    info!(endpoint = %cfg.flickr.endpoint(), static_dir = %cfg.static_dir.display(), log_dir = ?cfg.log_dir, "photo search configured");

    let port = cfg.port;
    let state = Arc::new(AppState::new(cfg, Arc::new(service)));
    let app = flickr_gallery::api::routes::router(state);
    let addr = SocketAddr::from(([0,0,0,0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening" = %addr);
    axum::serve(listener, app).await?;
    Ok(())
}
