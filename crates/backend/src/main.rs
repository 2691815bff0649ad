pub mod routes;
pub mod shared;
pub mod system;

use anyhow::Context;
use contracts::shared::store::RecordStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config().context("failed to load config.toml")?;

    // Фикстуры вшиты в contracts: битые данные должны остановить запуск
    let store = RecordStore::load_embedded().context("embedded fixtures are invalid")?;
    tracing::info!(
        "Fixtures OK: {} users, {} candidates, {} clients, {} positions",
        store.users.len(),
        store.candidates.len(),
        store.clients.len(),
        store.positions.len()
    );

    let dist_dir = config.static_files.resolve_dist_dir();
    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}, run `trunk build` first",
            dist_dir.display()
        );
    }
    tracing::info!("Serving static files from {}", dist_dir.display());

    let app = routes::configure_routes(&dist_dir);

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
