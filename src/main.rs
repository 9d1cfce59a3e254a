use color_eyre::eyre::Result;
use tgmbk::{config, setup_app, setup_tracing, shutdown_signal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    setup_tracing()?;
    setup_server().await?;
    opentelemetry::global::shutdown_tracer_provider();
    Ok(())
}

async fn setup_server() -> Result<()> {
    let settings = config::new_config()?;
    let addr = settings.base.address();
    info!(%addr, "Will use socket address");

    let app = setup_app(&settings)?;

    info!("Listening for updates");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
