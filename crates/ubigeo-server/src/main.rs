//! ubigeo-server — serves the UBIGEO database over HTTP.
//!
//! ```text
//! ubigeo-server --bind 0.0.0.0:3000 --data /srv/ubigeo
//! UBIGEO_DATA=/srv/ubigeo/ubigeo.bin ubigeo-server
//! ```
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use ubigeo_core::prelude::*;
use ubigeo_server::{router, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .init();

    let data = args.data.clone().unwrap_or_else(|| {
        UbigeoDb::default_data_dir().join(UbigeoDb::default_dataset_filename())
    });

    // Load once; nothing is served until this completes.
    let db = UbigeoDb::load_from_path(&data)
        .with_context(|| format!("loading {}", data.display()))?;
    let stats = db.stats();
    tracing::info!(
        data = %data.display(),
        departments = stats.departments,
        provinces = stats.provinces,
        districts = stats.districts,
        "database loaded"
    );

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    tracing::info!("listening on {}", args.bind);

    axum::serve(listener, router(Arc::new(db)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
