use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration; every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ubigeo-server",
    version,
    about = "HTTP API for the Peru UBIGEO database"
)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "UBIGEO_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Dataset: CSV source, `.bin` snapshot or artifact directory
    /// (default: the sample bundled with ubigeo-core)
    #[arg(long, env = "UBIGEO_DATA")]
    pub data: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log: String,
}
