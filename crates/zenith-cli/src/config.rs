//! Server configuration
//!
//! Values come from flags, then `ZENITH_*` environment variables (a `.env`
//! file is loaded first), then defaults.

use std::net::SocketAddr;

use clap::Args;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "ZENITH_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}
