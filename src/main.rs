//! sccs: desktop dashboard for the HKDC/SGDC stablecoin FX demo.
//!
//! Run with:  `RUST_LOG=info sccs`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("sccs v{} starting", env!("CARGO_PKG_VERSION"));

    sccs_app::run().map_err(Into::into)
}
