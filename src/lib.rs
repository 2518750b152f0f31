pub mod config;
pub mod database;
pub mod domain;
pub mod features;
pub mod io;

#[cfg(test)]
mod tests;

/// Installs the fmt subscriber shared by both binaries. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
