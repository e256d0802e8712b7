pub mod config;
pub mod host_id;
pub mod prober;
pub mod reporter;
pub mod scheduler;
pub mod source;
pub mod util;

/// Installs the stderr subscriber. stdout carries only results.
pub fn init_tracing(level: tracing::Level) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                format!("find_gateway={}", level.as_str().to_lowercase()).parse()?,
            ),
        )
        .init();
    Ok(())
}
