use crate::Result;

/// Initialize logging/tracing for a binary embedding the codec.
///
/// A no-op unless the `tracing` feature is enabled; the signature stays the
/// same either way.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for our crates, warn for everything else.
        // Can be overridden with `RUST_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("warn,tgapi=info,tgapi_core=info,{service_name}=info"))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| crate::Error::Config(format!("tracing init failed: {e}")))?;
    }

    Ok(())
}
