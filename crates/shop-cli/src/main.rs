//! # storefront
//!
//! Console storefront with a simulated checkout flow.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a catalog file (falls back to the demo catalog)
//! export STOREFRONT_CATALOG=config/catalog.toml
//!
//! storefront
//! ```

use shop_cli::{load_catalog, CliConfig, Prompter, Session};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging; default to warn so menus stay readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = CliConfig::from_args();
    let catalog = load_catalog(&config)?;

    info!("Catalog ready: {} products", catalog.len());

    print_banner();

    let mut session = Session::new(catalog);
    let mut prompter = Prompter::stdio();
    session.run(&mut prompter)?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🛒 Storefront RS 🛒
  ━━━━━━━━━━━━━━━━━━━
  Simulated checkout, real Rust
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
