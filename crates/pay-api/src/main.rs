//! # Checkout Gateway
//!
//! Payment checkout gateway dispatching to pluggable providers.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: pick the default provider (defaults to "stripe")
//! export PAYMENT_DEFAULT=paypal
//!
//! # Run the server
//! checkout-gateway
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Discover providers and load configuration
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment providers: {:?}", state.registry.ids());
    info!("Default provider: {}", state.config.default_provider);

    let app = routes::create_router(state);

    info!("Checkout gateway starting on http://{}", addr);

    if !is_prod {
        info!("Providers: GET http://{}/api/providers", addr);
        info!("Checkout: POST http://{}/api/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Checkout Gateway
  ━━━━━━━━━━━━━━━━━━━━━━━
  Pluggable payment providers
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
