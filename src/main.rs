//! # Members Club Server
//!
//! Visitors register with an email and password, log in, and see a profile
//! page that only exists while they are logged in.
//!
//! ## Key Concepts
//! - **User Directory**: registered accounts, with Argon2id password hashes
//! - **Session Gate**: a session is either anonymous or holds the id of a
//!   verified account; only the latter may see `/perfil`
//! - **Volatile state**: accounts and sessions live in process memory, so
//!   restarting the server forgets both

// Module declarations
mod app;        // Router assembly (routes + session and trace layers)
mod auth;       // User directory: registration, credential checks, hashing
mod config;     // Configuration from environment variables
mod db;         // Account model and storage abstraction
mod error;      // Error taxonomy and HTTP conversion
mod handlers;   // HTTP request handlers (routes)
mod middleware; // Session gate for protected routes
mod session;    // Session states and login/logout transitions
mod state;      // Shared application state

use crate::config::Config;
use crate::state::AppState;
// Structured logging setup
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// This function:
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Creates the shared state (an empty in-memory user directory)
/// 4. Builds the router with its session and tracing layers
/// 5. Starts the HTTP server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info for dependencies, debug for this crate and request traces.
    // RUST_LOG overrides, e.g. RUST_LOG=warn
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,members_club=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Host, port and session cookie settings; a malformed value stops startup
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // Every handler gets a clone of this state; the account store behind it
    // is shared, so all requests see the same directory
    let app_state = AppState::in_memory();
    let app = app::build_router(app_state, &config);

    // Bind to the configured address (default: 127.0.0.1:3000)
    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Members Club listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
