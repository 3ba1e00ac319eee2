//! `agrocarbon` -- command-line client for the carbon-credit platform.
//!
//! Runs the carbon footprint calculator and the signup credit estimate
//! locally, and talks to the platform backend for sign-in and carbon
//! record storage.
//!
//! # Environment variables
//!
//! | Variable                  | Required           | Default                        |
//! |---------------------------|--------------------|--------------------------------|
//! | `AGROCARBON_API_URL`      | no                 | `http://localhost:3001/api/v1` |
//! | `AGROCARBON_TIMEOUT_SECS` | no                 | `30`                           |
//! | `AGROCARBON_TOKEN`        | for authed commands| --                             |
//! | `RUST_LOG`                | no                 | `agrocarbon=info`              |

mod commands;
mod render;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrocarbon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = commands::Cli::parse();
    commands::run(cli).await
}
