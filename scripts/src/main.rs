//! Provisioning commands for the echo bot deployment

pub mod action;
pub mod config;
pub mod utils;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = action::AppArgs::parse();

    args.run().await
}
