//! menu-audit: fetch menu records, classify every menu tree, print and persist the report.
//!
//! Usage:
//!   menu-audit --challenge-id 2 --output output.json
//!   menu-audit --input nodes.json --max-depth 4
//!   RUST_LOG=menu_audit=debug menu-audit

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use menu_audit::config::AuditConfig;
use menu_audit::model::{MenuIndex, MenuNode, parse_nodes};
use menu_audit::report::{to_json_pretty, write_report};
use menu_audit::repository::{HttpPageSource, MenuRepository};
use menu_audit::validate::validate_forest;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = AuditConfig::parse();

    let nodes = load_nodes(&config).await?;
    info!(records = nodes.len(), "menu records loaded");

    let index = MenuIndex::build(&nodes);
    let audit = validate_forest(&index, config.validator_options());
    info!(
        valid = audit.valid.len(),
        invalid = audit.invalid.len(),
        "menu trees classified"
    );

    let report = audit.to_report();
    println!("{}", to_json_pretty(&report)?);
    write_report(&report, &config.output)
        .with_context(|| format!("Failed to persist report to {}", config.output.display()))?;

    Ok(())
}

async fn load_nodes(config: &AuditConfig) -> Result<Vec<MenuNode>> {
    if let Some(path) = &config.input {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return parse_nodes(&json)
            .with_context(|| format!("Invalid node file {}", path.display()));
    }

    let source = HttpPageSource::new(&config.endpoint, config.challenge_id, config.timeout())
        .context("Failed to create HTTP client")?;
    MenuRepository::new(source)
        .fetch_all()
        .await
        .with_context(|| format!("Failed to fetch menus from {}", config.endpoint))
}
