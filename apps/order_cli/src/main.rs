use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::OrderClient;
use order_form::{FormEvent, FormView, OrderFormController, SubmissionOutcome};
use shared::error::FormField;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod bridge;
mod commands;
mod config;
mod session;

use config::{load_settings, validate_endpoint, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "order_cli", about = "Order a pizza from the terminal")]
struct Cli {
    /// Order intake URL; overrides config file and environment.
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the form from flags and place the order once.
    Submit {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        size: String,
        /// Topping id 1-5; repeat for several.
        #[arg(long = "topping")]
        toppings: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config)?;
    if let Some(endpoint) = cli.endpoint {
        settings.order_endpoint = endpoint;
    }
    let directive = log_directive(
        cli.verbose,
        std::env::var("RUST_LOG").ok(),
        &settings.log_filter,
    );
    init_tracing(&directive);

    let endpoint = validate_endpoint(&settings.order_endpoint)?;
    tracing::info!(%endpoint, "order intake configured");
    let client = OrderClient::new(endpoint.as_str());

    match cli.command {
        None => {
            let input = BufReader::new(tokio::io::stdin());
            session::run(Arc::new(client), input).await?;
            Ok(())
        }
        Some(Command::Submit {
            full_name,
            size,
            toppings,
        }) => submit_once(&client, full_name, size, &toppings).await,
    }
}

/// `--verbose` beats `RUST_LOG`, which beats the configured filter.
fn log_directive(verbose: bool, rust_log: Option<String>, configured: &str) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn submit_once(
    client: &OrderClient,
    full_name: String,
    size: String,
    toppings: &[String],
) -> Result<()> {
    let mut form = OrderFormController::new();
    form.apply(FormEvent::FieldChanged {
        field: FormField::FullName,
        value: full_name,
    });
    form.apply(FormEvent::FieldChanged {
        field: FormField::Size,
        value: size,
    });
    for id in toppings {
        form.apply(FormEvent::topping_toggled(id, true)?);
    }

    if !form.submit(client).await {
        println!("{}", FormView::new(&form));
        bail!("order form is not valid");
    }
    println!("{}", FormView::new(&form));

    match form.outcome() {
        SubmissionOutcome::Failure(message) => bail!("order failed: {message}"),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::log_directive;

    #[test]
    fn verbose_flag_overrides_rust_log() {
        assert_eq!(log_directive(true, Some("warn".to_string()), "info"), "debug");
    }

    #[test]
    fn rust_log_overrides_configured_filter() {
        assert_eq!(log_directive(false, Some("warn".to_string()), "info"), "warn");
        assert_eq!(log_directive(false, Some("  ".to_string()), "error"), "error");
        assert_eq!(log_directive(false, None, "error"), "error");
    }
}
