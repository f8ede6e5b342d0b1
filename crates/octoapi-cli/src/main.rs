//! octo CLI - Main entry point

use clap::Parser;
use octoapi_cli::{logging, Cli, Commands, OrgCommand};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging (ignore errors as the CLI should work without it)
    let _ = logging::init(cli.verbose);

    // Execute command
    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Org { command } => match command {
            OrgCommand::List { user, page, format } => {
                octoapi_cli::commands::org::list(cli, user.as_deref(), *page, format).await
            }

            OrgCommand::Get { org, format } => {
                octoapi_cli::commands::org::get(cli, org, format).await
            }

            OrgCommand::Edit {
                org,
                name,
                email,
                blog,
                location,
                billing_email,
                format,
            } => {
                octoapi_cli::commands::org::edit(
                    cli,
                    org,
                    name.clone(),
                    email.clone(),
                    blog.clone(),
                    location.clone(),
                    billing_email.clone(),
                    format,
                )
                .await
            }
        },
    }
}
