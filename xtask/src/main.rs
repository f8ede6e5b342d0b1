//! Build automation tasks for octoapi
//!
//! Currently generates the CLI reference documentation from the clap
//! definitions in `octoapi-cli`.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for octoapi", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate CLI reference documentation in markdown format
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    // Generate markdown from clap definitions
    let markdown = clap_markdown::help_markdown::<octoapi_cli::Cli>();

    let content = format!(
        r#"---
title: CLI Reference
description: Complete command reference for the octo CLI
---

# octo CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

## Overview

octo is a command-line client for the GitHub organization endpoints: list a
user's organizations, inspect one, and edit its profile fields.

## Quick Start

```bash
# List your organizations (requires GITHUB_TOKEN)
octo org list

# List another user's organizations
octo org list --user octocat

# Inspect an organization
octo org get github

# Update an organization's profile
octo org edit my-org --billing-email billing@example.com
```

## Commands

{}

## Environment Variables

- `GITHUB_API_URL` - API base URL (default: `https://api.github.com/`)
- `GITHUB_TOKEN` - auth token sent with every request
- `GITHUB_API_TIMEOUT_SECS` - request timeout in seconds (default: 30)
- `RUST_LOG` / `LOG_FILTER` - logging filter directives

---

*This documentation is automatically generated from the CLI source code. To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    // Create output directory if it doesn't exist
    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
