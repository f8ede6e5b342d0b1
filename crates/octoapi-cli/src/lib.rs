//! octo CLI Library
//!
//! Command-line interface for the GitHub organization endpoints:
//!
//! - **Listing**: organizations for a user or the authenticated user
//!   (`octo org list`)
//! - **Inspection**: details of a single organization (`octo org get`)
//! - **Editing**: update an organization's profile fields (`octo org edit`)

pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};

/// octo - GitHub organizations from the command line
#[derive(Parser, Debug)]
#[command(name = "octo")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// GitHub API base URL
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = octoapi_client::DEFAULT_BASE_URL,
        global = true
    )]
    pub api_url: String,

    /// Auth token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with organizations
    Org {
        #[command(subcommand)]
        command: OrgCommand,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// List organizations for a user (defaults to the authenticated user)
    List {
        /// User login to list organizations for
        #[arg(short, long)]
        user: Option<String>,

        /// Page of results to fetch
        #[arg(short, long)]
        page: Option<u32>,

        /// Output format (table, json, compact)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show a single organization
    Get {
        /// Organization login
        org: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Edit an organization's profile
    Edit {
        /// Organization login
        org: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New public email address
        #[arg(long)]
        email: Option<String>,

        /// New blog URL
        #[arg(long)]
        blog: Option<String>,

        /// New location
        #[arg(long)]
        location: Option<String>,

        /// New billing email address
        #[arg(long)]
        billing_email: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
