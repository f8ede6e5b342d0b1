//! `octo org` command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use octoapi_client::{GithubClient, ListOptions, Organization};
use tracing::debug;

use crate::Cli;

/// List organizations for a user
pub async fn list(cli: &Cli, user: Option<&str>, page: Option<u32>, format: &str) -> Result<()> {
    let client = build_client(cli)?;
    let opts = page.map(ListOptions::page);

    let response = client.orgs().list(user, opts.as_ref()).await?;
    debug!(
        count = response.data.len(),
        status = %response.meta.status,
        "listed organizations"
    );
    if let Some(rate) = response.meta.rate {
        debug!(remaining = rate.remaining, limit = rate.limit, "rate limit");
    }

    if response.data.is_empty() {
        println!("No organizations found.");
        return Ok(());
    }

    match format {
        "table" => print_org_table(&response.data),
        "json" => println!("{}", serde_json::to_string_pretty(&response.data)?),
        "compact" => {
            for org in &response.data {
                println!("{}", org.login.as_deref().unwrap_or("<unknown>"));
            }
        }
        _ => bail!(
            "Unknown format: '{}'. Use table, json, or compact",
            format
        ),
    }

    if let Some(next) = response.meta.pages.next {
        println!();
        println!("More results available. Fetch them with '--page {}'.", next);
    }

    Ok(())
}

/// Show a single organization
pub async fn get(cli: &Cli, org: &str, format: &str) -> Result<()> {
    let client = build_client(cli)?;
    let response = client.orgs().get(org).await?;

    print_single(&response.data, format)
}

/// Edit an organization's profile
#[allow(clippy::too_many_arguments)]
pub async fn edit(
    cli: &Cli,
    org: &str,
    name: Option<String>,
    email: Option<String>,
    blog: Option<String>,
    location: Option<String>,
    billing_email: Option<String>,
    format: &str,
) -> Result<()> {
    let patch = Organization {
        name,
        email,
        blog,
        location,
        billing_email,
        ..Default::default()
    };

    if patch == Organization::default() {
        bail!(
            "No fields to update. Pass at least one of --name, --email, --blog, --location, or --billing-email."
        );
    }

    let client = build_client(cli)?;
    let response = client.orgs().edit(org, &patch).await?;

    println!("{} Updated organization '{}'", "✓".green(), org.cyan());
    println!();
    print_single(&response.data, format)
}

/// Build the API client from global CLI options
fn build_client(cli: &Cli) -> Result<GithubClient> {
    let mut builder = GithubClient::builder().base_url(cli.api_url.as_str());
    if let Some(token) = &cli.token {
        builder = builder.token(token.as_str());
    }
    builder
        .build()
        .context("Failed to configure the GitHub client")
}

fn print_single(org: &Organization, format: &str) -> Result<()> {
    match format {
        "text" => print_org_details(org),
        "json" => println!("{}", serde_json::to_string_pretty(org)?),
        _ => bail!("Unknown format: '{}'. Use text or json", format),
    }
    Ok(())
}

/// Format organizations as a table
fn print_org_table(orgs: &[Organization]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Login", "ID", "Name", "Location", "Public Repos"]);

    for org in orgs {
        table.add_row(vec![
            org.login.clone().unwrap_or_default(),
            org.id.map(|id| id.to_string()).unwrap_or_default(),
            org.name.clone().unwrap_or_default(),
            org.location.clone().unwrap_or_default(),
            org.public_repos
                .map(|count| count.to_string())
                .unwrap_or_default(),
        ]);
    }

    println!("{}", table);
}

/// Print a single organization, skipping absent fields
fn print_org_details(org: &Organization) {
    println!(
        "{}",
        org.login.as_deref().unwrap_or("<unknown>").green().bold()
    );

    if let Some(name) = &org.name {
        println!("  Name:           {}", name);
    }
    if let Some(id) = org.id {
        println!("  ID:             {}", id);
    }
    if let Some(email) = &org.email {
        println!("  Email:          {}", email);
    }
    if let Some(blog) = &org.blog {
        println!("  Blog:           {}", blog);
    }
    if let Some(location) = &org.location {
        println!("  Location:       {}", location);
    }
    if let Some(billing_email) = &org.billing_email {
        println!("  Billing email:  {}", billing_email);
    }
    if let Some(public_repos) = org.public_repos {
        println!("  Public repos:   {}", public_repos);
    }
    if let Some(followers) = org.followers {
        println!("  Followers:      {}", followers);
    }
    if let Some(created_at) = org.created_at {
        println!("  Created:        {}", created_at);
    }
    if let Some(plan) = &org.plan {
        if let Some(plan_name) = &plan.name {
            println!("  Plan:           {}", plan_name);
        }
    }
}
