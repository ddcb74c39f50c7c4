// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI starts. Subcommands:
// - config --show|--path|--reset: manage the config file
// - list / detail / create / suggest: one-shot backend calls for scripting

use crate::client::{list_query, HttpIncidentClient, IncidentRepository};
use crate::config::{Config, VERSION};
use crate::controller::detail_or_placeholder;
use crate::incidents::{departments, normalize, Incident, IncidentDetail, NewIncident};
use crate::util::{fit_width, single_line};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// NOC Center - incident dashboard for the terminal
#[derive(Parser)]
#[command(name = "noc")]
#[command(version = VERSION)]
#[command(about = "Incident dashboard for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },

    /// List incidents, optionally filtered by name
    List {
        /// Name filter (blank lists everything)
        #[arg(long, short)]
        query: Option<String>,

        /// Print normalized records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the analysis for one incident
    Detail {
        /// Incident id
        id: i64,
    },

    /// Report a new incident
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Department id (1-4)
        #[arg(long)]
        department: Option<u32>,
    },

    /// Ask the backend which department should own a title
    Suggest {
        title: String,
    },
}

impl Commands {
    /// Whether the command talks to the backend
    pub fn is_remote(&self) -> bool {
        !matches!(self, Commands::Config { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: noc config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default()
        .save()
        .with_context(|| format!("Error writing config to {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend commands
// ─────────────────────────────────────────────────────────────────────────────

/// Run a backend subcommand against the configured API
pub async fn handle_remote(command: Commands, config: &Config) -> Result<()> {
    let client = HttpIncidentClient::new(&config.api_url)?;
    tracing::debug!("Using backend {}", client.base_url());

    match command {
        Commands::List { query, json } => {
            let raw = client
                .list_incidents(query.as_deref().and_then(list_query))
                .await?;
            let incidents = normalize(raw);
            if json {
                println!("{}", serde_json::to_string_pretty(&incidents)?);
            } else {
                print!("{}", render_table(&incidents));
            }
        }
        Commands::Detail { id } => {
            let (detail, fallback) = detail_or_placeholder(&client, id).await;
            if let Some(reason) = fallback {
                eprintln!("warning: showing placeholder analysis ({:?})", reason);
            }
            print!("{}", render_detail(id, &detail));
        }
        Commands::Create {
            name,
            description,
            department,
        } => {
            if let Some(id) = department {
                if departments::by_id(id).is_none() {
                    bail!("Unknown department id {} (expected 1-4)", id);
                }
            }
            let created = client
                .create_incident(&NewIncident::from_form(&name, &description, department))
                .await?;
            match created.id() {
                Some(id) => println!("Created incident #{}", id),
                None => println!("Created incident"),
            }
        }
        Commands::Suggest { title } => match client.suggest_department(&title).await {
            Some(name) => match departments::by_name(&name) {
                Some(d) => println!("{} ({}, id {})", d.name, d.code, d.id),
                None => println!("{} (not in department catalog)", name),
            },
            None => bail!("No suggestion available"),
        },
        Commands::Config { .. } => bail!("config is not a backend command"),
    }
    Ok(())
}

fn render_table(incidents: &[Incident]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} {}\n",
        fit_width("ID", 6),
        fit_width("SEV", 4),
        fit_width("STATUS", 12),
        fit_width("NAME", 36),
        "DEPARTMENT"
    ));
    for incident in incidents {
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            fit_width(&incident.id.to_string(), 6),
            fit_width(incident.severity().label(), 4),
            fit_width(incident.status.as_str(), 12),
            fit_width(&single_line(&incident.name), 36),
            incident.department_name
        ));
    }
    out.push_str(&format!("{} incident(s)\n", incidents.len()));
    out
}

fn render_detail(id: i64, detail: &IncidentDetail) -> String {
    let mut out = format!("Incident #{}\n{}\n", id, detail.detail);
    out.push_str(&format!("Department: {}\n", detail.department_display()));
    for (i, reason) in detail.reason_list.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {}\n   {}\n   -> {}\n",
            i + 1,
            reason.title,
            reason.description,
            reason.actions
        ));
    }
    out
}
