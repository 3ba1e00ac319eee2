//! Command definitions and dispatch.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use agrocarbon_client::api::PlatformApi;
use agrocarbon_client::config::ClientConfig;
use agrocarbon_client::session::Session;
use agrocarbon_client::submit::{submit_footprint, SaveOutcome};
use agrocarbon_core::activity::FarmActivity;
use agrocarbon_core::enrollment::{estimate_signup_credits, FarmPracticeProfile};
use agrocarbon_core::footprint::{compute_footprint, CarbonFootprint};
use agrocarbon_core::marketplace;
use agrocarbon_core::validation::validate_activity;

use crate::render;

#[derive(Parser)]
#[command(name = "agrocarbon")]
#[command(about = "AgroCarbon carbon-credit platform CLI")]
pub struct Cli {
    /// Print machine-readable JSON instead of the text report.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a carbon footprint from an activity questionnaire.
    Compute {
        /// Activity questionnaire, JSON in the wire format.
        #[arg(long)]
        input: PathBuf,
        /// Reject blank names and negative or non-finite quantities first.
        #[arg(long, default_value_t = false)]
        validate: bool,
    },
    /// Estimate yearly signup credit potential from declared practices.
    Estimate {
        /// Practice profile, JSON in the wire format.
        #[arg(long)]
        input: PathBuf,
    },
    /// Sign in and print the bearer token.
    Login {
        #[arg(long)]
        email: String,
        /// Password; read from stdin when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Fetch the saved carbon record and render its report.
    Fetch {
        /// Bearer token; falls back to `AGROCARBON_TOKEN`.
        #[arg(long)]
        token: Option<String>,
    },
    /// Compute a footprint and save it, creating or updating upstream.
    Submit {
        /// Activity questionnaire, JSON in the wire format.
        #[arg(long)]
        input: PathBuf,
        /// Reject blank names and negative or non-finite quantities first.
        #[arg(long, default_value_t = false)]
        validate: bool,
        /// Bearer token; falls back to `AGROCARBON_TOKEN`.
        #[arg(long)]
        token: Option<String>,
    },
    /// Show the company dashboard overview.
    CompanyOverview,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    tracing::debug!(api_url = %config.api_url, "Resolved configuration");

    match cli.command {
        Commands::Compute { input, validate } => compute(&input, validate, cli.json),
        Commands::Estimate { input } => estimate(&input, cli.json),
        Commands::Login { email, password } => login(&config, &email, password, cli.json).await,
        Commands::Fetch { token } => fetch(&config, token, cli.json).await,
        Commands::Submit {
            input,
            validate,
            token,
        } => submit(&config, &input, validate, token, cli.json).await,
        Commands::CompanyOverview => company_overview(cli.json),
    }
}

// ---------------------------------------------------------------------------
// Local commands
// ---------------------------------------------------------------------------

fn compute(input: &Path, validate: bool, json: bool) -> anyhow::Result<()> {
    let footprint = load_and_compute(input, validate)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&footprint)?);
    } else {
        print!("{}", render::footprint_report(&footprint));
    }
    Ok(())
}

fn estimate(input: &Path, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let profile: FarmPracticeProfile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
    let credits = estimate_signup_credits(&profile);
    if json {
        println!("{}", serde_json::json!({ "estimatedCredits": credits }));
    } else {
        println!("{}", render::estimate_line(credits));
    }
    Ok(())
}

fn company_overview(json: bool) -> anyhow::Result<()> {
    let stats = marketplace::sample_stats();
    let activities = marketplace::sample_activities();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "stats": stats,
                "recentActivities": activities,
            }))?
        );
    } else {
        print!("{}", render::company_overview(&stats, &activities));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Platform commands
// ---------------------------------------------------------------------------

async fn login(
    config: &ClientConfig,
    email: &str,
    password: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let api = PlatformApi::new(config)?;
    let session = api.signin(email, &password).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "accessToken": session.token(),
                "agriculteur": session.farmer(),
            }))?
        );
    } else {
        if let Some(farmer) = session.farmer() {
            println!("Connexion réussie ! Bienvenue {}", farmer.first_name);
        }
        println!("{}", session.token());
    }
    Ok(())
}

async fn fetch(config: &ClientConfig, token: Option<String>, json: bool) -> anyhow::Result<()> {
    let session = resolve_session(token, config)?;
    let api = PlatformApi::new(config)?;

    let farmer = api.fetch_profile(&session).await?;
    let record = api.fetch_carbon_record(&session).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "agriculteur": farmer,
                "record": record,
            }))?
        );
        return Ok(());
    }

    println!("{}", render::profile_header(&farmer));
    match record {
        Some(footprint) => print!("{}", render::footprint_report(&footprint)),
        None => println!("{}", render::NO_RECORD_MESSAGE),
    }
    Ok(())
}

async fn submit(
    config: &ClientConfig,
    input: &Path,
    validate: bool,
    token: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let footprint = load_and_compute(input, validate)?;
    let session = resolve_session(token, config)?;
    let api = PlatformApi::new(config)?;

    let outcome = submit_footprint(&api, &session, &footprint).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "outcome": outcome,
                "record": footprint,
            }))?
        );
    } else {
        match outcome {
            SaveOutcome::Created => println!("Données enregistrées avec succès !"),
            SaveOutcome::Updated => println!("Données modifiées avec succès !"),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_and_compute(input: &Path, validate: bool) -> anyhow::Result<CarbonFootprint> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let activity: FarmActivity =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
    if validate {
        validate_activity(&activity)?;
    }
    Ok(compute_footprint(&activity))
}

fn resolve_session(token: Option<String>, config: &ClientConfig) -> anyhow::Result<Session> {
    let token = token
        .or_else(|| config.access_token.clone())
        .context("no bearer token: pass --token or set AGROCARBON_TOKEN")?;
    Ok(Session::from_token(token))
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Mot de passe : ");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
