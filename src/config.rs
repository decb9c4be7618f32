use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{env, path::PathBuf};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://./data/festival_site.db";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

/// What the binary should do once configuration is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Serve,
    Migrate,
    Submit(SubmitArgs),
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Film festival site and submission metadata API")]
pub struct Args {
    /// Host to bind to (overrides FESTIVAL_SITE_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides FESTIVAL_SITE_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides FESTIVAL_SITE_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Bootstrap the schema and exit
    #[arg(long)]
    pub migrate: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through the simulated film submission against a running server
    Submit(SubmitArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct SubmitArgs {
    /// Film file to submit; only its name and size are read
    #[arg(long)]
    pub file: PathBuf,

    /// Film title
    #[arg(long)]
    pub title: String,

    /// MIME type; guessed from the extension when omitted
    #[arg(long)]
    pub mime: Option<String>,

    /// Base URL of the festival site
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub server: String,

    #[arg(long, default_value = "4242 4242 4242 4242")]
    pub card: String,

    #[arg(long, default_value = "12/30")]
    pub expiry: String,

    #[arg(long, default_value = "123")]
    pub cvv: String,

    /// Skip the simulated delays
    #[arg(long)]
    pub instant: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and the run mode.
    pub fn from_env_and_args() -> Result<(Self, RunMode)> {
        Self::resolve(Args::parse(), |key| env::var(key))
    }

    /// Merge parsed arguments over values looked up through `lookup`.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<(Self, RunMode)>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // --- Environment fallback ---
        let env_host = lookup("FESTIVAL_SITE_HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let env_port = match lookup("FESTIVAL_SITE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing FESTIVAL_SITE_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(err) => return Err(err).context("reading FESTIVAL_SITE_PORT"),
        };
        let env_db = lookup("FESTIVAL_SITE_DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
        };

        let mode = match args.command {
            Some(Command::Submit(submit)) => RunMode::Submit(submit),
            None if args.migrate => RunMode::Migrate,
            None => RunMode::Serve,
        };

        Ok((cfg, mode))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
