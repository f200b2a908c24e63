use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use insyn_core::{AppConfig, FreeTextQuery, Language, TransactionSearchBuilder};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "insyn",
    about = "Build query URLs for Finansinspektionen's insider-trading registry"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the result as JSON instead of a bare URL.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Autocomplete lookup of issuer names.
    Issuer { name: String },
    /// Autocomplete lookup of PDMR names.
    Pdmr { name: String },
    /// Transaction search/export URL over a date range.
    Transactions {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        /// Filter on publication dates instead of transaction dates.
        #[arg(long)]
        published: bool,
        #[arg(long)]
        issuer: Option<String>,
        #[arg(long)]
        pdmr: Option<String>,
        /// Response language: sv (default) or en.
        #[arg(long)]
        lang: Option<Language>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg_path = cli.config.clone().unwrap_or_else(default_config_path);

    match cli.command {
        Commands::Config {
            action: ConfigAction::Init,
        } => {
            init_config(&cfg_path)?;
            println!("Initialized config at {}", cfg_path.display());
            Ok(())
        }
        Commands::Issuer { ref name } => {
            let cfg = load_or_default(&cfg_path)?;
            init_logging(&cfg.log_level);
            print_free_text(FreeTextQuery::issuer(name.clone()), cli.json)
        }
        Commands::Pdmr { ref name } => {
            let cfg = load_or_default(&cfg_path)?;
            init_logging(&cfg.log_level);
            print_free_text(FreeTextQuery::pdmr(name.clone()), cli.json)
        }
        Commands::Transactions {
            from,
            to,
            published,
            ref issuer,
            ref pdmr,
            lang,
            page,
        } => {
            let cfg = load_or_default(&cfg_path)?;
            init_logging(&cfg.log_level);
            debug!(path = %cfg_path.display(), "configuration resolved");

            let mut builder = TransactionSearchBuilder::new()
                .language(lang.unwrap_or(cfg.language))
                .page(page);
            builder = if published {
                builder.publication_dates(from, to)
            } else {
                builder.transaction_dates(from, to)
            };
            if let Some(name) = issuer {
                builder = builder.issuer(name.clone());
            }
            if let Some(name) = pdmr {
                builder = builder.pdmr(name.clone());
            }

            let query = builder.build().context("invalid transaction search")?;
            if cli.json {
                let out = json!({ "query": query, "url": query.url() });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", query.url());
            }
            Ok(())
        }
    }
}

fn print_free_text(query: FreeTextQuery, as_json: bool) -> Result<()> {
    if as_json {
        let out = json!({ "query": query, "url": query.url() });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", query.url());
    }
    Ok(())
}

fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("insyn").join("config.toml")
}

fn init_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let cfg = AppConfig::default();
    let toml = toml::to_string_pretty(&cfg)?;
    std::fs::write(path, toml)
        .with_context(|| format!("failed to write config file {}", path.display()))?;
    Ok(())
}

fn load_or_default(path: &Path) -> Result<AppConfig> {
    let mut cfg = if !path.exists() {
        AppConfig::default()
    } else {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))?
    };
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn init_logging(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(v) = std::env::var("INSYN_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.log_level = v;
        }
    }
    if let Ok(v) = std::env::var("INSYN_LANGUAGE") {
        if let Ok(parsed) = v.parse::<Language>() {
            cfg.language = parsed;
        }
    }
}
