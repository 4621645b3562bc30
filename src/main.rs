use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use version_nudge::alert::NoopDelegate;
use version_nudge::config::{NudgeConfig, data_dir, db_path, load_config, log_path};
use version_nudge::engine::{CheckTrigger, DecisionEngine, UpdateChecker};
use version_nudge::lookup::{AppStoreLookup, LookupKey};
use version_nudge::store::{PreferenceStore, SqliteStore};
use version_nudge::version::{VersionVector, classify, is_newer};

#[derive(Parser)]
#[command(name = "version-nudge")]
#[command(version, about = "Check the App Store for a newer version of an app")]
struct Cli {
    /// Write logs to stderr instead of the log file
    #[arg(long, global = true)]
    stderr: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one check cycle and print the decision
    Check {
        #[command(flatten)]
        app: AppArgs,
        /// Installed version of the app
        #[arg(long)]
        installed: String,
        /// Device OS version, enables the minimum OS check
        #[arg(long)]
        os: Option<String>,
    },
    /// Compare two version strings
    Compare { installed: String, remote: String },
    /// Never alert about this version again
    Skip {
        #[command(flatten)]
        app: AppArgs,
        version: String,
    },
    /// Alert on the next check regardless of cadence
    NextTime {
        #[command(flatten)]
        app: AppArgs,
    },
    /// Forget all stored preferences for the app
    Reset {
        #[command(flatten)]
        app: AppArgs,
    },
}

#[derive(Args)]
struct AppArgs {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, conflicts_with = "app_id")]
    bundle_id: Option<String>,
    #[arg(long)]
    app_id: Option<u64>,
    /// Two-letter storefront code
    #[arg(long)]
    country: Option<String>,
}

impl AppArgs {
    /// Configuration file merged with command line overrides
    fn resolve(&self) -> anyhow::Result<NudgeConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => NudgeConfig::default(),
        };

        if let Some(bundle_id) = &self.bundle_id {
            config.lookup.bundle_id = Some(bundle_id.clone());
            config.lookup.app_id = None;
        }
        if let Some(app_id) = self.app_id {
            config.lookup.app_id = Some(app_id);
            config.lookup.bundle_id = None;
        }
        if let Some(country) = &self.country {
            config.lookup.country = Some(country.clone());
        }

        Ok(config)
    }
}

fn lookup_key(config: &NudgeConfig) -> anyhow::Result<LookupKey> {
    match (&config.lookup.bundle_id, config.lookup.app_id) {
        (Some(bundle_id), _) => Ok(LookupKey::BundleId(bundle_id.clone())),
        (None, Some(app_id)) => Ok(LookupKey::AppId(app_id)),
        (None, None) => bail!("either --bundle-id or --app-id is required"),
    }
}

fn open_store(key: &LookupKey) -> anyhow::Result<SqliteStore> {
    std::fs::create_dir_all(data_dir()).context("failed to create data directory")?;

    let app_key = match key {
        LookupKey::BundleId(bundle_id) => bundle_id.clone(),
        LookupKey::AppId(app_id) => app_id.to_string(),
    };
    Ok(SqliteStore::new(&db_path(), &app_key)?)
}

fn init_logging(to_stderr: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_env("VERSION_NUDGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = data_dir();
    std::fs::create_dir_all(&log_dir).context("failed to create log directory")?;
    let file_name = log_path()
        .file_name()
        .map(|name| name.to_os_string())
        .context("log path has no file name")?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, file_name));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

async fn run_check(app: &AppArgs, installed: &str, os: Option<&str>) -> anyhow::Result<()> {
    let config = app.resolve()?;
    let key = lookup_key(&config)?;
    let store = Arc::new(open_store(&key)?);

    let app_name = config
        .app_name
        .clone()
        .unwrap_or_else(|| "this app".to_string());
    let engine = DecisionEngine::new(store, config.effective_rules(), &app_name);
    let lookup = AppStoreLookup::new(
        &config.lookup.base_url,
        key,
        config.lookup.country.as_deref(),
    )?;

    let mut checker = UpdateChecker::new(lookup, engine, Arc::new(NoopDelegate), Some(installed));
    if let Some(os) = os {
        checker = checker.with_device_os_version(os);
    }

    match checker.check(CheckTrigger::Manual).await {
        Ok(decision) => {
            println!("{}", decision.content.title);
            println!("{}", decision.content.message);
            println!(
                "update: {} ({}), alert: {}",
                decision.remote_version, decision.update_type, decision.alert_type
            );
            if !decision.content.buttons.is_empty() {
                println!("buttons: {}", decision.content.button_titles().join(" | "));
            }
            println!("store: {}", decision.store_url);
        }
        Err(e) if e.is_informational() => println!("{}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn run_compare(installed: &str, remote: &str) {
    let installed = VersionVector::from(installed);
    let remote = VersionVector::from(remote);

    if is_newer(&installed, &remote) {
        println!("newer ({})", classify(&installed, &remote));
    } else {
        println!("not newer");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.stderr)?;

    match cli.command {
        Command::Check {
            app,
            installed,
            os,
        } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_check(&app, &installed, os.as_deref())),
        Command::Compare { installed, remote } => {
            run_compare(&installed, &remote);
            Ok(())
        }
        Command::Skip { app, version } => {
            let store = open_store(&lookup_key(&app.resolve()?)?)?;
            store.set_skipped_version(&version)?;
            println!("Skipping {}", version);
            Ok(())
        }
        Command::NextTime { app } => {
            let store = open_store(&lookup_key(&app.resolve()?)?)?;
            store.set_pending_forced_check(true)?;
            println!("Will alert on the next check");
            Ok(())
        }
        Command::Reset { app } => {
            let store = open_store(&lookup_key(&app.resolve()?)?)?;
            store.reset()?;
            println!("Preferences cleared");
            Ok(())
        }
    }
}
