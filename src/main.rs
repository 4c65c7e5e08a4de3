use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use lumina::application::{
    home, init::init, list_history, manage_config::CONFIG_KEYS, preferences::PREFERENCE_KEYS,
    require_identity, sync_pending, trends, AuthService, ConfigService, LogEntryService,
    LogOutcome, LogScript, PreferencesService,
};
use lumina::cli::{
    format_history, format_home, format_identity, format_profile, format_saved, format_trends,
    AuthCommand, Cli, Commands, InteractivePrompt,
};
use lumina::domain::{resolve_date, Identity};
use lumina::error::{LuminaError, Result};
use lumina::infrastructure::{
    AuthEvent, FileIdentityService, FileRecordStore, FileSystemRepository, PendingQueue,
    ProfileStore, Repository,
};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_env("LUMINA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_optional(input: Option<String>, today: NaiveDate) -> Result<Option<NaiveDate>> {
    input.map(|text| resolve_date(&text, today)).transpose()
}

/// The signed-in identity for commands that act on a user's data
fn session(repo: &FileSystemRepository) -> Result<Identity> {
    require_identity(&FileIdentityService::new(repo.clone()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let repo = init(&path)?;
            println!("Initialized lumina data directory in {}", repo.root.display());
            Ok(())
        }
        Some(Commands::Auth { action }) => {
            let repo = FileSystemRepository::discover()?;
            let mut service = AuthService::new(FileIdentityService::new(repo));
            service.subscribe(Box::new(|event: &AuthEvent| match event {
                AuthEvent::SignedIn(identity) => println!("Signed in as {}", identity.describe()),
                AuthEvent::SignedOut => println!("Signed out"),
            }));

            match action {
                AuthCommand::Signin { email, name } => {
                    service.sign_in(email.as_deref(), name.as_deref())?;
                }
                AuthCommand::Signout => service.sign_out()?,
                AuthCommand::Whoami => println!("{}", format_identity(&service.whoami()?)),
            }
            Ok(())
        }
        Some(Commands::Log {
            mood,
            energy,
            sleep,
            interventions,
            notes,
            date,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let identity = session(&repo)?;
            let entry_date = resolve_date(&date, today())?;
            let service = LogEntryService::new(
                FileRecordStore::new(repo.clone()),
                PendingQueue::new(repo),
            );

            let outcome = match mood {
                Some(mood) => {
                    let mut script = LogScript {
                        mood,
                        energy,
                        sleep,
                        interventions,
                        notes,
                    };
                    service.execute(identity, entry_date, &mut script)?
                }
                None if energy.is_some()
                    || sleep.is_some()
                    || !interventions.is_empty()
                    || notes.is_some() =>
                {
                    return Err(LuminaError::InvalidInput(
                        "--mood is required when logging with flags".to_string(),
                    ));
                }
                None => {
                    let stdin = io::stdin();
                    let mut prompt = InteractivePrompt::new(stdin.lock(), io::stdout());
                    service.execute(identity, entry_date, &mut prompt)?
                }
            };

            match outcome {
                LogOutcome::Saved(record) => println!("{}", format_saved(&record)),
                LogOutcome::Queued { error } => return Err(LuminaError::Submission(error)),
                LogOutcome::Abandoned => println!("Log discarded"),
            }
            Ok(())
        }
        Some(Commands::History { from, to, limit }) => {
            let repo = FileSystemRepository::discover()?;
            let identity = session(&repo)?;
            let today = today();
            let from = resolve_optional(from, today)?;
            let to = resolve_optional(to, today)?;

            let records = list_history(&FileRecordStore::new(repo), &identity, from, to, limit)?;
            println!("{}", format_history(&records).trim_end());
            Ok(())
        }
        Some(Commands::Trends { days }) => {
            let repo = FileSystemRepository::discover()?;
            let identity = session(&repo)?;
            let days = days.unwrap_or(repo.load_config()?.trend_days).max(1);
            let profile = PreferencesService::new(ProfileStore::new(repo.clone())).load(&identity)?;

            let view = trends(
                &FileRecordStore::new(repo),
                &identity,
                days,
                profile.sleep_goal,
                Utc::now(),
            )?;
            println!("{}", format_trends(&view).trim_end());
            Ok(())
        }
        Some(Commands::Prefs { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let identity = session(&repo)?;
            let service = PreferencesService::new(ProfileStore::new(repo));

            if list {
                println!("{}", format_profile(&service.load(&identity)?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&identity, &k, &v)?;
                    println!("Set {} = {}", k, service.get(&identity, &k)?);
                } else {
                    println!("{}", service.get(&identity, &k)?);
                }
            } else {
                println!("Usage: lumina prefs [--list | <key> [<value>]]");
                println!("Valid keys: {}", PREFERENCE_KEYS);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("trend_days = {}", config.trend_days);
                println!("recent_logs = {}", config.recent_logs);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: lumina config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
            }
            Ok(())
        }
        Some(Commands::Sync) => {
            let repo = FileSystemRepository::discover()?;
            let report = sync_pending(&FileRecordStore::new(repo.clone()), &PendingQueue::new(repo))?;
            println!(
                "Submitted {} queued log(s), {} still pending",
                report.submitted, report.remaining
            );

            if report.remaining > 0 {
                return Err(LuminaError::Submission(format!(
                    "{} queued log(s) could not be submitted",
                    report.remaining
                )));
            }
            Ok(())
        }
        None => {
            let repo = FileSystemRepository::discover()?;
            let identity = session(&repo)?;
            let recent = repo.load_config()?.recent_logs;
            let profile = PreferencesService::new(ProfileStore::new(repo.clone())).load(&identity)?;

            let summary = home(
                &FileRecordStore::new(repo),
                &identity,
                &profile,
                today(),
                recent,
            )?;
            println!("{}", format_home(&summary).trim_end());
            Ok(())
        }
    }
}
