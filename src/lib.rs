pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod domain;
pub mod endpoints;
pub mod material;

#[cfg(test)]
mod testing;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::api::{ChainRepair, PlatformApi, PlatformClient, SslDoctorClient};
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::core::commands::{self, Session};
use crate::core::error::CertsError;
use crate::display::Ui;

const LOG_ENV: &str = "CERTS_LOG";

fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn session<'a>(
    app: Option<&'a str>,
    platform: &'a dyn PlatformApi,
    doctor: &'a dyn ChainRepair,
) -> Result<Session<'a>, CertsError> {
    let app = app.filter(|app| !app.is_empty()).ok_or(CertsError::MissingApp)?;
    Ok(Session {
        app,
        platform,
        doctor,
    })
}

/// Runs one parsed invocation against the given collaborators.
pub fn execute(
    command: Command,
    app: Option<&str>,
    platform: &dyn PlatformApi,
    doctor: &dyn ChainRepair,
    ui: &mut Ui,
) -> Result<(), CertsError> {
    match command {
        Command::List => commands::list(&session(app, platform, doctor)?, ui),
        Command::Info(args) => commands::info(&session(app, platform, doctor)?, &args.into(), ui),
        Command::Add(args) => commands::add(&session(app, platform, doctor)?, &args.into(), ui),
        Command::Update(args) => {
            commands::update(&session(app, platform, doctor)?, &args.into(), ui)
        }
        Command::Rollback(args) => {
            commands::rollback(&session(app, platform, doctor)?, &args.into(), ui)
        }
        Command::Remove(args) => {
            commands::remove(&session(app, platform, doctor)?, &args.into(), ui)
        }
        Command::Chain(args) => commands::chain(doctor, &args.crts, ui),
        Command::Key(args) => commands::key(doctor, &args.crt, &args.keys, ui),
    }
}

/// Entry point of the `heroku-certs` binary.
pub fn run() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    debug!(
        "[certs-config] api={} doctor={} timeout={:?}",
        settings.api_url, settings.ssl_doctor_url, settings.http_timeout
    );

    let mut ui = Ui::stdio();
    let result = PlatformClient::new(&settings).and_then(|platform| {
        let doctor = SslDoctorClient::new(&settings);
        execute(cli.command, cli.app.as_deref(), &platform, &doctor, &mut ui)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("[certs-cmd] command failed: {err:?}");
            ui.error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
