use std::process::ExitCode;
use std::sync::Arc;

use account::client::ApiClient;
use account::constants::{LOGIN_SUCCESS, LOGOUT_SUCCESS, PROFILE_UPDATE_SUCCESS, REGISTER_SUCCESS};
use account::controllers::{self, ControllerResult};
use account::models::{LoginForm, ProfileUpdateForm, RegistrationForm};
use account::session::SessionModel;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::config::ClientConfig;
use common::storage::FileStorage;
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Manage an account on the remote account service
#[derive(Debug, Parser)]
#[command(name = "account", version)]
struct Cli {
    /// Override the service base URL (otherwise APP_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and keep the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Fetch the signed-in user's profile
    Profile,
    /// Update the signed-in user's profile
    UpdateProfile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Sign out and forget the session
    Logout,
    /// Show the stored session without contacting the service
    Whoami,
}

/// Controller result plus the message shown on success
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    #[serde(flatten)]
    result: &'a ControllerResult<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

fn print_report<T: Serialize>(
    result: &ControllerResult<T>,
    success_message: Option<&'static str>,
) -> Result<ExitCode> {
    let report = Report {
        result,
        message: success_message.filter(|_| result.is_success()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config.api_base_url = ClientConfig::new(base_url).api_base_url;
    }

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if config.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    info!("Using account service at {}", config.api_base_url);

    let storage = Arc::new(FileStorage::new(&config.storage_dir));
    let mut session = SessionModel::restore(storage);
    let api = ApiClient::new(config).context("Failed to build HTTP client")?;

    match cli.command {
        Command::Login { email, password } => {
            let form = LoginForm { email, password };
            let result = controllers::handle_login(&api, &mut session, form).await;
            print_report(&result, Some(LOGIN_SUCCESS))
        }
        Command::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = RegistrationForm {
                full_name: name,
                email,
                password,
                confirm_password,
            };
            let result = controllers::handle_register(&api, &mut session, form).await;
            print_report(&result, Some(REGISTER_SUCCESS))
        }
        Command::Profile => {
            if !session.is_authenticated() {
                anyhow::bail!("Not signed in; run `account login` first");
            }
            let result = controllers::load_profile(&api, &mut session).await;
            print_report(&result, None)
        }
        Command::UpdateProfile {
            name,
            email,
            phone,
            address,
        } => {
            if !session.is_authenticated() {
                anyhow::bail!("Not signed in; run `account login` first");
            }
            let form = ProfileUpdateForm {
                full_name: name,
                email,
                phone,
                address,
            };
            let result = controllers::update_profile(&api, &mut session, form).await;
            print_report(&result, Some(PROFILE_UPDATE_SUCCESS))
        }
        Command::Logout => {
            let result = controllers::handle_logout(&api, &mut session).await;
            print_report(&result, Some(LOGOUT_SUCCESS))
        }
        Command::Whoami => {
            let result = match session.user() {
                Some(user) if session.is_authenticated() => {
                    ControllerResult::with_data(user.clone())
                }
                _ => ControllerResult::failed("Not signed in"),
            };
            print_report(&result, None)
        }
    }
}
