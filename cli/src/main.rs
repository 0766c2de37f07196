//! `pdu`: command-line companion for the SBC-PDU device API.
//!
//! Uses the same credential store and request gateway as the web console,
//! with a `reqwest` transport and the session persisted under the session
//! directory.

mod file_storage;
mod transport;


use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use console_core::config::GatewayConfig;
use console_core::net::api;
use console_core::net::error::ApiError;
use console_core::net::gateway::Gateway;
use console_core::net::types::{AuthConfig, HostnameConfig, MqttConfig, NtpConfig, NtpTimezone, WifiAuthMode, WifiConfig};
use console_core::state::auth::{CredentialStore, Credentials, IdentityContext};
use serde::Serialize;

use crate::file_storage::{FileStorage, default_session_dir};
use crate::transport::ReqwestTransport;

type CliGateway = Gateway<ReqwestTransport>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `pdu sign-in <username>` first")]
    NotSignedIn,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pdu", about = "SBC-PDU device administration CLI")]
struct Cli {
    #[arg(long, env = "PDU_BASE_URL", default_value = "http://sbc-pdu.local/api/v1/")]
    base_url: String,

    #[arg(long, env = "PDU_SESSION_DIR", help = "Directory holding the saved session")]
    session_dir: Option<PathBuf>,

    #[arg(long, env = "PDU_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify credentials against the device and save the session.
    SignIn {
        username: String,
        #[arg(long, env = "PDU_PASSWORD", hide_env_values = true)]
        password: String,
    },
    SignOut,
    Whoami,
    System(SystemCommand),
    Outputs(OutputsCommand),
    Hostname(HostnameCommand),
    Mqtt(MqttCommand),
    Ntp(NtpCommand),
    Wifi(WifiCommand),
    Auth(AuthCommand),
}

#[derive(Args, Debug)]
struct SystemCommand {
    #[command(subcommand)]
    command: SystemSubcommand,
}

#[derive(Subcommand, Debug)]
enum SystemSubcommand {
    Info,
    Restart,
}

#[derive(Args, Debug)]
struct OutputsCommand {
    #[command(subcommand)]
    command: OutputsSubcommand,
}

#[derive(Subcommand, Debug)]
enum OutputsSubcommand {
    List,
    Switch {
        index: u32,
        #[arg(value_parser = parse_switch_state, action = clap::ArgAction::Set, help = "on or off")]
        state: bool,
    },
}

#[derive(Args, Debug)]
struct HostnameCommand {
    #[command(subcommand)]
    command: HostnameSubcommand,
}

#[derive(Subcommand, Debug)]
enum HostnameSubcommand {
    Get,
    Set { hostname: String },
}

#[derive(Args, Debug)]
struct MqttCommand {
    #[command(subcommand)]
    command: MqttSubcommand,
}

#[derive(Subcommand, Debug)]
enum MqttSubcommand {
    Get,
    Set {
        #[arg(long)]
        uri: String,
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, env = "PDU_MQTT_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,
    },
}

#[derive(Args, Debug)]
struct NtpCommand {
    #[command(subcommand)]
    command: NtpSubcommand,
}

#[derive(Subcommand, Debug)]
enum NtpSubcommand {
    Get,
    Set {
        #[arg(long = "server", required = true, help = "NTP server; repeat for more than one")]
        servers: Vec<String>,
        #[arg(long, default_value_t = NtpTimezone::default())]
        timezone: NtpTimezone,
    },
}

#[derive(Args, Debug)]
struct WifiCommand {
    #[command(subcommand)]
    command: WifiSubcommand,
}

#[derive(Subcommand, Debug)]
enum WifiSubcommand {
    Get,
    Set {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value_t = WifiAuthMode::default())]
        auth_mode: WifiAuthMode,
        #[arg(long, env = "PDU_WIFI_PSK", hide_env_values = true, default_value = "")]
        psk: String,
    },
    Scan,
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    /// Change the device credentials and keep the session signed in.
    Change {
        #[arg(long, help = "New username; defaults to the current one")]
        username: Option<String>,
        #[arg(long, env = "PDU_OLD_PASSWORD", hide_env_values = true)]
        old_password: String,
        #[arg(long, env = "PDU_NEW_PASSWORD", hide_env_values = true)]
        new_password: String,
    },
}

/// Identity hook for the CLI: the signed-in user goes to the log.
#[derive(Debug)]
struct TracingIdentity;

impl IdentityContext for TracingIdentity {
    fn set_user(&self, username: Option<&str>) {
        tracing::debug!(user = username.unwrap_or("-"), "session identity changed");
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let session_dir = cli.session_dir.unwrap_or_else(default_session_dir);
    let store = CredentialStore::restore(Arc::new(FileStorage::new(&session_dir)), Arc::new(TracingIdentity));
    let transport = ReqwestTransport::new(Duration::from_secs(cli.timeout_secs))?;
    let gw = Gateway::new(GatewayConfig::from_override(Some(&cli.base_url)), transport, store);
    tracing::debug!(base_url = %gw.config().base_url, session_dir = %session_dir.display(), "cli ready");

    let had_session = gw.store().is_logged_in();
    let result = run(&gw, cli.command).await;
    if let Err(CliError::Api(e)) = &result {
        if let Some(notice) = unauthorized_notice(e, had_session, gw.store().is_logged_in()) {
            tracing::warn!("{notice}");
            eprintln!("{notice}");
        }
    }
    result
}

async fn run(gw: &CliGateway, command: Command) -> Result<(), CliError> {
    match command {
        Command::SignIn { username, password } => {
            gw.store().sign_in(gw, Credentials::new(username.trim(), password)).await?;
            println!("signed in as {}", gw.store().username().unwrap_or_default());
            Ok(())
        }
        Command::SignOut => {
            gw.store().sign_out();
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            println!("{}", gw.store().username().ok_or(CliError::NotSignedIn)?);
            Ok(())
        }
        command => {
            require_session(gw)?;
            run_device(gw, command).await
        }
    }
}

async fn run_device(gw: &CliGateway, command: Command) -> Result<(), CliError> {
    match command {
        Command::System(system) => match system.command {
            SystemSubcommand::Info => print_json(&api::system_info(gw).await?),
            SystemSubcommand::Restart => {
                api::restart(gw).await?;
                println!("restarting");
                Ok(())
            }
        },
        Command::Outputs(outputs) => match outputs.command {
            OutputsSubcommand::List => print_json(&api::list_outputs(gw).await?),
            OutputsSubcommand::Switch { index, state } => {
                api::switch_output(gw, index, state).await?;
                print_json(&api::list_outputs(gw).await?)
            }
        },
        Command::Hostname(hostname) => match hostname.command {
            HostnameSubcommand::Get => print_json(&api::get_hostname(gw).await?),
            HostnameSubcommand::Set { hostname } => {
                api::set_hostname(gw, &HostnameConfig { hostname: hostname.trim().to_owned() }).await?;
                print_json(&api::get_hostname(gw).await?)
            }
        },
        Command::Mqtt(mqtt) => match mqtt.command {
            MqttSubcommand::Get => print_json(&api::get_mqtt(gw).await?),
            MqttSubcommand::Set { uri, username, password } => {
                api::set_mqtt(gw, &MqttConfig { uri: uri.trim().to_owned(), username, password }).await?;
                print_json(&api::get_mqtt(gw).await?)
            }
        },
        Command::Ntp(ntp) => match ntp.command {
            NtpSubcommand::Get => print_json(&api::get_ntp(gw).await?),
            NtpSubcommand::Set { servers, timezone } => {
                api::set_ntp(gw, &ntp_config(servers, timezone)?).await?;
                print_json(&api::get_ntp(gw).await?)
            }
        },
        Command::Wifi(wifi) => match wifi.command {
            WifiSubcommand::Get => print_json(&api::get_wifi(gw).await?),
            WifiSubcommand::Set { ssid, auth_mode, psk } => {
                api::set_wifi(gw, &wifi_config(ssid, auth_mode, psk)?).await?;
                print_json(&api::get_wifi(gw).await?)
            }
            WifiSubcommand::Scan => print_json(&api::scan_wifi(gw).await?),
        },
        Command::Auth(auth) => match auth.command {
            AuthSubcommand::Change { username, old_password, new_password } => {
                let current = gw.store().username().ok_or(CliError::NotSignedIn)?;
                let config = AuthConfig {
                    username: username.map_or(current, |name| name.trim().to_owned()),
                    old_password,
                    new_password,
                };
                api::update_credentials(gw, &config).await?;
                gw.store().set_credentials(Credentials::new(config.username.clone(), config.new_password));
                println!("credentials updated for {}", config.username);
                Ok(())
            }
        },
        Command::SignIn { .. } | Command::SignOut | Command::Whoami => Ok(()),
    }
}

fn require_session(gw: &CliGateway) -> Result<(), CliError> {
    if gw.store().is_logged_in() { Ok(()) } else { Err(CliError::NotSignedIn) }
}

/// Notice for a failed command that ended the saved session.
fn unauthorized_notice(error: &ApiError, had_session: bool, has_session: bool) -> Option<&'static str> {
    (error.is_unauthorized() && had_session && !has_session)
        .then_some("the device rejected the saved credentials; session cleared, run `pdu sign-in` again")
}

fn parse_switch_state(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(format!("expected on or off, got {other:?}")),
    }
}

fn ntp_config(servers: Vec<String>, timezone: NtpTimezone) -> Result<NtpConfig, CliError> {
    let servers: Vec<String> = servers
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if servers.is_empty() {
        return Err(CliError::InvalidArgument("at least one NTP server is required".to_owned()));
    }
    Ok(NtpConfig { servers, timezone })
}

fn wifi_config(ssid: String, auth_mode: WifiAuthMode, psk: String) -> Result<WifiConfig, CliError> {
    if ssid.is_empty() {
        return Err(CliError::InvalidArgument("ssid must not be empty".to_owned()));
    }
    if auth_mode.requires_psk() && psk.is_empty() {
        return Err(CliError::InvalidArgument(format!("{auth_mode} requires --psk")));
    }
    let psk = if auth_mode.requires_psk() { psk } else { String::new() };
    Ok(WifiConfig { auth_mode, ssid, psk })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
