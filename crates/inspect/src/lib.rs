//! `sheltra-inspect`: evaluate stored sessions, route decisions, placement
//! timelines and profile forms from the command line.
//!
//! A JSON file stands in for browser storage, so the same token the
//! dashboard would hold can be checked against the route table offline.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::{Value, json};

use sheltra_auth::{JsonFileSessionStore, RouteDenied, RouteTable, SessionConfig, SessionGate, decode_token, menu_for_role};
use sheltra_placements::{PlacementRecord, build_timeline, compact_badge, summarize};
use sheltra_profiles::{LoginForm, ProfileData, validate_login, validate_profile};

#[derive(Parser, Debug)]
#[command(name = "sheltra-inspect")]
#[command(about = "Inspect Sheltra sessions, routes and placements", long_about = None)]
pub struct Cli {
    /// JSON file standing in for browser storage
    #[arg(long, env = "SHELTRA_SESSION_FILE", default_value = ".sheltra/session.json")]
    pub session_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store a bearer token (and optional user JSON) as the current session
    Login {
        token: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show session state and identity
    Whoami,
    /// Evaluate navigation to a dashboard route
    Route { path: String },
    /// Show the sidebar menu for the current role
    Menu,
    /// Render placement timelines from a JSON file (one record or a list)
    Timeline {
        file: PathBuf,
        #[arg(long)]
        compact: bool,
    },
    /// Validate a refugee profile JSON file
    Profile { file: PathBuf },
    /// Validate a sign-in form JSON file (`emailOrPhone`, `password`)
    LoginForm { file: PathBuf },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("{} is not valid JSON for this command", path.display()))
}

fn emit(out: &mut impl Write, value: &Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

pub fn run(cli: &Cli, config: &SessionConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let gate = SessionGate::new(JsonFileSessionStore::new(&cli.session_file), config.clone());

    let report = match &cli.command {
        Command::Login { token, user } => {
            let user: Option<Value> = user
                .as_deref()
                .map(serde_json::from_str)
                .transpose()
                .context("--user must be a JSON value")?;
            if decode_token(token).is_none() {
                tracing::warn!("stored token does not decode; the session will read as signed out");
            }
            gate.login(token, user.as_ref())
                .with_context(|| format!("failed to write session to {}", cli.session_file.display()))?;
            tracing::info!(session_file = %cli.session_file.display(), "session stored");
            json!({ "state": gate.state() })
        }
        Command::Logout => {
            gate.clear_session();
            json!({ "state": gate.state() })
        }
        Command::Whoami => json!({
            "state": gate.state(),
            "identity": gate.identity(),
        }),
        Command::Route { path } => {
            let session = gate.snapshot();
            let (decision, redirect) = match RouteTable::sheltra().evaluate(path, &session) {
                None => ("not_found", None),
                Some(Ok(())) => ("admit", None),
                Some(Err(denied)) => {
                    let kind = match denied {
                        RouteDenied::Unauthenticated => "deny_unauthenticated",
                        RouteDenied::Unauthorized { .. } => "deny_unauthorized",
                    };
                    (kind, Some(denied.redirect_target(config).to_string()))
                }
            };
            json!({
                "path": path,
                "session": session,
                "decision": decision,
                "redirect": redirect,
            })
        }
        Command::Menu => {
            let role = gate.role();
            json!({
                "role": role,
                "items": menu_for_role(role.as_ref().map(|r| r.as_str())),
            })
        }
        Command::Timeline { file, compact } => {
            let records = match read_json::<OneOrMany<PlacementRecord>>(file)? {
                OneOrMany::Many(records) => records,
                OneOrMany::One(record) => vec![record],
            };
            let rendered: Vec<Value> = records
                .iter()
                .map(|record| {
                    if let Err(err) = record.check_consistency() {
                        tracing::warn!(placement = ?record.id, error = %err, "inconsistent placement record");
                    }
                    if *compact {
                        json!({ "id": record.id, "badge": compact_badge(record) })
                    } else {
                        json!({
                            "id": record.id,
                            "timeline": build_timeline(record),
                            "summary": summarize(record),
                        })
                    }
                })
                .collect();
            Value::Array(rendered)
        }
        Command::Profile { file } => {
            let profile: ProfileData = read_json(file)?;
            let errors = validate_profile(&profile);
            json!({ "valid": errors.is_empty(), "errors": errors })
        }
        Command::LoginForm { file } => {
            let form: LoginForm = read_json(file)?;
            let errors = validate_login(&form);
            json!({ "valid": errors.is_empty(), "errors": errors })
        }
    };

    emit(out, &report)
}
