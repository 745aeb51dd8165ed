use std::path::PathBuf;

use chrono::{Duration as ChronoDuration, Utc};
use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};

use sheltra_auth::SessionConfig;
use sheltra_inspect::Cli;

struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("sheltra-inspect-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    fn session_file(&self) -> String {
        self.dir.join("session.json").display().to_string()
    }

    fn write(&self, name: &str, value: &Value) -> String {
        let path = self.dir.join(name);
        std::fs::write(&path, value.to_string()).expect("write fixture");
        path.display().to_string()
    }

    fn run(&self, args: &[&str]) -> Value {
        let session_file = self.session_file();
        let mut argv = vec!["sheltra-inspect", "--session-file", session_file.as_str()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("valid arguments");

        let mut out = Vec::new();
        sheltra_inspect::run(&cli, &SessionConfig::default(), &mut out).expect("command succeeds");
        serde_json::from_slice(&out).expect("command prints JSON")
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

fn mint_jwt(role: &str, valid_for: ChronoDuration) -> String {
    let claims = json!({
        "sub": "u-100",
        "email": "user@example.org",
        "role": role,
        "exp": (Utc::now() + valid_for).timestamp(),
    });
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"dev-secret"),
    )
    .expect("failed to encode jwt")
}

#[test]
fn login_whoami_route_logout() {
    let scratch = Scratch::new("session");

    let login = scratch.run(&["login", &mint_jwt("Refugee", ChronoDuration::minutes(30))]);
    assert_eq!(login["state"], json!("valid"));

    let whoami = scratch.run(&["whoami"]);
    assert_eq!(whoami["identity"]["id"], json!("u-100"));
    assert_eq!(whoami["identity"]["role"], json!("Refugee"));

    let route = scratch.run(&["route", "/placements"]);
    assert_eq!(route["decision"], json!("admit"));

    let route = scratch.run(&["route", "/admin"]);
    assert_eq!(route["decision"], json!("deny_unauthorized"));
    assert_eq!(route["redirect"], json!("/unauthorized"));

    let menu = scratch.run(&["menu"]);
    assert_eq!(menu["items"][2]["path"], json!("/placements"));

    let logout = scratch.run(&["logout"]);
    assert_eq!(logout["state"], json!("no_token"));

    let route = scratch.run(&["route", "/placements"]);
    assert_eq!(route["decision"], json!("deny_unauthenticated"));
    assert_eq!(route["redirect"], json!("/login"));
}

#[test]
fn expired_token_is_reported_as_expired() {
    let scratch = Scratch::new("expired");
    let login = scratch.run(&["login", &mint_jwt("admin", -ChronoDuration::minutes(1))]);
    assert_eq!(login["state"], json!("expired"));
    assert_eq!(scratch.run(&["whoami"])["identity"], Value::Null);
}

#[test]
fn unknown_route_is_not_found() {
    let scratch = Scratch::new("notfound");
    assert_eq!(scratch.run(&["route", "/reports"])["decision"], json!("not_found"));
}

#[test]
fn timeline_renders_single_and_list_files() {
    let scratch = Scratch::new("timeline");
    let single = scratch.write(
        "one.json",
        &json!({"id": 6, "status": "dropped", "appliedAt": "2025-01-20", "droppedAt": "2025-02-15"}),
    );
    let rendered = scratch.run(&["timeline", &single]);
    assert_eq!(rendered[0]["id"], json!("6"));
    assert_eq!(rendered[0]["timeline"].as_array().unwrap().len(), 6);
    assert_eq!(rendered[0]["summary"]["isTerminal"], json!(true));

    let list = scratch.write(
        "many.json",
        &json!([{"status": "offered"}, {"status": "bogus"}, {"id": -3, "status": 3}]),
    );
    let badges = scratch.run(&["timeline", "--compact", &list]);
    assert_eq!(badges[0]["badge"]["label"], json!("Offered"));
    assert_eq!(badges[1]["badge"]["status"], json!("applied"));
    assert_eq!(badges.as_array().unwrap().len(), 3);
    assert_eq!(badges[2]["badge"]["status"], json!("applied"));
}

#[test]
fn profile_validation_reports_errors() {
    let scratch = Scratch::new("profile");
    let file = scratch.write("profile.json", &json!({"firstName": "Amina", "email": "nope"}));
    let report = scratch.run(&["profile", &file]);
    assert_eq!(report["valid"], json!(false));
    assert_eq!(report["errors"]["email"], json!("Please enter a valid email address"));
    assert!(report["errors"].get("firstName").is_none());
}

#[test]
fn login_form_validation_reports_errors() {
    let scratch = Scratch::new("login-form");
    let bad = scratch.write("bad.json", &json!({"emailOrPhone": "amina", "password": "abc"}));
    let report = scratch.run(&["login-form", &bad]);
    assert_eq!(report["valid"], json!(false));
    assert_eq!(report["errors"]["password"], json!("Password must be at least 6 characters"));
    assert!(report["errors"].get("emailOrPhone").is_some());

    let good = scratch.write("good.json", &json!({"emailOrPhone": "5550102030", "password": "secret1"}));
    assert_eq!(scratch.run(&["login-form", &good])["valid"], json!(true));
}
