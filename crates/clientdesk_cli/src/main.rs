//! CLI smoke and demo entry point.
//!
//! # Responsibility
//! - Verify `clientdesk_core` linkage with deterministic output.
//! - `demo` walks one session through the three screens against a fresh store.
//!
//! Logging is enabled when `CLIENTDESK_LOG_DIR` names an absolute directory;
//! `CLIENTDESK_LOG_LEVEL` overrides the build-mode default level.

use clientdesk_core::{
    client_cards, default_log_level, init_logging, meeting_cards, project_cards, ClientForm,
    EntityStore, MeetingForm, ProjectForm, View,
};
use log::warn;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = configure_logging() {
        eprintln!("logging disabled: {err}");
    }

    println!("clientdesk_core ping={}", clientdesk_core::ping());
    println!("clientdesk_core version={}", clientdesk_core::core_version());

    match std::env::args().nth(1).as_deref() {
        None => ExitCode::SUCCESS,
        Some("demo") => match run_demo() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("demo failed: {err}");
                ExitCode::FAILURE
            }
        },
        Some(other) => {
            eprintln!("unknown command `{other}`; expected `demo`");
            ExitCode::FAILURE
        }
    }
}

fn configure_logging() -> Result<(), String> {
    let Some(dir) = env_value("CLIENTDESK_LOG_DIR") else {
        return Ok(());
    };
    let level =
        env_value("CLIENTDESK_LOG_LEVEL").unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &dir)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = EntityStore::new();

    let mut clients = ClientForm::new();
    clients.set_name("Acme");
    clients.set_email("a@acme.com");
    clients.submit(&mut store)?;
    clients.set_name("Globex");
    clients.set_email("hello@globex.com");
    clients.submit(&mut store)?;

    clients.begin_edit(&store, 1);
    clients.set_name("Acme Corp");
    clients.submit(&mut store)?;

    let mut projects = ProjectForm::new();
    projects.set_name("Website");
    projects.select_client(Some(1));
    projects.submit(&mut store)?;

    let mut meetings = MeetingForm::new();
    meetings.set_title("Kickoff");
    meetings.set_date("2026-03-01T09:30");
    if let Err(err) = meetings.submit(&mut store) {
        warn!("event=demo_submit module=cli status=rejected");
        println!("meeting rejected: {err}");
    }
    meetings.select_client(Some(2));
    meetings.submit(&mut store)?;

    store.delete_client(1);

    for view in View::ALL {
        println!("== {} ({})", view.title(), view.path());
        match view {
            View::Clients => {
                for card in client_cards(&store) {
                    println!("  #{} {} <{}>", card.id, card.name, card.email);
                }
            }
            View::Projects => {
                for card in project_cards(&store) {
                    println!("  #{} {} client={}", card.id, card.name, card.client_name);
                }
            }
            View::Meetings => {
                for card in meeting_cards(&store) {
                    println!(
                        "  #{} {} at {} client={}",
                        card.id, card.title, card.date, card.client_name
                    );
                }
            }
        }
    }

    Ok(())
}
