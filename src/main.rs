// ==========================================
// Livestock Manager - command line entry
// ==========================================
// Prints the growth projection of one animal as JSON
//
// Usage:
//   livestock-manager [db_path] <animal_id> [today YYYY-MM-DD] [principal_email]
//
// db_path is recognised by its extension (.db/.sqlite/.sqlite3) or by
// existing on disk; otherwise the default path is used.
// Without principal_email the first privileged email from configuration is used.
// ==========================================

use chrono::NaiveDate;
use livestock_manager::api::{ErrorResponse, Principal};
use livestock_manager::app::{get_default_db_path, AppState};
use livestock_manager::config::ProjectionConfigReader;
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str =
    "usage: livestock-manager [db_path] <animal_id> [today YYYY-MM-DD] [principal_email]";

struct CliArgs {
    db_path: String,
    animal_id: String,
    today: NaiveDate,
    principal_email: Option<String>,
}

fn looks_like_db_path(arg: &str) -> bool {
    let lower = arg.to_lowercase();
    lower.ends_with(".db")
        || lower.ends_with(".sqlite")
        || lower.ends_with(".sqlite3")
        || Path::new(arg).is_file()
}

fn parse_args(args: Vec<String>) -> Result<CliArgs, String> {
    let mut args = args.into_iter().map(|a| a.trim().to_string()).peekable();

    let db_path = match args.peek() {
        Some(first) if looks_like_db_path(first) => args.next().unwrap_or_default(),
        _ => get_default_db_path(),
    };

    let animal_id = args
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| USAGE.to_string())?;

    let today = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{}': {}", raw, e))?,
        None => chrono::Local::now().date_naive(),
    };

    Ok(CliArgs {
        db_path,
        animal_id,
        today,
        principal_email: args.next().filter(|s| !s.is_empty()),
    })
}

fn main() -> ExitCode {
    livestock_manager::logging::init();

    let cli = match parse_args(std::env::args().skip(1).collect()) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    tracing::info!(
        "{} v{} - database: {}",
        livestock_manager::APP_NAME,
        livestock_manager::VERSION,
        cli.db_path
    );

    let state = match AppState::new(cli.db_path.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let email = match cli.principal_email.clone().or_else(|| {
        state
            .config_manager
            .get_privileged_emails()
            .ok()
            .and_then(|emails| emails.into_iter().next())
    }) {
        Some(email) => email,
        None => {
            eprintln!("no principal_email given and no privileged email configured\n{}", USAGE);
            return ExitCode::from(2);
        }
    };
    let principal = Principal::new(&email);

    match state
        .animal_api
        .get_animal_projection(&principal, &cli.animal_id, cli.today)
    {
        Ok(view) => match serde_json::to_string_pretty(&view) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("serialisation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            let response = ErrorResponse::from(&e);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}
