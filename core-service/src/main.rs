//! Ransomware Behaviour Monitoring - command-line driver

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ransomware_monitor_core::constants::{APP_NAME, APP_VERSION};
use ransomware_monitor_core::logic::auth::{self, PasswordStrength, SignInForm, SignUpForm};
use ransomware_monitor_core::logic::logs::{
    build_report, export, export_records, mock, ExportFormat, LogRecord, ReportRequest, TimeRange,
};
use ransomware_monitor_core::{
    AppConfig, DashboardState, Notification, NotificationKind, ToastQueue,
};

#[derive(Parser)]
#[command(name = "rbm")]
#[command(about = "Ransomware Behaviour Monitoring - honeypot log tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Start with an empty log table instead of the demo logs
    #[arg(long, global = true)]
    no_seed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import CSV files into the log table and print it
    Import {
        /// CSV files, imported in order
        #[arg(short, long, required = true)]
        file: Vec<PathBuf>,

        /// Only show rows matching this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate random honeypot logs as CSV
    Generate {
        #[arg(short, long, default_value = "20")]
        count: usize,

        /// RNG seed for repeatable output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the log table (after optional imports)
    Export {
        /// csv, json or jsonl
        #[arg(short = 'F', long, default_value = "csv")]
        format: ExportFormat,

        /// Output file (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// CSV files to import first
        #[arg(short, long)]
        file: Vec<PathBuf>,
    },

    /// Summarize the log table
    Report {
        /// today, this-week or all
        #[arg(short, long, default_value = "all")]
        range: TimeRange,

        /// Process name, or "all"
        #[arg(short, long, default_value = "all")]
        process: String,

        /// CSV files to import first
        #[arg(short, long)]
        file: Vec<PathBuf>,
    },

    /// Check a sign-in form
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        remember_me: bool,
    },

    /// Check a sign-up form
    SignUp {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if cli.no_seed {
        config.seed_demo = false;
    }

    let env = env_logger::Env::default().default_filter_or(config.log_filter.as_str());
    env_logger::Builder::from_env(env).init();
    log::debug!("Starting {} v{}", APP_NAME, APP_VERSION);

    match cli.command {
        Commands::Import { file, search, json } => {
            let (state, ok) = load_state(&config, &file).await;
            let rows: Vec<&LogRecord> = match &search {
                Some(q) => state.logs().search(q),
                None => state.logs().records().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_table(&rows);
            }
            Ok(exit_code(ok))
        }

        Commands::Generate { count, seed, output } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let records = mock::generate_logs(&mut rng, count, 0, Utc::now().naive_utc());

            match output {
                Some(path) => {
                    export_records(&records, &path, ExportFormat::Csv)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Generated {} logs into {:?}", records.len(), path);
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    export::write_records(&mut stdout, &records, ExportFormat::Csv)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Export { format, output, file } => {
            let (state, ok) = load_state(&config, &file).await;
            let path = output.unwrap_or_else(|| {
                config.export_dir.join(format!(
                    "honeypot-logs-{}.{}",
                    Utc::now().format("%Y-%m-%d-%H%M%S"),
                    format.extension()
                ))
            });

            let count = export_records(state.logs().records(), &path, format)
                .with_context(|| format!("exporting to {:?}", path))?;
            println!("Exported {} logs to {:?}", count, path);
            Ok(exit_code(ok))
        }

        Commands::Report { range, process, file } => {
            let (state, ok) = load_state(&config, &file).await;
            let request = ReportRequest { range, process_type: process };
            let report = build_report(state.logs().records(), &request, Utc::now().naive_utc());
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(exit_code(ok))
        }

        Commands::SignIn { email, password, remember_me } => {
            let form = SignInForm { email, password, remember_me: Some(remember_me) };
            Ok(print_form_result(auth::validate_sign_in(&form)))
        }

        Commands::SignUp { name, email, password, confirm_password } => {
            let strength = PasswordStrength::of(&password);
            println!(
                "Password: upper={} lower={} special={} length>=8={}",
                strength.has_upper_case,
                strength.has_lower_case,
                strength.has_special_char,
                strength.is_long_enough
            );
            let form = SignUpForm { full_name: name, email, password, confirm_password };
            Ok(print_form_result(auth::validate_sign_up(&form)))
        }
    }
}

/// Build the dashboard and run each import; false if any import failed
async fn load_state(config: &AppConfig, files: &[PathBuf]) -> (DashboardState, bool) {
    let mut state = DashboardState::new(config);
    let toasts = ToastQueue::new();
    let mut ok = true;

    for path in files {
        if state.import_file(path, &toasts).await.is_err() {
            ok = false;
        }
        for toast in toasts.drain() {
            print_toast(&toast);
        }
    }

    (state, ok)
}

fn print_toast(toast: &Notification) {
    let marker = match toast.kind {
        NotificationKind::Success => "[ok]",
        NotificationKind::Info => "[info]",
        NotificationKind::Error => "[error]",
    };
    eprintln!("{} {}: {}", marker, toast.title, toast.description);
}

fn print_table(rows: &[&LogRecord]) {
    println!(
        "{:>5}  {:<16} {:<19}  {:<10} {:<8} {}",
        "ID", "PROCESS", "TIMESTAMP", "STATUS", "SEVERITY", "SUMMARY"
    );
    for r in rows {
        println!(
            "{:>5}  {:<16} {:<19}  {:<10} {:<8} {}",
            r.id,
            r.process_type,
            r.timestamp,
            r.verdict_label(),
            r.severity_label(),
            r.behavior_summary
        );
    }
}

fn print_form_result(result: Result<(), auth::FormErrors>) -> ExitCode {
    match result {
        Ok(()) => {
            println!("Form is valid");
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for (field, messages) in &errors.fields {
                for msg in messages {
                    println!("{}: {}", field, msg);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
