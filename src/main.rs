use clap::Parser;
use microjot::core::config;
use microjot::store::MySqlConnector;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

/// Takes no arguments: settings come from MYSQL_* env vars, `.env`, or
/// ~/.microjot/config.toml.
#[derive(Parser)]
#[command(name = "microjot", version, about = "Write a micro blog post to MySQL from the terminal")]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<ExitCode> {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to microjot.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("microjot.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("microjot starting up");

    let resolved = match config::load_config().and_then(|c| config::resolve(&c)) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {e}");
            return Ok(ExitCode::from(1));
        }
    };

    // Terminal failures end the process here via `?`.
    let outcome = microjot::tui::run()?;

    let connector = MySqlConnector::new(&resolved);
    let report = microjot::persist(outcome, &connector, &resolved.table).await;

    match &report {
        None => println!("Entry discarded."),
        Some(report) => {
            let mut lines = report.status_lines().into_iter();
            if let Some(first) = lines.next() {
                if report.is_saved() {
                    println!("{first}");
                } else {
                    eprintln!("{first}");
                }
            }
            for line in lines {
                eprintln!("{line}");
            }
        }
    }

    let status = microjot::exit_status(report.as_ref());
    log::info!("microjot exiting with status {}", status);
    Ok(ExitCode::from(status))
}
