//! Main application entry point and high-level flow coordination.
//!
//! Parses the command line, then either prints help/version or runs a single
//! sky search:
//!
//! 1. Set up output (JSON mode silences the logger, `--log` routes it to a file)
//! 2. Load configuration from the default or custom directory
//! 3. Select collaborators and run the search workflow
//! 4. Render the report, or print the user-facing error and exit with failure

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

use tonights_sky::args::{CliAction, ParsedArgs, display_help, display_version_info};
use tonights_sky::config::{self, Config};
use tonights_sky::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use tonights_sky::display::{log_report, report_json};
use tonights_sky::logger::Log;
use tonights_sky::search::Collaborators;
use tonights_sky::services::ServiceError;
use tonights_sky::sky::local_time::parse_local_hour;
use tonights_sky::{
    log_debug, log_end, log_error_exit, log_indented, log_pipe, log_version,
    log_warning,
};

/// Options for one search run, collected from the command line.
struct SearchOptions {
    city: String,
    debug_enabled: bool,
    config_dir: Option<String>,
    json: bool,
    readings_file: Option<String>,
    local_time: Option<String>,
    offline: bool,
    log_file: Option<String>,
}

fn main() {
    let parsed = ParsedArgs::from_env();

    let code = match parsed.action {
        CliAction::ShowVersion => {
            display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            display_help();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            EXIT_FAILURE
        }
        CliAction::Search {
            city,
            debug_enabled,
            config_dir,
            json,
            readings_file,
            local_time,
            offline,
            log_file,
        } => run_search(SearchOptions {
            city,
            debug_enabled,
            config_dir,
            json,
            readings_file,
            local_time,
            offline,
            log_file,
        }),
    };

    std::process::exit(code);
}

/// Run a search and return the process exit code.
///
/// Returning instead of exiting lets the file-logging guard flush on drop.
fn run_search(options: SearchOptions) -> i32 {
    if options.json {
        Log::set_enabled(false);
    }

    let _log_guard = match options.log_file.clone().map(Log::start_file_logging).transpose() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to start file logging: {e:#}");
            return EXIT_FAILURE;
        }
    };

    log_version!();

    match search(&options) {
        Ok(()) => {
            log_end!();
            EXIT_SUCCESS
        }
        Err(e) => {
            // Service failures carry their own user-facing wording
            let message = match e.downcast_ref::<ServiceError>() {
                Some(service_error) => service_error.to_string(),
                None => format!("{e:#}"),
            };
            if options.json {
                eprintln!("{message}");
            }
            log_error_exit!("{}", message);
            EXIT_FAILURE
        }
    }
}

fn search(options: &SearchOptions) -> Result<()> {
    if options.debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled");
    }

    if options.config_dir.is_some() {
        config::set_config_dir(options.config_dir.clone())
            .context("Failed to set configuration directory")?;
    }
    let config = Config::load()?;
    if options.debug_enabled {
        config.log_config();
    }

    if let Some(text) = &options.local_time
        && parse_local_hour(Some(text)).is_none()
    {
        log_pipe!();
        log_warning!("Could not read '{}' as a time, assuming {}:00", text, config.fallback_hour());
        log_indented!("Expected a 12-hour clock such as \"9:30 PM\"");
    }

    let collaborators = Collaborators::from_config(
        &config,
        options.offline,
        options.readings_file.as_ref().map(PathBuf::from),
    )?;

    let report = collaborators
        .workflow(&config)
        .with_time_override(options.local_time.clone())
        .debug(options.debug_enabled)
        .run(&options.city, Utc::now())
        .map_err(|e| {
            if options.debug_enabled
                && let Some(detail) = e.detail()
            {
                log_pipe!();
                log_debug!("{}", detail);
            }
            anyhow::Error::new(e)
        })?;

    if options.json {
        println!("{}", report_json(&report)?);
    } else {
        log_report(&report);
    }

    Ok(())
}

