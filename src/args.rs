//! Command-line argument parsing and processing.
//!
//! This module turns the raw argument list into a [`CliAction`] for the main
//! dispatcher. Positional words form the city query, so `tonights-sky New York`
//! searches for "New York" without quoting. Unknown flags and flags missing
//! their value lead to the help text with a failure exit code.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Search the sky above a city
    Search {
        city: String,
        debug_enabled: bool,
        config_dir: Option<String>,
        json: bool,
        readings_file: Option<String>,
        local_time: Option<String>,
        offline: bool,
        log_file: Option<String>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Version takes
    /// precedence over help, and help over an argument error.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut json = false;
        let mut offline = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut readings_file: Option<String> = None;
        let mut local_time: Option<String> = None;
        let mut log_file: Option<String> = None;
        let mut city_words: Vec<String> = Vec::new();

        let mut args_iter = args.into_iter().skip(1).map(|s| s.as_ref().to_string());

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--json" | "-j" => json = true,
                "--offline" | "-o" => offline = true,
                "--config" | "-c" => match args_iter.next() {
                    Some(value) => config_dir = Some(value),
                    None => unknown_arg_found = true,
                },
                "--readings" | "-r" => match args_iter.next() {
                    Some(value) => readings_file = Some(value),
                    None => unknown_arg_found = true,
                },
                "--time" | "-t" => match args_iter.next() {
                    Some(value) => local_time = Some(value),
                    None => unknown_arg_found = true,
                },
                "--log" | "-l" => match args_iter.next() {
                    Some(value) => log_file = Some(value),
                    None => unknown_arg_found = true,
                },
                // Everything after "--" is part of the city name
                "--" => city_words.extend(args_iter.by_ref()),
                other if other.starts_with('-') && other.len() > 1 => {
                    if !display_help && !display_version {
                        log_warning!("Unknown argument: {}", other);
                    }
                    unknown_arg_found = true;
                }
                _ => city_words.push(arg),
            }
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help {
            CliAction::ShowHelp
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::Search {
                city: city_words.join(" "),
                debug_enabled,
                config_dir,
                json,
                readings_file,
                local_time,
                offline,
                log_file,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from `std::env::args()`.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Display version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Display custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("tonights-sky [OPTIONS] <city...>");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-j, --json             Print the report as JSON");
    log_indented!("-l, --log <file>       Write log output to a file");
    log_indented!("-o, --offline          Resolve the city from the bundled database");
    log_indented!("-r, --readings <file>  Read celestial positions from a JSON file");
    log_indented!("-t, --time <H:MM AM>   Override the local time at the city");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Examples:");
    log_indented!("tonights-sky Paris");
    log_indented!("tonights-sky --time \"9:30 PM\" New York");
    log_indented!("tonights-sky --offline --json \"Portland, United States\"");
    log_end!();
}
