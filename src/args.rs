//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the normal calculation with these settings
    Run {
        debug_enabled: bool,
        chabad_enabled: bool,
        date: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        elevation: Option<f64>,
        timezone: Option<String>,
        candle_minutes: Option<u32>,
        tefillin_degrees: Option<f64>,
        config_dir: Option<String>,
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
    /// This function processes the arguments and determines what action should
    /// be taken, including whether to show help, version info, or run normally.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut chabad_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut date: Option<String> = None;
        let mut latitude: Option<f64> = None;
        let mut longitude: Option<f64> = None;
        let mut elevation: Option<f64> = None;
        let mut timezone: Option<String> = None;
        let mut candle_minutes: Option<u32> = None;
        let mut tefillin_degrees: Option<f64> = None;
        let mut config_dir: Option<String> = None;

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = args_vec[i].as_str();
            match arg {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--chabad" | "-C" => chabad_enabled = true,
                "--config" | "-c" => {
                    if i + 1 < args_vec.len() {
                        config_dir = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_error!("{} requires a directory argument", arg);
                        unknown_arg_found = true;
                    }
                }
                "--date" => match take_value(&args_vec, &mut i, arg) {
                    Some(value) => date = Some(value),
                    None => unknown_arg_found = true,
                },
                "--lat" => match take_parsed(&args_vec, &mut i, arg) {
                    Some(value) => latitude = Some(value),
                    None => unknown_arg_found = true,
                },
                "--lon" => match take_parsed(&args_vec, &mut i, arg) {
                    Some(value) => longitude = Some(value),
                    None => unknown_arg_found = true,
                },
                "--elevation" => match take_parsed(&args_vec, &mut i, arg) {
                    Some(value) => elevation = Some(value),
                    None => unknown_arg_found = true,
                },
                "--timezone" => match take_value(&args_vec, &mut i, arg) {
                    Some(value) => timezone = Some(value),
                    None => unknown_arg_found = true,
                },
                "--candles" => match take_parsed(&args_vec, &mut i, arg) {
                    Some(value) => candle_minutes = Some(value),
                    None => unknown_arg_found = true,
                },
                "--tefillin-deg" => match take_parsed(&args_vec, &mut i, arg) {
                    Some(value) => tefillin_degrees = Some(value),
                    None => unknown_arg_found = true,
                },
                _ => {
                    log_warning!("Unknown argument: {}", arg);
                    unknown_arg_found = true;
                }
            }
            i += 1;
        }

        let action = if display_help {
            CliAction::ShowHelp
        } else if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::Run {
                debug_enabled,
                chabad_enabled,
                date,
                latitude,
                longitude,
                elevation,
                timezone,
                candle_minutes,
                tefillin_degrees,
                config_dir,
            }
        };

        ParsedArgs { action }
    }
}

/// Consume the value following a flag, logging an error if it is missing.
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Option<String> {
    if *i + 1 < args.len() {
        *i += 1;
        Some(args[*i].clone())
    } else {
        log_error!("{} requires a value", flag);
        None
    }
}

/// Consume and parse the value following a flag.
fn take_parsed<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Option<T> {
    let raw = take_value(args, i, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log_error!("Invalid value for {}: {}", flag, raw);
            None
        }
    }
}

/// Displays version information using logger methods.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("luach [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>       Use custom configuration directory");
    log_indented!("-C, --chabad             Also print the Chabad marker set");
    log_indented!("-d, --debug              Enable detailed debug output");
    log_indented!("-h, --help               Print help information");
    log_indented!("-V, --version            Print version information");
    log_indented!("    --date <YYYY-MM-DD>  Calculate for a specific civil date");
    log_indented!("    --lat <degrees>      Override latitude");
    log_indented!("    --lon <degrees>      Override longitude");
    log_indented!("    --elevation <m>      Override observer elevation in meters");
    log_indented!("    --timezone <name>    Explicit IANA timezone (e.g. Asia/Jerusalem)");
    log_indented!("    --candles <minutes>  Override candle lighting lead time");
    log_indented!("    --tefillin-deg <deg> Override misheyakir depression angle");
    log_end!();
}
