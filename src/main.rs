//! Main application entry point and high-level flow coordination.
//!
//! This module orchestrates the run after command-line argument parsing is
//! complete:
//!
//! 1. Argument parsing and early exit for help/version
//! 2. Configuration loading and CLI override merging
//! 3. Timezone resolution for the query date
//! 4. Marker derivation (GRA, optionally Alter Rebbe) and Shabbat times
//! 5. Formatted output through the logger

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use luach::args::{CliAction, ParsedArgs, display_help, display_version_info};
use luach::zmanim::display;
use luach::{
    Config, Location, LocationOptions, SolarDay, log_block_start, log_debug, log_end,
    log_error, log_indented, log_version,
};

struct RunSettings {
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
}

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let exit_code = match parsed.action {
        CliAction::ShowHelp => {
            display_help();
            0
        }
        CliAction::ShowVersion => {
            display_version_info();
            0
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            1
        }
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
        } => {
            let settings = RunSettings {
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
            };
            match run(settings) {
                Ok(()) => 0,
                Err(error) => {
                    log_error!("{error:#}");
                    log_end!();
                    1
                }
            }
        }
    };

    std::process::exit(exit_code);
}

fn run(settings: RunSettings) -> Result<()> {
    log_version!();

    let config = Config::load(settings.config_dir.as_deref())?;
    if settings.debug_enabled {
        let path = luach::config::get_config_path(settings.config_dir.as_deref())?;
        log_debug!("Config path: {}", path.display());
    }

    // CLI overrides win over the config file field by field.
    let latitude = settings
        .latitude
        .or(config.latitude)
        .context("No latitude configured; pass --lat or set latitude in luach.toml")?;
    let longitude = settings
        .longitude
        .or(config.longitude)
        .context("No longitude configured; pass --lon or set longitude in luach.toml")?;

    let date = match &settings.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date \"{raw}\", expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let options = LocationOptions {
        elevation: settings.elevation.or(config.elevation),
        timezone_name: settings.timezone.or(config.timezone),
        candle_minutes: settings.candle_minutes.or(config.candle_minutes),
        tefillin_degrees: settings.tefillin_degrees.or(config.tefillin_degrees),
    };
    let (location, tz) = Location::from_coordinates(latitude, longitude, date, &options)?;

    log_block_start!("Location");
    log_indented!("Coordinates         {:.4}, {:.4}", location.latitude, location.longitude);
    log_indented!("Elevation           {} m", location.elevation);
    log_indented!(
        "Timezone            {} (UTC{:+}) {}",
        tz.name,
        tz.offset_hours,
        tz.dst_label
    );
    log_indented!("Date                {}", date);
    if settings.debug_enabled {
        log_debug!(
            "Candle minutes {} | tefillin degrees {}",
            location.candle_minutes,
            location.tefillin_degrees
        );
    }

    let solar_day = SolarDay::new(location, date);
    display::print_gra_zmanim(&solar_day.gra_zmanim());
    if settings.chabad_enabled {
        display::print_chabad_zmanim(&solar_day.chabad_zmanim());
    }
    display::print_shabbos_times(&solar_day.shabbos_times());

    log_end!();
    Ok(())
}
