//! Logging setup for the wcb CLI.
//!
//! Diagnostics go to stderr through `tracing`, so the JSON printed by
//! `wcb config` on stdout stays machine-readable.
//!
//! ```rust,no_run
//! use wcb_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("building config");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "wcb=debug,wcb_config=debug,wcb_cli=debug";
const QUIET_FILTER: &str = "wcb=error,wcb_config=error,wcb_cli=error";
const DEFAULT_FILTER: &str = "wcb=warn,wcb_config=warn,wcb_cli=warn";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for wcb crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. warnings for wcb crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the logger with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Whether stderr output should be colored.
///
/// `NO_COLOR` disables colors and takes precedence over `FORCE_COLOR`.
/// Otherwise terminal capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
