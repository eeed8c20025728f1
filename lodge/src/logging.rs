//! Stderr logging with a verbosity dial.
//!
//! Booking operations report progress on stderr so that stdout stays
//! reserved for machine-readable output (booking ids, listings). The
//! level decides how chatty that stderr stream is.

use std::env;
use std::fmt;

/// How much operational detail goes to stderr.
///
/// Levels order from least to most output, so a plain comparison answers
/// "should this message print".
///
/// # Examples
///
/// ```
/// use lodge::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only reach the caller through exit codes; stderr stays silent.
    Quiet,
    /// Errors and warnings, such as deleting a still-active booking.
    Normal,
    /// Everything, including per-step detail like conflict checks.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a level name, case-insensitively.
    ///
    /// This is the format accepted by the `LODGE_LOG_MODE` environment
    /// variable: "quiet", "normal", or "verbose".
    ///
    /// # Errors
    ///
    /// Returns an error naming the rejected value if it is none of the
    /// three levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("Verbose").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("debug").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A level-gated stderr logger.
///
/// # Examples
///
/// ```
/// use lodge::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("booking is approved but unpaid");
/// logger.debug("checking window for room 101"); // suppressed at Normal
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger that prints at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Reports a failure. Suppressed only at Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Reports a condition worth a second look, such as removing a
    /// booking the owner had already approved. Suppressed only at Quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Reports routine progress, such as which room a stay was priced
    /// against. Verbose only.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Reports fine-grained detail for troubleshooting. Verbose only.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from the CLI flags and the environment.
///
/// Explicit flags win over `LODGE_LOG_MODE`, which wins over the Normal
/// default. When both flags are set, `verbose` wins; an unparseable
/// environment value falls through to the default rather than failing
/// the whole invocation.
///
/// # Examples
///
/// ```
/// use lodge::{init_logger, LogLevel};
///
/// let logger = init_logger(false, true);
/// assert_eq!(logger.level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("LODGE_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
