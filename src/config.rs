//! Configuration handling for csvdiff

/// Name of the trailing column that carries each row's status
pub const DEFAULT_STATUS_COLUMN: &str = "status";

/// How the run summary is shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    #[default]
    Terminal,
    Json,
    None,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(SummaryFormat::Terminal),
            "json" => Ok(SummaryFormat::Json),
            "none" => Ok(SummaryFormat::None),
            _ => Err(format!("Unknown summary format: {}", s)),
        }
    }
}

/// Configuration for diff operations
///
/// Passed explicitly to [`crate::DiffEngine`] and the loaders; nothing here is
/// held in global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Report progress at `info` level instead of `debug`
    pub verbose: bool,
    /// Name of the column appended to every result
    pub status_column: String,
    /// Diff archive pairs on the rayon pool
    pub parallel: bool,
    /// Summary shown after a run
    pub summary_format: SummaryFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            status_column: DEFAULT_STATUS_COLUMN.to_string(),
            parallel: false,
            summary_format: SummaryFormat::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable progress reporting
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the status column name
    pub fn with_status_column(mut self, name: impl Into<String>) -> Self {
        self.status_column = name.into();
        self
    }

    /// Enable parallel batch diffs
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set summary format
    pub fn with_summary_format(mut self, format: SummaryFormat) -> Self {
        self.summary_format = format;
        self
    }

    /// Log a progress message at the level the verbosity flag asks for
    pub(crate) fn progress(&self, args: std::fmt::Arguments<'_>) {
        if self.verbose {
            log::info!("{}", args);
        } else {
            log::debug!("{}", args);
        }
    }
}
