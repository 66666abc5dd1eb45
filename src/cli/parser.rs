use crate::core::{FilterSpec, SponsorshipFilter, WindowSpec};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ReportKind};
use crate::config::Config;
use crate::utils::path::expand_tilde;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for Venue Intel
/// Read-only KPI views over venue, event, ticket and payment CSV exports
#[derive(Parser)]
#[command(
    name = "venueintel",
    version = env!("CARGO_PKG_VERSION"),
    about = "Venue KPIs from CSV exports: revenue, attendance, cancellations, regions and sponsorship",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (folder holding the four CSV files)
    #[arg(global = true, long = "data", value_name = "DIR")]
    pub data: Option<String>,

    /// Use an alternate configuration file
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--config-file` when given, the platform default otherwise.
    pub fn config_path(&self) -> PathBuf {
        match &self.config_file {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        }
    }
}

/// Filters shared by every view (the dashboard sidebar).
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    #[arg(
        long,
        value_name = "RANGE",
        help = "Date range: YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same form, or 'all'"
    )]
    pub range: Option<String>,

    #[arg(
        long,
        value_name = "PERIOD",
        conflicts_with = "range",
        help = "Relative window ending on the last day of data: <N>d, ytd or all"
    )]
    pub period: Option<String>,

    #[arg(long, value_name = "CITY", help = "Restrict events to venues in this city ('All' for none)")]
    pub city: Option<String>,

    #[arg(long, value_enum, default_value = "all", help = "Sponsorship filter")]
    pub sponsored: SponsorshipFilter,
}

impl FilterArgs {
    /// Build the filter selection; `--range` wins over `--period` (clap
    /// rejects both together), none of them means the full span.
    pub fn to_spec(&self) -> AppResult<FilterSpec> {
        let window = match (&self.range, &self.period) {
            (Some(r), _) => WindowSpec::parse_range(r)?,
            (None, Some(p)) => WindowSpec::parse_period(p)?,
            (None, None) => WindowSpec::Full,
        };

        Ok(FilterSpec::new(window)
            .with_city(self.city.as_deref())
            .with_sponsorship(self.sponsored))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file and create the data directory
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show dataset statistics: row counts, date span, cities
    Info,

    /// Headline KPIs for the selected filters
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Headline KPIs plus the best-selling events
    Overview {
        #[arg(
            long,
            value_name = "PERIOD",
            default_value = "all",
            help = "Time window: 30d, 90d, ytd, all (any <N>d works)"
        )]
        period: String,

        #[arg(long, value_name = "N", help = "Number of events to list")]
        top: Option<usize>,
    },

    /// Daily revenue and attendance, with the peak days
    Trends {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_name = "N", help = "Number of peak days to list")]
        peak: Option<usize>,
    },

    /// Ranking by region (city > borough > neighborhood)
    Regions {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_name = "N", help = "Only show the first N regions")]
        top: Option<usize>,
    },

    /// Sponsored vs. non-sponsored events
    Sponsors {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export one report to a file
    Export {
        #[arg(long, value_enum)]
        report: ReportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },
}
