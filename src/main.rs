mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod trials;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use crate::error::KbError;
use crate::input::load_dataset;
use crate::model::profile::AggregationProfile;
use crate::model::{Domain, UnifiedRecord};
use crate::pipeline::dashboard::{Selection, build_dashboard};
use crate::pipeline::stage1_normalize::run_stage1;
use crate::pipeline::stage2_filter::category_vocabulary;
use crate::pipeline::stage3_sort::{SortField, SortState};
use crate::pipeline::stage5_report::write_reports;
use crate::report::json::{render_rows_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::trials::lookup::resolve_trials;

#[derive(Debug, Parser)]
#[command(
    name = "eligibility-kb",
    version,
    about = "Clinical-trial eligibility term dashboard: tables, distributions and trial panels"
)]
struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the dashboard for a selection and write report files
    Run {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory
        #[arg(long)]
        out: PathBuf,
    },
    /// Build the dashboard for a selection and print it
    Show {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the trials analysed for a disorder or cancer type
    Trials {
        #[arg(long, value_enum, default_value_t = Domain::Neurology)]
        domain: Domain,

        /// Defaults to the domain's first sidebar label
        #[arg(long)]
        label: Option<String>,
    },
    /// List the distinct categories of a dataset
    Categories {
        /// Directory holding Neurology.json / Oncology.json
        #[arg(long)]
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Domain::Neurology)]
        domain: Domain,
    },
    /// List the sidebar labels, for one domain or all of them
    Labels {
        #[arg(long, value_enum)]
        domain: Option<Domain>,
    },
}

#[derive(Debug, Args)]
struct SelectionArgs {
    /// Directory holding Neurology.json / Oncology.json (optionally .gz)
    #[arg(long)]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = Domain::Neurology)]
    domain: Domain,

    /// Disorder or cancer type; defaults to the domain's first sidebar label
    #[arg(long, conflicts_with = "all_labels")]
    label: Option<String>,

    /// Do not restrict to a single disorder or cancer type
    #[arg(long)]
    all_labels: bool,

    /// Case-insensitive text matched against term, category and standard code
    #[arg(long)]
    search: Option<String>,

    /// Exact category to keep in the table
    #[arg(long)]
    category: Option<String>,

    /// Column header clicks, replayed in order from the default term-ascending
    /// sort. Repeating a column flips its direction.
    #[arg(long = "sort", value_enum)]
    sort_clicks: Vec<SortField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Rows,
}

impl SelectionArgs {
    fn to_selection(&self) -> Selection {
        let mut selection = Selection::for_domain(self.domain);
        if self.all_labels {
            selection.label = None;
        } else if let Some(label) = &self.label {
            selection.label = Some(label.clone());
        }
        selection.search = self.search.clone();
        selection.category = self.category.clone();
        selection.sort = SortState::from_clicks(&self.sort_clicks);
        selection
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), KbError> {
    let profile = AggregationProfile::default_v1();
    match command {
        Command::Run { selection, out } => {
            let records = load_records(&selection.input, selection.domain)?;
            let view = build_dashboard(&records, &selection.to_selection(), &profile);
            write_reports(&view, &out)?;
        }
        Command::Show { selection, format } => {
            let records = load_records(&selection.input, selection.domain)?;
            let view = build_dashboard(&records, &selection.to_selection(), &profile);
            let rendered = match format {
                OutputFormat::Text => render_report_text(&view),
                OutputFormat::Json => render_summary_json(&view)?,
                OutputFormat::Rows => render_rows_json(&view.rows)?,
            };
            print!("{rendered}");
        }
        Command::Trials { domain, label } => {
            let label = label.unwrap_or_else(|| domain.default_label().to_string());
            let panel = resolve_trials(domain, &label);
            println!("{}", panel.heading());
            for trial in &panel.trials {
                if trial.link.is_navigable() {
                    println!("{}\t{}", trial.name, trial.link.href());
                } else {
                    println!("{}\t(no registry entry)", trial.name);
                }
            }
            if panel.trials.is_empty() {
                info!(domain = %domain, label = %label, "no trials mapped for label");
            }
        }
        Command::Categories { input, domain } => {
            let records = load_records(&input, domain)?;
            for category in category_vocabulary(&records) {
                println!("{category}");
            }
        }
        Command::Labels { domain } => {
            let domains = match domain {
                Some(d) => vec![d],
                None => Domain::all().to_vec(),
            };
            for d in domains {
                for label in d.labels() {
                    println!("{d}\t{label}");
                }
            }
        }
    }
    Ok(())
}

fn load_records(input_dir: &Path, domain: Domain) -> Result<Vec<UnifiedRecord>, KbError> {
    let bundle = load_dataset(input_dir, domain)?;
    let path = bundle.path;
    let stage1 = run_stage1(bundle.raw, bundle.domain);
    debug!(
        domain = %bundle.domain,
        path = %path.display(),
        records = stage1.audit.n_records,
        unrecognized_inclusion = stage1.audit.unrecognized_inclusion,
        "dataset normalized"
    );
    Ok(stage1.records)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
