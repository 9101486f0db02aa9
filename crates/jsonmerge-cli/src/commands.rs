//! Merge and summary commands.

use std::io;
use std::path::Path;

use jsonmerge_core::reader::{read_document, records_of};
use jsonmerge_core::util::paths::expand_tilde;
use jsonmerge_core::{Config, MergeJob, MergeReport, Merger, Result, Selection, render_summary};

use crate::cli::MergeArgs;
use crate::folder::open_containing_folder;
use crate::render::{ProgressView, completion_message};

/// Build the selection for a merge from command-line inputs.
pub fn build_selection(config: &Config, args: &MergeArgs) -> Result<Selection> {
    let mut selection = Selection::new();
    for input in &args.inputs {
        let added = selection.add_input(input)?;
        tracing::debug!(input = %input, added, "Added input");
    }

    let output = args
        .output
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .unwrap_or(&config.output.default_file_name);
    selection.set_output(expand_tilde(output));

    tracing::info!(status = %selection.readiness(), "{}", selection.count_label());
    Ok(selection)
}

/// Run `jsonmerge merge`.
///
/// Progress goes to stderr; the summary goes to stdout unless `--quiet`.
pub async fn run_merge(config: &Config, args: &MergeArgs) -> Result<MergeReport> {
    let selection = build_selection(config, args)?;

    let mut settings = config.merge.clone();
    args.apply(&mut settings);

    let mut job = MergeJob::spawn(Merger::new(settings), &selection)?;
    let mut view = ProgressView::new(io::stderr());
    while let Some(event) = job.next_event().await {
        if let Err(e) = view.handle(&event) {
            tracing::debug!(error = %e, "Could not write progress");
        }
    }
    let report = job.join().await?;

    if !args.quiet {
        print!("{}", render_summary(&report.records));
    }
    eprintln!("{}", completion_message(&report));

    if args.open || config.output.open_folder {
        if let Err(e) = open_containing_folder(&report.output) {
            tracing::warn!(error = %e, "Could not open folder");
        }
    }

    Ok(report)
}

/// Run `jsonmerge summary`.
pub fn print_summary(file: &Path) -> Result<()> {
    let records = records_of(read_document(file)?);
    print!("{}", render_summary(&records));
    Ok(())
}
