use crate::infra::parse_date;
use chrono::NaiveDate;
use clap::Args;
use referral_pipeline::config::AppConfig;
use referral_pipeline::error::AppError;
use referral_pipeline::pipeline::{
    earnings_structure, status_examples, CandidateSnapshot, ClassificationOutcome,
    ReferralChannel,
};
use referral_pipeline::workflows::ats::AtsExportImporter;
use referral_pipeline::workflows::report::{PipelineReport, PipelineSummary};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Raw ATS status label
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Application source (xRAF, WFHxRAF, or any other channel)
    #[arg(long)]
    pub(crate) source: Option<String>,
    /// Days the candidate has spent in the current status
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) days_in_stage: Option<i64>,
    /// Assessment result as recorded by the ATS
    #[arg(long)]
    pub(crate) assessment: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// ATS CSV export (defaults to REFERRAL_ATS_EXPORT)
    #[arg(long)]
    pub(crate) ats_csv: Option<PathBuf>,
    /// Reference date for the `Stage Entered` column (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Include one line per candidate in the output
    #[arg(long)]
    pub(crate) list_candidates: bool,
}

pub(crate) fn run_classify(args: ClassifyArgs) {
    let ClassifyArgs {
        status,
        source,
        days_in_stage,
        assessment,
    } = args;

    let channel = ReferralChannel::from_source(source.as_deref());
    let snapshot = CandidateSnapshot {
        status,
        assessment,
        source,
        days_in_stage,
    };
    let outcome = snapshot.outcome();
    render_outcome(&snapshot, channel, &outcome);
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        ats_csv,
        as_of,
        list_candidates,
    } = args;

    let path = match ats_csv {
        Some(path) => path,
        None => AppConfig::load()?.report.ats_export.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "no ATS export given; pass --ats-csv or set REFERRAL_ATS_EXPORT",
            )
        })?,
    };

    let records = AtsExportImporter::from_path(&path, as_of)?;
    let report = PipelineReport::from_records(records);
    render_summary(&report.summary(list_candidates), &path, as_of);
    Ok(())
}

pub(crate) fn run_guide() {
    println!("Referral pipeline stages");
    for example in status_examples() {
        println!("- {} [{}]", example.status, example.stage.style_tag());
        println!("    {}", example.description);
        println!("    Action: {}", example.action);
    }

    println!("\nEarnings structure");
    for rule in earnings_structure() {
        println!(
            "- {} ({}): {} | {}",
            rule.label,
            rule.tier.key(),
            rule.payment,
            rule.condition
        );
    }
}

fn render_outcome(
    snapshot: &CandidateSnapshot,
    channel: ReferralChannel,
    outcome: &ClassificationOutcome,
) {
    println!("Status: {}", snapshot.status.as_deref().unwrap_or("(none)"));
    println!("Channel: {}", channel.label());
    if let Some(days) = snapshot.days_in_stage {
        println!("Days in stage: {days}");
    }
    println!(
        "Stage: {} (position {} of 8)",
        outcome.stage_label,
        outcome.display_position + 1
    );
    println!("Style tag: {}", outcome.style_tag);
    println!("Payment: {}", outcome.eligibility.summary());
    println!("Next step: {}", outcome.stage.example().action);
}

fn render_summary(summary: &PipelineSummary, path: &Path, as_of: Option<NaiveDate>) {
    println!("Referral pipeline report");
    println!("- Source: {}", path.display());
    if let Some(as_of) = as_of {
        println!("- As of: {as_of}");
    }
    println!("- Candidates: {}", summary.total);

    println!("\nStages");
    for entry in &summary.stages {
        println!(
            "  - {:<32} {:>4}  [{}]",
            entry.stage_label, entry.count, entry.style_tag
        );
    }

    println!("\nPayments");
    println!(
        "  - {} candidate(s) eligible for RM{} in total",
        summary.earnings.eligible_candidates, summary.earnings.eligible_amount
    );
    println!(
        "  - {} candidate(s) eligible for the assessment bonus once passed",
        summary.earnings.conditional_candidates
    );

    if let Some(candidates) = &summary.candidates {
        println!("\nCandidates");
        for view in candidates {
            println!(
                "  - {} | {} -> {} | {}",
                view.candidate.as_deref().unwrap_or("(unnamed)"),
                view.raw_status.as_deref().unwrap_or("(no status)"),
                view.stage_label,
                view.eligibility.summary()
            );
        }
    }
}
