use crate::commands::{run_classify, run_guide, run_report, ClassifyArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use referral_pipeline::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Referral Pipeline",
    about = "Classify referred candidates and report on the xRAF hiring pipeline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a single ATS status
    Classify(ClassifyArgs),
    /// Summarize an ATS export by pipeline stage
    Report(ReportArgs),
    /// Print the stage guide and earnings structure
    Guide,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => {
            run_classify(args);
            Ok(())
        }
        Command::Report(args) => run_report(args),
        Command::Guide => {
            run_guide();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_defaults_to_serve() {
        let cli = Cli::try_parse_from(["referral-pipeline-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn classify_accepts_negative_day_counts() {
        let cli = Cli::try_parse_from([
            "referral-pipeline-api",
            "classify",
            "--status",
            "Graduate",
            "--source",
            "xRAF",
            "--days-in-stage=-4",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Classify(args)) => {
                assert_eq!(args.status.as_deref(), Some("Graduate"));
                assert_eq!(args.days_in_stage, Some(-4));
            }
            other => panic!("expected classify command, got {other:?}"),
        }
    }

    #[test]
    fn report_parses_reference_date() {
        let cli = Cli::try_parse_from([
            "referral-pipeline-api",
            "report",
            "--ats-csv",
            "export.csv",
            "--as-of",
            "2025-09-30",
            "--list-candidates",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.as_of, chrono::NaiveDate::from_ymd_opt(2025, 9, 30));
                assert!(args.list_candidates);
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }
}
