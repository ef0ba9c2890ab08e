//! Candidate roster import from ATS spreadsheet exports.

mod parser;

use crate::pipeline::CandidateSnapshot;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum AtsImportError {
    #[error("failed to read ATS export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ATS CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("ATS export is missing the '{0}' column")]
    MissingColumn(&'static str),
}

/// One row of an ATS export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    /// Line number in the source file, when the reader tracks it.
    pub line: Option<u64>,
    pub candidate: Option<String>,
    pub snapshot: CandidateSnapshot,
}

pub struct AtsExportImporter;

impl AtsExportImporter {
    /// Reads an export from disk. `as_of` is the reference date used to derive
    /// days in stage from a `Stage Entered` column.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<CandidateRecord>, AtsImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let records = Self::from_reader(file, as_of)?;
        info!(path = %path.display(), rows = records.len(), "imported ATS export");
        Ok(records)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<CandidateRecord>, AtsImportError> {
        parser::parse_records(reader, as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineStage;
    use std::io::Cursor;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date")
    }

    #[test]
    fn stage_entered_derives_days_when_column_missing() {
        let csv = "Candidate,Status,Source,Stage Entered\n\
Aina,Cleared to Start,xRAF,2025-07-02\n\
Ben,Cleared to Start,xRAF,2025-07-03T09:00:00Z\n";
        let records =
            AtsExportImporter::from_reader(Cursor::new(csv), Some(as_of())).expect("import");

        assert_eq!(records[0].snapshot.days_in_stage, Some(90));
        assert_eq!(records[0].snapshot.stage(), PipelineStage::HiredConfirmed);
        assert_eq!(records[1].snapshot.days_in_stage, Some(89));
        assert_eq!(records[1].snapshot.stage(), PipelineStage::HiredProbation);
    }

    #[test]
    fn explicit_days_win_over_stage_entered() {
        let csv = "Status,Source,Days in Stage,Stage Entered\nGraduate,WFHxRAF,12,2025-01-01\n";
        let records =
            AtsExportImporter::from_reader(Cursor::new(csv), Some(as_of())).expect("import");
        assert_eq!(records[0].snapshot.days_in_stage, Some(12));
    }

    #[test]
    fn unparseable_days_without_reference_date_are_absent() {
        let csv = "Status,Source,Days in Stage,Stage Entered\nGraduate,xRAF,soon,2025-01-01\n";
        let records = AtsExportImporter::from_reader(Cursor::new(csv), None).expect("import");
        assert_eq!(records[0].snapshot.days_in_stage, None);
        assert_eq!(records[0].snapshot.stage(), PipelineStage::HiredProbation);
    }

    #[test]
    fn empty_cells_become_none() {
        let csv = "Candidate Name,Status,Assessment,Source\n,Evaluated,,\n";
        let records = AtsExportImporter::from_reader(Cursor::new(csv), None).expect("import");
        let record = &records[0];
        assert!(record.candidate.is_none());
        assert!(record.snapshot.assessment.is_none());
        assert!(record.snapshot.source.is_none());
        assert_eq!(record.line, Some(2));
    }

    #[test]
    fn missing_status_column_is_rejected() {
        let csv = "Candidate,Source\nAina,xRAF\n";
        let error = AtsExportImporter::from_reader(Cursor::new(csv), None)
            .expect_err("status column required");
        assert!(matches!(error, AtsImportError::MissingColumn("Status")));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = AtsExportImporter::from_path("./does-not-exist.csv", None)
            .expect_err("expected io error");
        match error {
            AtsImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
