use crate::pipeline::CandidateSnapshot;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::debug;

use super::{AtsImportError, CandidateRecord};

const STATUS_COLUMN: &str = "status";

pub(crate) fn parse_records<R: Read>(
    reader: R,
    as_of: Option<NaiveDate>,
) -> Result<Vec<CandidateRecord>, AtsImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    if !headers.iter().any(|header| header == STATUS_COLUMN) {
        return Err(AtsImportError::MissingColumn("Status"));
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|position| position.line());
        let row: AtsRow = record.deserialize(Some(&headers))?;
        records.push(row.into_record(line, as_of));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AtsRow {
    #[serde(
        rename = "candidate",
        alias = "candidate name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    candidate: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    assessment: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(
        rename = "days in stage",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    days_in_stage: Option<String>,
    #[serde(
        rename = "stage entered",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    stage_entered: Option<String>,
}

impl AtsRow {
    fn into_record(self, line: Option<u64>, as_of: Option<NaiveDate>) -> CandidateRecord {
        let days_in_stage = self.days_in_stage(line, as_of);
        CandidateRecord {
            line,
            candidate: self.candidate,
            snapshot: CandidateSnapshot {
                status: self.status,
                assessment: self.assessment,
                source: self.source,
                days_in_stage,
            },
        }
    }

    fn days_in_stage(&self, line: Option<u64>, as_of: Option<NaiveDate>) -> Option<i64> {
        if let Some(raw) = self.days_in_stage.as_deref() {
            match parse_days(raw) {
                Some(days) => return Some(days),
                None => debug!(?line, value = raw, "ignoring unparseable days in stage"),
            }
        }

        let entered = self
            .stage_entered
            .as_deref()
            .and_then(parse_datetime)
            .map(|dt| dt.date())?;
        as_of.map(|today| (today - entered).num_days())
    }
}

fn normalize_header(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_ascii_lowercase()
}

fn parse_days(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(days) = trimmed.parse::<i64>() {
        return Some(days);
    }

    // Spreadsheet exports sometimes write whole numbers as "95.0".
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .map(|value| value as i64)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_case_and_bom_insensitive() {
        assert_eq!(normalize_header("\u{feff}Status "), "status");
        assert_eq!(normalize_header("Days In Stage"), "days in stage");
    }

    #[test]
    fn days_accept_integers_and_whole_floats_only() {
        assert_eq!(parse_days("95"), Some(95));
        assert_eq!(parse_days(" -3 "), Some(-3));
        assert_eq!(parse_days("95.0"), Some(95));
        assert_eq!(parse_days("89.5"), None);
        assert_eq!(parse_days("ninety"), None);
    }

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parse_datetime("2025-06-01T08:30:00Z").expect("parse rfc");
        assert_eq!(rfc.date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let date = parse_datetime("2025-06-01").expect("parse date");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert!(parse_datetime("  ").is_none());
        assert!(parse_datetime("01/06/2025").is_none());
    }
}
