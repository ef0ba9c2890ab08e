use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Cursor;

use super::classifier::{CandidateSnapshot, ClassificationOutcome};
use super::domain::{PipelineStage, StyleTag};
use super::earnings::earnings_structure;
use super::guide::{status_examples, StatusExample};
use crate::error::AppError;
use crate::workflows::ats::AtsExportImporter;
use crate::workflows::report::{PipelineReport, PipelineSummary};

/// Router builder exposing classification, reference tables and roster reports.
pub fn referral_router() -> Router {
    Router::new()
        .route("/api/v1/referrals/classify", post(classify_handler))
        .route("/api/v1/referrals/stages", get(stages_handler))
        .route("/api/v1/referrals/earnings", get(earnings_handler))
        .route("/api/v1/referrals/guide", get(guide_handler))
        .route("/api/v1/referrals/report", post(report_handler))
}

pub(crate) async fn classify_handler(
    Json(snapshot): Json<CandidateSnapshot>,
) -> Json<ClassificationOutcome> {
    Json(snapshot.outcome())
}

#[derive(Debug, Serialize)]
pub(crate) struct StageEntry {
    pub(crate) stage: PipelineStage,
    pub(crate) label: &'static str,
    pub(crate) style_tag: StyleTag,
    pub(crate) display_position: usize,
}

pub(crate) async fn stages_handler() -> Json<Vec<StageEntry>> {
    let stages = PipelineStage::ordered()
        .into_iter()
        .map(|stage| StageEntry {
            stage,
            label: stage.label(),
            style_tag: stage.style_tag(),
            display_position: stage.display_position(),
        })
        .collect();
    Json(stages)
}

pub(crate) async fn earnings_handler() -> Json<Value> {
    let mut structure = Map::new();
    for rule in earnings_structure() {
        let value = serde_json::to_value(rule).unwrap_or(Value::Null);
        structure.insert(rule.tier.key().to_string(), value);
    }
    Json(Value::Object(structure))
}

pub(crate) async fn guide_handler() -> Json<&'static [StatusExample]> {
    Json(status_examples())
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportRequest {
    #[serde(default)]
    pub(crate) candidates: Vec<CandidateSnapshot>,
    /// Raw ATS export; replaces `candidates` when present.
    #[serde(default)]
    pub(crate) ats_csv: Option<String>,
    #[serde(default)]
    pub(crate) as_of: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_candidates: bool,
}

pub(crate) async fn report_handler(
    Json(payload): Json<ReportRequest>,
) -> Result<Json<PipelineSummary>, AppError> {
    let ReportRequest {
        candidates,
        ats_csv,
        as_of,
        include_candidates,
    } = payload;

    let report = match ats_csv {
        Some(csv) => {
            let records = AtsExportImporter::from_reader(Cursor::new(csv.into_bytes()), as_of)?;
            PipelineReport::from_records(records)
        }
        None => PipelineReport::from_snapshots(candidates),
    };

    Ok(Json(report.summary(include_candidates)))
}
