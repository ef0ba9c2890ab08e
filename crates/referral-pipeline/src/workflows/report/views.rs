use crate::pipeline::{PaymentEligibility, PipelineStage, StyleTag};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StageCountEntry {
    pub stage: PipelineStage,
    pub stage_label: &'static str,
    pub style_tag: StyleTag,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleTagCountEntry {
    pub style_tag: StyleTag,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EarningsTotals {
    pub eligible_candidates: usize,
    pub conditional_candidates: usize,
    /// Whole ringgit owed across eligible candidates.
    pub eligible_amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    pub raw_status: Option<String>,
    pub stage: PipelineStage,
    pub stage_label: &'static str,
    pub style_tag: StyleTag,
    pub eligibility: PaymentEligibility,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub total: usize,
    pub stages: Vec<StageCountEntry>,
    pub style_tags: Vec<StyleTagCountEntry>,
    pub earnings: EarningsTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateView>>,
}
