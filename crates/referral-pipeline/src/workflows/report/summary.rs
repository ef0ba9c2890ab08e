use super::views::{
    CandidateView, EarningsTotals, PipelineSummary, StageCountEntry, StyleTagCountEntry,
};
use crate::pipeline::{
    CandidateSnapshot, ClassificationOutcome, PaymentEligibility, PipelineStage, StyleTag,
};
use crate::workflows::ats::CandidateRecord;
use std::collections::HashMap;
use tracing::debug;

/// A candidate paired with the stage it classified into.
#[derive(Debug, Clone)]
pub struct ClassifiedCandidate {
    pub candidate: Option<String>,
    pub line: Option<u64>,
    pub snapshot: CandidateSnapshot,
    pub outcome: ClassificationOutcome,
}

impl ClassifiedCandidate {
    pub fn to_view(&self) -> CandidateView {
        CandidateView {
            candidate: self.candidate.clone(),
            line: self.line,
            raw_status: self.snapshot.status.clone(),
            stage: self.outcome.stage,
            stage_label: self.outcome.stage_label,
            style_tag: self.outcome.style_tag,
            eligibility: self.outcome.eligibility,
        }
    }
}

/// Classified roster with per-stage tallies.
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub candidates: Vec<ClassifiedCandidate>,
    pub stage_counts: HashMap<PipelineStage, usize>,
}

impl PipelineReport {
    pub fn from_snapshots<I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = CandidateSnapshot>,
    {
        let mut report = Self::default();
        for snapshot in snapshots {
            report.push(None, None, snapshot);
        }
        report
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CandidateRecord>,
    {
        let mut report = Self::default();
        for record in records {
            report.push(record.candidate, record.line, record.snapshot);
        }
        debug!(candidates = report.candidates.len(), "classified ATS roster");
        report
    }

    fn push(
        &mut self,
        candidate: Option<String>,
        line: Option<u64>,
        snapshot: CandidateSnapshot,
    ) {
        let outcome = snapshot.outcome();
        *self.stage_counts.entry(outcome.stage).or_default() += 1;
        self.candidates.push(ClassifiedCandidate {
            candidate,
            line,
            snapshot,
            outcome,
        });
    }

    pub fn count(&self, stage: PipelineStage) -> usize {
        self.stage_counts.get(&stage).copied().unwrap_or(0)
    }

    /// Aggregated view in display order. Stages with no candidates are kept so
    /// chart axes stay stable.
    pub fn summary(&self, include_candidates: bool) -> PipelineSummary {
        let stages = PipelineStage::ordered()
            .into_iter()
            .map(|stage| StageCountEntry {
                stage,
                stage_label: stage.label(),
                style_tag: stage.style_tag(),
                count: self.count(stage),
            })
            .collect();

        let style_tags = StyleTag::ordered()
            .into_iter()
            .map(|style_tag| StyleTagCountEntry {
                style_tag,
                count: PipelineStage::ordered()
                    .into_iter()
                    .filter(|stage| stage.style_tag() == style_tag)
                    .map(|stage| self.count(stage))
                    .sum(),
            })
            .collect();

        let mut earnings = EarningsTotals::default();
        for entry in &self.candidates {
            match entry.outcome.eligibility {
                PaymentEligibility::Eligible(tier) => {
                    earnings.eligible_candidates += 1;
                    earnings.eligible_amount += tier.rule().amount;
                }
                PaymentEligibility::Conditional(_) => earnings.conditional_candidates += 1,
                PaymentEligibility::NotEligible => {}
            }
        }

        let candidates = include_candidates.then(|| {
            self.candidates
                .iter()
                .map(ClassifiedCandidate::to_view)
                .collect()
        });

        PipelineSummary {
            total: self.candidates.len(),
            stages,
            style_tags,
            earnings,
            candidates,
        }
    }
}
