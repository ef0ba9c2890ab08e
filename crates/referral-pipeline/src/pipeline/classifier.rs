use super::channel::ReferralChannel;
use super::domain::{PipelineStage, StyleTag};
use super::earnings::PaymentEligibility;
use super::normalizer::normalize_label;
use super::rules::{self, PROBATION_DAYS};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Point-in-time view of a candidate as exported by the ATS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    #[serde(default)]
    pub status: Option<String>,
    /// Carried for callers that already send it; classification ignores it.
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub days_in_stage: Option<i64>,
}

impl CandidateSnapshot {
    pub fn new(status: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn with_days_in_stage(mut self, days: i64) -> Self {
        self.days_in_stage = Some(days);
        self
    }

    pub fn stage(&self) -> PipelineStage {
        classify(
            self.status.as_deref(),
            self.assessment.as_deref(),
            self.source.as_deref(),
            self.days_in_stage,
        )
    }

    pub fn outcome(&self) -> ClassificationOutcome {
        ClassificationOutcome::for_stage(self.stage())
    }
}

/// Everything a consumer needs to render one classified candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationOutcome {
    pub stage: PipelineStage,
    pub stage_label: &'static str,
    pub style_tag: StyleTag,
    pub display_position: usize,
    pub eligibility: PaymentEligibility,
}

impl ClassificationOutcome {
    pub const fn for_stage(stage: PipelineStage) -> Self {
        Self {
            stage,
            stage_label: stage.label(),
            style_tag: stage.style_tag(),
            display_position: stage.display_position(),
            eligibility: PaymentEligibility::for_stage(stage),
        }
    }
}

/// Maps a raw ATS status to its pipeline stage.
///
/// Never fails: unknown labels fall back to
/// [`PipelineStage::ApplicationReceived`] and missing or negative day counts
/// count as probation. Candidates from any non-referral source short-circuit to
/// [`PipelineStage::PreviouslyApplied`] before the status is looked at.
pub fn classify(
    status: Option<&str>,
    _assessment: Option<&str>,
    source: Option<&str>,
    days_in_stage: Option<i64>,
) -> PipelineStage {
    let raw_status = match status {
        Some(value) if !value.is_empty() => value,
        _ => return PipelineStage::ApplicationReceived,
    };

    let channel = ReferralChannel::from_source(source);
    if !channel.is_referral() {
        return PipelineStage::PreviouslyApplied;
    }

    let normalized = normalize_label(raw_status);
    let stage = classify_referral(&normalized, channel, days_in_stage);
    trace!(
        status = %normalized,
        channel = channel.label(),
        stage = stage.label(),
        "classified status"
    );
    stage
}

fn classify_referral(
    normalized: &str,
    channel: ReferralChannel,
    days_in_stage: Option<i64>,
) -> PipelineStage {
    if rules::matches_any(rules::APPLICATION_RECEIVED, normalized) {
        return PipelineStage::ApplicationReceived;
    }

    if !channel.is_work_from_home() && rules::matches_any(rules::ASSESSMENT_STAGE, normalized) {
        return PipelineStage::AssessmentStage;
    }

    if rules::matches_any(rules::HIRED, normalized) {
        let confirmed = days_in_stage.is_some_and(|days| days >= PROBATION_DAYS);
        return match (channel.is_work_from_home(), confirmed) {
            (true, true) => PipelineStage::HiredWfhConfirmed,
            (true, false) => PipelineStage::HiredWfhProbation,
            (false, true) => PipelineStage::HiredConfirmed,
            (false, false) => PipelineStage::HiredProbation,
        };
    }

    if rules::matches_any(rules::NOT_SELECTED, normalized) {
        return PipelineStage::NotSelected;
    }

    PipelineStage::ApplicationReceived
}

/// Styling bucket for a raw ATS snapshot.
pub fn style_tag(
    status: Option<&str>,
    assessment: Option<&str>,
    source: Option<&str>,
    days_in_stage: Option<i64>,
) -> StyleTag {
    classify(status, assessment, source, days_in_stage).style_tag()
}

/// Stage shown on candidate detail views. Same result as [`classify`].
pub fn determine_stage(
    status: Option<&str>,
    assessment: Option<&str>,
    source: Option<&str>,
    days_in_stage: Option<i64>,
) -> PipelineStage {
    classify(status, assessment, source, days_in_stage)
}

pub const fn display_order() -> [PipelineStage; 8] {
    PipelineStage::ordered()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xraf(status: &str, days: Option<i64>) -> PipelineStage {
        classify(Some(status), None, Some("xRAF"), days)
    }

    fn wfh(status: &str, days: Option<i64>) -> PipelineStage {
        classify(Some(status), None, Some("WFHxRAF"), days)
    }

    #[test]
    fn absent_or_empty_status_short_circuits() {
        assert_eq!(
            classify(None, None, Some("xRAF"), None),
            PipelineStage::ApplicationReceived
        );
        assert_eq!(
            classify(Some(""), None, Some("LinkedIn"), Some(200)),
            PipelineStage::ApplicationReceived
        );
    }

    #[test]
    fn whitespace_status_still_honors_source_override() {
        assert_eq!(
            classify(Some("   "), None, Some("LinkedIn"), None),
            PipelineStage::PreviouslyApplied
        );
        assert_eq!(xraf("   ", None), PipelineStage::ApplicationReceived);
    }

    #[test]
    fn hired_substring_matches_any_label() {
        assert_eq!(xraf("Hired - Batch 4", Some(10)), PipelineStage::HiredProbation);
        assert_eq!(xraf("Rehired", Some(90)), PipelineStage::HiredConfirmed);
    }

    #[test]
    fn application_received_rule_wins_before_substrings() {
        assert_eq!(xraf("Employee Referral", None), PipelineStage::ApplicationReceived);
        assert_eq!(wfh("Incomplete", Some(400)), PipelineStage::ApplicationReceived);
    }

    #[test]
    fn assessment_beats_not_selected_for_referrals() {
        // "interview scheduled" is checked before the "declined" fragment.
        assert_eq!(
            xraf("Interview Scheduled - Declined", None),
            PipelineStage::AssessmentStage
        );
        assert_eq!(
            wfh("Interview Scheduled - Declined", None),
            PipelineStage::NotSelected
        );
    }

    #[test]
    fn wfh_assessment_labels_fall_through() {
        assert_eq!(wfh("Screened", None), PipelineStage::ApplicationReceived);
        assert_eq!(wfh("SHL Assessment Sent", None), PipelineStage::ApplicationReceived);
    }

    #[test]
    fn negative_days_stay_on_probation() {
        assert_eq!(xraf("Cleared to Start", Some(-5)), PipelineStage::HiredProbation);
        assert_eq!(wfh("Graduate", Some(i64::MIN)), PipelineStage::HiredWfhProbation);
    }

    #[test]
    fn unrecorded_source_follows_the_primary_path() {
        assert_eq!(
            classify(Some("Cleared to Start"), None, None, Some(120)),
            PipelineStage::HiredConfirmed
        );
        assert_eq!(
            classify(Some("Screened"), None, Some(""), None),
            PipelineStage::AssessmentStage
        );
    }

    #[test]
    fn assessment_argument_is_ignored() {
        let without = classify(Some("Evaluated"), None, Some("xraf"), None);
        let with = classify(Some("Evaluated"), Some("Failed"), Some("xraf"), None);
        assert_eq!(without, with);
    }

    #[test]
    fn snapshot_outcome_bundles_derived_views() {
        let outcome = CandidateSnapshot::new("Contract Presented", "WFHxRAF")
            .with_days_in_stage(120)
            .outcome();
        assert_eq!(outcome.stage, PipelineStage::HiredWfhConfirmed);
        assert_eq!(outcome.stage_label, "Hired (WFH Confirmed)");
        assert_eq!(outcome.style_tag, StyleTag::Passed);
        assert_eq!(outcome.display_position, 5);
        assert_eq!(outcome.eligibility.confirmed_amount(), Some(3000));
    }
}
