use super::domain::PipelineStage;
use serde::{Deserialize, Serialize};

/// Referral bonus tiers paid out by the programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EarningsTier {
    Assessment,
    Probation,
    WfhProbation,
}

impl EarningsTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Assessment, Self::Probation, Self::WfhProbation]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::Probation => "probation",
            Self::WfhProbation => "wfhProbation",
        }
    }

    pub fn rule(self) -> &'static EarningsRule {
        match self {
            Self::Assessment => &EARNINGS_STRUCTURE[0],
            Self::Probation => &EARNINGS_STRUCTURE[1],
            Self::WfhProbation => &EARNINGS_STRUCTURE[2],
        }
    }
}

/// Published payout for one tier. Amounts are whole Malaysian ringgit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsRule {
    #[serde(skip)]
    pub tier: EarningsTier,
    pub amount: u32,
    pub label: &'static str,
    pub condition: &'static str,
    pub payment: &'static str,
}

static EARNINGS_STRUCTURE: [EarningsRule; 3] = [
    EarningsRule {
        tier: EarningsTier::Assessment,
        amount: 50,
        label: "Assessment Passed",
        condition: "Candidate passes the AI assessment (xRAF only)",
        payment: "RM50",
    },
    EarningsRule {
        tier: EarningsTier::Probation,
        amount: 750,
        label: "Probation Completed",
        condition: "Candidate completes 90-day probation period (xRAF only)",
        payment: "RM750",
    },
    EarningsRule {
        tier: EarningsTier::WfhProbation,
        amount: 3000,
        label: "WFH Interpreter - 90 Days",
        condition: "WFH Interpreter completes 90-day probation period",
        payment: "RM3,000",
    },
];

pub fn earnings_structure() -> &'static [EarningsRule] {
    &EARNINGS_STRUCTURE
}

/// Payout label attached to a stage. This never triggers a payment; it only
/// tells reporting which tier a candidate would fall under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "tier", rename_all = "snake_case")]
pub enum PaymentEligibility {
    Eligible(EarningsTier),
    /// Depends on an outcome this system does not observe (the AI assessment).
    Conditional(EarningsTier),
    NotEligible,
}

impl PaymentEligibility {
    pub const fn for_stage(stage: PipelineStage) -> Self {
        match stage {
            PipelineStage::HiredConfirmed => Self::Eligible(EarningsTier::Probation),
            PipelineStage::HiredWfhConfirmed => Self::Eligible(EarningsTier::WfhProbation),
            PipelineStage::AssessmentStage => Self::Conditional(EarningsTier::Assessment),
            PipelineStage::ApplicationReceived
            | PipelineStage::HiredProbation
            | PipelineStage::HiredWfhProbation
            | PipelineStage::PreviouslyApplied
            | PipelineStage::NotSelected => Self::NotEligible,
        }
    }

    /// Amount owed once eligibility is confirmed.
    pub fn confirmed_amount(self) -> Option<u32> {
        match self {
            Self::Eligible(tier) => Some(tier.rule().amount),
            Self::Conditional(_) | Self::NotEligible => None,
        }
    }

    pub fn summary(self) -> String {
        match self {
            Self::Eligible(tier) => format!("{} payment eligible", tier.rule().payment),
            Self::Conditional(tier) => {
                let rule = tier.rule();
                format!("{} eligible if: {}", rule.payment, rule.condition)
            }
            Self::NotEligible => "no payment eligible".to_string(),
        }
    }
}
