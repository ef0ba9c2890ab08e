mod channel;
mod classifier;
pub mod domain;
mod earnings;
mod guide;
mod normalizer;
pub mod router;
mod rules;

pub use channel::ReferralChannel;
pub use classifier::{
    classify, determine_stage, display_order, style_tag, CandidateSnapshot,
    ClassificationOutcome,
};
pub use domain::{PipelineStage, StyleTag};
pub use earnings::{earnings_structure, EarningsRule, EarningsTier, PaymentEligibility};
pub use guide::{status_examples, StatusExample};
pub use router::referral_router;
pub use rules::PROBATION_DAYS;
