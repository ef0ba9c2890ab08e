use super::normalizer::normalize_label;
use serde::{Deserialize, Serialize};

const PRIMARY_SOURCE: &str = "xraf";
const WFH_SOURCE: &str = "wfhxraf";

/// Application channel recorded against a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralChannel {
    /// Paid referral channel (`xRAF`).
    Primary,
    /// Work-from-home interpreter referral channel (`WFHxRAF`).
    WorkFromHome,
    /// No source recorded. Classified the same way as [`ReferralChannel::Primary`].
    Unrecorded,
    /// Any other channel (job boards, agencies, direct applications).
    ThirdParty,
}

impl ReferralChannel {
    pub fn from_source(source: Option<&str>) -> Self {
        let normalized = source.map(normalize_label).unwrap_or_default();
        match normalized.as_str() {
            PRIMARY_SOURCE => Self::Primary,
            WFH_SOURCE => Self::WorkFromHome,
            "" => Self::Unrecorded,
            _ => Self::ThirdParty,
        }
    }

    pub const fn is_work_from_home(self) -> bool {
        matches!(self, Self::WorkFromHome)
    }

    pub const fn is_referral(self) -> bool {
        !matches!(self, Self::ThirdParty)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "xRAF",
            Self::WorkFromHome => "WFHxRAF",
            Self::Unrecorded => "Unrecorded",
            Self::ThirdParty => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_referral_sources_case_insensitively() {
        assert_eq!(ReferralChannel::from_source(Some("xRAF")), ReferralChannel::Primary);
        assert_eq!(
            ReferralChannel::from_source(Some("  WFHxRAF ")),
            ReferralChannel::WorkFromHome
        );
        assert_eq!(ReferralChannel::from_source(None), ReferralChannel::Unrecorded);
        assert_eq!(ReferralChannel::from_source(Some("  ")), ReferralChannel::Unrecorded);
    }

    #[test]
    fn everything_else_is_third_party() {
        for source in ["LinkedIn", "xraf2", "WFH xRAF", "Indeed"] {
            assert_eq!(
                ReferralChannel::from_source(Some(source)),
                ReferralChannel::ThirdParty,
                "{source}"
            );
        }
        assert!(!ReferralChannel::ThirdParty.is_referral());
        assert!(ReferralChannel::Unrecorded.is_referral());
    }
}
