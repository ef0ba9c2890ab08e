//! ATS status tables. Every entry is already normalized (lower-case, trimmed).

/// A single status matcher applied to a normalized ATS label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusPattern {
    Exact(&'static str),
    Contains(&'static str),
}

impl StatusPattern {
    pub(crate) fn matches(self, normalized: &str) -> bool {
        match self {
            Self::Exact(expected) => normalized == expected,
            Self::Contains(fragment) => normalized.contains(fragment),
        }
    }
}

use StatusPattern::{Contains, Exact};

pub(crate) const APPLICATION_RECEIVED: &[StatusPattern] = &[
    Exact("application received"),
    Exact("contact attempt 1"),
    Exact("contact attempt 2"),
    Exact("contact attempt 3"),
    Exact("textapply"),
    Exact("external portal"),
    Exact("internal portal"),
    Exact("recruiter submitted"),
    Exact("agency submissions"),
    Exact("employee referral"),
    Exact("incomplete"),
];

// Never consulted for WFHxRAF candidates.
pub(crate) const ASSESSMENT_STAGE: &[StatusPattern] = &[
    Contains("shl assessment"),
    Contains("assessment stage"),
    Exact("evaluated"),
    Exact("pre-screened"),
    Exact("screened"),
    Contains("screen:"),
    Contains("screened:"),
    Contains("interview scheduled"),
    Contains("interview complete"),
    Contains("second interview"),
    Contains("third interview"),
    Exact("ready to offer"),
    Exact("job offer presented"),
    Exact("waha agreement (signature)"),
    Exact("moved to another requisition or talent pool"),
    Exact("class start date"),
    Exact("re-assigned"),
];

pub(crate) const HIRED: &[StatusPattern] = &[
    Exact("credit check initiated"),
    Exact("onboarding started"),
    Exact("contract presented"),
    Exact("background check (canada)"),
    Exact("background/drug check initiated"),
    Exact("ccms export initiated"),
    Exact("cleared to start"),
    Exact("equipment requested"),
    Exact("new starter (hired)"),
    Exact("graduate"),
    Contains("hired"),
];

pub(crate) const NOT_SELECTED: &[StatusPattern] = &[
    Contains("eliminated"),
    Contains("withdrew"),
    Contains("self-withdrew"),
    Contains("class cancelled"),
    Contains("legacy"),
    Contains("no show"),
    Contains("not selected"),
    Contains("reject"),
    Contains("rescinded"),
    Contains("declined"),
    Contains("dnq"),
];

/// Days in a hired status after which probation counts as completed.
pub const PROBATION_DAYS: i64 = 90;

pub(crate) fn matches_any(patterns: &[StatusPattern], normalized: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(normalized))
}
