use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized position of a referred candidate in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    ApplicationReceived,
    AssessmentStage,
    HiredProbation,
    HiredConfirmed,
    HiredWfhProbation,
    HiredWfhConfirmed,
    PreviouslyApplied,
    NotSelected,
}

impl PipelineStage {
    /// Presentation order for charts and lists.
    pub const fn ordered() -> [Self; 8] {
        [
            Self::ApplicationReceived,
            Self::AssessmentStage,
            Self::HiredProbation,
            Self::HiredConfirmed,
            Self::HiredWfhProbation,
            Self::HiredWfhConfirmed,
            Self::PreviouslyApplied,
            Self::NotSelected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ApplicationReceived => "Application Received",
            Self::AssessmentStage => "Assessment Stage",
            Self::HiredProbation => "Hired (Probation)",
            Self::HiredConfirmed => "Hired (Confirmed)",
            Self::HiredWfhProbation => "Hired (WFH Probation)",
            Self::HiredWfhConfirmed => "Hired (WFH Confirmed)",
            Self::PreviouslyApplied => "Previously Applied (No Payment)",
            Self::NotSelected => "Not Selected",
        }
    }

    pub const fn style_tag(self) -> StyleTag {
        match self {
            Self::HiredConfirmed | Self::HiredWfhConfirmed => StyleTag::Passed,
            Self::HiredProbation | Self::HiredWfhProbation => StyleTag::Probation,
            Self::PreviouslyApplied => StyleTag::PreviouslyApplied,
            Self::AssessmentStage => StyleTag::Assessment,
            Self::NotSelected => StyleTag::Failed,
            Self::ApplicationReceived => StyleTag::Received,
        }
    }

    /// Index of the stage within [`PipelineStage::ordered`].
    pub const fn display_position(self) -> usize {
        match self {
            Self::ApplicationReceived => 0,
            Self::AssessmentStage => 1,
            Self::HiredProbation => 2,
            Self::HiredConfirmed => 3,
            Self::HiredWfhProbation => 4,
            Self::HiredWfhConfirmed => 5,
            Self::PreviouslyApplied => 6,
            Self::NotSelected => 7,
        }
    }

    /// Parses a display label such as `"Hired (WFH Confirmed)"`, ignoring case
    /// and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ordered()
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(trimmed))
    }

    pub const fn is_hired(self) -> bool {
        matches!(
            self,
            Self::HiredProbation
                | Self::HiredConfirmed
                | Self::HiredWfhProbation
                | Self::HiredWfhConfirmed
        )
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CSS-facing bucket used by dashboards to color a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    Passed,
    Probation,
    PreviouslyApplied,
    Assessment,
    Failed,
    Received,
}

impl StyleTag {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Received,
            Self::Assessment,
            Self::Probation,
            Self::Passed,
            Self::PreviouslyApplied,
            Self::Failed,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Probation => "probation",
            Self::PreviouslyApplied => "previously-applied",
            Self::Assessment => "assessment",
            Self::Failed => "failed",
            Self::Received => "received",
        }
    }

    /// Style for a stage label coming from an external consumer. Unknown labels
    /// render as `received`.
    pub fn for_label(label: &str) -> Self {
        PipelineStage::from_label(label)
            .map(PipelineStage::style_tag)
            .unwrap_or(Self::Received)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
