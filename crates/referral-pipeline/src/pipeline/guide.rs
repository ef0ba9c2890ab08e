use super::domain::PipelineStage;
use serde::Serialize;

/// Help-text entry shown next to each stage on the referral dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusExample {
    #[serde(skip)]
    pub stage: PipelineStage,
    pub status: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

// Kept in display order so `display_position` indexes it directly.
static STATUS_EXAMPLES: [StatusExample; 8] = [
    StatusExample {
        stage: PipelineStage::ApplicationReceived,
        status: "Application Received",
        description: "Candidate has applied but not completed assessment",
        action: "Send WhatsApp reminder",
    },
    StatusExample {
        stage: PipelineStage::AssessmentStage,
        status: "Assessment Stage",
        description: "Candidate in assessment/interview process (xRAF only)",
        action: "RM50 payment is eligible if the candidate passes the AI assessment",
    },
    StatusExample {
        stage: PipelineStage::HiredProbation,
        status: "Hired (Probation)",
        description: "Candidate hired but in probation period (<90 days, xRAF)",
        action: "Monitor progress",
    },
    StatusExample {
        stage: PipelineStage::HiredConfirmed,
        status: "Hired (Confirmed)",
        description: "Candidate completed 90-day probation (xRAF)",
        action: "RM750 payment eligible",
    },
    StatusExample {
        stage: PipelineStage::HiredWfhProbation,
        status: "Hired (WFH Probation)",
        description: "WFH Interpreter hired but in probation period (<90 days)",
        action: "Monitor progress",
    },
    StatusExample {
        stage: PipelineStage::HiredWfhConfirmed,
        status: "Hired (WFH Confirmed)",
        description: "WFH Interpreter completed 90-day probation",
        action: "RM3,000 payment eligible",
    },
    StatusExample {
        stage: PipelineStage::PreviouslyApplied,
        status: "Previously Applied (No Payment)",
        description: "Candidate applied through other sources (not xRAF/WFHxRAF)",
        action: "No payment eligible",
    },
    StatusExample {
        stage: PipelineStage::NotSelected,
        status: "Not Selected",
        description: "Candidate rejected or withdrew application",
        action: "No further action needed",
    },
];

pub fn status_examples() -> &'static [StatusExample] {
    &STATUS_EXAMPLES
}

impl PipelineStage {
    pub fn example(self) -> &'static StatusExample {
        &STATUS_EXAMPLES[self.display_position()]
    }
}
