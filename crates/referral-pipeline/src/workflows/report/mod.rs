mod summary;
pub mod views;

pub use summary::{ClassifiedCandidate, PipelineReport};
pub use views::PipelineSummary;
