pub mod ats;
pub mod report;
