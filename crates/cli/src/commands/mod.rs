pub mod report;
pub mod statement;
