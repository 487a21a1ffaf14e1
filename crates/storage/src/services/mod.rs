pub mod score_validation;
pub mod standings;
