pub mod check_eligibility;
pub mod compile;
pub mod generate_fixtures;
