use thiserror::Error;

/// First top-level input that failed its bound check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid Total Person (greater than 0).")]
    InvalidTotalPersons,
    #[error("Please enter valid Productive Hrs (greater than 0).")]
    InvalidProductiveHours,
    #[error("Please enter valid Working Days (0 or more).")]
    InvalidWorkingDays,
    #[error("Please enter valid No of Holidays (0 or more).")]
    InvalidHolidays,
}
