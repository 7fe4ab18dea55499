pub mod backup;
pub mod calendar;
pub mod edit;
