pub mod day;
pub mod schedule;
pub mod shift;
pub mod snapshot;

pub use day::DayDescriptor;
pub use schedule::{RosterDay, Schedule};
pub use shift::{ShiftAssignment, Slot};
pub use snapshot::{Snapshot, SnapshotRow};
