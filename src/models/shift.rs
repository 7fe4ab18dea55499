use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// The three shift slots tracked per day, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Night,
    Afternoon,
    Morning,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Night, Slot::Afternoon, Slot::Morning];

    /// Column label used by every rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Night => "Noite",
            Slot::Afternoon => "Tarde",
            Slot::Morning => "Manhã",
        }
    }

    /// Helper: convert CLI input (english or portuguese, any case)
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "night" | "noite" | "n" => Ok(Slot::Night),
            "afternoon" | "tarde" | "t" => Ok(Slot::Afternoon),
            "morning" | "manha" | "manhã" | "m" => Ok(Slot::Morning),
            other => Err(AppError::InvalidSlot(other.to_string())),
        }
    }
}

/// Free-form personnel text for each slot of one day. Empty means unassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub night: String,
    pub afternoon: String,
    pub morning: String,
}

impl ShiftAssignment {
    pub fn new(night: &str, afternoon: &str, morning: &str) -> Self {
        Self {
            night: night.to_string(),
            afternoon: afternoon.to_string(),
            morning: morning.to_string(),
        }
    }

    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Night => &self.night,
            Slot::Afternoon => &self.afternoon,
            Slot::Morning => &self.morning,
        }
    }

    pub fn set(&mut self, slot: Slot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            Slot::Night => self.night = value,
            Slot::Afternoon => self.afternoon = value,
            Slot::Morning => self.morning = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Slot::ALL.iter().all(|s| self.get(*s).is_empty())
    }
}
