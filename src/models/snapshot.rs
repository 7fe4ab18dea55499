use serde::{Deserialize, Serialize};

/// On-disk shape of a saved roster.
///
/// The field names are the persisted format and must not change.
/// `data` and `dia_semana` are written for readability only; loading
/// re-derives both from `mes`/`ano`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mes: u32,
    pub ano: i32,
    pub escalas: Vec<SnapshotRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub dia_semana: String,
    #[serde(default)]
    pub noite: String,
    #[serde(default)]
    pub tarde: String,
    #[serde(default)]
    pub manha: String,
}
