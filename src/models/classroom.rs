use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    #[serde(rename = "空き")]
    Free,
    #[serde(rename = "授業中")]
    Occupied,
}

/// Read-only reference data loaded from classrooms.json; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    pub building: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    pub status: RoomStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
}
