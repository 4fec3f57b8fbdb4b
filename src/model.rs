//! Student record and the write payload accepted by create/update.

use serde::{Deserialize, Serialize};

/// A persisted student.
///
/// `grade` is only echoed back by create/update; reads never select it, so it
/// is omitted from get/list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,
}

/// Candidate for insert or update. The name is the only persisted field.
///
/// `grade` is declared as 0..=100 but the range is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub grade: i64,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, grade: i64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    /// Attach the storage-assigned id.
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            grade: Some(self.grade),
        }
    }
}
