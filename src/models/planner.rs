use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

impl Subject {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Subjects seeded into a fresh planner.
    pub fn default_subjects() -> Vec<Subject> {
        vec![
            Subject::new("Methods", "red"),
            Subject::new("English", "green"),
            Subject::new("Science", "purple"),
            Subject::new("Art", "yellow"),
            Subject::new("Languages", "blue"),
        ]
    }
}

/// A study block on the weekly grid. Blocks may overlap; the id is the only
/// identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_hour: u8,
    pub duration_hours: u8,
    pub subject_id: Uuid,
}

/// Fields of a block as edited in the add/edit sheet, before an id exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlockDraft {
    pub date: NaiveDate,
    pub start_hour: u8,
    pub duration_hours: u8,
    pub subject_id: Uuid,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectHours {
    pub subject: Subject,
    pub hours: u32,
}
