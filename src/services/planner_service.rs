//! In-memory weekly study planner.
//!
//! Blocks live on an hour grid from 06:00 to 22:00. Overlapping blocks are
//! permitted; the block id is the only identity. Nothing here persists past
//! the process.

use std::sync::RwLock;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::planner::{Subject, SubjectHours, TimeBlock, TimeBlockDraft};

pub const DAY_START_HOUR: u8 = 6;
pub const DAY_END_HOUR: u8 = 22;
const MIN_BLOCK_HOURS: u8 = 1;
const MAX_BLOCK_HOURS: u8 = 6;

pub struct PlannerService {
    state: RwLock<PlannerState>,
}

struct PlannerState {
    subjects: Vec<Subject>,
    blocks: Vec<TimeBlock>,
}

impl PlannerService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PlannerState {
                subjects: Subject::default_subjects(),
                blocks: Vec::new(),
            }),
        }
    }

    fn validate_draft(draft: &TimeBlockDraft, subjects: &[Subject]) -> AppResult<()> {
        if draft.start_hour < DAY_START_HOUR || draft.start_hour >= DAY_END_HOUR {
            return Err(AppError::validation(format!(
                "start hour must be between {DAY_START_HOUR}:00 and {}:00",
                DAY_END_HOUR - 1
            )));
        }
        if !(MIN_BLOCK_HOURS..=MAX_BLOCK_HOURS).contains(&draft.duration_hours) {
            return Err(AppError::validation(format!(
                "block duration must be between {MIN_BLOCK_HOURS} and {MAX_BLOCK_HOURS} hours"
            )));
        }
        if draft.start_hour + draft.duration_hours > DAY_END_HOUR {
            return Err(AppError::validation(format!(
                "block must end by {DAY_END_HOUR}:00"
            )));
        }
        if !subjects.iter().any(|subject| subject.id == draft.subject_id) {
            return Err(AppError::validation("unknown subject for study block"));
        }
        Ok(())
    }

    pub fn add_block(&self, draft: TimeBlockDraft) -> AppResult<TimeBlock> {
        let mut state = self.state.write().expect("planner state lock poisoned");
        Self::validate_draft(&draft, &state.subjects)?;

        let block = TimeBlock {
            id: Uuid::new_v4(),
            date: draft.date,
            start_hour: draft.start_hour,
            duration_hours: draft.duration_hours,
            subject_id: draft.subject_id,
        };
        debug!(target: "app::planner", block_id = %block.id, date = %block.date, "added study block");
        state.blocks.push(block.clone());
        Ok(block)
    }

    pub fn update_block(&self, id: Uuid, draft: TimeBlockDraft) -> AppResult<TimeBlock> {
        let mut state = self.state.write().expect("planner state lock poisoned");
        Self::validate_draft(&draft, &state.subjects)?;

        let block = state
            .blocks
            .iter_mut()
            .find(|block| block.id == id)
            .ok_or_else(AppError::not_found)?;

        block.date = draft.date;
        block.start_hour = draft.start_hour;
        block.duration_hours = draft.duration_hours;
        block.subject_id = draft.subject_id;
        Ok(block.clone())
    }

    pub fn delete_block(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().expect("planner state lock poisoned");
        let before = state.blocks.len();
        state.blocks.retain(|block| block.id != id);
        if state.blocks.len() == before {
            return Err(AppError::not_found());
        }
        debug!(target: "app::planner", block_id = %id, "deleted study block");
        Ok(())
    }

    pub fn blocks_for_day(&self, date: NaiveDate) -> Vec<TimeBlock> {
        let state = self.state.read().expect("planner state lock poisoned");
        state
            .blocks
            .iter()
            .filter(|block| block.date == date)
            .cloned()
            .collect()
    }

    /// Hours scheduled per subject on one day, in subject-list order.
    /// Subjects with no blocks that day are omitted.
    pub fn day_summary(&self, date: NaiveDate) -> Vec<SubjectHours> {
        let state = self.state.read().expect("planner state lock poisoned");
        state
            .subjects
            .iter()
            .filter_map(|subject| {
                let hours: u32 = state
                    .blocks
                    .iter()
                    .filter(|block| block.date == date && block.subject_id == subject.id)
                    .map(|block| u32::from(block.duration_hours))
                    .sum();
                (hours > 0).then(|| SubjectHours {
                    subject: subject.clone(),
                    hours,
                })
            })
            .collect()
    }

    pub fn subjects(&self) -> Vec<Subject> {
        let state = self.state.read().expect("planner state lock poisoned");
        state.subjects.clone()
    }

    pub fn add_subject(
        &self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> AppResult<Subject> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::validation("subject name cannot be empty"));
        }

        let mut state = self.state.write().expect("planner state lock poisoned");
        let subject = Subject::new(name, color);
        state.subjects.push(subject.clone());
        Ok(subject)
    }

    pub fn update_subject(
        &self,
        id: Uuid,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> AppResult<Subject> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::validation("subject name cannot be empty"));
        }

        let mut state = self.state.write().expect("planner state lock poisoned");
        let subject = state
            .subjects
            .iter_mut()
            .find(|subject| subject.id == id)
            .ok_or_else(AppError::not_found)?;

        subject.name = name;
        subject.color = color.into();
        Ok(subject.clone())
    }

    /// Removing a subject also removes its blocks; they would otherwise
    /// reference a subject the grid can no longer render.
    pub fn delete_subject(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().expect("planner state lock poisoned");
        let before = state.subjects.len();
        state.subjects.retain(|subject| subject.id != id);
        if state.subjects.len() == before {
            return Err(AppError::not_found());
        }
        state.blocks.retain(|block| block.subject_id != id);
        Ok(())
    }
}

impl Default for PlannerService {
    fn default() -> Self {
        Self::new()
    }
}
