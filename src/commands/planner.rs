use chrono::NaiveDate;
use uuid::Uuid;

use crate::commands::{AppState, CommandResult};
use crate::models::planner::{Subject, SubjectHours, TimeBlock, TimeBlockDraft};

pub fn planner_add_block(state: &AppState, draft: TimeBlockDraft) -> CommandResult<TimeBlock> {
    Ok(state.planner().add_block(draft)?)
}

pub fn planner_update_block(
    state: &AppState,
    id: Uuid,
    draft: TimeBlockDraft,
) -> CommandResult<TimeBlock> {
    Ok(state.planner().update_block(id, draft)?)
}

pub fn planner_delete_block(state: &AppState, id: Uuid) -> CommandResult<()> {
    Ok(state.planner().delete_block(id)?)
}

pub fn planner_blocks_for_day(state: &AppState, date: NaiveDate) -> Vec<TimeBlock> {
    state.planner().blocks_for_day(date)
}

pub fn planner_day_summary(state: &AppState, date: NaiveDate) -> Vec<SubjectHours> {
    state.planner().day_summary(date)
}

pub fn subjects_list(state: &AppState) -> Vec<Subject> {
    state.planner().subjects()
}

pub fn subjects_add(state: &AppState, name: String, color: String) -> CommandResult<Subject> {
    Ok(state.planner().add_subject(name, color)?)
}

pub fn subjects_update(
    state: &AppState,
    id: Uuid,
    name: String,
    color: String,
) -> CommandResult<Subject> {
    Ok(state.planner().update_subject(id, name, color)?)
}

pub fn subjects_delete(state: &AppState, id: Uuid) -> CommandResult<()> {
    Ok(state.planner().delete_subject(id)?)
}
