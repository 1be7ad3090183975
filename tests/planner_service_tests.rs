use chrono::NaiveDate;
use uuid::Uuid;

use study_cuddie::models::planner::TimeBlockDraft;
use study_cuddie::services::planner_service::PlannerService;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
}

fn draft(planner: &PlannerService, date: NaiveDate, start: u8, hours: u8) -> TimeBlockDraft {
    TimeBlockDraft {
        date,
        start_hour: start,
        duration_hours: hours,
        subject_id: planner.subjects()[0].id,
    }
}

#[test]
fn a_fresh_planner_carries_the_default_subjects() {
    let planner = PlannerService::new();
    let names: Vec<String> = planner
        .subjects()
        .into_iter()
        .map(|subject| subject.name)
        .collect();
    assert_eq!(names, ["Methods", "English", "Science", "Art", "Languages"]);
}

#[test]
fn blocks_can_be_added_updated_and_deleted() {
    let planner = PlannerService::new();

    let block = planner
        .add_block(draft(&planner, monday(), 9, 2))
        .expect("add succeeds");
    assert_eq!(planner.blocks_for_day(monday()).len(), 1);

    let mut changed = draft(&planner, monday(), 14, 3);
    changed.subject_id = planner.subjects()[1].id;
    let updated = planner
        .update_block(block.id, changed)
        .expect("update succeeds");
    assert_eq!(updated.id, block.id);
    assert_eq!(updated.start_hour, 14);
    assert_eq!(updated.subject_id, planner.subjects()[1].id);

    planner.delete_block(block.id).expect("delete succeeds");
    assert!(planner.blocks_for_day(monday()).is_empty());
}

#[test]
fn unknown_block_ids_are_not_found() {
    let planner = PlannerService::new();
    let missing = Uuid::new_v4();

    assert!(planner.delete_block(missing).is_err());
    assert!(planner
        .update_block(missing, draft(&planner, monday(), 9, 1))
        .is_err());
}

#[test]
fn drafts_outside_the_grid_are_rejected() {
    let planner = PlannerService::new();

    // before 06:00
    assert!(planner.add_block(draft(&planner, monday(), 5, 1)).is_err());
    // zero and oversized durations
    assert!(planner.add_block(draft(&planner, monday(), 9, 0)).is_err());
    assert!(planner.add_block(draft(&planner, monday(), 9, 7)).is_err());
    // runs past 22:00
    assert!(planner.add_block(draft(&planner, monday(), 20, 4)).is_err());
    // the last legal slot is fine
    assert!(planner.add_block(draft(&planner, monday(), 21, 1)).is_ok());

    let mut unknown_subject = draft(&planner, monday(), 9, 1);
    unknown_subject.subject_id = Uuid::new_v4();
    assert!(planner.add_block(unknown_subject).is_err());
}

#[test]
fn overlapping_blocks_are_permitted() {
    let planner = PlannerService::new();

    planner
        .add_block(draft(&planner, monday(), 9, 3))
        .expect("first block");
    planner
        .add_block(draft(&planner, monday(), 10, 2))
        .expect("overlapping block");

    assert_eq!(planner.blocks_for_day(monday()).len(), 2);
}

#[test]
fn day_summary_aggregates_hours_per_subject() {
    let planner = PlannerService::new();
    let subjects = planner.subjects();

    planner
        .add_block(draft(&planner, monday(), 8, 2))
        .expect("methods block");
    planner
        .add_block(draft(&planner, monday(), 15, 1))
        .expect("second methods block");

    let mut english = draft(&planner, monday(), 11, 2);
    english.subject_id = subjects[1].id;
    planner.add_block(english).expect("english block");

    let mut other_day = draft(&planner, tuesday(), 8, 4);
    other_day.subject_id = subjects[1].id;
    planner.add_block(other_day).expect("tuesday block");

    let summary = planner.day_summary(monday());
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].subject.name, "Methods");
    assert_eq!(summary[0].hours, 3);
    assert_eq!(summary[1].subject.name, "English");
    assert_eq!(summary[1].hours, 2);

    let tuesday_summary = planner.day_summary(tuesday());
    assert_eq!(tuesday_summary.len(), 1);
    assert_eq!(tuesday_summary[0].hours, 4);
}

#[test]
fn subjects_can_be_added_renamed_and_deleted() {
    let planner = PlannerService::new();

    let music = planner.add_subject("Music", "orange").expect("add succeeds");
    assert_eq!(planner.subjects().len(), 6);

    let renamed = planner
        .update_subject(music.id, "Orchestra", "orange")
        .expect("rename succeeds");
    assert_eq!(renamed.name, "Orchestra");

    assert!(planner.add_subject("   ", "gray").is_err());
    assert!(planner
        .update_subject(Uuid::new_v4(), "Ghost", "gray")
        .is_err());

    planner.delete_subject(music.id).expect("delete succeeds");
    assert_eq!(planner.subjects().len(), 5);
    assert!(planner.delete_subject(music.id).is_err());
}

#[test]
fn deleting_a_subject_removes_its_blocks() {
    let planner = PlannerService::new();
    let music = planner.add_subject("Music", "orange").expect("add succeeds");

    let mut block = draft(&planner, monday(), 9, 2);
    block.subject_id = music.id;
    planner.add_block(block).expect("block for music");
    planner
        .add_block(draft(&planner, monday(), 12, 1))
        .expect("block for methods");

    planner.delete_subject(music.id).expect("delete succeeds");

    let remaining = planner.blocks_for_day(monday());
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].subject_id, music.id);
}
