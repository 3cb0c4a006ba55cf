//! Listing, insert, and delete behaviour of the `PostgreSQL` repository.

use crate::postgres::helpers::{TaskLogDatabase, task, task_log_db};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use tasklog::task_log::{
    domain::{CompletedTask, OwnerId, PageNumber, PaginationCursor, RawCursorParams, Watermark},
    ports::{CompletedTaskRepository, CompletedTaskRepositoryError, FixedUserProvider},
    services::TaskLogService,
};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

fn owner(value: i64) -> OwnerId {
    OwnerId::new(value).expect("valid owner")
}

fn insert_all(db: &TaskLogDatabase, tasks: &[CompletedTask]) {
    for completed in tasks {
        db.rt
            .block_on(db.repo.insert(completed))
            .expect("insert should succeed");
    }
}

fn page_ids(db: &TaskLogDatabase, owner_id: OwnerId, page: u32, bound: DateTime<Utc>) -> Vec<i64> {
    let cursor = PaginationCursor::new(
        PageNumber::new(page).expect("valid page"),
        Watermark::from_epoch_seconds(bound.timestamp()).expect("valid watermark"),
    );
    db.rt
        .block_on(db.repo.find(&cursor.page_query(owner_id)))
        .expect("find should succeed")
        .iter()
        .map(|found| found.id().value())
        .collect()
}

fn scenario() -> Vec<CompletedTask> {
    [
        (3, 0),
        (13, 0),
        (103, 0),
        (2, 1),
        (12, 1),
        (102, 1),
        (1, 2),
        (11, 2),
        (101, 2),
    ]
    .into_iter()
    .map(|(id, hour)| task(1, id, at(hour, 0)))
    .collect()
}

#[rstest]
fn pages_walk_the_log_newest_first(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    insert_all(&db, &scenario());

    let pages: Vec<Vec<i64>> = (1..=4)
        .map(|page| page_ids(&db, owner(1), page, at(2, 20)))
        .collect();

    assert_eq!(
        pages,
        vec![
            vec![1, 11, 101],
            vec![2, 12, 102],
            vec![3, 13, 103],
            Vec::<i64>::new(),
        ]
    );
}

#[rstest]
fn rows_after_the_watermark_are_excluded(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    insert_all(&db, &scenario());
    insert_all(&db, &[task(1, 500, at(3, 0))]);

    assert_eq!(page_ids(&db, owner(1), 1, at(2, 20)), vec![1, 11, 101]);
    assert_eq!(page_ids(&db, owner(1), 1, at(3, 0)), vec![500, 1, 11]);
}

#[rstest]
fn completed_at_survives_storage(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    let stored = task(1, 7, at(1, 30));
    insert_all(&db, &[stored.clone()]);

    let cursor = PaginationCursor::new(
        PageNumber::FIRST,
        Watermark::from_epoch_seconds(at(2, 0).timestamp()).expect("valid watermark"),
    );
    let found = db
        .rt
        .block_on(db.repo.find(&cursor.page_query(owner(1))))
        .expect("find should succeed");

    assert_eq!(found, vec![stored]);
}

#[rstest]
fn duplicate_keys_are_rejected_per_owner(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    insert_all(&db, &[task(1, 5, at(1, 0)), task(2, 5, at(1, 0))]);

    let result = db.rt.block_on(db.repo.insert(&task(1, 5, at(2, 0))));

    assert!(matches!(
        result,
        Err(CompletedTaskRepositoryError::DuplicateTask { owner_id, task_id })
            if owner_id == owner(1) && task_id.value() == 5
    ));
}

#[rstest]
fn delete_all_only_touches_one_owner(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    insert_all(&db, &scenario());
    insert_all(&db, &[task(2, 1, at(1, 0))]);

    let deleted = db
        .rt
        .block_on(db.repo.delete_all(owner(1)))
        .expect("delete should succeed");

    assert_eq!(deleted, 9);
    assert!(page_ids(&db, owner(1), 1, at(2, 20)).is_empty());
    assert_eq!(page_ids(&db, owner(2), 1, at(2, 20)), vec![1]);
}

#[rstest]
fn earliest_accepted_watermark_is_storable(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    insert_all(&db, &scenario());
    let cursor = PaginationCursor::new(
        PageNumber::FIRST,
        Watermark::from_epoch_seconds(Watermark::MIN_EPOCH_SECONDS).expect("valid watermark"),
    );

    let found = db
        .rt
        .block_on(db.repo.find(&cursor.page_query(owner(1))))
        .expect("find should accept the earliest watermark");

    assert!(found.is_empty());
}

#[rstest]
#[case::before_storable_range("-1000000000000")]
#[case::beyond_any_timestamp("9223372036854775807")]
fn unstorable_watermarks_fall_back_to_a_fresh_first_page(
    task_log_db: TaskLogDatabase,
    #[case] completed_date: &str,
) {
    let db = task_log_db;
    insert_all(&db, &scenario());
    let service = TaskLogService::new(
        Arc::new(db.repo.clone()),
        Arc::new(FixedUserProvider::new(owner(1))),
        Arc::new(DefaultClock),
    );
    let params = RawCursorParams::new()
        .with_page("1")
        .with_completed_date(completed_date);

    let page = db
        .rt
        .block_on(service.list_page(&params))
        .expect("listing should not fail for a rejected cursor");

    let ids: Vec<i64> = page.tasks().iter().map(|found| found.id().value()).collect();
    assert_eq!(ids, vec![1, 11, 101]);
}

#[rstest]
fn start_up_seeding_twice_keeps_the_scenario_rows(task_log_db: TaskLogDatabase) {
    let db = task_log_db;
    let service = TaskLogService::new(
        Arc::new(db.repo.clone()),
        Arc::new(FixedUserProvider::new(owner(1))),
        Arc::new(DefaultClock),
    );

    let first = db
        .rt
        .block_on(service.ensure_seeded())
        .expect("first start-up seed");
    let second = db
        .rt
        .block_on(service.ensure_seeded())
        .expect("second start-up seed");

    assert_eq!((first, second), (9, 0));
    let deleted = db
        .rt
        .block_on(db.repo.delete_all(owner(1)))
        .expect("delete should succeed");
    assert_eq!(deleted, 9);
}
