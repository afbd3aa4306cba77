//! Behaviour of the records table: search, status filter, sort and paging

use std::collections::BTreeSet;

use super::catalog::{Column, Status};
use super::table::*;
use super::types::{sample_record, AnswerSumRequest};

fn records() -> Vec<AnswerSumRequest> {
    vec![
        sample_record("Charlie", "2024-02-10", Status::Pending),
        sample_record("alice", "2023-11-05", Status::Completed),
        sample_record("Bob", "2024-01-20", Status::InProgress),
        sample_record("Dana", "2022-06-30", Status::Cancelled),
        sample_record("Alina", "2024-05-01", Status::Completed),
        sample_record("Eve", "2021-09-14", Status::Pending),
        sample_record("Frank", "2020-01-01", Status::Completed),
    ]
}

fn names(rows: &[&AnswerSumRequest]) -> Vec<String> {
    rows.iter().map(|r| r.patient_name.clone()).collect()
}

#[test]
fn test_default_sorts_by_name_case_insensitively() {
    let records = records();
    let state = RecordTableState::default();

    assert_eq!(
        names(&state.visible(&records)),
        vec!["alice", "Alina", "Bob", "Charlie", "Dana"]
    );
    assert_eq!(state.page_count(&records), 2);
}

#[test]
fn test_search_filters_by_name_and_resets_page() {
    let records = records();
    let mut state = RecordTableState::default();
    state.set_page(2);

    state.set_filter("ali".to_string());
    assert_eq!(state.page, 1);
    assert_eq!(names(&state.visible(&records)), vec!["alice", "Alina"]);
    assert_eq!(state.page_count(&records), 1);

    state.clear_filter();
    assert_eq!(state.filtered(&records).len(), records.len());
}

#[test]
fn test_status_filter() {
    let records = records();
    let mut state = RecordTableState::default();

    state.toggle_status(Status::Completed);
    assert_eq!(names(&state.visible(&records)), vec!["alice", "Alina", "Frank"]);

    state.toggle_status(Status::Pending);
    assert_eq!(state.filtered(&records).len(), 5);

    // Toggling again removes the status from the filter
    state.toggle_status(Status::Completed);
    assert_eq!(names(&state.visible(&records)), vec!["Charlie", "Eve"]);

    state.set_status_filter(BTreeSet::new());
    assert_eq!(state.filtered(&records).len(), records.len());
}

#[test]
fn test_sort_by_date_and_flip_direction() {
    let records = records();
    let mut state = RecordTableState::with_rows_per_page(10);

    state.set_sort(Column::DiagnosisDate);
    assert_eq!(state.sort.direction, SortDirection::Ascending);
    assert_eq!(
        names(&state.visible(&records)),
        vec!["Frank", "Eve", "Dana", "alice", "Bob", "Charlie", "Alina"]
    );

    state.set_sort(Column::DiagnosisDate);
    assert_eq!(state.sort.direction, SortDirection::Descending);
    assert_eq!(state.visible(&records)[0].patient_name, "Alina");
}

#[test]
fn test_sort_by_status_uses_catalog_order() {
    let records = records();
    let mut state = RecordTableState::with_rows_per_page(10);
    state.set_sort(Column::Status);

    let statuses: Vec<Status> = state.visible(&records).iter().map(|r| r.status).collect();
    let mut expected = statuses.clone();
    expected.sort();
    assert_eq!(statuses, expected);
    assert_eq!(statuses[0], Status::Completed);
    assert_eq!(statuses[statuses.len() - 1], Status::Cancelled);
}

#[test]
fn test_actions_column_is_not_sortable() {
    let mut state = RecordTableState::default();
    let before = state.sort;
    state.set_sort(Column::Actions);
    assert_eq!(state.sort, before);
}

#[test]
fn test_page_past_end_clamps_to_last_page() {
    let records = records();
    let mut state = RecordTableState::default();
    state.set_page(9);
    assert_eq!(names(&state.visible(&records)), vec!["Eve", "Frank"]);

    state.set_page(0);
    assert_eq!(state.page, 1);
}

#[test]
fn test_empty_records_have_one_page() {
    let state = RecordTableState::default();
    assert_eq!(state.page_count(&[]), 1);
    assert!(state.visible(&[]).is_empty());
}

#[test]
fn test_parse_iso_date() {
    assert_eq!(parse_iso_date("2024-03-01"), Some((2024, 3, 1)));
    assert_eq!(parse_iso_date("2024-03-01T08:00:00Z"), Some((2024, 3, 1)));
    assert_eq!(parse_iso_date("2024-13-01"), None);
    assert_eq!(parse_iso_date("March 1"), None);
    assert_eq!(parse_iso_date("2024-9-11"), Some((2024, 9, 11)));
    assert_eq!(parse_iso_date("2024-01-05 10:30"), Some((2024, 1, 5)));
    assert_eq!(parse_iso_date("2024-9-011"), None);
    assert_eq!(parse_iso_date("2024-01-051"), None);
    assert_eq!(parse_iso_date("2024-01-05-07"), None);
}

#[test]
fn test_mixed_dates_sort_into_groups() {
    let dates = ["2024-9-011", "2024-10-01", "2024-5-x", "2024-9-11", "2023-12-31"];
    let records: Vec<AnswerSumRequest> = (0..60)
        .map(|i| {
            sample_record(
                &format!("P{}", i),
                dates[i % dates.len()],
                Status::Pending,
            )
        })
        .collect();

    let mut state = RecordTableState::with_rows_per_page(records.len());
    state.set_sort(Column::DiagnosisDate);
    let sorted: Vec<&str> = state
        .visible(&records)
        .iter()
        .map(|r| r.diagnosis_date.as_str())
        .collect();

    let changes = sorted.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(changes, dates.len() - 1);

    let mut order: Vec<&str> = sorted.clone();
    order.dedup();
    assert_eq!(
        order,
        vec!["2023-12-31", "2024-9-11", "2024-10-01", "2024-5-x", "2024-9-011"]
    );

    state.set_sort(Column::DiagnosisDate);
    let mut reversed: Vec<&str> = state
        .visible(&records)
        .iter()
        .map(|r| r.diagnosis_date.as_str())
        .collect();
    reversed.dedup();
    assert_eq!(reversed[0], "2024-9-011");
    assert_eq!(reversed[reversed.len() - 1], "2023-12-31");
}
