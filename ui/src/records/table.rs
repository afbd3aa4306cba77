//! Records table state: search, status filter, sort and pagination.
//!
//! Kept free of dioxus types so the dashboard can hold it in a `Signal` and
//! the logic stays testable on the host.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::catalog::{Column, Status};
use super::types::AnswerSumRequest;

pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortDescriptor {
    pub column: Column,
    pub direction: SortDirection,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordTableState {
    /// Case-insensitive substring matched against the patient name
    pub filter: String,
    /// Allowed statuses; empty means every status
    pub status_filter: BTreeSet<Status>,
    pub sort: SortDescriptor,
    /// 1-based
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for RecordTableState {
    fn default() -> Self {
        Self::with_rows_per_page(DEFAULT_ROWS_PER_PAGE)
    }
}

impl RecordTableState {
    pub fn with_rows_per_page(rows_per_page: usize) -> Self {
        Self {
            filter: String::new(),
            status_filter: BTreeSet::new(),
            sort: SortDescriptor {
                column: Column::PatientName,
                direction: SortDirection::Ascending,
            },
            page: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn set_filter(&mut self, value: String) {
        self.filter = value;
        self.page = 1;
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(String::new());
    }

    pub fn toggle_status(&mut self, status: Status) {
        if !self.status_filter.remove(&status) {
            self.status_filter.insert(status);
        }
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, statuses: BTreeSet<Status>) {
        self.status_filter = statuses;
        self.page = 1;
    }

    /// Sort by `column`; choosing the current column again flips the direction
    pub fn set_sort(&mut self, column: Column) {
        if !column.sortable() {
            return;
        }
        if self.sort.column == column {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortDescriptor {
                column,
                direction: SortDirection::Ascending,
            };
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 1;
    }

    fn matches(&self, record: &AnswerSumRequest) -> bool {
        let needle = self.filter.trim().to_lowercase();
        let name_ok = needle.is_empty() || record.patient_name.to_lowercase().contains(&needle);
        let status_ok = self.status_filter.is_empty() || self.status_filter.contains(&record.status);
        name_ok && status_ok
    }

    pub fn filtered<'a>(&self, records: &'a [AnswerSumRequest]) -> Vec<&'a AnswerSumRequest> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn sorted<'a>(&self, records: &'a [AnswerSumRequest]) -> Vec<&'a AnswerSumRequest> {
        let mut rows = self.filtered(records);
        let column = self.sort.column;
        rows.sort_by(|a, b| {
            let ordering = compare_by(column, a, b);
            match self.sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }

    pub fn page_count(&self, records: &[AnswerSumRequest]) -> usize {
        let total = self.filtered(records).len();
        total.div_ceil(self.rows_per_page).max(1)
    }

    /// Rows on the current page, clamping a page past the end to the last page
    pub fn visible<'a>(&self, records: &'a [AnswerSumRequest]) -> Vec<&'a AnswerSumRequest> {
        let rows = self.sorted(records);
        let pages = rows.len().div_ceil(self.rows_per_page).max(1);
        let page = self.page.clamp(1, pages);
        rows.into_iter()
            .skip((page - 1) * self.rows_per_page)
            .take(self.rows_per_page)
            .collect()
    }
}

fn compare_by(column: Column, a: &AnswerSumRequest, b: &AnswerSumRequest) -> Ordering {
    match column {
        Column::PatientName => a
            .patient_name
            .to_lowercase()
            .cmp(&b.patient_name.to_lowercase()),
        Column::DiagnosisDate => {
            date_sort_key(&a.diagnosis_date).cmp(&date_sort_key(&b.diagnosis_date))
        }
        Column::Status => a.status.cmp(&b.status),
        Column::Actions => Ordering::Equal,
    }
}

/// Parsed dates first in date order, then unparseable values by text
fn date_sort_key(value: &str) -> (bool, Option<(i32, u32, u32)>, &str) {
    let parsed = parse_iso_date(value);
    (parsed.is_none(), parsed, value)
}

/// Parse the date part of `YYYY-M-D` (zero padding optional, a trailing
/// time after `T` or whitespace is ignored)
pub fn parse_iso_date(value: &str) -> Option<(i32, u32, u32)> {
    let date = value.trim().split(['T', ' ']).next()?;
    let mut parts = date.split('-');
    let year = parse_digits(parts.next()?, 4, 4)?;
    let month = parse_digits(parts.next()?, 1, 2)?;
    let day = parse_digits(parts.next()?, 1, 2)?;
    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year as i32, month, day))
}

fn parse_digits(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
