//! Draft Form
//!
//! Client-only state behind the "new task" form.

use chrono::{Days, Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{NewTask, Timestamp};

/// Days between today and the default due date
pub const DEFAULT_DUE_IN_DAYS: u64 = 7;

/// Source of "today" for default due dates
pub trait Clock: Clone + 'static {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Default due date for a form opened on `today`
pub fn default_due_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(DEFAULT_DUE_IN_DAYS))
        .unwrap_or(today)
}

/// Pending task creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub title: String,
    pub due_date: NaiveDate,
}

impl DraftForm {
    /// Empty title, due a week from `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            due_date: default_due_date(today),
        }
    }

    /// Build the create payload.
    ///
    /// The title must contain something other than whitespace, but it is sent
    /// exactly as typed.
    pub fn to_new_task(&self) -> Result<NewTask, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(NewTask::new(
            self.title.clone(),
            Timestamp::from_date(self.due_date),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_form_due_in_a_week() {
        let form = DraftForm::new(day(2026, 10, 17));
        assert_eq!(form.title, "");
        assert_eq!(form.due_date, day(2026, 10, 24));
    }

    #[test]
    fn test_default_due_date_crosses_month_end() {
        assert_eq!(default_due_date(day(2026, 12, 28)), day(2027, 1, 4));
    }

    #[test]
    fn test_blank_titles_rejected() {
        let mut form = DraftForm::new(day(2026, 10, 17));
        assert_eq!(form.to_new_task(), Err(ValidationError::EmptyTitle));

        form.title = " \t\n ".to_string();
        assert_eq!(form.to_new_task(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_payload_keeps_title_as_typed() {
        let mut form = DraftForm::new(day(2026, 10, 17));
        form.title = "  Buy milk ".to_string();

        let task = form.to_new_task().unwrap();
        assert_eq!(task.title, "  Buy milk ");
        assert!(!task.completed);
        assert_eq!(task.due_date.as_str(), "2026-10-24T00:00:00.000Z");
    }
}
