//! Benchmark Runner
//!
//! One round = create N tasks, read the list, complete each created task,
//! delete each created task. Each phase is timed separately.

use std::time::Instant;

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use todo_sync::{NewTask, Task, Timestamp, TodoApi};

/// Titles the created tasks are drawn from
pub const SAMPLE_TITLES: &[&str] = &[
    "Finish project docs",
    "Write test cases",
    "Refactor auth module",
    "Fix database connection issue",
    "Update frontend styles",
    "Prepare demo slides",
];

/// Timings for one round, in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchResult {
    pub iterations: usize,
    pub create_time: f64,
    pub read_time: f64,
    pub update_time: f64,
    pub delete_time: f64,
    pub total_time: f64,
    /// How many creates succeeded; only those are updated and deleted
    #[serde(skip)]
    pub created: usize,
}

/// Due date 1..=30 days out, at noon UTC
fn random_due_date<R: Rng>(today: NaiveDate, rng: &mut R) -> Timestamp {
    let offset = rng.gen_range(1..=30);
    let date = today.checked_add_days(Days::new(offset)).unwrap_or(today);
    Timestamp::new(format!("{}T12:00:00Z", date.format("%Y-%m-%d")))
}

/// Run one round of `iterations` tasks against `api`.
///
/// Individual request failures are logged and skipped.
pub async fn run<A: TodoApi, R: Rng>(
    api: &A,
    iterations: usize,
    today: NaiveDate,
    rng: &mut R,
) -> BenchResult {
    info!(iterations, "starting round");

    let start = Instant::now();
    let mut created: Vec<Task> = Vec::with_capacity(iterations);
    for i in 0..iterations {
        let base = SAMPLE_TITLES.choose(rng).copied().unwrap_or("Task");
        let task = NewTask::new(format!("{} #{}", base, i + 1), random_due_date(today, rng));
        match api.create(&task).await {
            Ok(task) => created.push(task),
            Err(e) => warn!(error = %e, "create failed"),
        }
    }
    let create_time = start.elapsed().as_secs_f64();

    let start = Instant::now();
    if let Err(e) = api.list().await {
        warn!(error = %e, "list failed");
    }
    let read_time = start.elapsed().as_secs_f64();

    let start = Instant::now();
    for task in &created {
        let done = Task {
            completed: true,
            ..task.clone()
        };
        if let Err(e) = api.update(&done).await {
            warn!(id = %task.id, error = %e, "update failed");
        }
    }
    let update_time = start.elapsed().as_secs_f64();

    let start = Instant::now();
    for task in &created {
        if let Err(e) = api.delete(&task.id).await {
            warn!(id = %task.id, error = %e, "delete failed");
        }
    }
    let delete_time = start.elapsed().as_secs_f64();

    BenchResult {
        iterations,
        create_time,
        read_time,
        update_time,
        delete_time,
        total_time: create_time + read_time + update_time + delete_time,
        created: created.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use todo_sync::{MemoryApi, Operation};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_due_dates_within_a_month() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let due = random_due_date(today(), &mut rng);
            let date = due.parse().unwrap().date_naive();
            assert!(date > today());
            assert!(date <= NaiveDate::from_ymd_opt(2026, 11, 16).unwrap());
            assert!(due.as_str().ends_with("T12:00:00Z"));
        }
    }

    #[tokio::test]
    async fn test_round_cleans_up_after_itself() {
        let api = MemoryApi::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(&api, 5, today(), &mut rng).await;

        assert_eq!(result.iterations, 5);
        assert_eq!(result.created, 5);
        assert!(api.tasks().is_empty());

        let requests = api.requests();
        assert_eq!(requests.len(), 16);
        assert_eq!(requests[5], Operation::List);
        assert!(requests[6..11].iter().all(|op| *op == Operation::Update));
        assert!(requests[11..].iter().all(|op| *op == Operation::Delete));
    }

    #[tokio::test]
    async fn test_failed_creates_are_not_followed_up() {
        let api = MemoryApi::new();
        api.fail(Operation::Create);
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(&api, 3, today(), &mut rng).await;

        assert_eq!(result.created, 0);
        assert_eq!(
            api.requests(),
            [
                Operation::Create,
                Operation::Create,
                Operation::Create,
                Operation::List
            ]
        );
        let sum = result.create_time + result.read_time + result.update_time + result.delete_time;
        assert!((result.total_time - sum).abs() < 1e-9);
    }
}
