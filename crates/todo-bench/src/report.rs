//! CSV Report
//!
//! Appends round results to `performance_results_{N}.csv`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::runner::BenchResult;

pub fn results_path(dir: &Path, iterations: usize) -> PathBuf {
    dir.join(format!("performance_results_{}.csv", iterations))
}

/// Append one row, writing the header only if the file is new
pub fn append_csv(path: &Path, result: &BenchResult) -> anyhow::Result<()> {
    let is_new = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    writer.serialize(result)?;
    writer.flush()?;
    Ok(())
}

pub fn summary(result: &BenchResult) -> String {
    format!(
        "---\n\
         iterations: {}\n\
         create: {:.2}s\n\
         read:   {:.2}s\n\
         update: {:.2}s\n\
         delete: {:.2}s\n\
         total:  {:.2}s\n\
         ---",
        result.iterations,
        result.create_time,
        result.read_time,
        result.update_time,
        result.delete_time,
        result.total_time,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(iterations: usize) -> BenchResult {
        BenchResult {
            iterations,
            create_time: 1.5,
            read_time: 0.25,
            update_time: 1.0,
            delete_time: 0.75,
            total_time: 3.5,
            created: iterations,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = results_path(dir.path(), 10);

        append_csv(&path, &result(10)).unwrap();
        append_csv(&path, &result(10)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            [
                "iterations,create_time,read_time,update_time,delete_time,total_time",
                "10,1.5,0.25,1.0,0.75,3.5",
                "10,1.5,0.25,1.0,0.75,3.5",
            ]
        );
    }

    #[test]
    fn test_results_path_names_iteration_count() {
        let path = results_path(Path::new("out"), 500);
        assert_eq!(path, Path::new("out").join("performance_results_500.csv"));
    }

    #[test]
    fn test_summary_rounds_to_hundredths() {
        let text = summary(&result(50));
        assert!(text.contains("iterations: 50"));
        assert!(text.contains("total:  3.50s"));
    }
}
