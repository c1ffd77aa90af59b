//! The average-rating job: ratings file in, `movie<TAB>average` file out.
//!
//! ```text
//! lines ─flat_map(parse_line)─▶ (movie, rating) ─group_by_key─▶ (movie, [ratings])
//!       ─map(reduce)─▶ (movie, average) ─sort by movie─▶ output file
//! ```
//!
//! The input is read completely before the output path is touched, so a
//! missing or unreadable input never creates the output file.

use crate::io::text::read_lines_vec;
use crate::ratings::{MovieId, parse_line, reduce};
use crate::{Pipeline, from_vec_once};
use anyhow::Result;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, trace};

/// Input and output locations for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingsJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Counters gathered during [`RatingsJob::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_parsed: usize,
    pub lines_skipped: usize,
    pub movies_written: usize,
}

impl RatingsJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Run the job once.
    ///
    /// # Errors
    /// Any I/O failure on the input or output. A failed write leaves whatever
    /// was already written in place.
    pub fn run(&self) -> Result<RunSummary> {
        let lines = read_lines_vec(&self.input)?;
        let lines_read = lines.len();
        debug!(input = %self.input.display(), lines = lines_read, "read input");

        let parsed = Rc::new(Cell::new(0usize));
        let p = Pipeline::default();
        let averages = {
            let parsed = Rc::clone(&parsed);
            from_vec_once(&p, lines)
                .flat_map(move |line: &String| {
                    let rating = parse_line(line);
                    match rating {
                        Some(_) => parsed.set(parsed.get() + 1),
                        None => trace!(line = %line, "skipping malformed line"),
                    }
                    rating.map(|r| (r.movie_id, r.rating))
                })
                .group_by_key()
                .map(|(movie_id, ratings): &(MovieId, Vec<f64>)| {
                    let avg = reduce(*movie_id, ratings);
                    (avg.movie_id, avg.average)
                })
        };

        let movies_written = averages.write_tsv_sorted(&self.output)?;

        let records_parsed = parsed.get();
        let summary = RunSummary {
            lines_read,
            records_parsed,
            lines_skipped: lines_read - records_parsed,
            movies_written,
        };
        debug!(
            output = %self.output.display(),
            lines_read = summary.lines_read,
            records_parsed = summary.records_parsed,
            lines_skipped = summary.lines_skipped,
            movies_written = summary.movies_written,
            "job finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn summary_counts_lines() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("ratings.csv");
        fs::write(&input, "1,101,4.0\nbad,line\n2,102,3.0\n4,103,abc\n3,101,2.0\n")?;
        let job = RatingsJob::new(&input, dir.path().join("out.txt"));

        let summary = job.run()?;
        assert_eq!(
            summary,
            RunSummary {
                lines_read: 5,
                records_parsed: 3,
                lines_skipped: 2,
                movies_written: 2,
            }
        );
        Ok(())
    }
}
