//! Concurrent batch execution
//!
//! A batch is a JSON Lines document with one [`Query`] per line. All queries
//! run against one shared index on the tokio runtime, at most `concurrency`
//! at a time. Responses come back in input order, one per non-blank line.

use crate::core::envelope::Envelope;
use crate::core::index::PatientIndex;
use crate::core::query::{execute, Query};
use crate::domain::PatientIndexError;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// One parsed batch line
pub type BatchLine = std::result::Result<Query, PatientIndexError>;

/// Outcome of a batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One response per request, in request order
    pub responses: Vec<Envelope>,
    /// Number of failed responses
    pub failed: usize,
}

impl BatchReport {
    /// Returns true if every request succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Parses a JSON Lines document into queries
///
/// Blank lines are skipped. Lines that are not valid queries are kept as
/// errors so that the response stream still lines up with the input.
pub fn parse_batch(input: &str) -> Vec<BatchLine> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str::<Query>(line)
                .map_err(|e| {
                    PatientIndexError::Query(format!("Invalid query on line {}: {}", number + 1, e))
                })
        })
        .collect()
}

/// Executes every line against `index`
pub async fn run_batch(
    index: Arc<PatientIndex>,
    lines: Vec<BatchLine>,
    concurrency: usize,
) -> BatchReport {
    let start = Instant::now();
    let total = lines.len();

    let responses: Vec<Envelope> = stream::iter(lines.into_iter().map(|line| {
        let index = Arc::clone(&index);
        async move {
            match line {
                Ok(query) => tokio::spawn(async move { execute(&index, &query) })
                    .await
                    .unwrap_or_else(|e| Envelope::failure(format!("Query task failed: {e}"))),
                Err(e) => Envelope::failure(e.to_string()),
            }
        }
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await;

    let failed = responses.iter().filter(|r| !r.is_success()).count();

    tracing::info!(
        total,
        failed,
        concurrency,
        duration_ms = start.elapsed().as_millis(),
        "Batch completed"
    );

    BatchReport { responses, failed }
}
