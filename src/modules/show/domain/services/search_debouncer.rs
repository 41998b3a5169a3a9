//! Search box debouncing.
//!
//! Pipeline: debounce (coalesce edits closer than `interval`) -> dedupe (drop a
//! value equal to the previous emission) -> dispatch (wrap as a criteria change).
//! `SearchDebouncer` is the clock-free state machine; `debounced_search` drives
//! it from a stream with tokio timers.

use super::catalog_filter::CriteriaChange;
use futures::stream::{self, Stream, StreamExt};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

#[derive(Debug, Clone)]
struct Pending {
    term: String,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    interval: Duration,
    pending: Option<Pending>,
    last_emitted: Option<String>,
}

impl SearchDebouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_emitted: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record an edit; restarts the quiet window
    pub fn push(&mut self, term: impl Into<String>, at: Instant) {
        self.pending = Some(Pending {
            term: term.into(),
            deadline: at + self.interval,
        });
    }

    /// When the pending edit becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Emit the pending edit if its quiet window has elapsed and it differs from
    /// the previous emission. A due-but-duplicate edit is consumed silently.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .map(|p| now >= p.deadline)
            .unwrap_or(false);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.dedupe(pending.term)
    }

    /// Emit whatever is pending regardless of timing (input closed)
    pub fn flush(&mut self) -> Option<String> {
        let pending = self.pending.take()?;
        self.dedupe(pending.term)
    }

    fn dedupe(&mut self, term: String) -> Option<String> {
        if self.last_emitted.as_deref() == Some(term.as_str()) {
            log::debug!("Search term '{}' unchanged, suppressed", term);
            return None;
        }
        self.last_emitted = Some(term.clone());
        Some(term)
    }
}

struct DebounceState<S> {
    input: S,
    debouncer: SearchDebouncer,
    finished: bool,
}

/// Turn raw search-box edits into debounced, de-duplicated criteria changes.
///
/// A value still pending when the input ends is emitted before the output ends.
pub fn debounced_search<S>(terms: S, interval: Duration) -> impl Stream<Item = CriteriaChange>
where
    S: Stream<Item = String> + Unpin,
{
    let state = DebounceState {
        input: terms,
        debouncer: SearchDebouncer::new(interval),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }

        loop {
            match state.debouncer.deadline() {
                Some(deadline) => {
                    tokio::select! {
                        biased;
                        next = state.input.next() => match next {
                            Some(term) => state.debouncer.push(term, Instant::now()),
                            None => {
                                state.finished = true;
                                let term = state.debouncer.flush()?;
                                return Some((CriteriaChange::SearchTerm(term), state));
                            }
                        },
                        _ = sleep_until(deadline) => {
                            if let Some(term) = state.debouncer.poll(Instant::now()) {
                                return Some((CriteriaChange::SearchTerm(term), state));
                            }
                        }
                    }
                }
                None => match state.input.next().await {
                    Some(term) => state.debouncer.push(term, Instant::now()),
                    None => return None,
                },
            }
        }
    })
}
