// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate selection and the poll-until-quiet state machine.
//!
//! Pure: callers pass observations with their sample time, so the rules can
//! be exercised without a filesystem or a clock.

use std::time::{Duration, Instant, SystemTime};
use xcr_adapters::ScannedFile;
use xcr_core::{ArtifactCandidate, StableArtifact};

/// Unchanged samples required before promotion.
pub const MIN_STABLE_SAMPLES: u32 = 2;

/// Pick the newest eligible file: modified at or after `since`, newest
/// mtime first, ties broken by the lexicographically greatest path.
pub fn select_candidate(
    files: Vec<ScannedFile>,
    since: SystemTime,
    sampled_at: Instant,
) -> Option<ArtifactCandidate> {
    files
        .into_iter()
        .filter(|f| f.modified >= since)
        .max_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.path.cmp(&b.path)))
        .map(|f| ArtifactCandidate {
            path: f.path,
            modified: f.modified,
            size: f.size,
            sampled_at,
        })
}

/// Result of feeding one poll to the [`Stabilizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// No eligible artifact yet.
    Idle,
    /// A new artifact, or the tracked one changed or vanished.
    Reset,
    /// Same state as before; not yet quiet for long enough.
    Settling { samples: u32, quiet_for: Duration },
    /// Unchanged across the quiet window.
    Stable(StableArtifact),
}

#[derive(Debug)]
struct Tracked {
    first: ArtifactCandidate,
    samples: u32,
}

/// Tracks the selected candidate across polls.
#[derive(Debug)]
pub struct Stabilizer {
    quiet_window: Duration,
    tracked: Option<Tracked>,
}

impl Stabilizer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            tracked: None,
        }
    }

    pub fn observe(&mut self, candidate: Option<ArtifactCandidate>) -> Observation {
        let Some(candidate) = candidate else {
            return match self.tracked.take() {
                Some(_) => Observation::Reset,
                None => Observation::Idle,
            };
        };

        match &mut self.tracked {
            Some(tracked) if tracked.first.same_state(&candidate) => {
                tracked.samples += 1;
                let quiet_for = candidate
                    .sampled_at
                    .saturating_duration_since(tracked.first.sampled_at);
                if tracked.samples >= MIN_STABLE_SAMPLES && quiet_for >= self.quiet_window {
                    Observation::Stable(StableArtifact::promote(&candidate))
                } else {
                    Observation::Settling {
                        samples: tracked.samples,
                        quiet_for,
                    }
                }
            }
            _ => {
                self.tracked = Some(Tracked {
                    first: candidate,
                    samples: 1,
                });
                Observation::Reset
            }
        }
    }
}

#[cfg(test)]
#[path = "stabilizer_tests.rs"]
mod tests;
