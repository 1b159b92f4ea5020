//! Transport jobs and the host-side job store seam.
//!
//! The motion core reads a job's drop location and signals completion; the
//! host owns everything else about jobs (creation, assignment, persistence).
//! That boundary is the [`JobBoard`] trait.  [`JobLedger`] is the bundled
//! in-memory implementation, sufficient for simulation hosts and tests.

use crate::{CoreError, CoreResult, JobId, Position};

// ── Job ───────────────────────────────────────────────────────────────────────

/// A point-to-point transport order.  Read-only to the motion core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub id: JobId,
    pub pickup: Position,
    pub dropoff: Position,
}

// ── JobBoard ──────────────────────────────────────────────────────────────────

/// The job store as seen by the motion core.
///
/// Implement this to bridge to an external job system; the stepper only ever
/// calls these three methods.
pub trait JobBoard {
    /// The drop location of `job`, or `None` if the id is unknown.
    fn drop_location(&self, job: JobId) -> Option<Position>;

    /// Mark `job` complete.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::JobNotFound`] for an unknown id.
    fn complete(&mut self, job: JobId) -> CoreResult<()>;

    /// `true` if `job` has been completed.
    fn is_complete(&self, job: JobId) -> bool;
}

// ── JobLedger ─────────────────────────────────────────────────────────────────

/// In-memory [`JobBoard`]: jobs indexed by `JobId`, completion as a parallel
/// flag vector.
#[derive(Default)]
pub struct JobLedger {
    jobs: Vec<Job>,
    done: Vec<bool>,
}

impl JobLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job and return its id (sequential from 0).
    pub fn push(&mut self, pickup: Position, dropoff: Position) -> JobId {
        let id = JobId(self.jobs.len() as u32);
        self.jobs.push(Job { id, pickup, dropoff });
        self.done.push(false);
        id
    }

    /// Look up a job by id.
    pub fn get(&self, job: JobId) -> Option<&Job> {
        self.jobs.get(job.index())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of jobs marked complete.
    pub fn completed_count(&self) -> usize {
        self.done.iter().filter(|&&d| d).count()
    }
}

impl JobBoard for JobLedger {
    fn drop_location(&self, job: JobId) -> Option<Position> {
        self.jobs.get(job.index()).map(|j| j.dropoff)
    }

    fn complete(&mut self, job: JobId) -> CoreResult<()> {
        match self.done.get_mut(job.index()) {
            Some(flag) => {
                *flag = true;
                Ok(())
            }
            None => Err(CoreError::JobNotFound(job)),
        }
    }

    fn is_complete(&self, job: JobId) -> bool {
        self.done.get(job.index()).copied().unwrap_or(false)
    }
}
