use agv_core::{CoreError, JobId, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("vehicle at fleet slot {slot} has id {got}; ids must match their slot")]
    VehicleIdMismatch { slot: usize, got: VehicleId },

    #[error("vehicle {vehicle} references job {job}, which the job board does not know")]
    UnknownJob { vehicle: VehicleId, job: JobId },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
