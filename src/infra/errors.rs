// src/infra/errors.rs — Error types for registrar

use chrono::NaiveTime;
use thiserror::Error;
use uuid::Uuid;

use crate::scheduling::conflict::ConflictKind;

#[derive(Error, Debug)]
pub enum RegistrarError {
    // Scheduling rejections (retryable by picking another slot or room)
    #[error("invalid interval: start {start} is not before end {end}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    #[error("{kind} conflict: {resource} is already booked by session {conflicting_session}")]
    Conflict {
        kind: ConflictKind,
        conflicting_session: Uuid,
        resource: String,
    },

    // Record-keeping rejections
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} with {key} already exists")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("student {student_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { student_id: Uuid, course_id: Uuid },

    #[error("grade {value} outside the 0..={max} scale")]
    GradeOutOfRange { value: f64, max: f64 },

    // Infra
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RegistrarError {
    /// True for rejections of a single request, as opposed to system faults.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RegistrarError::InvalidInterval { .. }
                | RegistrarError::Conflict { .. }
                | RegistrarError::NotFound { .. }
                | RegistrarError::DuplicateKey { .. }
                | RegistrarError::AlreadyEnrolled { .. }
                | RegistrarError::GradeOutOfRange { .. }
        )
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        RegistrarError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
