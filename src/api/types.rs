// src/api/types.rs

use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Grade;
use crate::infra::errors::RegistrarError;
use crate::scheduling::ConflictKind;

/// Request body for registering a student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    /// Registration number; generated when omitted.
    #[serde(default)]
    pub matricule: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainerRequest {
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    /// Course code; generated when omitted.
    #[serde(default)]
    pub code: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trainer_id: Option<Uuid>,
    #[serde(default)]
    pub specialty_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub specialty_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpecialtyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignGradeRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGradeRequest {
    pub value: f64,
}

/// Request body for scheduling a session.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSessionRequest {
    pub course_id: Uuid,
    pub group_id: Uuid,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub room: String,
}

/// A student's grades with their running average.
#[derive(Debug, Serialize)]
pub struct StudentGradesResponse {
    pub grades: Vec<Grade>,
    pub average: Option<f64>,
}

/// Error response body. `conflict` is present only for scheduling
/// rejections, so callers can react to the structured outcome instead
/// of parsing the message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictBody>,
}

#[derive(Debug, Serialize)]
pub struct ConflictBody {
    pub kind: ConflictKind,
    pub conflicting_session: Uuid,
    pub resource: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            conflict: None,
        }
    }
}

/// Map a registrar error to an HTTP status and JSON body.
pub fn error_reply(err: RegistrarError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        RegistrarError::NotFound { .. } => StatusCode::NOT_FOUND,
        RegistrarError::DuplicateKey { .. }
        | RegistrarError::AlreadyEnrolled { .. }
        | RegistrarError::Conflict { .. } => StatusCode::CONFLICT,
        RegistrarError::InvalidInterval { .. } | RegistrarError::GradeOutOfRange { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let conflict = match &err {
        RegistrarError::Conflict {
            kind,
            conflicting_session,
            resource,
        } => Some(ConflictBody {
            kind: *kind,
            conflicting_session: *conflicting_session,
            resource: resource.clone(),
        }),
        _ => None,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            conflict,
        }),
    )
}
