// src/api/handlers.rs

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use uuid::Uuid;

use crate::api::types::*;
use crate::api::{auth, ApiState};
use crate::domain::{Course, Enrollment, Grade, Specialty, Student, StudentGroup, Trainer};
use crate::scheduling::Session;

type Reply<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

/// GET /api/v1/health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// -- Students --

/// POST /api/v1/students
pub async fn create_student(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<CreateStudentRequest>,
) -> Reply<(StatusCode, Json<Student>)> {
    auth::check_auth(&state, &headers)?;
    let student = state
        .registry
        .add_student(
            body.matricule.as_deref(),
            &body.first_name,
            &body.last_name,
            &body.email,
            body.group_id,
        )
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list_students(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<Student>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.registry.students()))
}

/// GET /api/v1/students/{id}
pub async fn get_student(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<Student>> {
    auth::check_auth(&state, &headers)?;
    state.registry.student(id).map(Json).map_err(error_reply)
}

/// DELETE /api/v1/students/{id}
pub async fn delete_student(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<StatusCode> {
    auth::check_auth(&state, &headers)?;
    state.registry.remove_student(id).map_err(error_reply)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/students/{id}/grades
pub async fn student_grades(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<StudentGradesResponse>> {
    auth::check_auth(&state, &headers)?;
    let grades = state.grades.for_student(id).map_err(error_reply)?;
    let average = state.grades.average_for_student(id).map_err(error_reply)?;
    Ok(Json(StudentGradesResponse { grades, average }))
}

// -- Trainers --

/// POST /api/v1/trainers
pub async fn create_trainer(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<CreateTrainerRequest>,
) -> Reply<(StatusCode, Json<Trainer>)> {
    auth::check_auth(&state, &headers)?;
    let trainer = state
        .registry
        .add_trainer(&body.name, body.specialty.as_deref(), &body.email)
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

/// GET /api/v1/trainers
pub async fn list_trainers(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<Trainer>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.registry.trainers()))
}

/// GET /api/v1/trainers/{id}
pub async fn get_trainer(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<Trainer>> {
    auth::check_auth(&state, &headers)?;
    state.registry.trainer(id).map(Json).map_err(error_reply)
}

/// DELETE /api/v1/trainers/{id}
pub async fn delete_trainer(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<StatusCode> {
    auth::check_auth(&state, &headers)?;
    state.registry.remove_trainer(id).map_err(error_reply)?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Courses --

/// POST /api/v1/courses
pub async fn create_course(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<CreateCourseRequest>,
) -> Reply<(StatusCode, Json<Course>)> {
    auth::check_auth(&state, &headers)?;
    let course = state
        .registry
        .add_course(
            body.code.as_deref(),
            &body.title,
            body.description.as_deref(),
            body.trainer_id,
            body.specialty_id,
        )
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses
pub async fn list_courses(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<Course>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.registry.courses()))
}

/// GET /api/v1/courses/{id}
pub async fn get_course(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<Course>> {
    auth::check_auth(&state, &headers)?;
    state.registry.course(id).map(Json).map_err(error_reply)
}

/// DELETE /api/v1/courses/{id}
pub async fn delete_course(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<StatusCode> {
    auth::check_auth(&state, &headers)?;
    state.registry.remove_course(id).map_err(error_reply)?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Groups and specialties --

/// POST /api/v1/groups
pub async fn create_group(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<CreateGroupRequest>,
) -> Reply<(StatusCode, Json<StudentGroup>)> {
    auth::check_auth(&state, &headers)?;
    let group = state
        .registry
        .add_group(&body.name, body.specialty_id)
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /api/v1/groups
pub async fn list_groups(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<StudentGroup>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.registry.groups()))
}

/// POST /api/v1/specialties
pub async fn create_specialty(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<CreateSpecialtyRequest>,
) -> Reply<(StatusCode, Json<Specialty>)> {
    auth::check_auth(&state, &headers)?;
    let specialty = state
        .registry
        .add_specialty(&body.name, body.description.as_deref())
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(specialty)))
}

/// GET /api/v1/specialties
pub async fn list_specialties(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<Specialty>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.registry.specialties()))
}

// -- Enrollments --

/// POST /api/v1/enrollments
pub async fn create_enrollment(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<EnrollRequest>,
) -> Reply<(StatusCode, Json<Enrollment>)> {
    auth::check_auth(&state, &headers)?;
    let enrollment = state
        .enrollment
        .enroll(body.student_id, body.course_id)
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/v1/enrollments
pub async fn list_enrollments(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<Enrollment>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.enrollment.all()))
}

/// DELETE /api/v1/enrollments/{id}
pub async fn delete_enrollment(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<StatusCode> {
    auth::check_auth(&state, &headers)?;
    state.enrollment.cancel(id).map_err(error_reply)?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Grades --

/// POST /api/v1/grades
pub async fn create_grade(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<AssignGradeRequest>,
) -> Reply<(StatusCode, Json<Grade>)> {
    auth::check_auth(&state, &headers)?;
    let grade = state
        .grades
        .assign(body.student_id, body.course_id, body.value)
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(grade)))
}

/// PUT /api/v1/grades/{id}
pub async fn update_grade(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateGradeRequest>,
) -> Reply<Json<Grade>> {
    auth::check_auth(&state, &headers)?;
    state
        .grades
        .update(id, body.value)
        .map(Json)
        .map_err(error_reply)
}

// -- Planning --

/// POST /api/v1/planning/sessions — schedule a session; 409 with the
/// structured conflict on rejection.
pub async fn schedule_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<ScheduleSessionRequest>,
) -> Reply<(StatusCode, Json<Session>)> {
    auth::check_auth(&state, &headers)?;
    let session = state
        .planning
        .schedule(
            body.course_id,
            body.group_id,
            body.date,
            body.start,
            body.end,
            &body.room,
        )
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/planning/sessions
pub async fn list_sessions(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Reply<Json<Vec<Session>>> {
    auth::check_auth(&state, &headers)?;
    Ok(Json(state.planning.all_sessions()))
}

/// DELETE /api/v1/planning/sessions/{id}
pub async fn delete_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<StatusCode> {
    auth::check_auth(&state, &headers)?;
    state.planning.remove(id).map_err(error_reply)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/planning/groups/{id}
pub async fn group_schedule(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<Vec<Session>>> {
    auth::check_auth(&state, &headers)?;
    state.registry.group(id).map_err(error_reply)?;
    Ok(Json(state.planning.sessions_for_group(id)))
}

/// GET /api/v1/planning/trainers/{id}
pub async fn trainer_schedule(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<Vec<Session>>> {
    auth::check_auth(&state, &headers)?;
    state.registry.trainer(id).map_err(error_reply)?;
    Ok(Json(state.planning.sessions_for_trainer(id)))
}

/// GET /api/v1/planning/students/{id}
pub async fn student_schedule(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Reply<Json<Vec<Session>>> {
    auth::check_auth(&state, &headers)?;
    state
        .planning
        .sessions_for_student(id)
        .map(Json)
        .map_err(error_reply)
}
