// src/service/planning.rs — Timetable operations

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::infra::errors::RegistrarError;
use crate::registry::Registry;
use crate::scheduling::Session;

/// Schedules, queries, and removes class sessions. Conflict decisions
/// happen in [`crate::scheduling::check_conflicts`]; the registry runs
/// that check and the insert under one lock.
#[derive(Clone)]
pub struct PlanningService {
    registry: Arc<Registry>,
}

impl PlanningService {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Schedule a session for `course_id` and `group_id`. The trainer is
    /// taken from the course. Returns the accepted session with its id,
    /// or the rejection (invalid interval, unknown refs, or a conflict).
    pub fn schedule(
        &self,
        course_id: Uuid,
        group_id: Uuid,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        room: &str,
    ) -> Result<Session, RegistrarError> {
        let course = self.registry.course(course_id)?;
        let group = self.registry.group(group_id)?;

        let candidate = Session::candidate(
            course.id,
            group.id,
            course.trainer_id,
            date,
            start,
            end,
            room,
        );
        candidate.validate_interval()?;

        match self.registry.schedule(candidate) {
            Ok(accepted) => {
                tracing::info!(
                    session = %accepted.id.unwrap_or_default(),
                    course = %course.code,
                    group = %group.name,
                    %date,
                    %room,
                    "session scheduled"
                );
                Ok(accepted)
            }
            Err(err) => {
                if err.is_rejection() {
                    tracing::warn!(course = %course.code, group = %group.name, %date, %err, "session rejected");
                }
                Err(err)
            }
        }
    }

    pub fn all_sessions(&self) -> Vec<Session> {
        self.registry.sessions()
    }

    pub fn sessions_for_group(&self, group_id: Uuid) -> Vec<Session> {
        self.registry.sessions_for_group(group_id)
    }

    pub fn sessions_for_trainer(&self, trainer_id: Uuid) -> Vec<Session> {
        self.registry.sessions_for_trainer(trainer_id)
    }

    /// A student's timetable is their group's timetable; students
    /// without a group have no sessions.
    pub fn sessions_for_student(&self, student_id: Uuid) -> Result<Vec<Session>, RegistrarError> {
        let student = self.registry.student(student_id)?;
        Ok(match student.group_id {
            Some(gid) => self.registry.sessions_for_group(gid),
            None => Vec::new(),
        })
    }

    pub fn remove(&self, session_id: Uuid) -> Result<(), RegistrarError> {
        self.registry.remove_session(session_id)?;
        tracing::info!(session = %session_id, "session removed");
        Ok(())
    }
}
