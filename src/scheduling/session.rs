// src/scheduling/session.rs — Scheduled class meetings

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::infra::errors::RegistrarError;

/// One meeting of a course with a student group, in a room, on a date.
///
/// A session with `id == None` is a candidate that has not passed
/// conflict checking; the registry assigns the id when it accepts the
/// session. Once accepted a session is never modified — updates are
/// delete-then-recreate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Option<Uuid>,
    pub course_id: Uuid,
    pub group_id: Uuid,
    /// Trainer teaching the course, resolved when the candidate is built.
    /// Carried on the session itself so conflict checks don't need a
    /// course lookup.
    pub trainer_id: Option<Uuid>,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Room identifier; compared case-insensitively.
    pub room: String,
}

impl Session {
    /// Build an unscheduled candidate.
    #[allow(clippy::too_many_arguments)]
    pub fn candidate(
        course_id: Uuid,
        group_id: Uuid,
        trainer_id: Option<Uuid>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        room: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            course_id,
            group_id,
            trainer_id,
            date,
            start,
            end,
            room: room.into(),
        }
    }

    /// Zero-length and inverted intervals are invalid; callers must
    /// reject them before conflict checking runs.
    pub fn validate_interval(&self) -> Result<(), RegistrarError> {
        if self.start < self.end {
            Ok(())
        } else {
            Err(RegistrarError::InvalidInterval {
                start: self.start,
                end: self.end,
            })
        }
    }
}

/// Identity is the assigned id. A candidate has no identity yet and is
/// distinct from every session, itself included.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample(start: NaiveTime, end: NaiveTime) -> Session {
        Session::candidate(
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            start,
            end,
            "A101",
        )
    }

    #[test]
    fn test_valid_interval() {
        assert!(sample(t(9, 0), t(10, 0)).validate_interval().is_ok());
    }

    #[test]
    fn test_zero_length_interval_rejected() {
        let err = sample(t(9, 0), t(9, 0)).validate_interval().unwrap_err();
        assert!(matches!(err, RegistrarError::InvalidInterval { .. }));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        assert!(sample(t(10, 0), t(9, 0)).validate_interval().is_err());
    }

    #[test]
    fn test_candidate_never_equal() {
        let a = sample(t(9, 0), t(10, 0));
        assert_ne!(a, a.clone());
    }

    #[test]
    fn test_accepted_equal_by_id() {
        let mut a = sample(t(9, 0), t(10, 0));
        let id = Uuid::new_v4();
        a.id = Some(id);
        let mut b = sample(t(14, 0), t(15, 0));
        b.id = Some(id);
        assert_eq!(a, b);
    }
}
