// src/scheduling/conflict.rs — Timetable conflict detection

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::Session;

/// Which exclusive resource a rejected candidate collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    Group,
    Trainer,
    Room,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::Group => write!(f, "group"),
            ConflictKind::Trainer => write!(f, "trainer"),
            ConflictKind::Room => write!(f, "room"),
        }
    }
}

/// Outcome of checking a candidate against the sessions already booked
/// on its date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConflictOutcome {
    Accepted,
    Rejected {
        kind: ConflictKind,
        /// Id of the booked session the candidate collided with.
        conflicting_session: Uuid,
        /// The contended resource (group id, trainer id, or room name).
        resource: String,
    },
}

impl ConflictOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ConflictOutcome::Accepted)
    }
}

/// Decide whether `candidate` may join the timetable alongside
/// `existing`, the accepted sessions on the candidate's date.
///
/// Pure function over its inputs: no lookups, no mutation. The caller
/// supplies `existing` already restricted to the same date (overlap
/// across dates is impossible) and excluding the candidate itself.
///
/// Sessions are scanned in the order given; for each overlapping one the
/// dimensions are checked group, then trainer, then room, and the first
/// violation found anywhere wins. When several booked sessions collide
/// independently, the one reported therefore depends on the caller's
/// iteration order — callers that need reproducible reports must supply
/// a stable order.
///
/// Precondition: `candidate.start < candidate.end` (see
/// [`Session::validate_interval`]); the checker does not defend against
/// malformed intervals.
pub fn check_conflicts(candidate: &Session, existing: &[Session]) -> ConflictOutcome {
    for booked in existing {
        if !overlapping(candidate, booked) {
            continue;
        }
        let booked_id = booked.id.unwrap_or(Uuid::nil());

        if booked.group_id == candidate.group_id {
            return ConflictOutcome::Rejected {
                kind: ConflictKind::Group,
                conflicting_session: booked_id,
                resource: candidate.group_id.to_string(),
            };
        }

        if let (Some(theirs), Some(ours)) = (booked.trainer_id, candidate.trainer_id) {
            if theirs == ours {
                return ConflictOutcome::Rejected {
                    kind: ConflictKind::Trainer,
                    conflicting_session: booked_id,
                    resource: ours.to_string(),
                };
            }
        }

        if booked.room.eq_ignore_ascii_case(&candidate.room) {
            return ConflictOutcome::Rejected {
                kind: ConflictKind::Room,
                conflicting_session: booked_id,
                resource: booked.room.clone(),
            };
        }
    }

    ConflictOutcome::Accepted
}

/// Inclusive on both edges: a session ending exactly when another starts
/// still counts as an overlap. Back-to-back bookings of the same
/// resource are rejected on purpose.
fn overlapping(a: &Session, b: &Session) -> bool {
    a.start <= b.end && a.end >= b.start
}
