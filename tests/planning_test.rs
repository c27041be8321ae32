// tests/planning_test.rs — Integration test: scheduling end-to-end

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use registrar::domain::{Course, StudentGroup, Trainer};
use registrar::infra::errors::RegistrarError;
use registrar::registry::Registry;
use registrar::scheduling::ConflictKind;
use registrar::service::PlanningService;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

/// Registry with two trainers, two groups, and a course for each
/// (trainer, group) pairing the scenarios need.
struct Fixture {
    registry: Arc<Registry>,
    planning: PlanningService,
    t1: Trainer,
    course_t1: Course,
    course_t1_bis: Course,
    course_t2: Course,
    g1: StudentGroup,
    g2: StudentGroup,
}

fn fixture() -> Fixture {
    let registry = Arc::new(Registry::new());
    let specialty = registry.add_specialty("Software Engineering", None).unwrap();

    let t1 = registry
        .add_trainer("Alice Smith", Some("Java"), "alice@test.io")
        .unwrap();
    let t2 = registry
        .add_trainer("Bruno Keller", Some("SQL"), "bruno@test.io")
        .unwrap();

    let g1 = registry.add_group("G1", specialty.id).unwrap();
    let g2 = registry.add_group("G2", specialty.id).unwrap();

    let course_t1 = registry
        .add_course(Some("C1"), "Java Basics", None, Some(t1.id), None)
        .unwrap();
    let course_t1_bis = registry
        .add_course(Some("C1B"), "Advanced Java", None, Some(t1.id), None)
        .unwrap();
    let course_t2 = registry
        .add_course(Some("C2"), "Databases", None, Some(t2.id), None)
        .unwrap();

    Fixture {
        planning: PlanningService::new(registry.clone()),
        registry,
        t1,
        course_t1,
        course_t1_bis,
        course_t2,
        g1,
        g2,
    }
}

#[test]
fn test_first_session_of_the_day_accepted() {
    let f = fixture();

    let session = f
        .planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(12, 0), "A101")
        .unwrap();

    assert!(session.id.is_some());
    assert_eq!(session.trainer_id, Some(f.t1.id));
    assert_eq!(f.registry.sessions_on(day()).len(), 1);
}

/// Room A101 is taken 09:00–12:00; a different course, trainer, and
/// group asking for the same room 11:00–13:00 is turned away.
#[test]
fn test_room_conflict_scenario() {
    let f = fixture();

    let first = f
        .planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(12, 0), "A101")
        .unwrap();

    let err = f
        .planning
        .schedule(f.course_t2.id, f.g2.id, day(), t(11, 0), t(13, 0), "A101")
        .unwrap_err();

    match err {
        RegistrarError::Conflict {
            kind,
            conflicting_session,
            resource,
        } => {
            assert_eq!(kind, ConflictKind::Room);
            assert_eq!(conflicting_session, first.id.unwrap());
            assert_eq!(resource, "room 'A101'");
        }
        other => panic!("expected room conflict, got {other:?}"),
    }

    // The rejected candidate was discarded.
    assert_eq!(f.registry.sessions_on(day()).len(), 1);
}

/// Same trainer, different groups, different rooms: the group check
/// passes and the trainer check fires.
#[test]
fn test_trainer_conflict_scenario() {
    let f = fixture();

    f.planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();

    let err = f
        .planning
        .schedule(f.course_t1_bis.id, f.g2.id, day(), t(9, 30), t(10, 30), "B202")
        .unwrap_err();

    match err {
        RegistrarError::Conflict { kind, resource, .. } => {
            assert_eq!(kind, ConflictKind::Trainer);
            assert_eq!(resource, "trainer 'Alice Smith'");
        }
        other => panic!("expected trainer conflict, got {other:?}"),
    }
}

/// Back-to-back sessions for one group count as a conflict: the first
/// ends at 10:00 and the second starts at 10:00, and the boundary is
/// inclusive.
#[test]
fn test_group_conflict_at_touching_boundary() {
    let f = fixture();

    f.planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();

    let err = f
        .planning
        .schedule(f.course_t2.id, f.g1.id, day(), t(10, 0), t(11, 0), "B202")
        .unwrap_err();

    match err {
        RegistrarError::Conflict { kind, resource, .. } => {
            assert_eq!(kind, ConflictKind::Group);
            assert_eq!(resource, "group 'G1'");
        }
        other => panic!("expected group conflict, got {other:?}"),
    }
}

#[test]
fn test_disjoint_sessions_accepted() {
    let f = fixture();

    f.planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();

    // Different group, trainer, and room, with a time gap as well.
    f.planning
        .schedule(f.course_t2.id, f.g2.id, day(), t(10, 30), t(11, 30), "B202")
        .unwrap();

    assert_eq!(f.registry.sessions_on(day()).len(), 2);
}

#[test]
fn test_same_slot_next_day_accepted() {
    let f = fixture();
    let tuesday = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();

    f.planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();
    f.planning
        .schedule(f.course_t1.id, f.g1.id, tuesday, t(9, 0), t(10, 0), "A101")
        .unwrap();

    assert_eq!(f.registry.sessions_on(day()).len(), 1);
    assert_eq!(f.registry.sessions_on(tuesday).len(), 1);
}

#[test]
fn test_invalid_interval_rejected_before_checking() {
    let f = fixture();

    let err = f
        .planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(10, 0), t(10, 0), "A101")
        .unwrap_err();
    assert!(matches!(err, RegistrarError::InvalidInterval { .. }));

    let err = f
        .planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(11, 0), t(10, 0), "A101")
        .unwrap_err();
    assert!(matches!(err, RegistrarError::InvalidInterval { .. }));
}

#[test]
fn test_unknown_refs_rejected() {
    let f = fixture();

    let err = f
        .planning
        .schedule(Uuid::new_v4(), f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap_err();
    assert!(matches!(err, RegistrarError::NotFound { entity: "course", .. }));

    let err = f
        .planning
        .schedule(f.course_t1.id, Uuid::new_v4(), day(), t(9, 0), t(10, 0), "A101")
        .unwrap_err();
    assert!(matches!(err, RegistrarError::NotFound { entity: "group", .. }));
}

/// Deleting a session frees its resources; the freed slot can be
/// rebooked without any re-check of the remaining timetable.
#[test]
fn test_delete_frees_the_slot() {
    let f = fixture();

    let session = f
        .planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();

    f.planning.remove(session.id.unwrap()).unwrap();

    f.planning
        .schedule(f.course_t2.id, f.g2.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();
}

#[test]
fn test_student_schedule_follows_group() {
    let f = fixture();

    let student = f
        .registry
        .add_student(None, "Lina", "Haddad", "lina@test.io", Some(f.g1.id))
        .unwrap();
    let loner = f
        .registry
        .add_student(None, "Tom", "Becker", "tom@test.io", None)
        .unwrap();

    f.planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();

    assert_eq!(f.planning.sessions_for_student(student.id).unwrap().len(), 1);
    assert!(f.planning.sessions_for_student(loner.id).unwrap().is_empty());
}

#[test]
fn test_trainer_schedule_spans_groups_and_days() {
    let f = fixture();
    let tuesday = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();

    f.planning
        .schedule(f.course_t1.id, f.g1.id, day(), t(9, 0), t(10, 0), "A101")
        .unwrap();
    f.planning
        .schedule(f.course_t1_bis.id, f.g2.id, tuesday, t(9, 0), t(10, 0), "A101")
        .unwrap();

    assert_eq!(f.planning.sessions_for_trainer(f.t1.id).len(), 2);
}
