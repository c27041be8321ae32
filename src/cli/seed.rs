// src/cli/seed.rs — `registrar seed`: demo dataset

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::registry::Registry;
use crate::service::PlanningService;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid demo time")
}

/// Build a registry pre-loaded with a small institution: one specialty,
/// two trainers, two groups, a handful of students, three courses, and
/// a conflict-free opening-week timetable.
pub fn demo_registry() -> anyhow::Result<Arc<Registry>> {
    let registry = Arc::new(Registry::new());

    let software = registry.add_specialty(
        "Software Engineering",
        Some("Focuses on software development and design"),
    )?;

    let alice = registry.add_trainer("Alice Smith", Some("Computer Science"), "alice@edumanage.io")?;
    let bruno = registry.add_trainer("Bruno Keller", Some("Databases"), "bruno@edumanage.io")?;

    let group_a = registry.add_group("CS-2026-A", software.id)?;
    let group_b = registry.add_group("CS-2026-B", software.id)?;

    for (first, last, group) in [
        ("Lina", "Haddad", group_a.id),
        ("Marc", "Dupont", group_a.id),
        ("Sofia", "Rossi", group_b.id),
        ("Tom", "Becker", group_b.id),
    ] {
        let email = format!("{}.{}@student.edumanage.io", first.to_lowercase(), last.to_lowercase());
        registry.add_student(None, first, last, &email, Some(group))?;
    }

    let java = registry.add_course(
        Some("JAVA101"),
        "Java Basics",
        Some("Introduction to the language and tooling"),
        Some(alice.id),
        Some(software.id),
    )?;
    let sql = registry.add_course(
        Some("SQL201"),
        "Relational Databases",
        Some("Modeling, querying, transactions"),
        Some(bruno.id),
        Some(software.id),
    )?;
    let algo = registry.add_course(Some("ALGO110"), "Algorithms", None, Some(alice.id), Some(software.id))?;

    for student in registry.students() {
        registry.add_enrollment(student.id, java.id)?;
    }

    // Opening week: same day, disjoint rooms/trainers/groups.
    let planning = PlanningService::new(registry.clone());
    let monday = NaiveDate::from_ymd_opt(2026, 9, 7).expect("valid demo date");
    planning.schedule(java.id, group_a.id, monday, t(9, 0), t(11, 0), "A101")?;
    planning.schedule(sql.id, group_b.id, monday, t(9, 0), t(11, 0), "B202")?;
    planning.schedule(algo.id, group_a.id, monday, t(11, 30), t(13, 0), "A101")?;

    Ok(registry)
}

pub fn run_seed() -> anyhow::Result<()> {
    let registry = demo_registry()?;

    println!("Demo dataset loaded:");
    println!("  specialties: {}", registry.specialties().len());
    println!("  trainers:    {}", registry.trainers().len());
    println!("  groups:      {}", registry.groups().len());
    println!("  students:    {}", registry.students().len());
    println!("  courses:     {}", registry.courses().len());
    println!("  enrollments: {}", registry.enrollments().len());
    println!("  sessions:    {}", registry.sessions().len());

    Ok(())
}
