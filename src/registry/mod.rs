// src/registry/mod.rs — In-memory record store

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{Course, Enrollment, Grade, Specialty, Student, StudentGroup, Trainer};
use crate::infra::errors::RegistrarError;
use crate::scheduling::{check_conflicts, ConflictKind, ConflictOutcome, Session};

/// All record tables. Vecs keep insertion order, which gives
/// `sessions_on` the stable iteration order conflict reporting relies
/// on.
#[derive(Default)]
struct Tables {
    specialties: Vec<Specialty>,
    trainers: Vec<Trainer>,
    groups: Vec<StudentGroup>,
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    grades: Vec<Grade>,
    sessions: Vec<Session>,
    /// Monotonic counter backing generated matricules and course codes.
    seq: u64,
}

impl Tables {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn sessions_on(&self, date: NaiveDate) -> Vec<Session> {
        self.sessions
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect()
    }
}

/// Shared store for every record type the institution keeps. All access
/// goes through one `RwLock`; `schedule` runs its whole
/// fetch–check–insert sequence under the write lock, so concurrent
/// scheduling requests serialize and cannot both pass the conflict
/// check against a stale snapshot.
#[derive(Default)]
pub struct Registry {
    inner: RwLock<Tables>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -- Specialties --

    pub fn add_specialty(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Specialty, RegistrarError> {
        let mut t = self.write();
        if t.specialties.iter().any(|s| s.name == name) {
            return Err(RegistrarError::DuplicateKey {
                entity: "specialty",
                key: format!("name '{name}'"),
            });
        }
        let specialty = Specialty {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.map(Into::into),
        };
        t.specialties.push(specialty.clone());
        Ok(specialty)
    }

    pub fn specialties(&self) -> Vec<Specialty> {
        self.read().specialties.clone()
    }

    pub fn specialty(&self, id: Uuid) -> Result<Specialty, RegistrarError> {
        self.read()
            .specialties
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RegistrarError::not_found("specialty", id))
    }

    // -- Trainers --

    pub fn add_trainer(
        &self,
        name: &str,
        specialty: Option<&str>,
        email: &str,
    ) -> Result<Trainer, RegistrarError> {
        let mut t = self.write();
        if t.trainers.iter().any(|tr| tr.email == email) {
            return Err(RegistrarError::DuplicateKey {
                entity: "trainer",
                key: format!("email '{email}'"),
            });
        }
        let trainer = Trainer {
            id: Uuid::new_v4(),
            name: name.into(),
            specialty: specialty.map(Into::into),
            email: email.into(),
        };
        t.trainers.push(trainer.clone());
        Ok(trainer)
    }

    pub fn trainers(&self) -> Vec<Trainer> {
        self.read().trainers.clone()
    }

    pub fn trainer(&self, id: Uuid) -> Result<Trainer, RegistrarError> {
        self.read()
            .trainers
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| RegistrarError::not_found("trainer", id))
    }

    pub fn remove_trainer(&self, id: Uuid) -> Result<(), RegistrarError> {
        let mut t = self.write();
        let before = t.trainers.len();
        t.trainers.retain(|tr| tr.id != id);
        if t.trainers.len() == before {
            return Err(RegistrarError::not_found("trainer", id));
        }
        // Courses keep running without an assigned trainer.
        for course in t.courses.iter_mut().filter(|c| c.trainer_id == Some(id)) {
            course.trainer_id = None;
        }
        Ok(())
    }

    // -- Student groups --

    pub fn add_group(
        &self,
        name: &str,
        specialty_id: Uuid,
    ) -> Result<StudentGroup, RegistrarError> {
        let mut t = self.write();
        if !t.specialties.iter().any(|s| s.id == specialty_id) {
            return Err(RegistrarError::not_found("specialty", specialty_id));
        }
        let group = StudentGroup {
            id: Uuid::new_v4(),
            name: name.into(),
            specialty_id,
        };
        t.groups.push(group.clone());
        Ok(group)
    }

    pub fn groups(&self) -> Vec<StudentGroup> {
        self.read().groups.clone()
    }

    pub fn group(&self, id: Uuid) -> Result<StudentGroup, RegistrarError> {
        self.read()
            .groups
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| RegistrarError::not_found("group", id))
    }

    // -- Students --

    pub fn add_student(
        &self,
        matricule: Option<&str>,
        first_name: &str,
        last_name: &str,
        email: &str,
        group_id: Option<Uuid>,
    ) -> Result<Student, RegistrarError> {
        let mut t = self.write();
        if let Some(gid) = group_id {
            if !t.groups.iter().any(|g| g.id == gid) {
                return Err(RegistrarError::not_found("group", gid));
            }
        }
        if t.students.iter().any(|s| s.email == email) {
            return Err(RegistrarError::DuplicateKey {
                entity: "student",
                key: format!("email '{email}'"),
            });
        }
        let matricule = match matricule {
            Some(m) if !m.trim().is_empty() => {
                if t.students.iter().any(|s| s.matricule == m) {
                    return Err(RegistrarError::DuplicateKey {
                        entity: "student",
                        key: format!("matricule '{m}'"),
                    });
                }
                m.to_string()
            }
            _ => format!("STU-{:05}", 10_000 + t.next_seq()),
        };
        let student = Student {
            id: Uuid::new_v4(),
            matricule,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            registration_date: Utc::now().date_naive(),
            group_id,
        };
        t.students.push(student.clone());
        Ok(student)
    }

    pub fn students(&self) -> Vec<Student> {
        self.read().students.clone()
    }

    pub fn student(&self, id: Uuid) -> Result<Student, RegistrarError> {
        self.read()
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RegistrarError::not_found("student", id))
    }

    pub fn remove_student(&self, id: Uuid) -> Result<(), RegistrarError> {
        let mut t = self.write();
        let before = t.students.len();
        t.students.retain(|s| s.id != id);
        if t.students.len() == before {
            return Err(RegistrarError::not_found("student", id));
        }
        t.enrollments.retain(|e| e.student_id != id);
        t.grades.retain(|g| g.student_id != id);
        Ok(())
    }

    // -- Courses --

    pub fn add_course(
        &self,
        code: Option<&str>,
        title: &str,
        description: Option<&str>,
        trainer_id: Option<Uuid>,
        specialty_id: Option<Uuid>,
    ) -> Result<Course, RegistrarError> {
        let mut t = self.write();
        if let Some(tid) = trainer_id {
            if !t.trainers.iter().any(|tr| tr.id == tid) {
                return Err(RegistrarError::not_found("trainer", tid));
            }
        }
        if let Some(sid) = specialty_id {
            if !t.specialties.iter().any(|s| s.id == sid) {
                return Err(RegistrarError::not_found("specialty", sid));
            }
        }
        let code = match code {
            Some(c) if !c.trim().is_empty() => {
                if t.courses.iter().any(|course| course.code == c) {
                    return Err(RegistrarError::DuplicateKey {
                        entity: "course",
                        key: format!("code '{c}'"),
                    });
                }
                c.to_string()
            }
            _ => format!("CRS-{:05}", 10_000 + t.next_seq()),
        };
        let course = Course {
            id: Uuid::new_v4(),
            code,
            title: title.into(),
            description: description.map(Into::into),
            trainer_id,
            specialty_id,
        };
        t.courses.push(course.clone());
        Ok(course)
    }

    pub fn courses(&self) -> Vec<Course> {
        self.read().courses.clone()
    }

    pub fn course(&self, id: Uuid) -> Result<Course, RegistrarError> {
        self.read()
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RegistrarError::not_found("course", id))
    }

    pub fn remove_course(&self, id: Uuid) -> Result<(), RegistrarError> {
        let mut t = self.write();
        let before = t.courses.len();
        t.courses.retain(|c| c.id != id);
        if t.courses.len() == before {
            return Err(RegistrarError::not_found("course", id));
        }
        t.enrollments.retain(|e| e.course_id != id);
        t.grades.retain(|g| g.course_id != id);
        t.sessions.retain(|s| s.course_id != id);
        Ok(())
    }

    // -- Enrollments --

    pub fn add_enrollment(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, RegistrarError> {
        let mut t = self.write();
        if !t.students.iter().any(|s| s.id == student_id) {
            return Err(RegistrarError::not_found("student", student_id));
        }
        if !t.courses.iter().any(|c| c.id == course_id) {
            return Err(RegistrarError::not_found("course", course_id));
        }
        let duplicate = t
            .enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id);
        if duplicate {
            return Err(RegistrarError::AlreadyEnrolled {
                student_id,
                course_id,
            });
        }
        let enrollment = Enrollment {
            id: Uuid::new_v4(),
            student_id,
            course_id,
            enrollment_date: Utc::now().date_naive(),
        };
        t.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    pub fn enrollments(&self) -> Vec<Enrollment> {
        self.read().enrollments.clone()
    }

    pub fn enrollment(&self, id: Uuid) -> Result<Enrollment, RegistrarError> {
        self.read()
            .enrollments
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| RegistrarError::not_found("enrollment", id))
    }

    pub fn enrollments_for_student(&self, student_id: Uuid) -> Vec<Enrollment> {
        self.read()
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect()
    }

    pub fn enrollments_for_course(&self, course_id: Uuid) -> Vec<Enrollment> {
        self.read()
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect()
    }

    pub fn remove_enrollment(&self, id: Uuid) -> Result<(), RegistrarError> {
        let mut t = self.write();
        let before = t.enrollments.len();
        t.enrollments.retain(|e| e.id != id);
        if t.enrollments.len() == before {
            return Err(RegistrarError::not_found("enrollment", id));
        }
        Ok(())
    }

    // -- Grades --

    pub fn add_grade(
        &self,
        student_id: Uuid,
        course_id: Uuid,
        value: f64,
    ) -> Result<Grade, RegistrarError> {
        let mut t = self.write();
        if !t.students.iter().any(|s| s.id == student_id) {
            return Err(RegistrarError::not_found("student", student_id));
        }
        if !t.courses.iter().any(|c| c.id == course_id) {
            return Err(RegistrarError::not_found("course", course_id));
        }
        let grade = Grade {
            id: Uuid::new_v4(),
            student_id,
            course_id,
            value,
        };
        t.grades.push(grade.clone());
        Ok(grade)
    }

    pub fn update_grade(&self, id: Uuid, value: f64) -> Result<Grade, RegistrarError> {
        let mut t = self.write();
        let grade = t
            .grades
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| RegistrarError::not_found("grade", id))?;
        grade.value = value;
        Ok(grade.clone())
    }

    pub fn grades_for_student(&self, student_id: Uuid) -> Vec<Grade> {
        self.read()
            .grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect()
    }

    pub fn grades_for_course(&self, course_id: Uuid) -> Vec<Grade> {
        self.read()
            .grades
            .iter()
            .filter(|g| g.course_id == course_id)
            .cloned()
            .collect()
    }

    // -- Sessions --

    /// Accepted sessions on `date`, in insertion order.
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<Session> {
        self.read().sessions_on(date)
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.read().sessions.clone()
    }

    pub fn sessions_for_group(&self, group_id: Uuid) -> Vec<Session> {
        self.read()
            .sessions
            .iter()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect()
    }

    pub fn sessions_for_trainer(&self, trainer_id: Uuid) -> Vec<Session> {
        self.read()
            .sessions
            .iter()
            .filter(|s| s.trainer_id == Some(trainer_id))
            .cloned()
            .collect()
    }

    /// Admit `candidate` to the timetable, or reject it with the first
    /// conflict found.
    ///
    /// The whole fetch–check–insert sequence runs under the write lock:
    /// two racing requests for conflicting resources cannot both check
    /// against the same snapshot and both land.
    pub fn schedule(&self, candidate: Session) -> Result<Session, RegistrarError> {
        let mut t = self.write();
        let same_day = t.sessions_on(candidate.date);

        match check_conflicts(&candidate, &same_day) {
            ConflictOutcome::Accepted => {
                let mut accepted = candidate;
                accepted.id = Some(Uuid::new_v4());
                t.sessions.push(accepted.clone());
                Ok(accepted)
            }
            ConflictOutcome::Rejected {
                kind,
                conflicting_session,
                resource,
            } => Err(RegistrarError::Conflict {
                kind,
                conflicting_session,
                resource: t.describe_resource(kind, &candidate, resource),
            }),
        }
    }

    /// Removing a session is unconditional: relaxing a constraint can
    /// never create a new violation, so no re-check runs.
    pub fn remove_session(&self, id: Uuid) -> Result<(), RegistrarError> {
        let mut t = self.write();
        let before = t.sessions.len();
        t.sessions.retain(|s| s.id != Some(id));
        if t.sessions.len() == before {
            return Err(RegistrarError::not_found("session", id));
        }
        Ok(())
    }
}

impl Tables {
    /// Replace the checker's id-based resource description with the
    /// display name, for group and trainer conflicts.
    fn describe_resource(&self, kind: ConflictKind, candidate: &Session, fallback: String) -> String {
        match kind {
            ConflictKind::Group => self
                .groups
                .iter()
                .find(|g| g.id == candidate.group_id)
                .map(|g| format!("group '{}'", g.name))
                .unwrap_or(fallback),
            ConflictKind::Trainer => candidate
                .trainer_id
                .and_then(|tid| self.trainers.iter().find(|t| t.id == tid))
                .map(|t| format!("trainer '{}'", t.name))
                .unwrap_or(fallback),
            ConflictKind::Room => format!("room '{fallback}'"),
        }
    }
}
