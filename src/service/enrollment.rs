// src/service/enrollment.rs — Course enrollment bookkeeping

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Enrollment;
use crate::infra::errors::RegistrarError;
use crate::registry::Registry;
use crate::service::Notifier;

#[derive(Clone)]
pub struct EnrollmentService {
    registry: Arc<Registry>,
    notifier: Notifier,
}

impl EnrollmentService {
    pub fn new(registry: Arc<Registry>, notifier: Notifier) -> Self {
        Self { registry, notifier }
    }

    /// Enroll a student in a course. Enrolling twice in the same course
    /// is rejected; the student and, when the course has one, the
    /// trainer are notified on success.
    pub fn enroll(&self, student_id: Uuid, course_id: Uuid) -> Result<Enrollment, RegistrarError> {
        let student = self.registry.student(student_id)?;
        let course = self.registry.course(course_id)?;

        let enrollment = self.registry.add_enrollment(student_id, course_id)?;

        self.notifier.send(
            &student.email,
            "Enrollment confirmed",
            &format!(
                "Hello {}, you are enrolled in the course: {}",
                student.first_name, course.title
            ),
        );
        if let Some(trainer_id) = course.trainer_id {
            if let Ok(trainer) = self.registry.trainer(trainer_id) {
                self.notifier.send(
                    &trainer.email,
                    "New enrollment",
                    &format!(
                        "Student {} enrolled in your course: {}",
                        student.full_name(),
                        course.title
                    ),
                );
            }
        }

        Ok(enrollment)
    }

    /// Cancel an enrollment and notify the trainer, if any.
    pub fn cancel(&self, enrollment_id: Uuid) -> Result<(), RegistrarError> {
        let enrollment = self.registry.enrollment(enrollment_id)?;
        let student = self.registry.student(enrollment.student_id)?;
        let course = self.registry.course(enrollment.course_id)?;

        self.registry.remove_enrollment(enrollment_id)?;

        if let Some(trainer_id) = course.trainer_id {
            if let Ok(trainer) = self.registry.trainer(trainer_id) {
                self.notifier.send(
                    &trainer.email,
                    "Enrollment cancelled",
                    &format!(
                        "Student {} withdrew from your course: {}",
                        student.full_name(),
                        course.title
                    ),
                );
            }
        }

        Ok(())
    }

    pub fn for_student(&self, student_id: Uuid) -> Result<Vec<Enrollment>, RegistrarError> {
        self.registry.student(student_id)?;
        Ok(self.registry.enrollments_for_student(student_id))
    }

    pub fn for_course(&self, course_id: Uuid) -> Result<Vec<Enrollment>, RegistrarError> {
        self.registry.course(course_id)?;
        Ok(self.registry.enrollments_for_course(course_id))
    }

    pub fn all(&self) -> Vec<Enrollment> {
        self.registry.enrollments()
    }
}
