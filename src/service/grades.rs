// src/service/grades.rs — Grade bookkeeping

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Grade;
use crate::infra::errors::RegistrarError;
use crate::registry::Registry;

#[derive(Clone)]
pub struct GradeService {
    registry: Arc<Registry>,
    max_value: f64,
}

impl GradeService {
    pub fn new(registry: Arc<Registry>, max_value: f64) -> Self {
        Self {
            registry,
            max_value,
        }
    }

    pub fn assign(
        &self,
        student_id: Uuid,
        course_id: Uuid,
        value: f64,
    ) -> Result<Grade, RegistrarError> {
        self.validate(value)?;
        self.registry.add_grade(student_id, course_id, value)
    }

    pub fn update(&self, grade_id: Uuid, value: f64) -> Result<Grade, RegistrarError> {
        self.validate(value)?;
        self.registry.update_grade(grade_id, value)
    }

    pub fn for_student(&self, student_id: Uuid) -> Result<Vec<Grade>, RegistrarError> {
        self.registry.student(student_id)?;
        Ok(self.registry.grades_for_student(student_id))
    }

    pub fn for_course(&self, course_id: Uuid) -> Result<Vec<Grade>, RegistrarError> {
        self.registry.course(course_id)?;
        Ok(self.registry.grades_for_course(course_id))
    }

    /// Mean of the student's grades; `None` when none are recorded.
    pub fn average_for_student(&self, student_id: Uuid) -> Result<Option<f64>, RegistrarError> {
        let grades = self.for_student(student_id)?;
        if grades.is_empty() {
            return Ok(None);
        }
        let sum: f64 = grades.iter().map(|g| g.value).sum();
        Ok(Some(sum / grades.len() as f64))
    }

    fn validate(&self, value: f64) -> Result<(), RegistrarError> {
        if value < 0.0 || value > self.max_value {
            return Err(RegistrarError::GradeOutOfRange {
                value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}
