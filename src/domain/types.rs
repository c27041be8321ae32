// src/domain/types.rs — Institution records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A field of study; groups and courses hang off one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub id: Uuid,
    pub name: String,
    pub specialty: Option<String>,
    pub email: String,
}

/// A cohort of students taught together; the unit the timetable books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: Uuid,
    pub name: String,
    pub specialty_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    /// Registration number, unique across the institution.
    pub matricule: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
    pub group_id: Option<Uuid>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    /// Course code, unique; generated when not supplied.
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub trainer_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrollment_date: NaiveDate,
}

/// A grade on the 0–20 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub value: f64,
}
