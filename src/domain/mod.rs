// src/domain/mod.rs

pub mod types;

pub use types::{Course, Enrollment, Grade, Specialty, Student, StudentGroup, Trainer};
