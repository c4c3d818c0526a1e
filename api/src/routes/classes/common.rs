use crate::routes::common::double_option;
use db::models::class::Model as ClassModel;
use db::models::class_enrollment::Model as EnrollmentModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,

    pub description: Option<String>,

    /// Owner of the class. Required for admins and ignored for teachers, who
    /// always own what they create.
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClassRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: Option<String>,

    /// `null` clears the description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClassModel> for ClassResponse {
    fn from(class: ClassModel) -> Self {
        Self {
            id: class.id,
            name: class.name,
            description: class.description,
            teacher_id: class.teacher_id,
            created_at: class.created_at.to_rfc3339(),
            updated_at: class.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub class_id: i64,
    pub student_id: i64,
    pub enrolled_at: String,
}

impl From<EnrollmentModel> for EnrollmentResponse {
    fn from(e: EnrollmentModel) -> Self {
        Self {
            class_id: e.class_id,
            student_id: e.student_id,
            enrolled_at: e.enrolled_at.to_rfc3339(),
        }
    }
}
