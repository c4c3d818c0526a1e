use crate::{
    actor::Actor,
    error::{ServiceError, ServiceResult},
};
use db::models::{
    assignment::Model as AssignmentModel,
    class::Model as ClassModel,
    class_enrollment::Model as EnrollmentModel,
    user::{Model as UserModel, Role},
};
use sea_orm::DatabaseConnection;

#[derive(Debug, Clone)]
pub struct CreateClass {
    pub name: String,
    pub description: Option<String>,
    /// Only honoured for admins; teachers always own the classes they create.
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClass {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    /// Reassigning a class is admin-only.
    pub teacher_id: Option<i64>,
}

pub struct ClassService;

impl ClassService {
    /// Classes visible to the actor: everything for admins, taught classes for
    /// teachers, enrolled classes for students.
    pub async fn list_for(db: &DatabaseConnection, actor: Actor) -> ServiceResult<Vec<ClassModel>> {
        let classes = match actor.role {
            Role::Admin => ClassModel::find_all(db).await?,
            Role::Teacher => ClassModel::find_by_teacher(db, actor.id).await?,
            Role::Student => ClassModel::find_for_student(db, actor.id).await?,
        };
        Ok(classes)
    }

    pub async fn create(
        db: &DatabaseConnection,
        actor: Actor,
        params: CreateClass,
    ) -> ServiceResult<ClassModel> {
        if params.name.trim().is_empty() {
            return Err(ServiceError::Validation("name cannot be empty".into()));
        }

        // Every class is owned by a TEACHER; admins must name one.
        let teacher_id = match (actor.role, params.teacher_id) {
            (Role::Admin, Some(teacher_id)) => {
                ensure_teacher(db, teacher_id).await?;
                teacher_id
            }
            (Role::Admin, None) => {
                return Err(ServiceError::Validation(
                    "teacher_id is required when an admin creates a class".into(),
                ));
            }
            _ => actor.id,
        };

        let class =
            ClassModel::create(db, &params.name, params.description.as_deref(), teacher_id).await?;
        tracing::info!(class_id = class.id, teacher_id, by = actor.id, "Class created");
        Ok(class)
    }

    /// Fetches a class the actor is a member of (owner, enrolled student, or admin).
    pub async fn get(db: &DatabaseConnection, actor: Actor, id: i64) -> ServiceResult<ClassModel> {
        let class = find_class(db, id).await?;
        ensure_member(db, actor, &class).await?;
        Ok(class)
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: Actor,
        id: i64,
        params: UpdateClass,
    ) -> ServiceResult<ClassModel> {
        let class = find_owned(db, actor, id).await?;

        if let Some(name) = &params.name {
            if name.trim().is_empty() {
                return Err(ServiceError::Validation("name cannot be empty".into()));
            }
        }
        if let Some(teacher_id) = params.teacher_id {
            if !actor.is_admin() {
                return Err(ServiceError::Forbidden(
                    "Only admins can reassign a class".into(),
                ));
            }
            ensure_teacher(db, teacher_id).await?;
        }

        let updated = ClassModel::update(
            db,
            class.id,
            params.name.as_deref(),
            params.description.as_ref().map(|d| d.as_deref()),
            params.teacher_id,
        )
        .await?;
        Ok(updated)
    }

    pub async fn delete(db: &DatabaseConnection, actor: Actor, id: i64) -> ServiceResult<()> {
        let class = find_owned(db, actor, id).await?;
        ClassModel::delete(db, class.id).await?;
        tracing::info!(class_id = id, by = actor.id, "Class deleted");
        Ok(())
    }

    pub async fn students(
        db: &DatabaseConnection,
        actor: Actor,
        class_id: i64,
    ) -> ServiceResult<Vec<UserModel>> {
        let class = find_owned(db, actor, class_id).await?;
        Ok(UserModel::find_enrolled_in(db, class.id).await?)
    }

    /// Enrolls a student. The target must exist and hold the `STUDENT` role.
    pub async fn enroll(
        db: &DatabaseConnection,
        actor: Actor,
        class_id: i64,
        student_id: i64,
    ) -> ServiceResult<EnrollmentModel> {
        let class = find_owned(db, actor, class_id).await?;

        let student = UserModel::find_by_id(db, student_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student"))?;
        if student.role != Role::Student {
            return Err(ServiceError::Validation(format!(
                "User {} is a {}, not a student",
                student.id, student.role
            )));
        }
        if EnrollmentModel::is_enrolled(db, class.id, student.id).await? {
            return Err(ServiceError::Conflict(
                "Student is already enrolled in this class".into(),
            ));
        }

        let enrollment = EnrollmentModel::enroll(db, class.id, student.id).await?;
        tracing::info!(class_id, student_id, by = actor.id, "Student enrolled");
        Ok(enrollment)
    }

    pub async fn unenroll(
        db: &DatabaseConnection,
        actor: Actor,
        class_id: i64,
        student_id: i64,
    ) -> ServiceResult<()> {
        let class = find_owned(db, actor, class_id).await?;
        if !EnrollmentModel::unenroll(db, class.id, student_id).await? {
            return Err(ServiceError::NotFound(
                "Student is not enrolled in this class".into(),
            ));
        }
        tracing::info!(class_id, student_id, by = actor.id, "Student unenrolled");
        Ok(())
    }

    pub async fn assignments(
        db: &DatabaseConnection,
        actor: Actor,
        class_id: i64,
    ) -> ServiceResult<Vec<AssignmentModel>> {
        let class = Self::get(db, actor, class_id).await?;
        Ok(AssignmentModel::find_by_class(db, class.id).await?)
    }
}

pub(crate) async fn find_class(db: &DatabaseConnection, id: i64) -> ServiceResult<ClassModel> {
    ClassModel::find_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Class"))
}

/// Loads a class the actor may modify: its teacher, or any admin.
pub(crate) async fn find_owned(
    db: &DatabaseConnection,
    actor: Actor,
    id: i64,
) -> ServiceResult<ClassModel> {
    let class = find_class(db, id).await?;
    ensure_owner(actor, &class)?;
    Ok(class)
}

pub(crate) fn ensure_owner(actor: Actor, class: &ClassModel) -> ServiceResult<()> {
    if actor.is_admin() || class.is_taught_by(actor.id) {
        Ok(())
    } else {
        tracing::debug!(user_id = actor.id, class_id = class.id, "not the class teacher");
        Err(ServiceError::Forbidden("You do not teach this class".into()))
    }
}

pub(crate) async fn ensure_member(
    db: &DatabaseConnection,
    actor: Actor,
    class: &ClassModel,
) -> ServiceResult<()> {
    let allowed = match actor.role {
        Role::Admin => true,
        Role::Teacher => class.is_taught_by(actor.id),
        Role::Student => EnrollmentModel::is_enrolled(db, class.id, actor.id).await?,
    };
    if allowed {
        Ok(())
    } else {
        Err(ServiceError::Forbidden("You are not a member of this class".into()))
    }
}

async fn ensure_teacher(db: &DatabaseConnection, user_id: i64) -> ServiceResult<()> {
    let user = UserModel::find_by_id(db, user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Teacher"))?;
    if user.role != Role::Teacher {
        return Err(ServiceError::Validation(format!(
            "User {} is not a teacher",
            user.id
        )));
    }
    Ok(())
}
