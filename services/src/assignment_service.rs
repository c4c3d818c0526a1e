use crate::{
    actor::Actor,
    class_service::{ensure_member, find_class, find_owned},
    error::{ServiceError, ServiceResult},
};
use chrono::{DateTime, Utc};
use db::models::{
    assignment::{AssignmentChanges, Model as AssignmentModel},
    class_enrollment::Model as EnrollmentModel,
    submission::Model as SubmissionModel,
    user::Role,
};
use sea_orm::DatabaseConnection;

pub const DEFAULT_MAX_SCORE: i32 = 100;

#[derive(Debug, Clone)]
pub struct CreateAssignment {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub max_score: Option<i32>,
}

pub struct AssignmentService;

impl AssignmentService {
    pub async fn create(
        db: &DatabaseConnection,
        actor: Actor,
        params: CreateAssignment,
    ) -> ServiceResult<AssignmentModel> {
        let class = find_owned(db, actor, params.class_id).await?;

        if params.title.trim().is_empty() {
            return Err(ServiceError::Validation("title cannot be empty".into()));
        }
        let max_score = params.max_score.unwrap_or(DEFAULT_MAX_SCORE);
        validate_max_score(max_score)?;

        let assignment = AssignmentModel::create(
            db,
            class.id,
            &params.title,
            params.description.as_deref(),
            params.due_date,
            max_score,
        )
        .await?;
        tracing::info!(
            assignment_id = assignment.id,
            class_id = class.id,
            by = actor.id,
            "Assignment created"
        );
        Ok(assignment)
    }

    /// Fetches an assignment the actor can see through class membership.
    pub async fn get(
        db: &DatabaseConnection,
        actor: Actor,
        id: i64,
    ) -> ServiceResult<AssignmentModel> {
        let assignment = find_assignment(db, id).await?;
        let class = find_class(db, assignment.class_id).await?;
        ensure_member(db, actor, &class).await?;
        Ok(assignment)
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: Actor,
        id: i64,
        changes: AssignmentChanges,
    ) -> ServiceResult<AssignmentModel> {
        let assignment = find_owned_assignment(db, actor, id).await?;

        if let Some(title) = &changes.title {
            if title.trim().is_empty() {
                return Err(ServiceError::Validation("title cannot be empty".into()));
            }
        }
        if let Some(max_score) = changes.max_score {
            validate_max_score(max_score)?;
            if let Some(highest) = SubmissionModel::highest_score(db, assignment.id).await? {
                if max_score < highest {
                    return Err(ServiceError::Validation(format!(
                        "max_score cannot be lower than an existing grade of {highest}"
                    )));
                }
            }
        }

        Ok(AssignmentModel::update(db, assignment.id, changes).await?)
    }

    pub async fn delete(db: &DatabaseConnection, actor: Actor, id: i64) -> ServiceResult<()> {
        let assignment = find_owned_assignment(db, actor, id).await?;
        AssignmentModel::delete(db, assignment.id).await?;
        tracing::info!(assignment_id = id, by = actor.id, "Assignment deleted");
        Ok(())
    }

    /// Records the actor's submission. The student must be enrolled in the
    /// assignment's class and the due date must not have passed.
    pub async fn submit(
        db: &DatabaseConnection,
        actor: Actor,
        assignment_id: i64,
        content: &str,
    ) -> ServiceResult<SubmissionModel> {
        if actor.role != Role::Student {
            return Err(ServiceError::Forbidden("Only students can submit".into()));
        }
        let assignment = find_assignment(db, assignment_id).await?;

        if !EnrollmentModel::is_enrolled(db, assignment.class_id, actor.id).await? {
            return Err(ServiceError::Forbidden(
                "You are not enrolled in this class".into(),
            ));
        }
        if assignment.is_past_due(Utc::now()) {
            return Err(ServiceError::Validation(
                "The due date for this assignment has passed".into(),
            ));
        }
        if content.trim().is_empty() {
            return Err(ServiceError::Validation("content cannot be empty".into()));
        }

        let submission = SubmissionModel::submit(db, assignment.id, actor.id, content).await?;
        tracing::info!(
            assignment_id,
            submission_id = submission.id,
            student_id = actor.id,
            "Submission received"
        );
        Ok(submission)
    }

    pub async fn submissions(
        db: &DatabaseConnection,
        actor: Actor,
        assignment_id: i64,
    ) -> ServiceResult<Vec<SubmissionModel>> {
        let assignment = find_owned_assignment(db, actor, assignment_id).await?;
        Ok(SubmissionModel::find_by_assignment(db, assignment.id).await?)
    }

    pub async fn my_submission(
        db: &DatabaseConnection,
        actor: Actor,
        assignment_id: i64,
    ) -> ServiceResult<SubmissionModel> {
        let assignment = Self::get(db, actor, assignment_id).await?;
        SubmissionModel::find_for_student(db, assignment.id, actor.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission"))
    }

    /// Grades a submission. `score` must lie in `0..=max_score`.
    pub async fn grade(
        db: &DatabaseConnection,
        actor: Actor,
        assignment_id: i64,
        submission_id: i64,
        score: i32,
        feedback: Option<&str>,
    ) -> ServiceResult<SubmissionModel> {
        let assignment = find_owned_assignment(db, actor, assignment_id).await?;

        let submission = SubmissionModel::find_by_id(db, submission_id)
            .await?
            .filter(|s| s.assignment_id == assignment.id)
            .ok_or_else(|| ServiceError::not_found("Submission"))?;

        if !(0..=assignment.max_score).contains(&score) {
            return Err(ServiceError::Validation(format!(
                "score must be between 0 and {}",
                assignment.max_score
            )));
        }

        let graded = SubmissionModel::grade(db, submission.id, score, feedback).await?;
        tracing::info!(submission_id, score, by = actor.id, "Submission graded");
        Ok(graded)
    }
}

async fn find_assignment(db: &DatabaseConnection, id: i64) -> ServiceResult<AssignmentModel> {
    AssignmentModel::find_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Assignment"))
}

async fn find_owned_assignment(
    db: &DatabaseConnection,
    actor: Actor,
    id: i64,
) -> ServiceResult<AssignmentModel> {
    let assignment = find_assignment(db, id).await?;
    find_owned(db, actor, assignment.class_id).await?;
    Ok(assignment)
}

fn validate_max_score(max_score: i32) -> ServiceResult<()> {
    if max_score < 1 {
        return Err(ServiceError::Validation(
            "max_score must be at least 1".into(),
        ));
    }
    Ok(())
}
