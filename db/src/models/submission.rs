use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{QueryOrder, QuerySelect};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's work for one assignment. There is at most one row per
/// `(assignment_id, student_id)`; resubmitting overwrites it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub score: Option<i32>,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub graded_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id",
        on_delete = "Cascade"
    )]
    Assignment,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates the student's submission, or replaces the content of an existing
    /// one. Replacing resets any previous grade.
    pub async fn submit(
        db: &DbConn,
        assignment_id: i64,
        student_id: i64,
        content: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        match Self::find_for_student(db, assignment_id, student_id).await? {
            Some(existing) => {
                let mut active: ActiveModel = existing.into();
                active.content = Set(content.to_owned());
                active.submitted_at = Set(now);
                active.score = Set(None);
                active.feedback = Set(None);
                active.graded_at = Set(None);
                active.update(db).await
            }
            None => {
                ActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(student_id),
                    content: Set(content.to_owned()),
                    submitted_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await
            }
        }
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_for_student(
        db: &DbConn,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    pub async fn find_by_assignment(db: &DbConn, assignment_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::SubmittedAt)
            .all(db)
            .await
    }

    /// Highest score awarded on an assignment, or `None` if nothing is graded.
    pub async fn highest_score(db: &DbConn, assignment_id: i64) -> Result<Option<i32>, DbErr> {
        let highest: Option<Option<i32>> = Entity::find()
            .select_only()
            .column_as(Column::Score.max(), "highest")
            .filter(Column::AssignmentId.eq(assignment_id))
            .into_tuple()
            .one(db)
            .await?;
        Ok(highest.flatten())
    }

    pub async fn grade(
        db: &DbConn,
        id: i64,
        score: i32,
        feedback: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            score: Set(Some(score)),
            feedback: Set(feedback.map(str::to_owned)),
            graded_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(db)
        .await
    }
}
