use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents an assignment belonging to a class.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Submissions after this instant are rejected. `None` means no deadline.
    pub due_date: Option<DateTime<Utc>>,
    pub max_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,

    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for an assignment update. `None` leaves a field untouched; the
/// nested options on `description` and `due_date` allow clearing them.
#[derive(Debug, Default, Clone)]
pub struct AssignmentChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub max_score: Option<i32>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        class_id: i64,
        title: &str,
        description: Option<&str>,
        due_date: Option<DateTime<Utc>>,
        max_score: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let assignment = ActiveModel {
            class_id: Set(class_id),
            title: Set(title.trim().to_owned()),
            description: Set(description.map(str::to_owned)),
            due_date: Set(due_date),
            max_score: Set(max_score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        assignment.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Assignments of a class, soonest due first; undated ones sort last.
    pub async fn find_by_class(db: &DbConn, class_id: i64) -> Result<Vec<Model>, DbErr> {
        let mut assignments = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        assignments.sort_by_key(|a| (a.due_date.is_none(), a.due_date));
        Ok(assignments)
    }

    pub async fn update(db: &DbConn, id: i64, changes: AssignmentChanges) -> Result<Model, DbErr> {
        let mut assignment = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(title) = changes.title {
            assignment.title = Set(title.trim().to_owned());
        }
        if let Some(description) = changes.description {
            assignment.description = Set(description);
        }
        if let Some(due_date) = changes.due_date {
            assignment.due_date = Set(due_date);
        }
        if let Some(max_score) = changes.max_score {
            assignment.max_score = Set(max_score);
        }

        assignment.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| now > due)
    }
}
