use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A class taught by a single teacher, with students enrolled through
/// `class_enrollments`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TeacherId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,

    #[sea_orm(has_many = "super::class_enrollment::Entity")]
    Enrollments,

    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::class_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        description: Option<&str>,
        teacher_id: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let class = ActiveModel {
            name: Set(name.trim().to_owned()),
            description: Set(description.map(str::to_owned)),
            teacher_id: Set(teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        class.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn find_by_teacher(db: &DbConn, teacher_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Classes the given student is enrolled in.
    pub async fn find_for_student(db: &DbConn, student_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .inner_join(super::class_enrollment::Entity)
            .filter(super::class_enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Applies a partial update. `description: Some(None)` clears the description.
    pub async fn update(
        db: &DbConn,
        id: i64,
        name: Option<&str>,
        description: Option<Option<&str>>,
        teacher_id: Option<i64>,
    ) -> Result<Model, DbErr> {
        let mut class = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(name) = name {
            class.name = Set(name.trim().to_owned());
        }
        if let Some(description) = description {
            class.description = Set(description.map(str::to_owned));
        }
        if let Some(teacher_id) = teacher_id {
            class.teacher_id = Set(teacher_id);
        }

        class.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub fn is_taught_by(&self, user_id: i64) -> bool {
        self.teacher_id == user_id
    }
}
