use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// User's unique email address, used to log in.
    pub email: String,
    /// Argon2 hash of the user's password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Global access level.
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Access level attached to every user.
///
/// Stored as upper-case text (`ADMIN`, `TEACHER`, `STUDENT`) and parsed
/// case-insensitively from strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "ADMIN")]
    Admin,

    #[sea_orm(string_value = "TEACHER")]
    Teacher,

    #[sea_orm(string_value = "STUDENT")]
    Student,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Classes this user teaches.
    #[sea_orm(has_many = "super::class::Entity")]
    Classes,

    /// Enrollment rows for this user as a student.
    #[sea_orm(has_many = "super::class_enrollment::Entity")]
    Enrollments,

    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classes.def()
    }
}

impl Related<super::class_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new user, hashing the plaintext password with Argon2.
    pub async fn create(
        db: &DbConn,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            name: Set(name.trim().to_owned()),
            email: Set(email.trim().to_lowercase()),
            password_hash: Set(Self::hash_password(password)?),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Email lookup is case-insensitive; addresses are stored lower-cased.
    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(db)
            .await
    }

    /// Returns every user enrolled in the given class, ordered by name.
    pub async fn find_enrolled_in(db: &DbConn, class_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .inner_join(super::class_enrollment::Entity)
            .filter(super::class_enrollment::Column::ClassId.eq(class_id))
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }

    /// Applies a partial update. `None` leaves the field untouched.
    pub async fn update(
        db: &DbConn,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        role: Option<Role>,
    ) -> Result<Model, DbErr> {
        let mut user = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(name) = name {
            user.name = Set(name.trim().to_owned());
        }
        if let Some(email) = email {
            user.email = Set(email.trim().to_lowercase());
        }
        if let Some(password) = password {
            user.password_hash = Set(Self::hash_password(password)?);
        }
        if let Some(role) = role {
            user.role = Set(role);
        }

        user.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {e}")))
    }

    /// Checks a plaintext password against the stored hash.
    ///
    /// An unparsable stored hash counts as a mismatch.
    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
