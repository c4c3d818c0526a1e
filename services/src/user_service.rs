use crate::{
    actor::Actor,
    error::{ServiceError, ServiceResult},
};
use db::models::user::{self, Column as UserColumn, Entity as UserEntity, Model as UserModel, Role};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Filters for [`UserService::list`].
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive partial match against name OR email.
    pub query: Option<String>,
    pub role: Option<Role>,
}

/// One page of users plus the total match count.
#[derive(Debug)]
pub struct UserPage {
    pub users: Vec<UserModel>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

pub struct UserService;

impl UserService {
    /// Self-service signup. Always creates a `STUDENT`.
    pub async fn register(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        password: &str,
    ) -> ServiceResult<UserModel> {
        Self::create(
            db,
            CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role: Role::Student,
            },
        )
        .await
    }

    /// Returns the user if the email exists and the password matches.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> ServiceResult<UserModel> {
        match UserModel::find_by_email(db, email).await? {
            Some(user) if user.verify_password(password) => Ok(user),
            _ => Err(ServiceError::InvalidCredentials),
        }
    }

    pub async fn create(db: &DatabaseConnection, params: CreateUser) -> ServiceResult<UserModel> {
        if params.name.trim().is_empty() {
            return Err(ServiceError::Validation("name cannot be empty".into()));
        }
        if UserModel::find_by_email(db, &params.email).await?.is_some() {
            return Err(ServiceError::Conflict(
                "A user with this email already exists".into(),
            ));
        }

        let user = UserModel::create(db, &params.name, &params.email, &params.password, params.role)
            .await?;
        tracing::info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<UserModel> {
        UserModel::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    /// Lists users with filtering, sorting and pagination.
    ///
    /// `sort` is a comma-separated list of `name`, `email`, `role`, `created_at`;
    /// a leading `-` sorts descending. Unknown fields are ignored.
    pub async fn list(
        db: &DatabaseConnection,
        filter: UserFilter,
        page: u64,
        per_page: u64,
        sort: Option<&str>,
    ) -> ServiceResult<UserPage> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, 100);

        let mut condition = Condition::all();
        if let Some(q) = filter.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            condition = condition.add(
                Condition::any()
                    .add(UserColumn::Email.contains(&q))
                    .add(UserColumn::Name.contains(&q)),
            );
        }
        if let Some(role) = filter.role {
            condition = condition.add(UserColumn::Role.eq(role));
        }

        let query = apply_sort(UserEntity::find().filter(condition), sort);

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page - 1).await?;

        Ok(UserPage {
            users,
            page,
            per_page,
            total,
        })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i64,
        params: UpdateUser,
    ) -> ServiceResult<UserModel> {
        let existing = Self::get(db, id).await?;

        if let Some(name) = &params.name {
            if name.trim().is_empty() {
                return Err(ServiceError::Validation("name cannot be empty".into()));
            }
        }
        if let Some(email) = &params.email {
            if let Some(other) = UserModel::find_by_email(db, email).await? {
                if other.id != existing.id {
                    return Err(ServiceError::Conflict(
                        "A user with this email already exists".into(),
                    ));
                }
            }
        }

        let updated = UserModel::update(
            db,
            id,
            params.name.as_deref(),
            params.email.as_deref(),
            params.password.as_deref(),
            params.role,
        )
        .await?;
        Ok(updated)
    }

    /// Deletes a user. Nobody may delete their own account.
    pub async fn delete(db: &DatabaseConnection, actor: Actor, id: i64) -> ServiceResult<()> {
        if actor.id == id {
            return Err(ServiceError::Forbidden(
                "You cannot delete your own account".into(),
            ));
        }
        if !UserModel::delete(db, id).await? {
            return Err(ServiceError::not_found("User"));
        }
        tracing::info!(user_id = id, by = actor.id, "User deleted");
        Ok(())
    }
}

fn apply_sort(mut query: Select<user::Entity>, sort: Option<&str>) -> Select<user::Entity> {
    let Some(sort) = sort else {
        return query.order_by_asc(UserColumn::Id);
    };

    for field in sort.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        let (name, desc) = match field.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (field, false),
        };
        let column = match name {
            "name" => UserColumn::Name,
            "email" => UserColumn::Email,
            "role" => UserColumn::Role,
            "created_at" => UserColumn::CreatedAt,
            _ => continue,
        };
        query = if desc {
            query.order_by_desc(column)
        } else {
            query.order_by_asc(column)
        };
    }
    // Stable tiebreak so pages don't overlap.
    query.order_by_asc(UserColumn::Id)
}
