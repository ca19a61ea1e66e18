// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, PhotoFilename, Pseudonym, Roles, User, UserId, UserRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, email, pseudonym, password_hash, roles, registration_date, photo";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pseudonym: String,
    password_hash: String,
    roles: Vec<String>,
    registration_date: DateTime<Utc>,
    photo: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            pseudonym: Pseudonym::new(row.pseudonym)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            roles: Roles::parse(&row.roles)?,
            registration_date: row.registration_date,
            photo: row.photo.map(PhotoFilename::new).transpose()?,
        })
    }
}

async fn insert_user<'e, E>(executor: E, new_user: &NewUser, roles: &Roles) -> DomainResult<User>
where
    E: sqlx::PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "INSERT INTO users (email, pseudonym, password_hash, roles, registration_date)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {USER_COLUMNS}"
    ))
    .bind(new_user.email.as_str())
    .bind(new_user.pseudonym.as_str())
    .bind(new_user.password_hash.as_str())
    .bind(roles.to_tags())
    .bind(new_user.registration_date)
    .fetch_one(executor)
    .await
    .map_err(map_sqlx)?;

    User::try_from(row)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        insert_user(&self.pool, &new_user, &new_user.roles).await
    }

    async fn insert_registered(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        // serializes concurrent first registrations; readers are not blocked
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let any_user: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users)")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let roles = if any_user {
            new_user.roles.clone()
        } else {
            Roles::admin()
        };
        let user = insert_user(&mut *tx, &new_user, &roles).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)"
        ))
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_photo(&self, id: UserId, photo: Option<PhotoFilename>) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET photo = $1 WHERE id = $2 RETURNING {USER_COLUMNS}"
        ))
        .bind(photo.map(String::from))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
