use super::{NewUser, User, UserError, UserRepository, UserResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, SqlErr, Statement};

const COLUMNS: &str = "id, email, password_hash, first_name, last_name, registration_date";

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PostgresUserRepository {
    db: sea_orm::DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Helper struct for deserializing user rows from the database
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    registration_date: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            registration_date: row.registration_date,
        }
    }
}

fn db_error(e: DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

/// Unique violations on `email` become `EmailAlreadyExists(email)`
fn write_error(e: DbErr, email: &str) -> UserError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UserError::EmailAlreadyExists(email.to_string())
        }
        _ => db_error(e),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let sql = format!(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, registration_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
        "#
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.email.clone().into(),
                user.password_hash.into(),
                user.first_name.into(),
                user.last_name.into(),
                user.registration_date.into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| write_error(e, &user.email))?
            .ok_or_else(|| UserError::Internal("Insert returned no row".to_string()))?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [email.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        let stmt = Statement::from_string(DbBackend::Postgres, sql);

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        // id and registration_date are never rewritten
        let sql = format!(
            r#"
            UPDATE users
            SET email = $2, password_hash = $3, first_name = $4, last_name = $5
            WHERE id = $1
            RETURNING {COLUMNS}
        "#
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.id.into(),
                user.email.clone().into(),
                user.password_hash.into(),
                user.first_name.into(),
                user.last_name.into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| write_error(e, &user.email))?;

        row.map(|r| r.into()).ok_or(UserError::NotFound(user.id))
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM users WHERE id = $1",
            [id.into()],
        );

        let row = self.db.query_one_raw(stmt).await.map_err(db_error)?;
        Ok(row.is_some())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            [id.into()],
        );

        let result = self.db.execute_raw(stmt).await.map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }
}
