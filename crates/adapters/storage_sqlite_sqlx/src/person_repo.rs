//! `SQLite` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use garage_app::ports::PersonRepository;
use garage_domain::error::GarageError;
use garage_domain::id::PersonId;
use garage_domain::person::{NewPerson, Person};

use crate::error::translate;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Person {
            id: PersonId::from_i64(id),
            name: row.try_get("name")?,
            surname1: row.try_get("surname1")?,
            surname2: row.try_get("surname2")?,
            identity_number: row.try_get("identity_number")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO people (name, surname1, surname2, identity_number) VALUES (?, ?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM people WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM people ORDER BY id";
const UPDATE: &str = "UPDATE people SET name = ?, surname1 = ?, surname2 = ?, identity_number = ? WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    fn create(&self, draft: NewPerson) -> impl Future<Output = Result<Person, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&draft.name)
                .bind(&draft.surname1)
                .bind(&draft.surname2)
                .bind(&draft.identity_number)
                .fetch_one(&pool)
                .await
                .map_err(translate)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(translate)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(translate)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: PersonId,
        draft: NewPerson,
    ) -> impl Future<Output = Result<Option<Person>, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&draft.name)
                .bind(&draft.surname1)
                .bind(&draft.surname2)
                .bind(&draft.identity_number)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(translate)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(translate)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
