//! `SQLite` implementation of [`CarRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use garage_app::ports::CarRepository;
use garage_domain::car::Car;
use garage_domain::error::GarageError;
use garage_domain::id::{PersonId, Plate};

use crate::error::translate;

/// Wrapper for converting database rows into domain [`Car`].
struct Wrapper(Car);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let plate: String = row.try_get("plate")?;
        let owner_id: Option<i64> = row.try_get("owner_id")?;

        Ok(Self(Car {
            plate: Plate::new(plate),
            brand: row.try_get("brand")?,
            model: row.try_get("model")?,
            horsepower: row.try_get("horsepower")?,
            owner_id: owner_id.map(PersonId::from_i64),
        }))
    }
}

const INSERT: &str =
    "INSERT INTO cars (plate, brand, model, horsepower, owner_id) VALUES (?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT * FROM cars ORDER BY plate";
const UPDATE: &str =
    "UPDATE cars SET brand = ?, model = ?, horsepower = ?, owner_id = ? WHERE plate = ?";
const DELETE_BY_PLATE: &str = "DELETE FROM cars WHERE plate = ?";

/// `SQLite`-backed car repository.
pub struct SqliteCarRepository {
    pool: SqlitePool,
}

impl SqliteCarRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CarRepository for SqliteCarRepository {
    fn create(&self, car: Car) -> impl Future<Output = Result<Car, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(car.plate.as_str())
                .bind(&car.brand)
                .bind(&car.model)
                .bind(car.horsepower)
                .bind(car.owner_id.map(PersonId::as_i64))
                .execute(&pool)
                .await
                .map_err(translate)?;

            Ok(car)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Car>, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(translate)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, car: Car) -> impl Future<Output = Result<Car, GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Matching zero rows is not an error here; the affected-row
            // count is intentionally ignored.
            sqlx::query(UPDATE)
                .bind(&car.brand)
                .bind(&car.model)
                .bind(car.horsepower)
                .bind(car.owner_id.map(PersonId::as_i64))
                .bind(car.plate.as_str())
                .execute(&pool)
                .await
                .map_err(translate)?;

            Ok(car)
        }
    }

    fn delete(&self, plate: Plate) -> impl Future<Output = Result<(), GarageError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_PLATE)
                .bind(plate.as_str())
                .execute(&pool)
                .await
                .map_err(translate)?;

            Ok(())
        }
    }
}
