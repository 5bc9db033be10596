use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use domain::measurement::{Measurement, MeasurementRepository, RecentLimit, Weight};
use domain::{DomainError, StoredTimestamp};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// PostgreSQL implementation of MeasurementRepository
///
/// Reads tolerate legacy tables: `fecha_hora` may be `TIMESTAMP` or
/// `TIMESTAMPTZ`, and `peso_g` may be `NUMERIC` (cast to float8 on read).
#[derive(Clone)]
pub struct PostgresMeasurementRepository {
    pool: PgPool,
}

impl PostgresMeasurementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn decode_timestamp(row: &PgRow) -> Result<Option<StoredTimestamp>, DomainError> {
        if let Ok(zoned) = row.try_get::<Option<DateTime<Utc>>, _>("fecha_hora") {
            return Ok(zoned.map(StoredTimestamp::Zoned));
        }

        row.try_get::<Option<NaiveDateTime>, _>("fecha_hora")
            .map(|naive| naive.map(StoredTimestamp::Naive))
            .map_err(DomainError::storage)
    }

    fn row_to_measurement(row: &PgRow) -> Result<Measurement, DomainError> {
        let id: i64 = row.try_get("id").map_err(DomainError::storage)?;
        let weight_g: Option<f64> = row.try_get("peso_g").map_err(DomainError::storage)?;

        Ok(Measurement::new(id, Self::decode_timestamp(row)?, weight_g))
    }
}

#[async_trait]
impl MeasurementRepository for PostgresMeasurementRepository {
    async fn insert(
        &self,
        recorded_at: DateTime<FixedOffset>,
        weight: Weight,
    ) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO registros_peso (fecha_hora, peso_g) VALUES ($1, $2)")
            .bind(recorded_at)
            .bind(weight.grams())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(format!("Database error: {}", e)))?;

        Ok(())
    }

    async fn list_recent(&self, limit: RecentLimit) -> Result<Vec<Measurement>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id::int8 AS id, fecha_hora, peso_g::float8 AS peso_g
            FROM registros_peso
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(format!("Database error: {}", e)))?;

        rows.iter().map(Self::row_to_measurement).collect()
    }

    async fn list_all_weights_ascending(&self) -> Result<Vec<Option<f64>>, DomainError> {
        let rows = sqlx::query("SELECT peso_g::float8 AS peso_g FROM registros_peso ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(format!("Database error: {}", e)))?;

        rows.iter()
            .map(|row| row.try_get::<Option<f64>, _>("peso_g"))
            .collect::<Result<_, _>>()
            .map_err(DomainError::storage)
    }
}
