use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    entities::visit::{DateBucket, LabelCount, Visit},
    errors::AppError,
    repositories::sqlx_repo::SqlxVisitRepo,
};

/// Read side of the visitor log. Ingestion happens elsewhere; this
/// repository only aggregates what is already recorded.
#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn count_visits_since(&self, since: NaiveDate) -> Result<i64, AppError>;
    async fn visits_by_date(&self, since: NaiveDate) -> Result<Vec<DateBucket>, AppError>;
    async fn visits_by_device(&self, since: NaiveDate) -> Result<Vec<LabelCount>, AppError>;
    async fn visits_by_page(&self, since: NaiveDate) -> Result<Vec<LabelCount>, AppError>;
    async fn recent_visitors(&self, since: NaiveDate, limit: i64) -> Result<Vec<Visit>, AppError>;
}

impl SqlxVisitRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxVisitRepo { pool }
    }
}

#[async_trait]
impl VisitRepository for SqlxVisitRepo {
    async fn count_visits_since(&self, since: NaiveDate) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM visits WHERE visit_date >= $1"#
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn visits_by_date(&self, since: NaiveDate) -> Result<Vec<DateBucket>, AppError> {
        let buckets = sqlx::query_as::<_, DateBucket>(
            r#"
            SELECT visit_date AS date, COUNT(*) AS count
            FROM visits
            WHERE visit_date >= $1
            GROUP BY visit_date
            ORDER BY visit_date
            "#
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(buckets)
    }

    async fn visits_by_device(&self, since: NaiveDate) -> Result<Vec<LabelCount>, AppError> {
        let breakdown = sqlx::query_as::<_, LabelCount>(
            r#"
            SELECT COALESCE(device_type, 'unknown') AS label, COUNT(*) AS count
            FROM visits
            WHERE visit_date >= $1
            GROUP BY COALESCE(device_type, 'unknown')
            ORDER BY count DESC, label
            "#
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(breakdown)
    }

    async fn visits_by_page(&self, since: NaiveDate) -> Result<Vec<LabelCount>, AppError> {
        let breakdown = sqlx::query_as::<_, LabelCount>(
            r#"
            SELECT page_visited AS label, COUNT(*) AS count
            FROM visits
            WHERE visit_date >= $1
            GROUP BY page_visited
            ORDER BY count DESC, label
            "#
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(breakdown)
    }

    async fn recent_visitors(&self, since: NaiveDate, limit: i64) -> Result<Vec<Visit>, AppError> {
        let visits = sqlx::query_as::<_, Visit>(
            r#"
            SELECT * FROM visits
            WHERE visit_date >= $1
            ORDER BY visit_date DESC, visit_time DESC
            LIMIT $2
            "#
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(visits)
    }
}
