//! PostgreSQL job repository implementation.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use offerhub_core::error::{AppError, ErrorKind};
use offerhub_core::result::AppResult;
use offerhub_entity::job::filter::JobFilter;
use offerhub_entity::job::model::{Job, NewJob};
use offerhub_entity::job::report::BulkInsertReport;
use offerhub_entity::job::store::JobStore;

/// Rows per INSERT statement in a bulk insert. Nine binds per row keeps
/// this well under the Postgres bind-parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

/// Production [`JobStore`] backed by PostgreSQL.
///
/// Atomicity of the id/url uniqueness constraints under concurrent
/// inserts is delegated to the database.
#[derive(Debug, Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobRepository {
    async fn save(&self, job: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, title, company, location, url, source, \
                               posted_date, description, scraped_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&job.id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.url)
        .bind(&job.source)
        .bind(&job.posted_date)
        .bind(&job.description)
        .bind(job.scraped_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("jobs_pkey") => {
                AppError::conflict(format!("Job with ID '{}' already exists", job.id))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("jobs_url_key") => {
                AppError::conflict(format!("Job URL '{}' already exists", job.url))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save job", e),
        })
    }

    async fn save_many(&self, jobs: &[NewJob]) -> AppResult<BulkInsertReport> {
        if jobs.is_empty() {
            return Ok(BulkInsertReport::default());
        }

        // Conflict-aware bulk insert: duplicate ids (pre-existing or
        // repeated within the batch) are skipped by the engine, so no
        // single bad row aborts the batch. All chunks commit together.
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut inserted_ids: HashSet<String> = HashSet::with_capacity(jobs.len());

        for chunk in jobs.chunks(INSERT_CHUNK_SIZE) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO jobs (id, title, company, location, url, source, \
                                   posted_date, description, scraped_at) ",
            );
            qb.push_values(chunk, |mut row, job| {
                row.push_bind(&job.id)
                    .push_bind(&job.title)
                    .push_bind(&job.company)
                    .push_bind(&job.location)
                    .push_bind(&job.url)
                    .push_bind(&job.source)
                    .push_bind(&job.posted_date)
                    .push_bind(&job.description)
                    .push_bind(job.scraped_at);
            });
            qb.push(" ON CONFLICT (id) DO NOTHING RETURNING id");

            let ids: Vec<String> = qb
                .build_query_scalar()
                .fetch_all(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to save jobs", e)
                })?;
            inserted_ids.extend(ids);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit bulk insert", e)
        })?;

        let mut report = BulkInsertReport {
            total: jobs.len() as u64,
            ..BulkInsertReport::default()
        };
        for job in jobs {
            // `remove` so a repeated id counts as inserted only once.
            if inserted_ids.remove(&job.id) {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
                report.duplicate_ids.push(job.id.clone());
            }
        }

        tracing::debug!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            total = report.total,
            "Bulk insert committed"
        );

        Ok(report)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check job existence", e)
            })
    }

    async fn search(&self, filter: &JobFilter) -> AppResult<Vec<Job>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM jobs WHERE 1=1");

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            let pattern = format!("%{term}%");
            qb.push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR company ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(location) = filter.location.as_deref().filter(|t| !t.is_empty()) {
            qb.push(" AND location ILIKE ")
                .push_bind(format!("%{location}%"));
        }

        if let Some(company) = filter.company.as_deref().filter(|t| !t.is_empty()) {
            qb.push(" AND company ILIKE ")
                .push_bind(format!("%{company}%"));
        }

        if let Some(source) = filter.source.as_deref().filter(|t| !t.is_empty()) {
            qb.push(" AND source = ").push_bind(source);
        }

        qb.push(" ORDER BY created_at DESC, id ASC LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.offset);

        qb.build_query_as::<Job>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search jobs", e))
    }

    async fn count_total(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;
        Ok(count as u64)
    }

    async fn count_distinct_companies(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT company) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count companies", e)
            })?;
        Ok(count as u64)
    }

    async fn count_distinct_locations(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT location) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count locations", e)
            })?;
        Ok(count as u64)
    }

    async fn count_by_source(&self) -> AppResult<HashMap<String, u64>> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT source, COUNT(*) FROM jobs GROUP BY source")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count jobs by source", e)
                })?;

        Ok(rows
            .into_iter()
            .map(|(source, count)| (source, count as u64))
            .collect())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, job: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET title = $2, company = $3, location = $4, url = $5, \
                             source = $6, posted_date = $7, description = $8, \
                             scraped_at = $9, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(&job.id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.url)
        .bind(&job.source)
        .bind(&job.posted_date)
        .bind(&job.description)
        .bind(job.scraped_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("jobs_url_key") => {
                AppError::conflict(format!("Job URL '{}' already exists", job.url))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update job", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Job with ID '{}' not found", job.id)))
    }
}
