use super::{dto::Ticket, Error, TicketsRepository};
use axum::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

const TICKETS: &str = "tickets";

pub struct TicketsRepositoryImpl {
    db_pool: PgPool,
}

impl TicketsRepositoryImpl {
    pub async fn new(db_pool: PgPool) -> Result<Self, sqlx::Error> {
        tracing::debug!(table = TICKETS, "creating table");
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                id UUID PRIMARY KEY,
                vatin TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&db_pool)
        .await?;

        // quota check counts by vatin on every issuance
        sqlx::query("CREATE INDEX IF NOT EXISTS tickets_vatin_idx ON tickets (vatin)")
            .execute(&db_pool)
            .await?;
        tracing::debug!(table = TICKETS, "table ready");

        Ok(Self { db_pool })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        id: Uuid,
        vatin: &str,
        first_name: &str,
        last_name: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO tickets (id, vatin, first_name, last_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(vatin)
        .bind(first_name)
        .bind(last_name)
        .bind(created_at)
        .execute(&self.db_pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
                Error::InsertUniqueViolation
            }
            _ => Error::Sqlx(err),
        })?;

        Ok(())
    }

    async fn count_by_vatin(&self, vatin: &str) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tickets WHERE vatin = $1")
            .bind(vatin)
            .fetch_one(&self.db_pool)
            .await?;

        Ok(count)
    }

    async fn count_all(&self) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tickets")
            .fetch_one(&self.db_pool)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, Error> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT id, vatin, first_name, last_name, created_at FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(ticket)
    }
}
