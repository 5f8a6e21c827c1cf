// src/db/checkin_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::checkin::Checkin};

#[derive(Clone)]
pub struct CheckinRepository {
    pool: PgPool,
}

impl CheckinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere um registro de presença. A decisão de permitir ou não o
    /// check-in é do service; aqui só persistimos.
    pub async fn create(&self, aluno_id: Uuid) -> Result<Checkin, AppError> {
        let checkin = sqlx::query_as::<_, Checkin>(
            "INSERT INTO checkins (aluno_id) VALUES ($1) RETURNING *",
        )
        .bind(aluno_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(checkin)
    }

    /// Parte da cascata de deleção de usuário.
    pub async fn delete_by_aluno<'e, E>(&self, executor: E, aluno_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM checkins WHERE aluno_id = $1")
            .bind(aluno_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
