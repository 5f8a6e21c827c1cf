// src/db/exercicio_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::treino::Exercicio};

#[derive(Clone)]
pub struct ExercicioRepository {
    pool: PgPool,
}

impl ExercicioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        treino_id: Uuid,
        nome: &str,
        series: i32,
        repeticoes: i32,
        carga_kg: Option<Decimal>,
    ) -> Result<Exercicio, AppError> {
        let exercicio = sqlx::query_as::<_, Exercicio>(
            r#"
            INSERT INTO exercicios (treino_id, nome, series, repeticoes, carga_kg)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(treino_id)
        .bind(nome)
        .bind(series)
        .bind(repeticoes)
        .bind(carga_kg)
        .fetch_one(&self.pool)
        .await?;

        Ok(exercicio)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Exercicio>, AppError> {
        let exercicio = sqlx::query_as::<_, Exercicio>("SELECT * FROM exercicios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(exercicio)
    }

    /// Lista exercícios, com filtro opcional por treino.
    pub async fn list(&self, treino_id: Option<Uuid>) -> Result<Vec<Exercicio>, AppError> {
        let exercicios = sqlx::query_as::<_, Exercicio>(
            r#"
            SELECT *
            FROM exercicios
            WHERE ($1::uuid IS NULL OR treino_id = $1)
            ORDER BY nome ASC
            "#,
        )
        .bind(treino_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercicios)
    }

    /// Carga em lote para montar `TreinoDetalhe` sem N+1.
    pub async fn list_by_treinos(&self, treino_ids: &[Uuid]) -> Result<Vec<Exercicio>, AppError> {
        let exercicios = sqlx::query_as::<_, Exercicio>(
            r#"
            SELECT *
            FROM exercicios
            WHERE treino_id = ANY($1)
            ORDER BY nome ASC
            "#,
        )
        .bind(treino_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercicios)
    }

    /// Atualização parcial. Em `carga_kg` o par (flag, valor) distingue
    /// campo ausente (mantém) de `null` explícito (limpa).
    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<&str>,
        series: Option<i32>,
        repeticoes: Option<i32>,
        carga_kg: Option<Option<Decimal>>,
    ) -> Result<Option<Exercicio>, AppError> {
        let exercicio = sqlx::query_as::<_, Exercicio>(
            r#"
            UPDATE exercicios SET
                nome = COALESCE($2, nome),
                series = COALESCE($3, series),
                repeticoes = COALESCE($4, repeticoes),
                carga_kg = CASE WHEN $5 THEN $6 ELSE carga_kg END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(series)
        .bind(repeticoes)
        .bind(carga_kg.is_some())
        .bind(carga_kg.flatten())
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercicio)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM exercicios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Cascata da deleção de um treino.
    pub async fn delete_by_treino<'e, E>(
        &self,
        executor: E,
        treino_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM exercicios WHERE treino_id = $1")
            .bind(treino_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Cascata da deleção de um usuário: exercícios dos treinos do aluno.
    pub async fn delete_by_aluno<'e, E>(&self, executor: E, aluno_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM exercicios
            WHERE treino_id IN (SELECT id FROM treinos WHERE aluno_id = $1)
            "#,
        )
        .bind(aluno_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
