// src/db/mensalidade_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::mensalidade::Mensalidade};

// Todas as consultas resolvem `aluno_nome` via JOIN com usuarios, para
// que as respostas da API sempre carreguem o nome do aluno.
#[derive(Clone)]
pub struct MensalidadeRepository {
    pool: PgPool,
}

impl MensalidadeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        aluno_id: Uuid,
        data_pagamento: NaiveDate,
        valor: Decimal,
        validade: NaiveDate,
    ) -> Result<Mensalidade, AppError> {
        // CTE com INSERT para devolver a linha já com o nome do aluno.
        let mensalidade = sqlx::query_as::<_, Mensalidade>(
            r#"
            WITH m AS (
                INSERT INTO mensalidades (aluno_id, data_pagamento, valor, validade)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT m.id, m.aluno_id, u.nome AS aluno_nome,
                   m.data_pagamento, m.valor, m.validade
            FROM m
            INNER JOIN usuarios u ON u.id = m.aluno_id
            "#,
        )
        .bind(aluno_id)
        .bind(data_pagamento)
        .bind(valor)
        .bind(validade)
        .fetch_one(&self.pool)
        .await?;

        Ok(mensalidade)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mensalidade>, AppError> {
        let mensalidade = sqlx::query_as::<_, Mensalidade>(
            r#"
            SELECT m.id, m.aluno_id, u.nome AS aluno_nome,
                   m.data_pagamento, m.valor, m.validade
            FROM mensalidades m
            INNER JOIN usuarios u ON u.id = m.aluno_id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mensalidade)
    }

    /// Lista mensalidades, com filtro opcional por aluno.
    pub async fn list(&self, aluno_id: Option<Uuid>) -> Result<Vec<Mensalidade>, AppError> {
        let mensalidades = sqlx::query_as::<_, Mensalidade>(
            r#"
            SELECT m.id, m.aluno_id, u.nome AS aluno_nome,
                   m.data_pagamento, m.valor, m.validade
            FROM mensalidades m
            INNER JOIN usuarios u ON u.id = m.aluno_id
            WHERE ($1::uuid IS NULL OR m.aluno_id = $1)
            ORDER BY m.data_pagamento DESC
            "#,
        )
        .bind(aluno_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(mensalidades)
    }

    /// A mensalidade mais recente de um aluno, por validade decrescente.
    /// É a base do status de mensalidade e do portão de check-in.
    pub async fn latest_by_aluno(&self, aluno_id: Uuid) -> Result<Option<Mensalidade>, AppError> {
        let mensalidade = sqlx::query_as::<_, Mensalidade>(
            r#"
            SELECT m.id, m.aluno_id, u.nome AS aluno_nome,
                   m.data_pagamento, m.valor, m.validade
            FROM mensalidades m
            INNER JOIN usuarios u ON u.id = m.aluno_id
            WHERE m.aluno_id = $1
            ORDER BY m.validade DESC
            LIMIT 1
            "#,
        )
        .bind(aluno_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mensalidade)
    }

    /// Atualização parcial. O aluno dono nunca muda.
    pub async fn update(
        &self,
        id: Uuid,
        data_pagamento: Option<NaiveDate>,
        valor: Option<Decimal>,
        validade: Option<NaiveDate>,
    ) -> Result<Option<Mensalidade>, AppError> {
        let mensalidade = sqlx::query_as::<_, Mensalidade>(
            r#"
            WITH m AS (
                UPDATE mensalidades SET
                    data_pagamento = COALESCE($2, data_pagamento),
                    valor = COALESCE($3, valor),
                    validade = COALESCE($4, validade)
                WHERE id = $1
                RETURNING *
            )
            SELECT m.id, m.aluno_id, u.nome AS aluno_nome,
                   m.data_pagamento, m.valor, m.validade
            FROM m
            INNER JOIN usuarios u ON u.id = m.aluno_id
            "#,
        )
        .bind(id)
        .bind(data_pagamento)
        .bind(valor)
        .bind(validade)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mensalidade)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM mensalidades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Parte da cascata de deleção de usuário.
    pub async fn delete_by_aluno<'e, E>(&self, executor: E, aluno_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM mensalidades WHERE aluno_id = $1")
            .bind(aluno_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
