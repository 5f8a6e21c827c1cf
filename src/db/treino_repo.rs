// src/db/treino_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::treino::{Treino, TreinoDetalhe},
};

// As leituras devolvem `TreinoDetalhe` com os nomes de aluno e personal
// já resolvidos. Os exercícios são anexados pelo service, que consulta o
// ExercicioRepository em lote.
#[derive(Clone)]
pub struct TreinoRepository {
    pool: PgPool,
}

const SELECT_DETALHE: &str = r#"
    SELECT t.id, t.aluno_id, u.nome AS aluno_nome,
           t.personal_id, p.nome AS personal_nome,
           t.nome AS nome, t.descricao, t.data_criacao
    FROM treinos t
    INNER JOIN usuarios u ON u.id = t.aluno_id
    LEFT JOIN usuarios p ON p.id = t.personal_id
"#;

impl TreinoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        aluno_id: Uuid,
        personal_id: Option<Uuid>,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<TreinoDetalhe, AppError> {
        let treino = sqlx::query_as::<_, TreinoDetalhe>(
            r#"
            WITH t AS (
                INSERT INTO treinos (aluno_id, personal_id, nome, descricao)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT t.id, t.aluno_id, u.nome AS aluno_nome,
                   t.personal_id, p.nome AS personal_nome,
                   t.nome AS nome, t.descricao, t.data_criacao
            FROM t
            INNER JOIN usuarios u ON u.id = t.aluno_id
            LEFT JOIN usuarios p ON p.id = t.personal_id
            "#,
        )
        .bind(aluno_id)
        .bind(personal_id)
        .bind(nome)
        .bind(descricao)
        .fetch_one(&self.pool)
        .await?;

        Ok(treino)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Treino>, AppError> {
        let treino = sqlx::query_as::<_, Treino>("SELECT * FROM treinos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(treino)
    }

    pub async fn find_detalhe(&self, id: Uuid) -> Result<Option<TreinoDetalhe>, AppError> {
        let sql = format!("{SELECT_DETALHE} WHERE t.id = $1");
        let treino = sqlx::query_as::<_, TreinoDetalhe>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(treino)
    }

    /// Lista treinos, com filtros opcionais por aluno e/ou personal.
    pub async fn list(
        &self,
        aluno_id: Option<Uuid>,
        personal_id: Option<Uuid>,
    ) -> Result<Vec<TreinoDetalhe>, AppError> {
        let sql = format!(
            r#"{SELECT_DETALHE}
            WHERE ($1::uuid IS NULL OR t.aluno_id = $1)
              AND ($2::uuid IS NULL OR t.personal_id = $2)
            ORDER BY t.data_criacao ASC
            "#
        );
        let treinos = sqlx::query_as::<_, TreinoDetalhe>(&sql)
            .bind(aluno_id)
            .bind(personal_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(treinos)
    }

    /// Atualização parcial. Nas colunas anuláveis o par (flag, valor)
    /// distingue campo ausente (mantém) de `null` explícito (limpa);
    /// `data_criacao` nunca entra no UPDATE.
    pub async fn update(
        &self,
        id: Uuid,
        aluno_id: Option<Uuid>,
        personal_id: Option<Option<Uuid>>,
        nome: Option<&str>,
        descricao: Option<Option<&str>>,
    ) -> Result<Option<TreinoDetalhe>, AppError> {
        let treino = sqlx::query_as::<_, TreinoDetalhe>(
            r#"
            WITH t AS (
                UPDATE treinos SET
                    aluno_id = COALESCE($2, aluno_id),
                    personal_id = CASE WHEN $3 THEN $4 ELSE personal_id END,
                    nome = COALESCE($5, nome),
                    descricao = CASE WHEN $6 THEN $7 ELSE descricao END
                WHERE id = $1
                RETURNING *
            )
            SELECT t.id, t.aluno_id, u.nome AS aluno_nome,
                   t.personal_id, p.nome AS personal_nome,
                   t.nome AS nome, t.descricao, t.data_criacao
            FROM t
            INNER JOIN usuarios u ON u.id = t.aluno_id
            LEFT JOIN usuarios p ON p.id = t.personal_id
            "#,
        )
        .bind(id)
        .bind(aluno_id)
        .bind(personal_id.is_some())
        .bind(personal_id.flatten())
        .bind(nome)
        .bind(descricao.is_some())
        .bind(descricao.flatten())
        .fetch_optional(&self.pool)
        .await?;

        Ok(treino)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM treinos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Parte da cascata de deleção de usuário: treinos cujo dono é o aluno.
    pub async fn delete_by_aluno<'e, E>(&self, executor: E, aluno_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM treinos WHERE aluno_id = $1")
            .bind(aluno_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Treinos orientados por um personal deletado sobrevivem, apenas com
    /// a referência anulada.
    pub async fn clear_personal<'e, E>(
        &self,
        executor: E,
        personal_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE treinos SET personal_id = NULL WHERE personal_id = $1")
            .bind(personal_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
