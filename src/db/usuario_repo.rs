// src/db/usuario_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::usuario::{Sexo, Usuario},
};

// O repositório de usuários, responsável por todas as interações com a
// tabela 'usuarios'.
#[derive(Clone)]
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: &str,
        data_nascimento: Option<NaiveDate>,
        sexo: Option<Sexo>,
        is_personal: bool,
    ) -> Result<Usuario, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nome, data_nascimento, sexo, is_personal)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(data_nascimento)
        .bind(sexo)
        .bind(is_personal)
        .fetch_one(&self.pool)
        .await?;

        Ok(usuario)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    /// Lista todos os usuários, com filtro opcional por flag de personal.
    pub async fn list(&self, is_personal: Option<bool>) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT *
            FROM usuarios
            WHERE ($1::boolean IS NULL OR is_personal = $1)
            ORDER BY data_inscricao ASC, nome ASC
            "#,
        )
        .bind(is_personal)
        .fetch_all(&self.pool)
        .await?;

        Ok(usuarios)
    }

    /// Atualização parcial. Nas colunas anuláveis o par (flag, valor)
    /// distingue campo ausente (mantém) de `null` explícito (limpa);
    /// `data_inscricao` nunca entra no UPDATE.
    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<&str>,
        data_nascimento: Option<Option<NaiveDate>>,
        sexo: Option<Option<Sexo>>,
        is_personal: Option<bool>,
    ) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuarios SET
                nome = COALESCE($2, nome),
                data_nascimento = CASE WHEN $3 THEN $4 ELSE data_nascimento END,
                sexo = CASE WHEN $5 THEN $6 ELSE sexo END,
                is_personal = COALESCE($7, is_personal)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(data_nascimento.is_some())
        .bind(data_nascimento.flatten())
        .bind(sexo.is_some())
        .bind(sexo.flatten())
        .bind(is_personal)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    /// Remove apenas a linha do usuário. A cascata (mensalidades, treinos,
    /// check-ins) é orquestrada pelo service, na mesma transação.
    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Alunos distintos que possuem ao menos um treino orientado pelo
    /// personal informado. Distinção por identidade, não por treino.
    pub async fn alunos_do_personal(&self, personal_id: Uuid) -> Result<Vec<Usuario>, AppError> {
        let alunos = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT DISTINCT u.*
            FROM usuarios u
            INNER JOIN treinos t ON t.aluno_id = u.id
            WHERE t.personal_id = $1
            ORDER BY u.nome ASC
            "#,
        )
        .bind(personal_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(alunos)
    }
}
