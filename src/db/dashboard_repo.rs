// src/db/dashboard_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{DashboardStats, PersonalPopular},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Contadores do painel em uma única leitura. `hoje` entra como
    /// parâmetro para manter o corte de "ativo" idêntico ao do status.
    pub async fn stats(&self, hoje: NaiveDate) -> Result<DashboardStats, AppError> {
        let stats = sqlx::query_as::<_, DashboardStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM usuarios) AS total_usuarios,
                (SELECT COUNT(*) FROM usuarios WHERE NOT is_personal) AS total_alunos,
                (SELECT COUNT(*) FROM usuarios WHERE is_personal) AS total_personals,
                (SELECT COUNT(*) FROM treinos) AS total_treinos,
                ativos.n AS alunos_ativos,
                (SELECT COUNT(*) FROM usuarios WHERE NOT is_personal) - ativos.n
                    AS alunos_inativos
            FROM (
                SELECT COUNT(DISTINCT m.aluno_id) AS n
                FROM mensalidades m
                INNER JOIN usuarios u ON u.id = m.aluno_id AND NOT u.is_personal
                WHERE m.validade >= $1
            ) AS ativos
            "#,
        )
        .bind(hoje)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    /// O personal com mais alunos distintos. Empate decidido pelo menor
    /// id, para que o resultado seja determinístico.
    pub async fn personal_mais_popular(&self) -> Result<Option<PersonalPopular>, AppError> {
        let personal = sqlx::query_as::<_, PersonalPopular>(
            r#"
            SELECT u.id, u.nome, COUNT(DISTINCT t.aluno_id) AS total_alunos
            FROM usuarios u
            LEFT JOIN treinos t ON t.personal_id = u.id
            WHERE u.is_personal
            GROUP BY u.id, u.nome
            ORDER BY total_alunos DESC, u.id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(personal)
    }
}
