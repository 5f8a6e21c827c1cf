// src/models/dashboard.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Os contadores do painel administrativo.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct DashboardStats {
    pub total_usuarios: i64,
    pub total_alunos: i64,
    pub total_personals: i64,
    pub total_treinos: i64,
    /// Alunos distintos com alguma mensalidade cuja validade >= hoje.
    pub alunos_ativos: i64,
    pub alunos_inativos: i64,
}

/// O personal com mais alunos distintos vinculados via treinos.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PersonalPopular {
    pub id: Uuid,

    #[schema(example = "Maria Personal")]
    pub nome: String,

    #[schema(example = 2)]
    pub total_alunos: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serializa_com_as_chaves_da_api() {
        let stats = DashboardStats {
            total_usuarios: 2,
            total_alunos: 1,
            total_personals: 1,
            total_treinos: 0,
            alunos_ativos: 1,
            alunos_inativos: 0,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_usuarios"], 2);
        assert_eq!(json["total_alunos"], 1);
        assert_eq!(json["total_personals"], 1);
        assert_eq!(json["alunos_ativos"], 1);
        assert_eq!(json["alunos_inativos"], 0);
    }
}
