// src/models/treino.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Um plano de treino de um aluno, opcionalmente orientado por um personal.
///
/// Se `personal_id` estiver presente, o usuário referenciado precisa ter
/// `is_personal = true` (invariante checada no service, não no banco).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Treino {
    pub id: Uuid,

    pub aluno_id: Uuid,

    pub personal_id: Option<Uuid>,

    #[schema(example = "Treino A")]
    pub nome: String,

    #[schema(example = "Peito e tríceps")]
    pub descricao: Option<String>,

    pub data_criacao: DateTime<Utc>,
}

/// Um exercício prescrito dentro de um treino (séries x repetições x carga).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercicio {
    pub id: Uuid,

    pub treino_id: Uuid,

    #[schema(example = "Supino")]
    pub nome: String,

    #[schema(example = 4)]
    pub series: i32,

    #[schema(example = 12)]
    pub repeticoes: i32,

    #[schema(example = "60.00")]
    pub carga_kg: Option<Decimal>,
}

/// Representação completa de um treino para leitura: nomes resolvidos
/// via JOIN e exercícios carregados junto.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TreinoDetalhe {
    pub id: Uuid,

    pub aluno_id: Uuid,

    #[schema(example = "João Silva")]
    pub aluno_nome: String,

    pub personal_id: Option<Uuid>,

    #[schema(example = "Maria Personal")]
    pub personal_nome: Option<String>,

    #[schema(example = "Treino A")]
    pub nome: String,

    pub descricao: Option<String>,

    pub data_criacao: DateTime<Utc>,

    // Não vem do SELECT principal: o service preenche depois.
    #[sqlx(skip)]
    pub exercicios: Vec<Exercicio>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn detalhe_serializa_exercicios_mesmo_antes_de_preenchidos() {
        let detalhe = TreinoDetalhe {
            id: Uuid::nil(),
            aluno_id: Uuid::nil(),
            aluno_nome: "João Silva".into(),
            personal_id: None,
            personal_nome: None,
            nome: "Treino A".into(),
            descricao: None,
            data_criacao: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
            exercicios: Vec::new(),
        };

        let json = serde_json::to_value(&detalhe).unwrap();
        assert_eq!(json["exercicios"], serde_json::json!([]));
        assert_eq!(json["aluno_nome"], "João Silva");
    }
}
