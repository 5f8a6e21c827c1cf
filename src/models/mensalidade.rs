// src/models/mensalidade.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Uma mensalidade paga por um aluno.
///
/// A `validade` é a data até a qual o pagamento mantém o aluno "ativo".
/// Invariante (checada na escrita): `validade >= data_pagamento`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mensalidade {
    pub id: Uuid,

    pub aluno_id: Uuid,

    /// Nome do aluno, resolvido via JOIN em todas as consultas.
    #[schema(example = "João Silva")]
    pub aluno_nome: String,

    #[schema(value_type = String, format = Date, example = "2026-08-01")]
    pub data_pagamento: NaiveDate,

    #[schema(example = "150.00")]
    pub valor: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-08-31")]
    pub validade: NaiveDate,
}

/// Situação da mensalidade de um aluno, derivada do pagamento mais recente.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusMensalidade {
    #[schema(example = "João Silva")]
    pub aluno: String,

    pub ativo: bool,

    /// Dias até a validade expirar; 0 quando inativo.
    #[schema(example = 15)]
    pub dias_restantes: i64,

    #[schema(value_type = Option<String>, format = Date)]
    pub ultimo_pagamento: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub validade: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_sem_mensalidade_serializa_nulos() {
        let status = StatusMensalidade {
            aluno: "Sem Mensalidade".into(),
            ativo: false,
            dias_restantes: 0,
            ultimo_pagamento: None,
            validade: None,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["ativo"], false);
        assert_eq!(json["dias_restantes"], 0);
        assert!(json["ultimo_pagamento"].is_null());
        assert!(json["validade"].is_null());
    }
}
