// src/models/usuario.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE sexo_usuario do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "sexo_usuario", rename_all = "UPPERCASE")]
pub enum Sexo {
    M,
    F,
}

/// Um usuário da academia: aluno ou personal trainer.
///
/// O flag `is_personal` é binário: quem não é personal é aluno.
/// `data_inscricao` é definida na criação e nunca mais alterada.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "João Silva")]
    pub nome: String,

    #[schema(value_type = Option<String>, format = Date, example = "1995-05-15")]
    pub data_nascimento: Option<NaiveDate>,

    pub sexo: Option<Sexo>,

    #[schema(example = false)]
    pub is_personal: bool,

    #[schema(value_type = String, format = Date, example = "2026-01-10")]
    pub data_inscricao: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexo_serializa_como_letra_unica() {
        assert_eq!(serde_json::to_string(&Sexo::M).unwrap(), "\"M\"");
        assert_eq!(serde_json::to_string(&Sexo::F).unwrap(), "\"F\"");
    }

    #[test]
    fn usuario_serializa_campos_no_formato_da_api() {
        let usuario = Usuario {
            id: Uuid::nil(),
            nome: "João Silva".into(),
            data_nascimento: NaiveDate::from_ymd_opt(1995, 5, 15),
            sexo: Some(Sexo::M),
            is_personal: false,
            data_inscricao: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        };

        let json = serde_json::to_value(&usuario).unwrap();
        assert_eq!(json["nome"], "João Silva");
        assert_eq!(json["data_nascimento"], "1995-05-15");
        assert_eq!(json["sexo"], "M");
        assert_eq!(json["is_personal"], false);
        assert_eq!(json["data_inscricao"], "2026-01-10");
    }
}
