use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante mapeia para um par (status HTTP, código de máquina).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regra semântica que depende de dados relacionados (ex: o usuário
    // indicado como personal não tem o flag). Mensagem por campo.
    #[error("Campo inválido '{campo}': {mensagem}")]
    CampoInvalido { campo: &'static str, mensagem: String },

    #[error("Usuário não encontrado")]
    UsuarioNotFound,

    #[error("Mensalidade não encontrada")]
    MensalidadeNotFound,

    #[error("Treino não encontrado")]
    TreinoNotFound,

    #[error("Exercício não encontrado")]
    ExercicioNotFound,

    #[error("Personal não encontrado")]
    PersonalNotFound,

    #[error("Apenas alunos podem fazer check-in")]
    CheckinSomenteAluno,

    #[error("Mensalidade inativa")]
    MensalidadeInativa,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// (status, código de máquina, mensagem para o cliente).
    pub fn status_and_code(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::ValidationError(_) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Um ou mais campos são inválidos.".into(),
            ),
            AppError::CampoInvalido { campo, mensagem } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                format!("{campo}: {mensagem}"),
            ),
            AppError::UsuarioNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Usuário não encontrado.".into(),
            ),
            AppError::MensalidadeNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Mensalidade não encontrada.".into(),
            ),
            AppError::TreinoNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Treino não encontrado.".into(),
            ),
            AppError::ExercicioNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Exercício não encontrado.".into(),
            ),
            AppError::PersonalNotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Personal não encontrado.".into(),
            ),
            AppError::CheckinSomenteAluno => (
                StatusCode::BAD_REQUEST,
                "invalid_operation",
                "Apenas alunos podem fazer check-in.".into(),
            ),
            AppError::MensalidadeInativa => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "Mensalidade inativa ou vencida.".into(),
            ),
            // DatabaseError e InternalServerError viram 500 sem vazar detalhes.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Ocorreu um erro inesperado.".into(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Erros de validação do `validator` retornam todos os detalhes.
        if let AppError::ValidationError(errors) = &self {
            let mut details = std::collections::HashMap::new();
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                details.insert(field.to_string(), messages);
            }
            let body = Json(json!({
                "code": "validation_error",
                "error": "Um ou mais campos são inválidos.",
                "details": details,
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        let (status, code, message) = self.status_and_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro interno do servidor: {:?}", self);
        }

        let body = Json(json!({ "code": code, "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erros_de_regra_mapeiam_para_os_status_da_api() {
        let casos = [
            (AppError::UsuarioNotFound, StatusCode::NOT_FOUND, "not_found"),
            (
                AppError::PersonalNotFound,
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                AppError::CheckinSomenteAluno,
                StatusCode::BAD_REQUEST,
                "invalid_operation",
            ),
            (
                AppError::MensalidadeInativa,
                StatusCode::FORBIDDEN,
                "forbidden",
            ),
            (
                AppError::CampoInvalido {
                    campo: "personal",
                    mensagem: "O usuário selecionado não é um personal trainer.".into(),
                },
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
        ];

        for (erro, status_esperado, codigo_esperado) in casos {
            let (status, code, _) = erro.status_and_code();
            assert_eq!(status, status_esperado);
            assert_eq!(code, codigo_esperado);
        }
    }

    #[test]
    fn erro_de_banco_vira_500_sem_vazar_detalhes() {
        let erro = AppError::DatabaseError(sqlx::Error::RowNotFound);
        let (status, code, mensagem) = erro.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "internal_error");
        assert!(!mensagem.contains("RowNotFound"));
    }
}
