// src/handlers/exercicios.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, patch::campo_presente},
    config::AppState,
    models::treino::Exercicio,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExercicioPayload {
    /// ID do treino dono do exercício.
    pub treino: Uuid,

    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres"))]
    #[schema(example = "Supino")]
    pub nome: String,

    #[validate(range(min = 1, message = "Séries deve ser ao menos 1"))]
    #[schema(example = 4)]
    pub series: i32,

    #[validate(range(min = 1, message = "Repetições deve ser ao menos 1"))]
    #[schema(example = 12)]
    pub repeticoes: i32,

    #[schema(example = "60.00")]
    pub carga_kg: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExercicioPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres"))]
    pub nome: Option<String>,

    #[validate(range(min = 1, message = "Séries deve ser ao menos 1"))]
    pub series: Option<i32>,

    #[validate(range(min = 1, message = "Repetições deve ser ao menos 1"))]
    pub repeticoes: Option<i32>,

    /// `null` explícito limpa a carga; campo ausente mantém.
    #[serde(default, deserialize_with = "campo_presente")]
    #[schema(value_type = Option<Decimal>)]
    pub carga_kg: Option<Option<Decimal>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FiltroExercicios {
    /// Filtra pelos exercícios de um treino.
    pub treino: Option<Uuid>,
}

// GET /exercicios/
#[utoipa::path(
    get,
    path = "/exercicios/",
    tag = "Exercícios",
    params(FiltroExercicios),
    responses(
        (status = 200, description = "Lista de exercícios", body = Vec<Exercicio>)
    )
)]
pub async fn list_exercicios(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroExercicios>,
) -> Result<impl IntoResponse, AppError> {
    let exercicios = app_state.treino_service.list_exercicios(filtro.treino).await?;
    Ok((StatusCode::OK, Json(exercicios)))
}

// POST /exercicios/
#[utoipa::path(
    post,
    path = "/exercicios/",
    tag = "Exercícios",
    request_body = CreateExercicioPayload,
    responses(
        (status = 201, description = "Exercício criado", body = Exercicio),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Treino não encontrado")
    )
)]
pub async fn create_exercicio(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateExercicioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let exercicio = app_state
        .treino_service
        .create_exercicio(
            payload.treino,
            &payload.nome,
            payload.series,
            payload.repeticoes,
            payload.carga_kg,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(exercicio)))
}

// GET /exercicios/{id}/
#[utoipa::path(
    get,
    path = "/exercicios/{id}/",
    tag = "Exercícios",
    params(("id" = Uuid, Path, description = "ID do exercício")),
    responses(
        (status = 200, description = "Exercício encontrado", body = Exercicio),
        (status = 404, description = "Exercício não encontrado")
    )
)]
pub async fn get_exercicio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let exercicio = app_state.treino_service.get_exercicio(id).await?;
    Ok((StatusCode::OK, Json(exercicio)))
}

// PATCH /exercicios/{id}/
#[utoipa::path(
    patch,
    path = "/exercicios/{id}/",
    tag = "Exercícios",
    params(("id" = Uuid, Path, description = "ID do exercício")),
    request_body = UpdateExercicioPayload,
    responses(
        (status = 200, description = "Exercício atualizado", body = Exercicio),
        (status = 404, description = "Exercício não encontrado")
    )
)]
pub async fn update_exercicio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExercicioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let exercicio = app_state
        .treino_service
        .update_exercicio(
            id,
            payload.nome.as_deref(),
            payload.series,
            payload.repeticoes,
            payload.carga_kg,
        )
        .await?;

    Ok((StatusCode::OK, Json(exercicio)))
}

// DELETE /exercicios/{id}/
#[utoipa::path(
    delete,
    path = "/exercicios/{id}/",
    tag = "Exercícios",
    params(("id" = Uuid, Path, description = "ID do exercício")),
    responses(
        (status = 204, description = "Exercício removido"),
        (status = 404, description = "Exercício não encontrado")
    )
)]
pub async fn delete_exercicio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.treino_service.delete_exercicio(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_e_repeticoes_precisam_ser_positivas() {
        let payload = CreateExercicioPayload {
            treino: Uuid::nil(),
            nome: "Supino".into(),
            series: 0,
            repeticoes: 12,
            carga_kg: None,
        };

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("series"));
    }

    #[test]
    fn carga_e_opcional() {
        let payload = CreateExercicioPayload {
            treino: Uuid::nil(),
            nome: "Flexão".into(),
            series: 3,
            repeticoes: 10,
            carga_kg: None,
        };

        assert!(payload.validate().is_ok());
    }
}
