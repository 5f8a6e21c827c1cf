// src/handlers/aluno.rs
//
// Rotas derivadas centradas no aluno: situação da mensalidade e o portão
// de check-in.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{checkin::Checkin, mensalidade::StatusMensalidade},
};

// GET /aluno/{id}/status-mensalidade/
#[utoipa::path(
    get,
    path = "/aluno/{id}/status-mensalidade/",
    tag = "Alunos",
    params(("id" = Uuid, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Situação da mensalidade", body = StatusMensalidade),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn status_mensalidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let status = app_state.mensalidade_service.status(id).await?;
    Ok((StatusCode::OK, Json(status)))
}

// POST /aluno/{id}/checkin/
#[utoipa::path(
    post,
    path = "/aluno/{id}/checkin/",
    tag = "Alunos",
    params(("id" = Uuid, Path, description = "ID do aluno")),
    responses(
        (status = 201, description = "Check-in registrado", body = Checkin),
        (status = 400, description = "Personal não pode fazer check-in"),
        (status = 403, description = "Mensalidade inativa ou vencida"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn checkin(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let checkin = app_state.mensalidade_service.checkin(id).await?;
    Ok((StatusCode::CREATED, Json(checkin)))
}
