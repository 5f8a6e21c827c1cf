// src/handlers/personal.rs

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
    models::{dashboard::PersonalPopular, usuario::Usuario},
};

// GET /personal/{id}/alunos/
#[utoipa::path(
    get,
    path = "/personal/{id}/alunos/",
    tag = "Personals",
    params(("id" = Uuid, Path, description = "ID do personal")),
    responses(
        (status = 200, description = "Alunos distintos atendidos pelo personal", body = Vec<Usuario>),
        (status = 404, description = "Personal não encontrado")
    )
)]
pub async fn alunos_do_personal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let alunos = app_state.usuario_service.alunos_do_personal(id).await?;
    Ok((StatusCode::OK, Json(alunos)))
}

// GET /personal/mais-popular/
#[utoipa::path(
    get,
    path = "/personal/mais-popular/",
    tag = "Personals",
    responses(
        (status = 200, description = "Personal com mais alunos distintos", body = PersonalPopular),
        (status = 404, description = "Nenhum personal cadastrado")
    )
)]
pub async fn mais_popular(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let personal = app_state.dashboard_service.personal_mais_popular().await?;
    Ok((StatusCode::OK, Json(personal)))
}
