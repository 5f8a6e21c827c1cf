// src/handlers/treinos.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, patch::campo_presente},
    config::AppState,
    models::treino::TreinoDetalhe,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTreinoPayload {
    /// ID do aluno dono do treino.
    pub aluno: Uuid,

    /// ID do personal responsável; precisa ter o flag de personal.
    pub personal: Option<Uuid>,

    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres"))]
    #[schema(example = "Treino A")]
    pub nome: String,

    #[schema(example = "Peito e tríceps")]
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTreinoPayload {
    pub aluno: Option<Uuid>,

    /// `null` explícito desvincula o personal; campo ausente mantém.
    #[serde(default, deserialize_with = "campo_presente")]
    #[schema(value_type = Option<Uuid>)]
    pub personal: Option<Option<Uuid>>,

    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres"))]
    pub nome: Option<String>,

    /// `null` explícito limpa a descrição; campo ausente mantém.
    #[serde(default, deserialize_with = "campo_presente")]
    #[schema(value_type = Option<String>)]
    pub descricao: Option<Option<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FiltroTreinos {
    /// Filtra pelos treinos de um aluno.
    pub aluno: Option<Uuid>,
    /// Filtra pelos treinos orientados por um personal.
    pub personal: Option<Uuid>,
}

// GET /treinos/
#[utoipa::path(
    get,
    path = "/treinos/",
    tag = "Treinos",
    params(FiltroTreinos),
    responses(
        (status = 200, description = "Lista de treinos com exercícios", body = Vec<TreinoDetalhe>)
    )
)]
pub async fn list_treinos(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroTreinos>,
) -> Result<impl IntoResponse, AppError> {
    let treinos = app_state
        .treino_service
        .list(filtro.aluno, filtro.personal)
        .await?;
    Ok((StatusCode::OK, Json(treinos)))
}

// POST /treinos/
#[utoipa::path(
    post,
    path = "/treinos/",
    tag = "Treinos",
    request_body = CreateTreinoPayload,
    responses(
        (status = 201, description = "Treino criado", body = TreinoDetalhe),
        (status = 400, description = "Personal inválido ou dados malformados"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn create_treino(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTreinoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let treino = app_state
        .treino_service
        .create(
            payload.aluno,
            payload.personal,
            &payload.nome,
            payload.descricao.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(treino)))
}

// GET /treinos/{id}/
#[utoipa::path(
    get,
    path = "/treinos/{id}/",
    tag = "Treinos",
    params(("id" = Uuid, Path, description = "ID do treino")),
    responses(
        (status = 200, description = "Treino com exercícios", body = TreinoDetalhe),
        (status = 404, description = "Treino não encontrado")
    )
)]
pub async fn get_treino(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let treino = app_state.treino_service.get(id).await?;
    Ok((StatusCode::OK, Json(treino)))
}

// PATCH /treinos/{id}/
#[utoipa::path(
    patch,
    path = "/treinos/{id}/",
    tag = "Treinos",
    params(("id" = Uuid, Path, description = "ID do treino")),
    request_body = UpdateTreinoPayload,
    responses(
        (status = 200, description = "Treino atualizado", body = TreinoDetalhe),
        (status = 400, description = "Personal inválido"),
        (status = 404, description = "Treino não encontrado")
    )
)]
pub async fn update_treino(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTreinoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let treino = app_state
        .treino_service
        .update(
            id,
            payload.aluno,
            payload.personal,
            payload.nome.as_deref(),
            payload.descricao.as_ref().map(|d| d.as_deref()),
        )
        .await?;

    Ok((StatusCode::OK, Json(treino)))
}

// DELETE /treinos/{id}/
#[utoipa::path(
    delete,
    path = "/treinos/{id}/",
    tag = "Treinos",
    params(("id" = Uuid, Path, description = "ID do treino")),
    responses(
        (status = 204, description = "Treino removido com seus exercícios"),
        (status = 404, description = "Treino não encontrado")
    )
)]
pub async fn delete_treino(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .treino_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_com_personal_null_desvincula_sem_tocar_os_demais_campos() {
        let payload: UpdateTreinoPayload =
            serde_json::from_value(serde_json::json!({ "personal": null })).unwrap();

        assert_eq!(payload.personal, Some(None));
        assert_eq!(payload.descricao, None);
        assert!(payload.aluno.is_none());
        assert!(payload.nome.is_none());
    }

    #[test]
    fn patch_com_personal_presente_carrega_o_valor() {
        let id = Uuid::new_v4();
        let payload: UpdateTreinoPayload =
            serde_json::from_value(serde_json::json!({ "personal": id })).unwrap();

        assert_eq!(payload.personal, Some(Some(id)));
    }
}
