// src/handlers/mensalidades.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError, config::AppState, models::mensalidade::Mensalidade,
    services::mensalidade_service::periodo_valido,
};

fn validar_periodo_payload(payload: &CreateMensalidadePayload) -> Result<(), ValidationError> {
    if !periodo_valido(payload.data_pagamento, payload.validade) {
        let mut erro = ValidationError::new("validade_anterior");
        erro.message = Some("A validade não pode ser anterior à data de pagamento.".into());
        return Err(erro);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = validar_periodo_payload))]
pub struct CreateMensalidadePayload {
    /// ID do aluno dono da mensalidade.
    pub aluno: Uuid,

    #[schema(value_type = String, format = Date, example = "2026-08-01")]
    pub data_pagamento: NaiveDate,

    #[schema(example = "150.00")]
    pub valor: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-08-31")]
    pub validade: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMensalidadePayload {
    #[schema(value_type = Option<String>, format = Date)]
    pub data_pagamento: Option<NaiveDate>,

    pub valor: Option<Decimal>,

    #[schema(value_type = Option<String>, format = Date)]
    pub validade: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FiltroMensalidades {
    /// Filtra pelas mensalidades de um aluno.
    pub aluno: Option<Uuid>,
}

// GET /mensalidades/
#[utoipa::path(
    get,
    path = "/mensalidades/",
    tag = "Mensalidades",
    params(FiltroMensalidades),
    responses(
        (status = 200, description = "Lista de mensalidades", body = Vec<Mensalidade>)
    )
)]
pub async fn list_mensalidades(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroMensalidades>,
) -> Result<impl IntoResponse, AppError> {
    let mensalidades = app_state.mensalidade_service.list(filtro.aluno).await?;
    Ok((StatusCode::OK, Json(mensalidades)))
}

// POST /mensalidades/
#[utoipa::path(
    post,
    path = "/mensalidades/",
    tag = "Mensalidades",
    request_body = CreateMensalidadePayload,
    responses(
        (status = 201, description = "Mensalidade criada", body = Mensalidade),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Aluno não encontrado")
    )
)]
pub async fn create_mensalidade(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateMensalidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mensalidade = app_state
        .mensalidade_service
        .create(
            payload.aluno,
            payload.data_pagamento,
            payload.valor,
            payload.validade,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(mensalidade)))
}

// GET /mensalidades/{id}/
#[utoipa::path(
    get,
    path = "/mensalidades/{id}/",
    tag = "Mensalidades",
    params(("id" = Uuid, Path, description = "ID da mensalidade")),
    responses(
        (status = 200, description = "Mensalidade encontrada", body = Mensalidade),
        (status = 404, description = "Mensalidade não encontrada")
    )
)]
pub async fn get_mensalidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mensalidade = app_state.mensalidade_service.get(id).await?;
    Ok((StatusCode::OK, Json(mensalidade)))
}

// PATCH /mensalidades/{id}/
#[utoipa::path(
    patch,
    path = "/mensalidades/{id}/",
    tag = "Mensalidades",
    params(("id" = Uuid, Path, description = "ID da mensalidade")),
    request_body = UpdateMensalidadePayload,
    responses(
        (status = 200, description = "Mensalidade atualizada", body = Mensalidade),
        (status = 400, description = "Período inválido após a mesclagem"),
        (status = 404, description = "Mensalidade não encontrada")
    )
)]
pub async fn update_mensalidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMensalidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mensalidade = app_state
        .mensalidade_service
        .update(id, payload.data_pagamento, payload.valor, payload.validade)
        .await?;

    Ok((StatusCode::OK, Json(mensalidade)))
}

// DELETE /mensalidades/{id}/
#[utoipa::path(
    delete,
    path = "/mensalidades/{id}/",
    tag = "Mensalidades",
    params(("id" = Uuid, Path, description = "ID da mensalidade")),
    responses(
        (status = 204, description = "Mensalidade removida"),
        (status = 404, description = "Mensalidade não encontrada")
    )
)]
pub async fn delete_mensalidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.mensalidade_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_base() -> CreateMensalidadePayload {
        CreateMensalidadePayload {
            aluno: Uuid::nil(),
            data_pagamento: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            valor: Decimal::new(15000, 2),
            validade: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        }
    }

    #[test]
    fn periodo_valido_passa() {
        assert!(payload_base().validate().is_ok());
    }

    #[test]
    fn validade_anterior_ao_pagamento_e_rejeitada() {
        let mut payload = payload_base();
        payload.validade = NaiveDate::from_ymd_opt(2026, 7, 31).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn validade_igual_ao_pagamento_passa() {
        let mut payload = payload_base();
        payload.validade = payload.data_pagamento;
        assert!(payload.validate().is_ok());
    }
}
