// src/handlers/usuarios.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::{error::AppError, patch::campo_presente},
    config::AppState,
    models::usuario::{Sexo, Usuario},
};

fn data_nascimento_nao_futura(data: &NaiveDate) -> Result<(), ValidationError> {
    if *data > Utc::now().date_naive() {
        let mut erro = ValidationError::new("data_nascimento_futura");
        erro.message = Some("Data de nascimento não pode ser futura.".into());
        return Err(erro);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuarioPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres"))]
    #[schema(example = "João Silva")]
    pub nome: String,

    #[validate(custom(function = data_nascimento_nao_futura))]
    #[schema(value_type = Option<String>, format = Date, example = "1995-05-15")]
    pub data_nascimento: Option<NaiveDate>,

    pub sexo: Option<Sexo>,

    #[serde(default)]
    #[schema(example = false)]
    pub is_personal: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuarioPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres"))]
    pub nome: Option<String>,

    /// `null` explícito limpa o campo; campo ausente mantém o valor atual.
    #[serde(default, deserialize_with = "campo_presente")]
    #[schema(value_type = Option<String>, format = Date)]
    pub data_nascimento: Option<Option<NaiveDate>>,

    /// `null` explícito limpa o campo; campo ausente mantém o valor atual.
    #[serde(default, deserialize_with = "campo_presente")]
    #[schema(value_type = Option<Sexo>)]
    pub sexo: Option<Option<Sexo>>,

    pub is_personal: Option<bool>,
}

// A validação de data do PATCH fica fora do derive: só o valor interno
// de um campo presente e não-nulo interessa.
fn validar_data_nascimento_patch(campo: Option<Option<NaiveDate>>) -> Result<(), AppError> {
    if let Some(Some(data)) = campo {
        if data_nascimento_nao_futura(&data).is_err() {
            return Err(AppError::CampoInvalido {
                campo: "data_nascimento",
                mensagem: "Data de nascimento não pode ser futura.".into(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FiltroUsuarios {
    /// Filtra por flag de personal (true = só personals, false = só alunos).
    pub is_personal: Option<bool>,
}

// GET /usuarios/
#[utoipa::path(
    get,
    path = "/usuarios/",
    tag = "Usuários",
    params(FiltroUsuarios),
    responses(
        (status = 200, description = "Lista de usuários", body = Vec<Usuario>)
    )
)]
pub async fn list_usuarios(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroUsuarios>,
) -> Result<impl IntoResponse, AppError> {
    let usuarios = app_state.usuario_service.list(filtro.is_personal).await?;
    Ok((StatusCode::OK, Json(usuarios)))
}

// POST /usuarios/
#[utoipa::path(
    post,
    path = "/usuarios/",
    tag = "Usuários",
    request_body = CreateUsuarioPayload,
    responses(
        (status = 201, description = "Usuário criado", body = Usuario),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_usuario(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUsuarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let usuario = app_state
        .usuario_service
        .create(
            &payload.nome,
            payload.data_nascimento,
            payload.sexo,
            payload.is_personal,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(usuario)))
}

// GET /usuarios/{id}/
#[utoipa::path(
    get,
    path = "/usuarios/{id}/",
    tag = "Usuários",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = Usuario),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_usuario(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = app_state.usuario_service.get(id).await?;
    Ok((StatusCode::OK, Json(usuario)))
}

// PATCH /usuarios/{id}/
#[utoipa::path(
    patch,
    path = "/usuarios/{id}/",
    tag = "Usuários",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = UpdateUsuarioPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = Usuario),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn update_usuario(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUsuarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    validar_data_nascimento_patch(payload.data_nascimento)?;

    let usuario = app_state
        .usuario_service
        .update(
            id,
            payload.nome.as_deref(),
            payload.data_nascimento,
            payload.sexo,
            payload.is_personal,
        )
        .await?;

    Ok((StatusCode::OK, Json(usuario)))
}

// DELETE /usuarios/{id}/
#[utoipa::path(
    delete,
    path = "/usuarios/{id}/",
    tag = "Usuários",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário removido, com cascata de dependentes"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn delete_usuario(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .usuario_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn payload_base() -> CreateUsuarioPayload {
        CreateUsuarioPayload {
            nome: "Teste API".into(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 1, 1),
            sexo: Some(Sexo::M),
            is_personal: false,
        }
    }

    #[test]
    fn payload_valido_passa() {
        assert!(payload_base().validate().is_ok());
    }

    #[test]
    fn data_de_nascimento_futura_e_rejeitada() {
        let mut payload = payload_base();
        payload.data_nascimento = Some(Utc::now().date_naive() + Duration::days(1));

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("data_nascimento"));
    }

    #[test]
    fn nome_vazio_e_rejeitado() {
        let mut payload = payload_base();
        payload.nome = String::new();

        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("nome"));
    }

    #[test]
    fn is_personal_ausente_vira_false() {
        let payload: CreateUsuarioPayload =
            serde_json::from_value(serde_json::json!({ "nome": "Ana" })).unwrap();
        assert!(!payload.is_personal);
    }

    #[test]
    fn campos_desconhecidos_sao_ignorados() {
        let payload: UpdateUsuarioPayload = serde_json::from_value(serde_json::json!({
            "nome": "Nome Atualizado",
            "data_inscricao": "2020-01-01",
            "campo_inexistente": 42
        }))
        .unwrap();
        assert_eq!(payload.nome.as_deref(), Some("Nome Atualizado"));
    }

    #[test]
    fn patch_distingue_null_explicito_de_campo_ausente() {
        let com_null: UpdateUsuarioPayload =
            serde_json::from_value(serde_json::json!({ "data_nascimento": null })).unwrap();
        assert_eq!(com_null.data_nascimento, Some(None));
        assert_eq!(com_null.sexo, None);

        let sem_campo: UpdateUsuarioPayload =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(sem_campo.data_nascimento, None);

        let com_valor: UpdateUsuarioPayload =
            serde_json::from_value(serde_json::json!({ "data_nascimento": "1990-01-01" }))
                .unwrap();
        assert_eq!(
            com_valor.data_nascimento,
            Some(NaiveDate::from_ymd_opt(1990, 1, 1))
        );
    }

    #[test]
    fn data_de_nascimento_futura_no_patch_e_rejeitada() {
        let futura = Some(Some(Utc::now().date_naive() + Duration::days(1)));
        assert!(validar_data_nascimento_patch(futura).is_err());

        // Limpar o campo ou não enviá-lo nunca é erro.
        assert!(validar_data_nascimento_patch(Some(None)).is_ok());
        assert!(validar_data_nascimento_patch(None).is_ok());
    }
}
