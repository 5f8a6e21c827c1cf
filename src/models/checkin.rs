// src/models/checkin.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Um registro de presença. Só é criado quando o portão de check-in
/// aprova: usuário é aluno e a mensalidade mais recente está válida.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Checkin {
    pub id: Uuid,

    pub aluno_id: Uuid,

    pub data_hora: DateTime<Utc>,
}
