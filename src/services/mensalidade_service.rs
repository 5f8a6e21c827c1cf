// src/services/mensalidade_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CheckinRepository, MensalidadeRepository, UsuarioRepository},
    models::{checkin::Checkin, mensalidade::Mensalidade, mensalidade::StatusMensalidade},
};

/// `validade >= data_pagamento`: a regra central da mensalidade.
pub fn periodo_valido(data_pagamento: NaiveDate, validade: NaiveDate) -> bool {
    validade >= data_pagamento
}

/// Deriva (ativo, dias_restantes) da validade mais recente de um aluno.
/// Sem mensalidade ou validade vencida: inativo, zero dias.
pub fn status_da_validade(validade: Option<NaiveDate>, hoje: NaiveDate) -> (bool, i64) {
    match validade {
        Some(v) if v >= hoje => (true, (v - hoje).num_days()),
        _ => (false, 0),
    }
}

/// O portão de check-in, com três saídas:
/// personal tentando entrar (operação inválida), mensalidade ausente ou
/// vencida (proibido), ou liberado.
pub fn avaliar_checkin(
    is_personal: bool,
    validade: Option<NaiveDate>,
    hoje: NaiveDate,
) -> Result<(), AppError> {
    if is_personal {
        return Err(AppError::CheckinSomenteAluno);
    }
    match validade {
        Some(v) if v >= hoje => Ok(()),
        _ => Err(AppError::MensalidadeInativa),
    }
}

#[derive(Clone)]
pub struct MensalidadeService {
    repo: MensalidadeRepository,
    usuarios: UsuarioRepository,
    checkins: CheckinRepository,
}

impl MensalidadeService {
    pub fn new(
        repo: MensalidadeRepository,
        usuarios: UsuarioRepository,
        checkins: CheckinRepository,
    ) -> Self {
        Self {
            repo,
            usuarios,
            checkins,
        }
    }

    pub async fn create(
        &self,
        aluno_id: Uuid,
        data_pagamento: NaiveDate,
        valor: Decimal,
        validade: NaiveDate,
    ) -> Result<Mensalidade, AppError> {
        self.usuarios
            .find_by_id(aluno_id)
            .await?
            .ok_or(AppError::UsuarioNotFound)?;

        if !periodo_valido(data_pagamento, validade) {
            return Err(AppError::CampoInvalido {
                campo: "validade",
                mensagem: "A validade não pode ser anterior à data de pagamento.".into(),
            });
        }

        let mensalidade = self
            .repo
            .create(aluno_id, data_pagamento, valor, validade)
            .await?;

        tracing::info!(
            "Mensalidade registrada para '{}' até {}",
            mensalidade.aluno_nome,
            mensalidade.validade
        );
        Ok(mensalidade)
    }

    pub async fn get(&self, id: Uuid) -> Result<Mensalidade, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::MensalidadeNotFound)
    }

    pub async fn list(&self, aluno_id: Option<Uuid>) -> Result<Vec<Mensalidade>, AppError> {
        self.repo.list(aluno_id).await
    }

    /// Atualização parcial. A invariante de período é re-checada sobre o
    /// registro resultante da mesclagem, não só sobre os campos enviados.
    pub async fn update(
        &self,
        id: Uuid,
        data_pagamento: Option<NaiveDate>,
        valor: Option<Decimal>,
        validade: Option<NaiveDate>,
    ) -> Result<Mensalidade, AppError> {
        let atual = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::MensalidadeNotFound)?;

        let pagamento_final = data_pagamento.unwrap_or(atual.data_pagamento);
        let validade_final = validade.unwrap_or(atual.validade);
        if !periodo_valido(pagamento_final, validade_final) {
            return Err(AppError::CampoInvalido {
                campo: "validade",
                mensagem: "A validade não pode ser anterior à data de pagamento.".into(),
            });
        }

        self.repo
            .update(id, data_pagamento, valor, validade)
            .await?
            .ok_or(AppError::MensalidadeNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let removidos = self.repo.delete(id).await?;
        if removidos == 0 {
            return Err(AppError::MensalidadeNotFound);
        }
        Ok(())
    }

    /// Situação da mensalidade de um aluno, derivada do pagamento com a
    /// maior validade.
    pub async fn status(&self, aluno_id: Uuid) -> Result<StatusMensalidade, AppError> {
        let usuario = self
            .usuarios
            .find_by_id(aluno_id)
            .await?
            .ok_or(AppError::UsuarioNotFound)?;

        let ultima = self.repo.latest_by_aluno(aluno_id).await?;
        let hoje = Utc::now().date_naive();
        let (ativo, dias_restantes) =
            status_da_validade(ultima.as_ref().map(|m| m.validade), hoje);

        Ok(StatusMensalidade {
            aluno: usuario.nome,
            ativo,
            dias_restantes,
            ultimo_pagamento: ultima.as_ref().map(|m| m.data_pagamento),
            validade: ultima.map(|m| m.validade),
        })
    }

    /// Tenta registrar um check-in. Só cria o registro se o portão passar.
    pub async fn checkin(&self, aluno_id: Uuid) -> Result<Checkin, AppError> {
        let usuario = self
            .usuarios
            .find_by_id(aluno_id)
            .await?
            .ok_or(AppError::UsuarioNotFound)?;

        let ultima = self.repo.latest_by_aluno(aluno_id).await?;
        let hoje = Utc::now().date_naive();

        if let Err(erro) = avaliar_checkin(usuario.is_personal, ultima.map(|m| m.validade), hoje) {
            tracing::warn!("Check-in negado para '{}': {}", usuario.nome, erro);
            return Err(erro);
        }

        let checkin = self.checkins.create(aluno_id).await?;
        tracing::info!("Check-in de '{}' registrado", usuario.nome);
        Ok(checkin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn periodo_valido_aceita_validade_igual_ou_posterior_ao_pagamento() {
        let pagamento = hoje();
        assert!(periodo_valido(pagamento, pagamento));
        assert!(periodo_valido(pagamento, pagamento + Duration::days(30)));
        assert!(!periodo_valido(pagamento, pagamento - Duration::days(1)));
    }

    #[test]
    fn status_sem_mensalidade_e_inativo_com_zero_dias() {
        assert_eq!(status_da_validade(None, hoje()), (false, 0));
    }

    #[test]
    fn status_com_validade_vencida_e_inativo_com_zero_dias() {
        let vencida = hoje() - Duration::days(1);
        assert_eq!(status_da_validade(Some(vencida), hoje()), (false, 0));
    }

    #[test]
    fn status_que_vence_hoje_ainda_esta_ativo() {
        assert_eq!(status_da_validade(Some(hoje()), hoje()), (true, 0));
    }

    #[test]
    fn status_com_quinze_dias_de_validade_restante() {
        let validade = hoje() + Duration::days(15);
        assert_eq!(status_da_validade(Some(validade), hoje()), (true, 15));
    }

    #[test]
    fn checkin_de_personal_e_operacao_invalida() {
        let resultado = avaliar_checkin(true, Some(hoje() + Duration::days(30)), hoje());
        assert!(matches!(resultado, Err(AppError::CheckinSomenteAluno)));
    }

    #[test]
    fn checkin_sem_mensalidade_e_proibido() {
        let resultado = avaliar_checkin(false, None, hoje());
        assert!(matches!(resultado, Err(AppError::MensalidadeInativa)));
    }

    #[test]
    fn checkin_com_mensalidade_vencida_e_proibido() {
        let resultado = avaliar_checkin(false, Some(hoje() - Duration::days(1)), hoje());
        assert!(matches!(resultado, Err(AppError::MensalidadeInativa)));
    }

    #[test]
    fn checkin_com_mensalidade_vigente_e_liberado() {
        assert!(avaliar_checkin(false, Some(hoje()), hoje()).is_ok());
        assert!(avaliar_checkin(false, Some(hoje() + Duration::days(30)), hoje()).is_ok());
    }
}
