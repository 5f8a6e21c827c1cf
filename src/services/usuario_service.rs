// src/services/usuario_service.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        CheckinRepository, ExercicioRepository, MensalidadeRepository, TreinoRepository,
        UsuarioRepository,
    },
    models::usuario::{Sexo, Usuario},
};

/// Um passo da cascata de remoção de usuário. Exercícios referenciam
/// treinos e treinos referenciam usuários, então os filhos saem antes
/// dos pais; o próprio usuário é sempre o último passo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassoCascata {
    ExerciciosDosTreinosDoAluno,
    TreinosDoAluno,
    AnularReferenciasDePersonal,
    MensalidadesDoAluno,
    CheckinsDoAluno,
    Usuario,
}

/// A ordem em que os passos rodam dentro da transação de deleção.
pub const CASCATA_USUARIO: [PassoCascata; 6] = [
    PassoCascata::ExerciciosDosTreinosDoAluno,
    PassoCascata::TreinosDoAluno,
    PassoCascata::AnularReferenciasDePersonal,
    PassoCascata::MensalidadesDoAluno,
    PassoCascata::CheckinsDoAluno,
    PassoCascata::Usuario,
];

#[derive(Clone)]
pub struct UsuarioService {
    repo: UsuarioRepository,
    mensalidades: MensalidadeRepository,
    treinos: TreinoRepository,
    exercicios: ExercicioRepository,
    checkins: CheckinRepository,
}

impl UsuarioService {
    pub fn new(
        repo: UsuarioRepository,
        mensalidades: MensalidadeRepository,
        treinos: TreinoRepository,
        exercicios: ExercicioRepository,
        checkins: CheckinRepository,
    ) -> Self {
        Self {
            repo,
            mensalidades,
            treinos,
            exercicios,
            checkins,
        }
    }

    pub async fn create(
        &self,
        nome: &str,
        data_nascimento: Option<NaiveDate>,
        sexo: Option<Sexo>,
        is_personal: bool,
    ) -> Result<Usuario, AppError> {
        let usuario = self
            .repo
            .create(nome, data_nascimento, sexo, is_personal)
            .await?;

        tracing::info!(
            "Usuário '{}' criado ({})",
            usuario.nome,
            if usuario.is_personal { "personal" } else { "aluno" }
        );
        Ok(usuario)
    }

    pub async fn get(&self, id: Uuid) -> Result<Usuario, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UsuarioNotFound)
    }

    pub async fn list(&self, is_personal: Option<bool>) -> Result<Vec<Usuario>, AppError> {
        self.repo.list(is_personal).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<&str>,
        data_nascimento: Option<Option<NaiveDate>>,
        sexo: Option<Option<Sexo>>,
        is_personal: Option<bool>,
    ) -> Result<Usuario, AppError> {
        self.repo
            .update(id, nome, data_nascimento, sexo, is_personal)
            .await?
            .ok_or(AppError::UsuarioNotFound)
    }

    /// Deleção com cascata explícita, tudo na mesma transação, na ordem
    /// de `CASCATA_USUARIO`. Id inexistente desfaz a transação inteira.
    pub async fn delete(&self, pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;

        let mut removidos = 0;
        for passo in CASCATA_USUARIO {
            match passo {
                PassoCascata::ExerciciosDosTreinosDoAluno => {
                    self.exercicios.delete_by_aluno(&mut *tx, id).await?;
                }
                PassoCascata::TreinosDoAluno => {
                    self.treinos.delete_by_aluno(&mut *tx, id).await?;
                }
                PassoCascata::AnularReferenciasDePersonal => {
                    self.treinos.clear_personal(&mut *tx, id).await?;
                }
                PassoCascata::MensalidadesDoAluno => {
                    self.mensalidades.delete_by_aluno(&mut *tx, id).await?;
                }
                PassoCascata::CheckinsDoAluno => {
                    self.checkins.delete_by_aluno(&mut *tx, id).await?;
                }
                PassoCascata::Usuario => {
                    removidos = self.repo.delete(&mut *tx, id).await?;
                }
            }
        }

        if removidos == 0 {
            tx.rollback().await?;
            return Err(AppError::UsuarioNotFound);
        }

        tx.commit().await?;
        tracing::info!("Usuário {} removido com seus registros dependentes", id);
        Ok(())
    }

    /// Alunos distintos atendidos por um personal. O id precisa resolver
    /// para um usuário com o flag de personal, senão 404.
    pub async fn alunos_do_personal(&self, personal_id: Uuid) -> Result<Vec<Usuario>, AppError> {
        match self.repo.find_by_id(personal_id).await? {
            Some(usuario) if usuario.is_personal => {}
            _ => return Err(AppError::PersonalNotFound),
        }

        self.repo.alunos_do_personal(personal_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posicao(passo: PassoCascata) -> usize {
        CASCATA_USUARIO
            .iter()
            .position(|p| *p == passo)
            .expect("passo ausente da cascata")
    }

    #[test]
    fn cascata_remove_exercicios_antes_dos_treinos() {
        assert!(
            posicao(PassoCascata::ExerciciosDosTreinosDoAluno)
                < posicao(PassoCascata::TreinosDoAluno)
        );
    }

    #[test]
    fn cascata_anula_referencias_de_personal_antes_de_remover_o_usuario() {
        // Anular referências é um UPDATE: treinos orientados pelo personal
        // deletado sobrevivem, só perdem o vínculo.
        assert!(posicao(PassoCascata::AnularReferenciasDePersonal) < posicao(PassoCascata::Usuario));
    }

    #[test]
    fn cascata_cobre_mensalidades_e_checkins() {
        assert!(posicao(PassoCascata::MensalidadesDoAluno) < posicao(PassoCascata::Usuario));
        assert!(posicao(PassoCascata::CheckinsDoAluno) < posicao(PassoCascata::Usuario));
    }

    #[test]
    fn cascata_remove_o_usuario_por_ultimo_e_uma_unica_vez() {
        assert_eq!(CASCATA_USUARIO.last(), Some(&PassoCascata::Usuario));
        assert_eq!(
            CASCATA_USUARIO
                .iter()
                .filter(|p| **p == PassoCascata::Usuario)
                .count(),
            1
        );
    }
}
