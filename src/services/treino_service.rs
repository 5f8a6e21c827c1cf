// src/services/treino_service.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ExercicioRepository, TreinoRepository, UsuarioRepository},
    models::treino::{Exercicio, TreinoDetalhe},
};

/// Passos da cascata de remoção de um treino: os exercícios referenciam
/// o treino, então saem primeiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassoCascataTreino {
    Exercicios,
    Treino,
}

pub const CASCATA_TREINO: [PassoCascataTreino; 2] =
    [PassoCascataTreino::Exercicios, PassoCascataTreino::Treino];

#[derive(Clone)]
pub struct TreinoService {
    repo: TreinoRepository,
    exercicios: ExercicioRepository,
    usuarios: UsuarioRepository,
}

impl TreinoService {
    pub fn new(
        repo: TreinoRepository,
        exercicios: ExercicioRepository,
        usuarios: UsuarioRepository,
    ) -> Self {
        Self {
            repo,
            exercicios,
            usuarios,
        }
    }

    /// O usuário indicado como personal precisa existir e ter o flag.
    /// Checada na criação e re-checada quando o campo muda no PATCH.
    async fn validar_personal(&self, personal_id: Uuid) -> Result<(), AppError> {
        match self.usuarios.find_by_id(personal_id).await? {
            Some(usuario) if usuario.is_personal => Ok(()),
            _ => Err(AppError::CampoInvalido {
                campo: "personal",
                mensagem: "O usuário selecionado não é um personal trainer.".into(),
            }),
        }
    }

    async fn anexar_exercicios(
        &self,
        mut treinos: Vec<TreinoDetalhe>,
    ) -> Result<Vec<TreinoDetalhe>, AppError> {
        if treinos.is_empty() {
            return Ok(treinos);
        }

        let ids: Vec<Uuid> = treinos.iter().map(|t| t.id).collect();
        let mut por_treino: HashMap<Uuid, Vec<Exercicio>> = HashMap::new();
        for exercicio in self.exercicios.list_by_treinos(&ids).await? {
            por_treino
                .entry(exercicio.treino_id)
                .or_default()
                .push(exercicio);
        }

        for treino in &mut treinos {
            if let Some(lista) = por_treino.remove(&treino.id) {
                treino.exercicios = lista;
            }
        }

        Ok(treinos)
    }

    pub async fn create(
        &self,
        aluno_id: Uuid,
        personal_id: Option<Uuid>,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<TreinoDetalhe, AppError> {
        self.usuarios
            .find_by_id(aluno_id)
            .await?
            .ok_or(AppError::UsuarioNotFound)?;

        if let Some(personal) = personal_id {
            self.validar_personal(personal).await?;
        }

        let treino = self
            .repo
            .create(aluno_id, personal_id, nome, descricao)
            .await?;

        tracing::info!("Treino '{}' criado para '{}'", treino.nome, treino.aluno_nome);
        Ok(treino)
    }

    pub async fn get(&self, id: Uuid) -> Result<TreinoDetalhe, AppError> {
        let treino = self
            .repo
            .find_detalhe(id)
            .await?
            .ok_or(AppError::TreinoNotFound)?;

        let mut com_exercicios = self.anexar_exercicios(vec![treino]).await?;
        Ok(com_exercicios.remove(0))
    }

    pub async fn list(
        &self,
        aluno_id: Option<Uuid>,
        personal_id: Option<Uuid>,
    ) -> Result<Vec<TreinoDetalhe>, AppError> {
        let treinos = self.repo.list(aluno_id, personal_id).await?;
        self.anexar_exercicios(treinos).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        aluno_id: Option<Uuid>,
        personal_id: Option<Option<Uuid>>,
        nome: Option<&str>,
        descricao: Option<Option<&str>>,
    ) -> Result<TreinoDetalhe, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::TreinoNotFound)?;

        if let Some(aluno) = aluno_id {
            self.usuarios
                .find_by_id(aluno)
                .await?
                .ok_or(AppError::UsuarioNotFound)?;
        }
        // `Some(None)` limpa o vínculo com o personal, sem nada a validar.
        if let Some(Some(personal)) = personal_id {
            self.validar_personal(personal).await?;
        }

        let treino = self
            .repo
            .update(id, aluno_id, personal_id, nome, descricao)
            .await?
            .ok_or(AppError::TreinoNotFound)?;

        let mut com_exercicios = self.anexar_exercicios(vec![treino]).await?;
        Ok(com_exercicios.remove(0))
    }

    /// Deleção com cascata explícita na ordem de `CASCATA_TREINO`, na
    /// mesma transação. Id inexistente desfaz a transação inteira.
    pub async fn delete(&self, pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;

        let mut removidos = 0;
        for passo in CASCATA_TREINO {
            match passo {
                PassoCascataTreino::Exercicios => {
                    self.exercicios.delete_by_treino(&mut *tx, id).await?;
                }
                PassoCascataTreino::Treino => {
                    removidos = self.repo.delete(&mut *tx, id).await?;
                }
            }
        }

        if removidos == 0 {
            tx.rollback().await?;
            return Err(AppError::TreinoNotFound);
        }

        tx.commit().await?;
        tracing::info!("Treino {} removido com seus exercícios", id);
        Ok(())
    }

    // --- Exercícios ---

    pub async fn create_exercicio(
        &self,
        treino_id: Uuid,
        nome: &str,
        series: i32,
        repeticoes: i32,
        carga_kg: Option<Decimal>,
    ) -> Result<Exercicio, AppError> {
        self.repo
            .find_by_id(treino_id)
            .await?
            .ok_or(AppError::TreinoNotFound)?;

        self.exercicios
            .create(treino_id, nome, series, repeticoes, carga_kg)
            .await
    }

    pub async fn get_exercicio(&self, id: Uuid) -> Result<Exercicio, AppError> {
        self.exercicios
            .find_by_id(id)
            .await?
            .ok_or(AppError::ExercicioNotFound)
    }

    pub async fn list_exercicios(
        &self,
        treino_id: Option<Uuid>,
    ) -> Result<Vec<Exercicio>, AppError> {
        self.exercicios.list(treino_id).await
    }

    pub async fn update_exercicio(
        &self,
        id: Uuid,
        nome: Option<&str>,
        series: Option<i32>,
        repeticoes: Option<i32>,
        carga_kg: Option<Option<Decimal>>,
    ) -> Result<Exercicio, AppError> {
        self.exercicios
            .update(id, nome, series, repeticoes, carga_kg)
            .await?
            .ok_or(AppError::ExercicioNotFound)
    }

    pub async fn delete_exercicio(&self, id: Uuid) -> Result<(), AppError> {
        let removidos = self.exercicios.delete(id).await?;
        if removidos == 0 {
            return Err(AppError::ExercicioNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascata_remove_exercicios_antes_do_treino() {
        assert_eq!(
            CASCATA_TREINO,
            [PassoCascataTreino::Exercicios, PassoCascataTreino::Treino]
        );
        assert_eq!(CASCATA_TREINO.last(), Some(&PassoCascataTreino::Treino));
    }
}
