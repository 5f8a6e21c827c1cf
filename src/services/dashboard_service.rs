// src/services/dashboard_service.rs

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{DashboardStats, PersonalPopular},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let hoje = Utc::now().date_naive();
        self.repo.stats(hoje).await
    }

    /// Sem nenhum personal cadastrado o ranking não existe: 404.
    pub async fn personal_mais_popular(&self) -> Result<PersonalPopular, AppError> {
        self.repo
            .personal_mais_popular()
            .await?
            .ok_or(AppError::PersonalNotFound)
    }
}
