// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        CheckinRepository, DashboardRepository, ExercicioRepository, MensalidadeRepository,
        TreinoRepository, UsuarioRepository,
    },
    services::{DashboardService, MensalidadeService, TreinoService, UsuarioService},
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub usuario_service: UsuarioService,
    pub mensalidade_service: MensalidadeService,
    pub treino_service: TreinoService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let usuario_repo = UsuarioRepository::new(db_pool.clone());
        let mensalidade_repo = MensalidadeRepository::new(db_pool.clone());
        let treino_repo = TreinoRepository::new(db_pool.clone());
        let exercicio_repo = ExercicioRepository::new(db_pool.clone());
        let checkin_repo = CheckinRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let usuario_service = UsuarioService::new(
            usuario_repo.clone(),
            mensalidade_repo.clone(),
            treino_repo.clone(),
            exercicio_repo.clone(),
            checkin_repo.clone(),
        );
        let mensalidade_service =
            MensalidadeService::new(mensalidade_repo, usuario_repo.clone(), checkin_repo);
        let treino_service = TreinoService::new(treino_repo, exercicio_repo, usuario_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);

        Ok(Self {
            db_pool,
            usuario_service,
            mensalidade_service,
            treino_service,
            dashboard_service,
        })
    }
}
