// src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        // ============= USUÁRIOS =============
        .route(
            "/usuarios/",
            get(handlers::usuarios::list_usuarios).post(handlers::usuarios::create_usuario),
        )
        .route(
            "/usuarios/{id}/",
            get(handlers::usuarios::get_usuario)
                .patch(handlers::usuarios::update_usuario)
                .delete(handlers::usuarios::delete_usuario),
        )
        // ============= MENSALIDADES =============
        .route(
            "/mensalidades/",
            get(handlers::mensalidades::list_mensalidades)
                .post(handlers::mensalidades::create_mensalidade),
        )
        .route(
            "/mensalidades/{id}/",
            get(handlers::mensalidades::get_mensalidade)
                .patch(handlers::mensalidades::update_mensalidade)
                .delete(handlers::mensalidades::delete_mensalidade),
        )
        // ============= TREINOS =============
        .route(
            "/treinos/",
            get(handlers::treinos::list_treinos).post(handlers::treinos::create_treino),
        )
        .route(
            "/treinos/{id}/",
            get(handlers::treinos::get_treino)
                .patch(handlers::treinos::update_treino)
                .delete(handlers::treinos::delete_treino),
        )
        // ============= EXERCÍCIOS =============
        .route(
            "/exercicios/",
            get(handlers::exercicios::list_exercicios)
                .post(handlers::exercicios::create_exercicio),
        )
        .route(
            "/exercicios/{id}/",
            get(handlers::exercicios::get_exercicio)
                .patch(handlers::exercicios::update_exercicio)
                .delete(handlers::exercicios::delete_exercicio),
        )
        // ============= CONSULTAS DERIVADAS =============
        .route(
            "/personal/{id}/alunos/",
            get(handlers::personal::alunos_do_personal),
        )
        .route("/personal/mais-popular/", get(handlers::personal::mais_popular))
        .route(
            "/aluno/{id}/status-mensalidade/",
            get(handlers::aluno::status_mensalidade),
        )
        .route("/aluno/{id}/checkin/", post(handlers::aluno::checkin))
        .route("/dashboard/stats/", get(handlers::dashboard::stats))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
