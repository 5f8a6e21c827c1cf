// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Usuários ---
        handlers::usuarios::list_usuarios,
        handlers::usuarios::create_usuario,
        handlers::usuarios::get_usuario,
        handlers::usuarios::update_usuario,
        handlers::usuarios::delete_usuario,

        // --- Mensalidades ---
        handlers::mensalidades::list_mensalidades,
        handlers::mensalidades::create_mensalidade,
        handlers::mensalidades::get_mensalidade,
        handlers::mensalidades::update_mensalidade,
        handlers::mensalidades::delete_mensalidade,

        // --- Treinos ---
        handlers::treinos::list_treinos,
        handlers::treinos::create_treino,
        handlers::treinos::get_treino,
        handlers::treinos::update_treino,
        handlers::treinos::delete_treino,

        // --- Exercícios ---
        handlers::exercicios::list_exercicios,
        handlers::exercicios::create_exercicio,
        handlers::exercicios::get_exercicio,
        handlers::exercicios::update_exercicio,
        handlers::exercicios::delete_exercicio,

        // --- Alunos ---
        handlers::aluno::status_mensalidade,
        handlers::aluno::checkin,

        // --- Personals ---
        handlers::personal::alunos_do_personal,
        handlers::personal::mais_popular,

        // --- Dashboard ---
        handlers::dashboard::stats,
    ),
    components(
        schemas(
            models::usuario::Usuario,
            models::usuario::Sexo,
            models::mensalidade::Mensalidade,
            models::mensalidade::StatusMensalidade,
            models::treino::Treino,
            models::treino::TreinoDetalhe,
            models::treino::Exercicio,
            models::checkin::Checkin,
            models::dashboard::DashboardStats,
            models::dashboard::PersonalPopular,
            handlers::usuarios::CreateUsuarioPayload,
            handlers::usuarios::UpdateUsuarioPayload,
            handlers::mensalidades::CreateMensalidadePayload,
            handlers::mensalidades::UpdateMensalidadePayload,
            handlers::treinos::CreateTreinoPayload,
            handlers::treinos::UpdateTreinoPayload,
            handlers::exercicios::CreateExercicioPayload,
            handlers::exercicios::UpdateExercicioPayload,
        )
    ),
    tags(
        (name = "Usuários", description = "Cadastro de alunos e personals"),
        (name = "Mensalidades", description = "Pagamentos e vigência"),
        (name = "Treinos", description = "Planos de treino"),
        (name = "Exercícios", description = "Exercícios dos treinos"),
        (name = "Alunos", description = "Status de mensalidade e check-in"),
        (name = "Personals", description = "Consultas centradas no personal"),
        (name = "Dashboard", description = "Estatísticas da academia"),
    ),
    info(
        title = "API da Academia",
        description = "Gestão de alunos, personals, mensalidades, treinos e check-ins.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
