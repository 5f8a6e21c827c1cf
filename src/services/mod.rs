pub mod dashboard_service;
pub mod mensalidade_service;
pub mod treino_service;
pub mod usuario_service;

pub use dashboard_service::DashboardService;
pub use mensalidade_service::MensalidadeService;
pub use treino_service::TreinoService;
pub use usuario_service::UsuarioService;
