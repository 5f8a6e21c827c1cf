pub mod usuario_repo;
pub use usuario_repo::UsuarioRepository;
pub mod mensalidade_repo;
pub use mensalidade_repo::MensalidadeRepository;
pub mod treino_repo;
pub use treino_repo::TreinoRepository;
pub mod exercicio_repo;
pub use exercicio_repo::ExercicioRepository;
pub mod checkin_repo;
pub use checkin_repo::CheckinRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
