pub mod checkin;
pub mod dashboard;
pub mod mensalidade;
pub mod treino;
pub mod usuario;
