pub mod aluno;
pub mod dashboard;
pub mod exercicios;
pub mod mensalidades;
pub mod personal;
pub mod treinos;
pub mod usuarios;
