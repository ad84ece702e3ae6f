//! Tipos trocados com a API REST de controle de saída.
//!
//! Todos os identificadores são emitidos pelo backend; o cliente nunca gera
//! um id. Os nomes de campo no fio seguem o contrato camelCase do servidor.

pub mod domain;
