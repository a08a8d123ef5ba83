//! Navegador da hierarquia de localizações do armazém:
//! Zona → Seção → Prateleira → Unidade de Armazenamento.
//!
//! - [`db`]: origem dos dados (`HierarchySource`), repositório em memória e
//!   o decorador de timeout.
//! - [`services::stepper`]: a máquina de estados da seleção em quatro passos.
//! - [`handlers`]: API HTTP somente leitura sobre as mesmas consultas.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;
