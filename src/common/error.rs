use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::warehouse::HierarchyLevel;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// É `Clone` porque o stepper guarda o último erro de cada passo.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    // O provedor não conseguiu devolver os filhos de um código pai
    #[error("Falha ao carregar {level} de '{parent_code}': {reason}")]
    LookupFailure {
        level: HierarchyLevel,
        parent_code: String,
        reason: String,
    },

    #[error("Consulta de {level} para '{parent_code}' excedeu {timeout_ms}ms")]
    LookupTimeout {
        level: HierarchyLevel,
        parent_code: String,
        timeout_ms: u64,
    },

    #[error("Seleção fora de ordem: selecione o nível anterior a {level} primeiro")]
    SelectionOutOfOrder { level: HierarchyLevel },

    #[error("{level} '{code}' pertence a '{actual_parent}', mas o pai selecionado é '{expected_parent}'")]
    ParentMismatch {
        level: HierarchyLevel,
        code: String,
        expected_parent: String,
        actual_parent: String,
    },

    // Dataset com pais inexistentes ou códigos duplicados
    #[error("Hierarquia inconsistente: {0}")]
    IntegrityViolation(String),
}

impl AppError {
    /// Falhas de consulta podem ser repetidas pelo usuário.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, AppError::LookupFailure { .. } | AppError::LookupTimeout { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::LookupFailure { .. } => StatusCode::BAD_GATEWAY,
            AppError::LookupTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::SelectionOutOfOrder { .. } | AppError::ParentMismatch { .. } => StatusCode::CONFLICT,
            AppError::IntegrityViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
        if status.is_server_error() {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
