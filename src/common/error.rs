use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens são exatamente o texto devolvido ao usuário final.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Nenhum registro encontrado!")]
    RegistroNaoEncontrado,

    #[error("CPF/CNPJ não corresponde a um cliente!")]
    NaoEhCliente,

    #[error("CPF/CNPJ não corresponde a um fornecedor!")]
    NaoEhFornecedor,

    #[error("Produto não encontrado!")]
    ProdutoNaoEncontrado,

    // Variante usada nos itens de compra, onde a mensagem cita o código.
    #[error("Produto {0} não encontrado!")]
    ProdutoDesconhecido(String),

    #[error("Fornecedor {0} não encontrado!")]
    FornecedorNaoEncontrado(i32),

    #[error("Cliente não encontrado!")]
    ClienteNaoEncontrado,

    #[error("Nota Fiscal {0} já foi inserida no sistema!")]
    NotaFiscalDuplicada(i64),

    #[error("Quantidade do produto {0} deve ser maior que zero!")]
    QuantidadeInvalida(String),

    #[error("Preço do produto {0} deve ser maior que zero!")]
    PrecoInvalido(String),

    #[error("Por favor, inserir uma quantidade para esta venda!")]
    QuantidadeVendaInvalida,

    #[error("Por favor, inserir um valor para esta venda!")]
    PrecoVendaInvalido,

    #[error("Estoque insuficiente para a venda!")]
    EstoqueInsuficiente,

    #[error("Compra não encontrada!")]
    CompraNaoEncontrada,

    #[error("Venda não encontrada!")]
    VendaNaoEncontrada,

    #[error("Não existe compra deste produto!")]
    SemComprasDoProduto,

    #[error("Não existe venda deste produto!")]
    SemVendasDoProduto,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::RegistroNaoEncontrado
            | AppError::NaoEhCliente
            | AppError::NaoEhFornecedor
            | AppError::ProdutoNaoEncontrado
            | AppError::ProdutoDesconhecido(_)
            | AppError::FornecedorNaoEncontrado(_)
            | AppError::CompraNaoEncontrada
            | AppError::VendaNaoEncontrada
            | AppError::SemComprasDoProduto
            | AppError::SemVendasDoProduto => (StatusCode::NOT_FOUND, self.to_string()),

            AppError::ClienteNaoEncontrado
            | AppError::NotaFiscalDuplicada(_)
            | AppError::QuantidadeInvalida(_)
            | AppError::PrecoInvalido(_)
            | AppError::QuantidadeVendaInvalida
            | AppError::PrecoVendaInvalido
            | AppError::EstoqueInsuficiente => (StatusCode::BAD_REQUEST, self.to_string()),

            // Erros de infraestrutura viram 500 com corpo genérico.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nao_encontrado_vira_404() {
        assert_eq!(
            AppError::RegistroNaoEncontrado.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ProdutoDesconhecido("P01".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::SemVendasDoProduto.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn regra_de_negocio_vira_400() {
        assert_eq!(
            AppError::NotaFiscalDuplicada(1234).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EstoqueInsuficiente.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        // O cadastro de cliente ausente numa venda responde 400, não 404.
        assert_eq!(
            AppError::ClienteNaoEncontrado.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn mensagens_interpolam_o_contexto() {
        assert_eq!(
            AppError::NotaFiscalDuplicada(4321).to_string(),
            "Nota Fiscal 4321 já foi inserida no sistema!"
        );
        assert_eq!(
            AppError::QuantidadeInvalida("ABC123".into()).to_string(),
            "Quantidade do produto ABC123 deve ser maior que zero!"
        );
        assert_eq!(
            AppError::FornecedorNaoEncontrado(7).to_string(),
            "Fornecedor 7 não encontrado!"
        );
    }

    #[test]
    fn erro_interno_vira_500() {
        let err = AppError::InternalServerError(anyhow::anyhow!("falha qualquer"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
