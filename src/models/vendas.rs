use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Linha da listagem de vendas, com produto e cliente já resolvidos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendaResumo {
    pub id: i32,
    pub cod_produto: String,
    pub nome: String,
    pub quantidade: i32,
    pub preco: Decimal,
    pub total: Decimal,
    pub data_saida: DateTime<Utc>,
    pub razao_social: String,
}

/// Corpo de criação e de atualização de venda. O produto é identificado
/// pelo código EAN lido no caixa, não pelo código interno.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendaPayload {
    pub cod_ean: String,
    pub quantidade: i32,
    pub preco: Decimal,
    pub cliente: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_aceita_o_corpo_da_api() {
        let payload: VendaPayload = serde_json::from_value(json!({
            "codEan": "7891000100103",
            "quantidade": 2,
            "preco": 6.99,
            "cliente": 5
        }))
        .unwrap();
        assert_eq!(payload.cod_ean, "7891000100103");
        assert_eq!(payload.quantidade, 2);
        assert_eq!(payload.cliente, 5);
    }
}
