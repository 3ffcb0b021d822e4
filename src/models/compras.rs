use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Linha da listagem de compras, com produto e fornecedor já resolvidos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompraResumo {
    pub id: i32,
    pub cod_produto: String,
    pub nome: String,
    pub quantidade: i32,
    pub preco: Decimal,
    pub total: Decimal,
    pub nf_entrada: i64,
    #[serde(rename = "cpfCNPJ")]
    pub cpf_cnpj: String,
    pub razao_social: String,
    pub lote: Option<i32>,
}

/// Um item da nota: produto, quantidade e preço unitário.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemCompra {
    pub cod_produto: String,
    pub quantidade: i32,
    pub preco: Decimal,
}

/// Corpo de criação e de atualização de compra: os itens da nota fiscal
/// mais o fornecedor e o número da NF de entrada.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompraPayload {
    pub produtos: Vec<ItemCompra>,
    pub fornecedor: i32,
    pub nf_entrada: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_aceita_o_corpo_da_api() {
        let payload: CompraPayload = serde_json::from_value(json!({
            "produtos": [
                { "codProduto": "7891000", "quantidade": 10, "preco": 4.5 },
                { "codProduto": "7892000", "quantidade": 2, "preco": 12.0 }
            ],
            "fornecedor": 3,
            "nfEntrada": 123456
        }))
        .unwrap();
        assert_eq!(payload.produtos.len(), 2);
        assert_eq!(payload.produtos[0].cod_produto, "7891000");
        assert_eq!(payload.fornecedor, 3);
        assert_eq!(payload.nf_entrada, 123456);
    }

    #[test]
    fn resumo_serializa_com_nomes_camel_case() {
        let resumo = CompraResumo {
            id: 1,
            cod_produto: "7891000".into(),
            nome: "Leite Integral 1L".into(),
            quantidade: 10,
            preco: "4.50".parse().unwrap(),
            total: "45.00".parse().unwrap(),
            nf_entrada: 123456,
            cpf_cnpj: "12.345.678/0001-90".into(),
            razao_social: "Distribuidora Alfa LTDA".into(),
            lote: Some(1),
        };
        let valor = serde_json::to_value(&resumo).unwrap();
        assert_eq!(valor["nfEntrada"], 123456);
        assert_eq!(valor["cpfCNPJ"], "12.345.678/0001-90");
        assert_eq!(valor["razaoSocial"], "Distribuidora Alfa LTDA");
    }
}
