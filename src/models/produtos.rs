use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: i32,
    pub cod_produto: String,
    pub nome: String,
    pub cod_ean: String,
    pub cod_dun: String,
}

/// Corpo de criação e de atualização de produto.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoPayload {
    #[validate(length(min = 1, message = "O código do produto é obrigatório."))]
    pub cod_produto: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    pub cod_ean: String,
    pub cod_dun: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn payload_aceita_o_corpo_da_api() {
        let payload: ProdutoPayload = serde_json::from_value(json!({
            "codProduto": "7891000",
            "nome": "Leite Integral 1L",
            "codEan": "7891000100103",
            "codDun": "17891000100100"
        }))
        .unwrap();
        assert_eq!(payload.cod_produto, "7891000");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn codigo_vazio_reprova_na_validacao() {
        let payload: ProdutoPayload = serde_json::from_value(json!({
            "codProduto": "",
            "nome": "Sem código",
            "codEan": "",
            "codDun": ""
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn produto_serializa_com_nomes_camel_case() {
        let produto = Produto {
            id: 9,
            cod_produto: "7891000".into(),
            nome: "Leite Integral 1L".into(),
            cod_ean: "7891000100103".into(),
            cod_dun: "17891000100100".into(),
        };
        let valor = serde_json::to_value(&produto).unwrap();
        assert_eq!(valor["codProduto"], "7891000");
        assert_eq!(valor["codEan"], "7891000100103");
        assert_eq!(valor["codDun"], "17891000100100");
    }
}
