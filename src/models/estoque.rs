use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Linha da listagem geral de estoque: saldo do produto acompanhado do lote
/// de cada compra (uma linha por lote, ordenadas por lote).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstoqueItem {
    pub id: i32,
    pub cod_produto: String,
    pub nome: String,
    pub quantidade: i32,
    pub cod_ean: String,
    pub cod_dun: String,
    pub lote: Option<i32>,
}

/// Linha da consulta por produto, com data e horário de entrada já
/// formatados pelo banco (DD/MM/YYYY e HH24:MI:SS).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstoqueProdutoItem {
    pub id: i32,
    pub cod_produto: String,
    pub nome: String,
    pub quantidade: i32,
    pub cod_ean: String,
    pub cod_dun: String,
    pub lote: Option<i32>,
    pub data_entrada: String,
    pub horario_entrada: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consulta_por_produto_separa_data_e_horario() {
        let item = EstoqueProdutoItem {
            id: 1,
            cod_produto: "7891000".into(),
            nome: "Leite Integral 1L".into(),
            quantidade: 40,
            cod_ean: "7891000100103".into(),
            cod_dun: "17891000100100".into(),
            lote: Some(2),
            data_entrada: "05/03/2025".into(),
            horario_entrada: "14:30:00".into(),
        };
        let valor = serde_json::to_value(&item).unwrap();
        assert_eq!(valor["dataEntrada"], "05/03/2025");
        assert_eq!(valor["horarioEntrada"], "14:30:00");
        assert_eq!(valor["lote"], 2);
    }
}
