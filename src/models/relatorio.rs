use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Agregado bruto calculado pelo banco para um produto:
/// média de preço, soma das quantidades e soma dos totais.
#[derive(Debug, Clone, FromRow)]
pub struct AgregadoProduto {
    pub nome: String,
    pub media: Decimal,
    pub quantidade: i64,
    pub total: Decimal,
}

/// Resposta dos relatórios de compras e de vendas por produto.
/// Os valores monetários saem formatados em reais.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relatorio {
    pub produto_cod: String,
    pub nome_p: String,
    pub media_formatado: String,
    pub quantidade: i64,
    pub total_formatado: String,
}

impl Relatorio {
    pub fn montar(cod_produto: String, agregado: AgregadoProduto) -> Self {
        Self {
            produto_cod: cod_produto,
            nome_p: agregado.nome,
            media_formatado: crate::common::moeda::formatar_brl(agregado.media),
            quantidade: agregado.quantidade,
            total_formatado: crate::common::moeda::formatar_brl(agregado.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relatorio_formata_os_valores_em_reais() {
        // Compras {preco: 10, 20; quantidade: 2, 3}: média 15, soma 5,
        // total 10*2 + 20*3 = 80.
        let agregado = AgregadoProduto {
            nome: "Leite Integral 1L".into(),
            media: "15".parse().unwrap(),
            quantidade: 5,
            total: "80".parse().unwrap(),
        };
        let relatorio = Relatorio::montar("7891000".into(), agregado);
        assert_eq!(relatorio.media_formatado, "R$ 15,00");
        assert_eq!(relatorio.quantidade, 5);
        assert_eq!(relatorio.total_formatado, "R$ 80,00");

        let valor = serde_json::to_value(&relatorio).unwrap();
        assert_eq!(valor["produtoCod"], "7891000");
        assert_eq!(valor["nomeP"], "Leite Integral 1L");
        assert_eq!(valor["mediaFormatado"], "R$ 15,00");
        assert_eq!(valor["totalFormatado"], "R$ 80,00");
    }
}
