use rust_decimal::{Decimal, RoundingStrategy};

/// Formata um valor no padrão monetário brasileiro: "R$ 1.234,56".
/// Equivalente ao `Intl.NumberFormat('pt-BR', { currency: 'BRL' })` usado
/// pelos relatórios.
pub fn formatar_brl(valor: Decimal) -> String {
    let arredondado = valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negativo = arredondado.is_sign_negative();
    let texto = arredondado.abs().to_string();

    let (inteiro, fracao) = match texto.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (texto, "00".to_string()),
    };

    // Agrupa os milhares com ponto, da direita para a esquerda.
    let mut agrupado = String::new();
    for (i, c) in inteiro.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }
    let inteiro: String = agrupado.chars().rev().collect();

    if negativo {
        format!("-R$ {},{}", inteiro, fracao)
    } else {
        format!("R$ {},{}", inteiro, fracao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn valor_inteiro_ganha_centavos() {
        assert_eq!(formatar_brl(dec("15")), "R$ 15,00");
    }

    #[test]
    fn casa_decimal_unica_e_completada() {
        assert_eq!(formatar_brl(dec("1234.5")), "R$ 1.234,50");
    }

    #[test]
    fn milhares_agrupados_com_ponto() {
        assert_eq!(formatar_brl(dec("1000000")), "R$ 1.000.000,00");
        assert_eq!(formatar_brl(dec("987654.32")), "R$ 987.654,32");
    }

    #[test]
    fn arredonda_para_duas_casas() {
        assert_eq!(formatar_brl(dec("0.005")), "R$ 0,01");
        assert_eq!(formatar_brl(dec("19.999")), "R$ 20,00");
    }

    #[test]
    fn valor_negativo() {
        assert_eq!(formatar_brl(dec("-1234.56")), "-R$ 1.234,56");
    }

    #[test]
    fn media_do_relatorio_de_compras() {
        // Compras com preços 10 e 20 têm média 15.
        let media = (dec("10") + dec("20")) / dec("2");
        assert_eq!(formatar_brl(media), "R$ 15,00");
    }
}
