use serde::Deserialize;
use utoipa::IntoParams;

const PAGINA_PADRAO: u32 = 1;
const TAMANHO_PADRAO: u32 = 3;

/// Parâmetros de paginação aceitos por todas as listagens.
/// Na ausência de `page`/`pageSize`, assume página 1 com 3 registros.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct Paginacao {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Paginacao {
    pub fn limite(&self) -> i64 {
        i64::from(self.page_size.unwrap_or(TAMANHO_PADRAO))
    }

    /// deslocamento = (page - 1) * pageSize; `page = 0` é tratado como 1.
    pub fn deslocamento(&self) -> i64 {
        let pagina = self.page.unwrap_or(PAGINA_PADRAO).max(1);
        i64::from(pagina - 1) * self.limite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padrao_e_pagina_um_com_tres_registros() {
        let p = Paginacao::default();
        assert_eq!(p.limite(), 3);
        assert_eq!(p.deslocamento(), 0);
    }

    #[test]
    fn deslocamento_segue_a_pagina() {
        let p = Paginacao {
            page: Some(4),
            page_size: Some(10),
        };
        assert_eq!(p.limite(), 10);
        assert_eq!(p.deslocamento(), 30);
    }

    #[test]
    fn pagina_zero_nao_gera_deslocamento_negativo() {
        let p = Paginacao {
            page: Some(0),
            page_size: None,
        };
        assert_eq!(p.deslocamento(), 0);
    }

    #[test]
    fn tamanho_customizado_com_pagina_padrao() {
        let p = Paginacao {
            page: None,
            page_size: Some(25),
        };
        assert_eq!(p.limite(), 25);
        assert_eq!(p.deslocamento(), 0);
    }
}
