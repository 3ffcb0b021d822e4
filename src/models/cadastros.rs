use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Papel de um cadastro: a mesma tabela guarda clientes e fornecedores.
/// O papel é fixado na criação e conferido nas buscas por CPF/CNPJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_cadastro", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoCadastro {
    Cliente,
    Fornecedor,
}

impl std::fmt::Display for TipoCadastro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipoCadastro::Cliente => write!(f, "CLIENTE"),
            TipoCadastro::Fornecedor => write!(f, "FORNECEDOR"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteFornecedor {
    pub id: i32,
    pub tipo_cadastro: TipoCadastro,
    #[serde(rename = "cpfCNPJ")]
    pub cpf_cnpj: String,
    pub razao_social: String,
    pub nome_fantasia: String,
    pub endereco: String,
    pub numero: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,
    #[serde(rename = "rgIE")]
    pub rg_ie: String,
    pub email: String,
    pub contato: String,
}

/// Corpo de criação e de atualização (substituição integral do registro).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CadastroPayload {
    pub tipo_cadastro: TipoCadastro,

    #[serde(rename = "cpfCNPJ")]
    #[validate(length(min = 1, message = "O CPF/CNPJ é obrigatório."))]
    pub cpf_cnpj: String,

    #[validate(length(min = 1, message = "A razão social é obrigatória."))]
    pub razao_social: String,

    pub nome_fantasia: String,
    pub endereco: String,
    pub numero: String,
    pub bairro: String,
    pub cep: String,
    pub cidade: String,

    #[serde(rename = "rgIE")]
    pub rg_ie: String,

    #[validate(email(message = "E-mail inválido."))]
    pub email: String,

    pub contato: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    fn payload_json() -> serde_json::Value {
        json!({
            "tipoCadastro": "FORNECEDOR",
            "cpfCNPJ": "12.345.678/0001-90",
            "razaoSocial": "Distribuidora Alfa LTDA",
            "nomeFantasia": "Alfa",
            "endereco": "Rua das Laranjeiras",
            "numero": "100",
            "bairro": "Centro",
            "cep": "01000-000",
            "cidade": "São Paulo",
            "rgIE": "110.042.490.114",
            "email": "contato@alfa.com.br",
            "contato": "(11) 99999-0000"
        })
    }

    #[test]
    fn payload_usa_os_nomes_de_campo_da_api() {
        let payload: CadastroPayload = serde_json::from_value(payload_json()).unwrap();
        assert_eq!(payload.tipo_cadastro, TipoCadastro::Fornecedor);
        assert_eq!(payload.cpf_cnpj, "12.345.678/0001-90");
        assert_eq!(payload.rg_ie, "110.042.490.114");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn registro_serializa_com_nomes_camel_case() {
        let registro = ClienteFornecedor {
            id: 1,
            tipo_cadastro: TipoCadastro::Cliente,
            cpf_cnpj: "123.456.789-00".into(),
            razao_social: "Mercado Beta".into(),
            nome_fantasia: "Beta".into(),
            endereco: "Av. Brasil".into(),
            numero: "200".into(),
            bairro: "Jardim".into(),
            cep: "02000-000".into(),
            cidade: "Campinas".into(),
            rg_ie: "isento".into(),
            email: "beta@beta.com".into(),
            contato: "(19) 98888-0000".into(),
        };
        let valor = serde_json::to_value(&registro).unwrap();
        assert_eq!(valor["tipoCadastro"], "CLIENTE");
        assert_eq!(valor["cpfCNPJ"], "123.456.789-00");
        assert_eq!(valor["razaoSocial"], "Mercado Beta");
        assert_eq!(valor["rgIE"], "isento");
    }

    #[test]
    fn email_invalido_reprova_na_validacao() {
        let mut corpo = payload_json();
        corpo["email"] = json!("nao-e-email");
        let payload: CadastroPayload = serde_json::from_value(corpo).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn tipo_cadastro_exibe_o_rotulo_da_api() {
        assert_eq!(TipoCadastro::Cliente.to_string(), "CLIENTE");
        assert_eq!(TipoCadastro::Fornecedor.to_string(), "FORNECEDOR");
    }
}
