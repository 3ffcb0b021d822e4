use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::cadastros::{CadastroPayload, ClienteFornecedor, TipoCadastro},
};

// Repositório da tabela 'clientes_fornecedores'.
#[derive(Clone)]
pub struct CadastrosRepository {
    pool: PgPool,
}

impl CadastrosRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_por_tipo(
        &self,
        tipo: TipoCadastro,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<ClienteFornecedor>, AppError> {
        let registros = sqlx::query_as::<_, ClienteFornecedor>(
            "SELECT * FROM clientes_fornecedores WHERE tipo_cadastro = $1 LIMIT $2 OFFSET $3",
        )
        .bind(tipo)
        .bind(limite)
        .bind(deslocamento)
        .fetch_all(&self.pool)
        .await?;
        Ok(registros)
    }

    /// Busca o primeiro registro com o CPF/CNPJ informado, qualquer papel.
    pub async fn buscar_por_documento(
        &self,
        cpf_cnpj: &str,
    ) -> Result<Option<ClienteFornecedor>, AppError> {
        let registro = sqlx::query_as::<_, ClienteFornecedor>(
            "SELECT * FROM clientes_fornecedores WHERE cpf_cnpj = $1",
        )
        .bind(cpf_cnpj)
        .fetch_optional(&self.pool)
        .await?;
        Ok(registro)
    }

    /// O CPF/CNPJ não é único na tabela: a consulta devolve todos os
    /// registros do documento sob o papel pedido.
    pub async fn listar_por_documento_e_tipo(
        &self,
        cpf_cnpj: &str,
        tipo: TipoCadastro,
    ) -> Result<Vec<ClienteFornecedor>, AppError> {
        let registros = sqlx::query_as::<_, ClienteFornecedor>(
            "SELECT * FROM clientes_fornecedores WHERE tipo_cadastro = $1 AND cpf_cnpj = $2",
        )
        .bind(tipo)
        .bind(cpf_cnpj)
        .fetch_all(&self.pool)
        .await?;
        Ok(registros)
    }

    pub async fn existe_id(&self, id: i32) -> Result<bool, AppError> {
        let existe = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clientes_fornecedores WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(existe)
    }

    /// Recupera o papel do registro; a mensagem de exclusão o menciona.
    pub async fn tipo_por_id(&self, id: i32) -> Result<Option<TipoCadastro>, AppError> {
        let tipo = sqlx::query_scalar::<_, TipoCadastro>(
            "SELECT tipo_cadastro FROM clientes_fornecedores WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tipo)
    }

    pub async fn inserir(&self, dados: &CadastroPayload) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO clientes_fornecedores
                (tipo_cadastro, cpf_cnpj, razao_social, nome_fantasia, endereco,
                 numero, bairro, cep, cidade, rg_ie, email, contato)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(dados.tipo_cadastro)
        .bind(&dados.cpf_cnpj)
        .bind(&dados.razao_social)
        .bind(&dados.nome_fantasia)
        .bind(&dados.endereco)
        .bind(&dados.numero)
        .bind(&dados.bairro)
        .bind(&dados.cep)
        .bind(&dados.cidade)
        .bind(&dados.rg_ie)
        .bind(&dados.email)
        .bind(&dados.contato)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn atualizar(&self, id: i32, dados: &CadastroPayload) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE clientes_fornecedores
            SET tipo_cadastro = $2, cpf_cnpj = $3, razao_social = $4,
                nome_fantasia = $5, endereco = $6, numero = $7, bairro = $8,
                cep = $9, cidade = $10, rg_ie = $11, email = $12, contato = $13
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(dados.tipo_cadastro)
        .bind(&dados.cpf_cnpj)
        .bind(&dados.razao_social)
        .bind(&dados.nome_fantasia)
        .bind(&dados.endereco)
        .bind(&dados.numero)
        .bind(&dados.bairro)
        .bind(&dados.cep)
        .bind(&dados.cidade)
        .bind(&dados.rg_ie)
        .bind(&dados.email)
        .bind(&dados.contato)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn remover(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM clientes_fornecedores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
