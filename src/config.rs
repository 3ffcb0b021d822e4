// src/config.rs

use crate::db::{
    CadastrosRepository, ComprasRepository, EstoqueRepository, ProdutosRepository,
    VendasRepository,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

// O estado compartilhado da aplicação: a pool e um repositório por tabela.
// Cada handler recebe o estado explicitamente; não há conexão global.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub cadastros: CadastrosRepository,
    pub produtos: ProdutosRepository,
    pub estoque: EstoqueRepository,
    pub compras: ComprasRepository,
    pub vendas: VendasRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self {
            cadastros: CadastrosRepository::new(db_pool.clone()),
            produtos: ProdutosRepository::new(db_pool.clone()),
            estoque: EstoqueRepository::new(db_pool.clone()),
            compras: ComprasRepository::new(db_pool.clone()),
            vendas: VendasRepository::new(db_pool.clone()),
            db_pool,
        })
    }
}
