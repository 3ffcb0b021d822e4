// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Cadastros ---
        handlers::cadastros::get_clientes,
        handlers::cadastros::get_cliente_por_documento,
        handlers::cadastros::get_fornecedores,
        handlers::cadastros::get_fornecedor_por_documento,
        handlers::cadastros::post_cadastro,
        handlers::cadastros::put_cadastro,
        handlers::cadastros::delete_cadastro,

        // --- Produtos ---
        handlers::produtos::get_produtos,
        handlers::produtos::get_produto_por_codigo,
        handlers::produtos::post_produto,
        handlers::produtos::put_produto,
        handlers::produtos::delete_produto,

        // --- Estoque ---
        handlers::estoque::get_estoque,
        handlers::estoque::get_estoque_por_produto,

        // --- Compras ---
        handlers::compras::get_compras,
        handlers::compras::post_compras,
        handlers::compras::put_compras,
        handlers::compras::delete_compras,
        handlers::compras::get_compras_relatorio,

        // --- Vendas ---
        handlers::vendas::get_vendas,
        handlers::vendas::post_vendas,
        handlers::vendas::put_vendas,
        handlers::vendas::delete_vendas,
        handlers::vendas::get_vendas_relatorio,
    ),
    components(
        schemas(
            // --- Cadastros ---
            models::cadastros::TipoCadastro,
            models::cadastros::ClienteFornecedor,
            models::cadastros::CadastroPayload,

            // --- Produtos ---
            models::produtos::Produto,
            models::produtos::ProdutoPayload,

            // --- Estoque ---
            models::estoque::EstoqueItem,
            models::estoque::EstoqueProdutoItem,

            // --- Compras ---
            models::compras::CompraResumo,
            models::compras::ItemCompra,
            models::compras::CompraPayload,

            // --- Vendas ---
            models::vendas::VendaResumo,
            models::vendas::VendaPayload,

            // --- Relatórios ---
            models::relatorio::Relatorio,
        )
    ),
    tags(
        (name = "Cadastros", description = "Clientes e Fornecedores"),
        (name = "Produtos", description = "Catálogo de Produtos"),
        (name = "Estoque", description = "Consulta de Saldo por Lote"),
        (name = "Compras", description = "Entradas de Nota Fiscal e Relatório"),
        (name = "Vendas", description = "Saídas de Venda e Relatório")
    )
)]
pub struct ApiDoc;
