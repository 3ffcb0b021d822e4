//src/main.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let cadastros_routes = Router::new()
        .route("/clientes/get", get(handlers::cadastros::get_clientes))
        .route(
            "/clientes/get/{cpfCNPJ}",
            get(handlers::cadastros::get_cliente_por_documento),
        )
        .route(
            "/fornecedores/get",
            get(handlers::cadastros::get_fornecedores),
        )
        .route(
            "/fornecedores/get/{cpfCNPJ}",
            get(handlers::cadastros::get_fornecedor_por_documento),
        )
        .route(
            "/clientesFornecedores/post",
            post(handlers::cadastros::post_cadastro),
        )
        .route(
            "/clientesFornecedores/put/{id}",
            put(handlers::cadastros::put_cadastro),
        )
        .route(
            "/clientesFornecedores/delete/{id}",
            delete(handlers::cadastros::delete_cadastro),
        );

    let produtos_routes = Router::new()
        .route("/produtos/get", get(handlers::produtos::get_produtos))
        .route(
            "/produtos/get/{codProduto}",
            get(handlers::produtos::get_produto_por_codigo),
        )
        .route("/produtos/post", post(handlers::produtos::post_produto))
        .route("/produtos/put/{id}", put(handlers::produtos::put_produto))
        .route(
            "/produtos/delete/{codProduto}",
            delete(handlers::produtos::delete_produto),
        );

    let estoque_routes = Router::new()
        .route("/estoque/get", get(handlers::estoque::get_estoque))
        .route(
            "/estoque/get/{codProduto}",
            get(handlers::estoque::get_estoque_por_produto),
        );

    let compras_routes = Router::new()
        .route("/compras/get", get(handlers::compras::get_compras))
        .route("/compras/post", post(handlers::compras::post_compras))
        .route("/compras/put/{id}", put(handlers::compras::put_compras))
        .route(
            "/compras/delete/{id}",
            delete(handlers::compras::delete_compras),
        )
        .route(
            "/compras/relatorio/{codProduto}",
            get(handlers::compras::get_compras_relatorio),
        );

    let vendas_routes = Router::new()
        .route("/vendas/get", get(handlers::vendas::get_vendas))
        .route("/vendas/post", post(handlers::vendas::post_vendas))
        .route("/vendas/put/{id}", put(handlers::vendas::put_vendas))
        .route(
            "/vendas/delete/{id}",
            delete(handlers::vendas::delete_vendas),
        )
        .route(
            "/vendas/relatorio/{codProduto}",
            get(handlers::vendas::get_vendas_relatorio),
        );

    // Combina tudo no router principal
    let app = Router::new()
        .merge(cadastros_routes)
        .merge(produtos_routes)
        .merge(estoque_routes)
        .merge(compras_routes)
        .merge(vendas_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
