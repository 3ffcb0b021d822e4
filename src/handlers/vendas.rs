// src/handlers/vendas.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{
    common::{error::AppError, pagination::Paginacao},
    config::AppState,
    models::{
        relatorio::Relatorio,
        vendas::{VendaPayload, VendaResumo},
    },
};

// Conferências comuns ao insert e ao update de venda, na ordem em que as
// mensagens devem prevalecer: produto, estoque, quantidade, preço, cliente.
// Devolve o código interno resolvido a partir do EAN.
async fn validar_venda(app_state: &AppState, payload: &VendaPayload) -> Result<String, AppError> {
    let cod_produto = app_state
        .produtos
        .buscar_codigo_por_ean(&payload.cod_ean)
        .await?
        .ok_or(AppError::ProdutoNaoEncontrado)?;

    match app_state.estoque.quantidade_disponivel(&cod_produto).await? {
        None => return Err(AppError::EstoqueInsuficiente),
        Some(saldo) if saldo <= 0 => return Err(AppError::EstoqueInsuficiente),
        Some(saldo) if saldo < payload.quantidade => return Err(AppError::EstoqueInsuficiente),
        Some(_) => {}
    }

    if payload.quantidade <= 0 {
        return Err(AppError::QuantidadeVendaInvalida);
    }
    if payload.preco <= Decimal::ZERO {
        return Err(AppError::PrecoVendaInvalido);
    }

    if !app_state.cadastros.existe_id(payload.cliente).await? {
        return Err(AppError::ClienteNaoEncontrado);
    }

    Ok(cod_produto)
}

// GET /vendas/get
#[utoipa::path(
    get,
    path = "/vendas/get",
    tag = "Vendas",
    params(Paginacao),
    responses(
        (status = 200, description = "Vendas por ordem de saída", body = [VendaResumo])
    )
)]
pub async fn get_vendas(
    State(app_state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    let vendas = app_state
        .vendas
        .listar(paginacao.limite(), paginacao.deslocamento())
        .await?;

    Ok((StatusCode::OK, Json(vendas)))
}

// POST /vendas/post
// A baixa do estoque é efeito do banco; o handler só grava a venda, e a
// gravação é condicionada ao saldo para não vender além do disponível.
#[utoipa::path(
    post,
    path = "/vendas/post",
    tag = "Vendas",
    request_body = VendaPayload,
    responses(
        (status = 201, description = "Venda registrada"),
        (status = 400, description = "Estoque insuficiente, valores inválidos ou cliente não encontrado"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn post_vendas(
    State(app_state): State<AppState>,
    Json(payload): Json<VendaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let cod_produto = validar_venda(&app_state, &payload).await?;

    let gravadas = app_state
        .vendas
        .inserir_condicional(
            &cod_produto,
            payload.quantidade,
            payload.preco,
            payload.cliente,
        )
        .await?;

    if gravadas == 0 {
        return Err(AppError::EstoqueInsuficiente);
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Venda registrada com sucesso!" })),
    ))
}

// PUT /vendas/put/{id}
#[utoipa::path(
    put,
    path = "/vendas/put/{id}",
    tag = "Vendas",
    params(("id" = i32, Path, description = "Id da venda")),
    request_body = VendaPayload,
    responses(
        (status = 201, description = "Venda atualizada"),
        (status = 400, description = "Estoque insuficiente, valores inválidos ou cliente não encontrado"),
        (status = 404, description = "Venda ou produto não encontrado")
    )
)]
pub async fn put_vendas(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VendaPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.vendas.existe_id(id).await? {
        return Err(AppError::VendaNaoEncontrada);
    }

    let cod_produto = validar_venda(&app_state, &payload).await?;

    let gravadas = app_state
        .vendas
        .atualizar_condicional(
            id,
            &cod_produto,
            payload.quantidade,
            payload.preco,
            payload.cliente,
        )
        .await?;

    if gravadas == 0 {
        return Err(AppError::EstoqueInsuficiente);
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Venda atualizada com sucesso!" })),
    ))
}

// DELETE /vendas/delete/{id}
// Diferente das compras, a exclusão de venda não renumera lotes.
#[utoipa::path(
    delete,
    path = "/vendas/delete/{id}",
    tag = "Vendas",
    params(("id" = i32, Path, description = "Id da venda")),
    responses(
        (status = 201, description = "Venda removida"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn delete_vendas(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.vendas.existe_id(id).await? {
        return Err(AppError::VendaNaoEncontrada);
    }

    app_state.vendas.remover(id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Venda deletada com sucesso!" })),
    ))
}

// GET /vendas/relatorio/{codProduto}
// Antes de qualquer coisa, precisa existir ao menos uma venda do produto.
#[utoipa::path(
    get,
    path = "/vendas/relatorio/{codProduto}",
    tag = "Vendas",
    params(("codProduto" = String, Path, description = "Código do produto")),
    responses(
        (status = 200, description = "Média de preço, quantidade e total vendidos", body = Relatorio),
        (status = 404, description = "Produto sem cadastro ou sem vendas")
    )
)]
pub async fn get_vendas_relatorio(
    State(app_state): State<AppState>,
    Path(cod_produto): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.vendas.existe_para_produto(&cod_produto).await? {
        return Err(AppError::SemVendasDoProduto);
    }

    if !app_state.produtos.codigo_existe(&cod_produto).await? {
        return Err(AppError::ProdutoNaoEncontrado);
    }

    let agregado = app_state
        .vendas
        .agregar_por_produto(&cod_produto)
        .await?
        .ok_or(AppError::SemVendasDoProduto)?;

    Ok((
        StatusCode::OK,
        Json(Relatorio::montar(cod_produto, agregado)),
    ))
}
