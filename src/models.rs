pub mod cadastros;
pub mod compras;
pub mod estoque;
pub mod produtos;
pub mod relatorio;
pub mod vendas;
