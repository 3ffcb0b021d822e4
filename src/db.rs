pub mod cadastros_repo;
pub use cadastros_repo::CadastrosRepository;
pub mod produtos_repo;
pub use produtos_repo::ProdutosRepository;
pub mod estoque_repo;
pub use estoque_repo::EstoqueRepository;
pub mod compras_repo;
pub use compras_repo::ComprasRepository;
pub mod vendas_repo;
pub use vendas_repo::VendasRepository;
