pub mod estoque;
pub mod pedidos;
pub mod produtos;
pub mod relatorio;
