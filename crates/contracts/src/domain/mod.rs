pub mod estoque;
pub mod pedido;
pub mod produto;
pub mod relatorio;
