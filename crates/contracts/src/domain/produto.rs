use serde::{Deserialize, Serialize};

/// Item de produto de um pedido. Pertence a exatamente um [`Pedido`]
/// (`pedido_id`); linhas com o mesmo nome são permitidas e exibidas em
/// separado.
///
/// [`Pedido`]: crate::domain::pedido::Pedido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub pedido_id: Option<String>,

    pub nome: String,

    pub quantidade: i64,

    #[serde(rename = "dataCriacao", default, skip_serializing_if = "Option::is_none")]
    pub data_criacao: Option<String>,
}

/// Corpo de `POST /pedidos/:id/produtos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovoProduto {
    pub nome: String,
    pub quantidade: i64,
}
