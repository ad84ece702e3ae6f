use contracts::domain::produto::{NovoProduto, Produto};

use crate::shared::api_client::ApiClient;

pub async fn buscar(client: &ApiClient, pedido_id: &str) -> Result<Vec<Produto>, String> {
    client.get(&format!("/pedidos/{}/produtos", pedido_id)).await
}

pub async fn adicionar(
    client: &ApiClient,
    pedido_id: &str,
    produto: &NovoProduto,
) -> Result<Produto, String> {
    client
        .post(&format!("/pedidos/{}/produtos", pedido_id), produto)
        .await
}

pub async fn remover(client: &ApiClient, pedido_id: &str, produto_id: &str) -> Result<(), String> {
    client
        .delete(&format!("/pedidos/{}/produtos/{}", pedido_id, produto_id))
        .await
}
