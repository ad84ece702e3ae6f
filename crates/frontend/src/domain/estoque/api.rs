use contracts::domain::estoque::{EstoqueDetalhePedido, EstoqueItem, MovimentoEstoque};

use crate::shared::api_client::ApiClient;

pub async fn listar(client: &ApiClient) -> Result<Vec<EstoqueItem>, String> {
    client.get("/estoque").await
}

/// Pedidos em aberto que consomem o produto. O nome vai codificado no path.
pub async fn detalhes(
    client: &ApiClient,
    nome: &str,
) -> Result<Vec<EstoqueDetalhePedido>, String> {
    let path = format!("/estoque/{}/detalhes", urlencoding::encode(nome));
    client.get(&path).await
}

pub async fn entrada(client: &ApiClient, nome: &str, quantidade: i64) -> Result<(), String> {
    let movimento = MovimentoEstoque {
        nome: nome.to_string(),
        quantidade,
    };
    client.post_unit("/estoque/entrada", &movimento).await
}

pub async fn saida(client: &ApiClient, nome: &str, quantidade: i64) -> Result<(), String> {
    let movimento = MovimentoEstoque {
        nome: nome.to_string(),
        quantidade,
    };
    client.post_unit("/estoque/saida", &movimento).await
}
