use contracts::domain::pedido::{AtualizaStatus, PaginaPedidos, Pedido};

use crate::shared::api_client::{self, ApiClient};

/// Tamanho do lote ao varrer a paginação do backend.
pub const LOTE_BUSCA: usize = 90;

/// Busca todos os pedidos, percorrendo a paginação do backend em lotes
/// fixos até esgotar o total de páginas informado.
pub async fn buscar_todos(client: &ApiClient) -> Result<Vec<Pedido>, String> {
    let mut todos = Vec::new();
    let mut pagina = 1usize;
    loop {
        let resposta: PaginaPedidos = client
            .get(&format!("/pedidos?page={}&limit={}", pagina, LOTE_BUSCA))
            .await?;
        let total = resposta.total_pages;
        todos.extend(resposta.pedidos);
        match proxima_pagina(pagina, total) {
            Some(n) => pagina = n,
            None => break,
        }
    }
    Ok(todos)
}

/// Próxima página da varredura, ou `None` quando o total informado pelo
/// backend já foi coberto. Um total ausente (zero, pelo default do serde)
/// encerra a varredura na primeira página.
fn proxima_pagina(pagina: usize, total_pages: u32) -> Option<usize> {
    let total = (total_pages as usize).max(1);
    if pagina >= total {
        None
    } else {
        Some(pagina + 1)
    }
}

pub async fn criar(client: &ApiClient, pedido: &Pedido) -> Result<Pedido, String> {
    client.post("/pedidos", pedido).await
}

pub async fn atualizar(client: &ApiClient, id: &str, pedido: &Pedido) -> Result<Pedido, String> {
    client.put(&format!("/pedidos/{}", id), pedido).await
}

pub async fn excluir(client: &ApiClient, id: &str) -> Result<(), String> {
    client.delete(&format!("/pedidos/{}", id)).await
}

/// Define a data de saída (e opcionalmente uma observação) de um pedido.
/// O endpoint é público: a chamada não leva credenciais.
pub async fn atualizar_status(
    id: &str,
    data_saida: String,
    observacao: String,
) -> Result<Pedido, String> {
    let corpo = AtualizaStatus {
        data_saida: Some(data_saida),
        observacao: if observacao.trim().is_empty() {
            None
        } else {
            Some(observacao)
        },
    };
    api_client::patch_json(&format!("/pedidos/{}/status", id), &corpo).await
}

/// Envia um XML de pedido para importação; o parse é todo do servidor.
pub async fn enviar_xml(client: &ApiClient, arquivo: web_sys::File) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("file", &arquivo)
        .map_err(|e| format!("{e:?}"))?;
    client.post_form("/pedidos/upload-xml", form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varredura_percorre_todas_as_paginas() {
        assert_eq!(proxima_pagina(1, 3), Some(2));
        assert_eq!(proxima_pagina(2, 3), Some(3));
        assert_eq!(proxima_pagina(3, 3), None);
        assert_eq!(proxima_pagina(1, 1), None);
    }

    #[test]
    fn total_ausente_encerra_na_primeira_pagina() {
        assert_eq!(proxima_pagina(1, 0), None);
    }
}
