use contracts::domain::relatorio::RelatorioCompra;

use crate::shared::api_client::ApiClient;

/// Consolidação de compras por produto, agregada no backend.
pub async fn buscar(client: &ApiClient) -> Result<Vec<RelatorioCompra>, String> {
    client.get("/relatorio-compras").await
}
