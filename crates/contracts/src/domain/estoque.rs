use serde::{Deserialize, Serialize};

/// Posição agregada de estoque por nome de produto, como devolvida por
/// `GET /estoque`. Os campos derivados não são persistidos: são recalculados
/// a cada render a partir do snapshot buscado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstoqueItem {
    pub nome: String,

    /// Quantidade somada em pedidos ainda não expedidos.
    #[serde(rename = "quantidadePedidos", default)]
    pub quantidade_pedidos: i64,

    /// Quantidade em mãos no depósito.
    #[serde(default)]
    pub estoque: i64,
}

impl EstoqueItem {
    /// Falta comprar: `max(0, pedidos − estoque)`. Nunca negativo.
    pub fn falta_comprar(&self) -> i64 {
        (self.quantidade_pedidos - self.estoque).max(0)
    }

    /// Saldo: `estoque − pedidos`. Pode ser negativo.
    pub fn saldo(&self) -> i64 {
        self.estoque - self.quantidade_pedidos
    }
}

/// Pedido pendente vinculado a um nome de produto, buscado sob demanda por
/// `GET /estoque/:nome/detalhes` ao expandir a linha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstoqueDetalhePedido {
    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub pedido_id: Option<String>,

    #[serde(rename = "numeroPedido", default, skip_serializing_if = "Option::is_none")]
    pub numero_pedido: Option<String>,

    #[serde(rename = "numeroNfe", default, skip_serializing_if = "Option::is_none")]
    pub numero_nfe: Option<String>,

    #[serde(rename = "dataPrevista", default, skip_serializing_if = "Option::is_none")]
    pub data_prevista: Option<String>,

    #[serde(rename = "dataPedido", default, skip_serializing_if = "Option::is_none")]
    pub data_pedido: Option<String>,
}

/// Corpo de `POST /estoque/entrada` e `POST /estoque/saida`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovimentoEstoque {
    pub nome: String,
    pub quantidade: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(nome: &str, pedidos: i64, estoque: i64) -> EstoqueItem {
        EstoqueItem {
            nome: nome.to_string(),
            quantidade_pedidos: pedidos,
            estoque,
        }
    }

    #[test]
    fn falta_comprar_e_saldo() {
        let cabo = item("Cabo", 10, 4);
        assert_eq!(cabo.falta_comprar(), 6);
        assert_eq!(cabo.saldo(), -6);
    }

    #[test]
    fn falta_comprar_nunca_negativa() {
        let sobrando = item("Parafuso", 3, 50);
        assert_eq!(sobrando.falta_comprar(), 0);
        assert_eq!(sobrando.saldo(), 47);

        let zerado = item("Porca", 0, 0);
        assert_eq!(zerado.falta_comprar(), 0);
        assert_eq!(zerado.saldo(), 0);
    }
}
