use serde::{Deserialize, Serialize};

/// Linha do relatório de compras, pré-agregada pelo backend
/// (`GET /relatorio-compras`). O cliente só formata e exporta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioCompra {
    pub nome: String,

    #[serde(rename = "quantidadeTotal", default)]
    pub quantidade_total: i64,

    #[serde(rename = "numeroPedidos", default)]
    pub numero_pedidos: i64,
}

impl RelatorioCompra {
    /// Média de itens por pedido; zero quando não há pedidos.
    pub fn media_por_pedido(&self) -> f64 {
        if self.numero_pedidos == 0 {
            0.0
        } else {
            self.quantidade_total as f64 / self.numero_pedidos as f64
        }
    }
}

/// Renderiza o relatório como CSV.
///
/// O nome do produto sempre vai entre aspas duplas; aspas internas são
/// duplicadas para manter o arquivo parseável. Quantidades vão sem aspas.
/// Sem newline final.
pub fn relatorio_csv(linhas: &[RelatorioCompra]) -> String {
    let mut saida = String::from("Produto,Quantidade Total,Número de Pedidos");
    for linha in linhas {
        let nome = linha.nome.replace('"', "\"\"");
        saida.push('\n');
        saida.push_str(&format!(
            "\"{}\",{},{}",
            nome, linha.quantidade_total, linha.numero_pedidos
        ));
    }
    saida
}

/// Renderiza o relatório como texto de largura fixa, com resumo no rodapé.
/// `data` é a data de geração já formatada (dd/mm/aaaa).
pub fn relatorio_txt(linhas: &[RelatorioCompra], data: &str) -> String {
    let mut saida = Vec::new();
    saida.push("RELATÓRIO DE COMPRAS".to_string());
    saida.push("=".repeat(50));
    saida.push(format!("Data: {}", data));
    saida.push(String::new());
    saida.push("RESUMO DE PRODUTOS PARA COMPRA:".to_string());
    saida.push("-".repeat(50));
    saida.push(String::new());

    for linha in linhas {
        saida.push(format!(
            "{:<30} | Qtd: {:>5} | Pedidos: {}",
            linha.nome, linha.quantidade_total, linha.numero_pedidos
        ));
    }

    let total: i64 = linhas.iter().map(|l| l.quantidade_total).sum();
    saida.push(String::new());
    saida.push("-".repeat(50));
    saida.push(format!("Total de produtos diferentes: {}", linhas.len()));
    saida.push(format!("Quantidade total de itens: {}", total));

    saida.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linha(nome: &str, total: i64, pedidos: i64) -> RelatorioCompra {
        RelatorioCompra {
            nome: nome.to_string(),
            quantidade_total: total,
            numero_pedidos: pedidos,
        }
    }

    #[test]
    fn csv_no_formato_exato() {
        let csv = relatorio_csv(&[linha("Parafuso", 50, 5)]);
        assert_eq!(
            csv,
            "Produto,Quantidade Total,Número de Pedidos\n\"Parafuso\",50,5"
        );
    }

    #[test]
    fn csv_duplica_aspas_internas() {
        let csv = relatorio_csv(&[linha("Cabo 1/2\" aço", 3, 1)]);
        assert_eq!(
            csv.lines().nth(1),
            Some("\"Cabo 1/2\"\" aço\",3,1")
        );
    }

    #[test]
    fn csv_vazio_tem_so_cabecalho() {
        assert_eq!(
            relatorio_csv(&[]),
            "Produto,Quantidade Total,Número de Pedidos"
        );
    }

    #[test]
    fn txt_tem_colunas_fixas_e_resumo() {
        let txt = relatorio_txt(&[linha("Parafuso", 50, 5), linha("Cabo", 7, 2)], "01/06/2024");
        assert!(txt.contains("Data: 01/06/2024"));
        assert!(txt.contains(&format!("{:<30} | Qtd: {:>5} | Pedidos: 5", "Parafuso", 50)));
        assert!(txt.ends_with("Total de produtos diferentes: 2\nQuantidade total de itens: 57"));
    }

    #[test]
    fn media_por_pedido_protege_divisao_por_zero() {
        assert_eq!(linha("Parafuso", 50, 5).media_por_pedido(), 10.0);
        assert_eq!(linha("Cabo", 10, 0).media_por_pedido(), 0.0);
        assert!((linha("Porca", 7, 2).media_por_pedido() - 3.5).abs() < f64::EPSILON);
    }
}
