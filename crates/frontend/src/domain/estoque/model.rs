//! Visão derivada do estoque: filtro por nome, ordenação por falta de
//! compra, totais sobre o conjunto filtrado e validação dos movimentos.

use contracts::domain::estoque::EstoqueItem;

pub use crate::shared::paging::{ajusta_pagina, fatia_pagina, total_paginas};

pub const ITENS_POR_PAGINA: usize = 15;

/// Filtra por substring do nome, sem case. Espaços nas pontas do filtro são
/// ignorados.
pub fn filtra(itens: &[EstoqueItem], filtro: &str) -> Vec<EstoqueItem> {
    let filtro = filtro.trim().to_lowercase();
    if filtro.is_empty() {
        return itens.to_vec();
    }
    itens
        .iter()
        .filter(|item| item.nome.to_lowercase().contains(&filtro))
        .cloned()
        .collect()
}

/// Ordena in place: falta de compra decrescente; empates por nome
/// crescente, sem distinguir caixa nem acento ("Água" agrupa com "Agua").
pub fn ordena(itens: &mut [EstoqueItem]) {
    itens.sort_by(|a, b| {
        b.falta_comprar()
            .cmp(&a.falta_comprar())
            .then_with(|| chave_nome(&a.nome).cmp(&chave_nome(&b.nome)))
    });
}

/// Chave de comparação de nomes: minúsculas com os diacríticos do
/// português removidos, para que a ordem alfabética não jogue nomes
/// acentuados depois de "z".
fn chave_nome(nome: &str) -> String {
    nome.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            outro => outro,
        })
        .collect()
}

/// Somas sobre o conjunto filtrado (não apenas a página exibida).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotaisEstoque {
    pub pedidos: i64,
    pub estoque: i64,
    pub falta_comprar: i64,
}

pub fn totais(itens: &[EstoqueItem]) -> TotaisEstoque {
    itens.iter().fold(TotaisEstoque::default(), |mut acc, item| {
        acc.pedidos += item.quantidade_pedidos;
        acc.estoque += item.estoque;
        acc.falta_comprar += item.falta_comprar();
        acc
    })
}

/// Validação de entrada/saída de estoque, feita antes de qualquer chamada à
/// API. Devolve a mensagem a exibir quando inválido.
pub fn valida_movimento(nome: &str, quantidade: i64) -> Result<(), String> {
    if nome.trim().is_empty() {
        return Err("Informe o nome do produto".to_string());
    }
    if quantidade <= 0 {
        return Err("Quantidade precisa ser > 0".to_string());
    }
    Ok(())
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
    fn filtra_por_substring_sem_case() {
        let itens = vec![item("Cabo USB", 5, 2), item("Parafuso", 3, 10)];
        let resultado = filtra(&itens, "  cabo ");
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].nome, "Cabo USB");
        assert_eq!(filtra(&itens, "").len(), 2);
    }

    #[test]
    fn ordena_por_falta_decrescente_e_nome() {
        let mut itens = vec![
            item("Zebra", 5, 5),   // falta 0
            item("Cabo", 10, 4),   // falta 6
            item("abraçadeira", 5, 5), // falta 0
            item("Motor", 20, 2),  // falta 18
        ];
        ordena(&mut itens);
        let nomes: Vec<_> = itens.iter().map(|i| i.nome.as_str()).collect();
        assert_eq!(nomes, vec!["Motor", "Cabo", "abraçadeira", "Zebra"]);
    }

    #[test]
    fn totais_sobre_o_conjunto_filtrado() {
        let itens = vec![item("Cabo", 10, 4), item("Parafuso", 3, 50)];
        let soma = totais(&itens);
        assert_eq!(soma.pedidos, 13);
        assert_eq!(soma.estoque, 54);
        // 6 do Cabo, 0 do Parafuso (clamp por item, não sobre a soma)
        assert_eq!(soma.falta_comprar, 6);
    }

    #[test]
    fn empate_ordena_acentos_junto_das_letras_base() {
        let mut itens = vec![
            item("Zebra", 5, 5),
            item("Água sanitária", 5, 5),
            item("Caçamba", 5, 5),
            item("Cadeira", 5, 5),
        ];
        ordena(&mut itens);
        let nomes: Vec<_> = itens.iter().map(|i| i.nome.as_str()).collect();
        assert_eq!(nomes, vec!["Água sanitária", "Caçamba", "Cadeira", "Zebra"]);
    }

    #[test]
    fn paginacao_de_quinze_arredonda_e_rebaixa() {
        // 31 itens, 15 por página -> 3 páginas; página 5 cai para 3
        assert_eq!(total_paginas(31, ITENS_POR_PAGINA), 3);
        assert_eq!(ajusta_pagina(5, 3), 3);
        assert_eq!(total_paginas(0, ITENS_POR_PAGINA), 1);
        assert_eq!(ajusta_pagina(2, 1), 1);

        let itens: Vec<_> = (0..31).map(|n| item(&format!("P{n:02}"), n, 0)).collect();
        assert_eq!(fatia_pagina(&itens, 3, ITENS_POR_PAGINA).len(), 1);
        assert!(fatia_pagina(&itens, 4, ITENS_POR_PAGINA).is_empty());
    }

    #[test]
    fn movimento_exige_nome_e_quantidade_positiva() {
        assert!(valida_movimento("Cabo", 1).is_ok());
        assert!(valida_movimento("", 5).is_err());
        assert!(valida_movimento("   ", 5).is_err());
        assert!(valida_movimento("Cabo", 0).is_err());
        assert!(valida_movimento("Cabo", -3).is_err());
    }
}
