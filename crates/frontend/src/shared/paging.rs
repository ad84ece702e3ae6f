//! Aritmética de paginação client-side, comum às listas paginadas.
//! Páginas são 1-indexadas.

/// Total de páginas; nunca zero, mesmo com a coleção vazia.
pub fn total_paginas(total_itens: usize, por_pagina: usize) -> usize {
    if por_pagina == 0 {
        return 1;
    }
    total_itens.div_ceil(por_pagina).max(1)
}

/// Mantém a página no intervalo `[1, total]`; páginas fora do intervalo são
/// rebaixadas para o limite.
pub fn ajusta_pagina(pagina: usize, total: usize) -> usize {
    pagina.clamp(1, total.max(1))
}

/// Fatia da página corrente da coleção já filtrada e ordenada.
pub fn fatia_pagina<T: Clone>(itens: &[T], pagina: usize, por_pagina: usize) -> Vec<T> {
    let inicio = (pagina.saturating_sub(1)) * por_pagina;
    itens
        .iter()
        .skip(inicio)
        .take(por_pagina)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_arredonda_para_cima() {
        assert_eq!(total_paginas(10, 9), 2);
        assert_eq!(total_paginas(18, 9), 2);
        assert_eq!(total_paginas(0, 9), 1);
        assert_eq!(total_paginas(31, 15), 3);
    }

    #[test]
    fn ajusta_rebaixa_paginas_fora_do_intervalo() {
        assert_eq!(ajusta_pagina(3, 2), 2);
        assert_eq!(ajusta_pagina(0, 2), 1);
        assert_eq!(ajusta_pagina(2, 2), 2);
        assert_eq!(ajusta_pagina(5, 1), 1);
    }

    #[test]
    fn fatia_respeita_limites() {
        let itens: Vec<_> = (1..=10).collect();
        assert_eq!(fatia_pagina(&itens, 1, 9).len(), 9);
        assert_eq!(fatia_pagina(&itens, 2, 9), vec![10]);
        assert!(fatia_pagina(&itens, 3, 9).is_empty());
    }
}
