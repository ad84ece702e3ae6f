//! Visão derivada da planilha de pedidos: ordenação por situação e prazo,
//! filtros por coluna, paginação e o destaque de pedido mais atrasado.
//! Tudo é transformação pura sobre a coleção buscada; nada aqui persiste.

use contracts::domain::pedido::{parse_dia, Pedido, Situacao};

use crate::shared::date_utils::formata_data_opt;

pub use crate::shared::paging::{ajusta_pagina, fatia_pagina, total_paginas};

pub const ITENS_POR_PAGINA: usize = 9;

/// Filtros por coluna da planilha, combinados por E lógico.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltrosPedidos {
    pub cliente: String,
    pub numero_pedido: String,
    pub numero_nfe: String,
    pub financeira: String,
    pub transportadora: String,
    /// Valor de um `<input type="date">` (aaaa-mm-dd); casa por igualdade de
    /// dia de calendário com a data prevista.
    pub data_prevista: String,
    /// Substring sobre a data de saída já formatada (dd/mm/aaaa).
    pub data_saida: String,
}

impl FiltrosPedidos {
    pub fn aceita(&self, pedido: &Pedido) -> bool {
        contem(&pedido.cliente, &self.cliente)
            && contem(&pedido.numero_pedido, &self.numero_pedido)
            && contem(&pedido.numero_nfe, &self.numero_nfe)
            && contem(&pedido.financeira, &self.financeira)
            && contem(
                pedido.transportadora.as_deref().unwrap_or(""),
                &self.transportadora,
            )
            && self.aceita_data_prevista(pedido)
            && self.aceita_data_saida(pedido)
    }

    fn aceita_data_prevista(&self, pedido: &Pedido) -> bool {
        let filtro = self.data_prevista.trim();
        if filtro.is_empty() {
            return true;
        }
        match (parse_dia(filtro), pedido.data_prevista_dia()) {
            (Some(dia_filtro), Some(dia_pedido)) => dia_filtro == dia_pedido,
            _ => false,
        }
    }

    fn aceita_data_saida(&self, pedido: &Pedido) -> bool {
        let filtro = self.data_saida.trim();
        if filtro.is_empty() {
            return true;
        }
        let Some(data_saida) = pedido.data_saida.as_deref() else {
            return false;
        };
        formata_data_opt(Some(data_saida)).contains(filtro)
    }
}

fn contem(campo: &str, filtro: &str) -> bool {
    let filtro = filtro.trim();
    filtro.is_empty() || campo.to_lowercase().contains(&filtro.to_lowercase())
}

/// Ordena in place: situação (atrasado < produção < saiu < indefinido) e,
/// dentro do mesmo grupo, data prevista crescente, datas ausentes por
/// último. A ordenação é estável, então empates mantêm a ordem do backend.
pub fn ordena(pedidos: &mut [Pedido]) {
    pedidos.sort_by(|a, b| {
        let prioridade = a
            .situacao()
            .prioridade()
            .cmp(&b.situacao().prioridade());
        prioridade.then_with(|| match (a.data_prevista_dia(), b.data_prevista_dia()) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        })
    });
}

pub fn filtra(pedidos: &[Pedido], filtros: &FiltrosPedidos) -> Vec<Pedido> {
    pedidos
        .iter()
        .filter(|p| filtros.aceita(p))
        .cloned()
        .collect()
}

/// Pedido em aberto (ainda não saiu) com a data prevista mais antiga.
///
/// Calculado sobre o conjunto filtrado inteiro, não apenas sobre a página
/// exibida; a versão antiga olhava só a página corrente e deixava o destaque
/// sumir ao navegar. `None` quando tudo já saiu ou não há data reconhecível.
pub fn mais_atrasado(pedidos: &[Pedido]) -> Option<&Pedido> {
    pedidos
        .iter()
        .filter(|p| p.situacao() != Situacao::Saiu)
        .filter_map(|p| p.data_prevista_dia().map(|dia| (dia, p)))
        .min_by_key(|(dia, _)| *dia)
        .map(|(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedido(numero: &str, status: Option<&str>, data_prevista: &str) -> Pedido {
        Pedido {
            id: Some(format!("id-{}", numero)),
            data_pedido: "2024-05-01".into(),
            cliente: "Cliente Exemplo".into(),
            numero_pedido: numero.into(),
            numero_nfe: format!("nfe-{}", numero),
            financeira: "Financeira A".into(),
            data_prevista: data_prevista.into(),
            transportadora: None,
            observacao: None,
            data_saida: None,
            status: status.map(str::to_string),
            data_criacao: None,
            data_atualizacao: None,
        }
    }

    #[test]
    fn ordena_por_situacao_depois_por_data() {
        let mut pedidos = vec![
            pedido("1", Some("Saiu em 02/05"), "2024-05-02"),
            pedido("2", Some("Em produção"), "2024-05-20"),
            pedido("3", Some("Em atraso"), "2024-05-15"),
            pedido("4", Some("Em produção"), "2024-05-10"),
            pedido("5", Some("Em atraso"), "2024-05-01"),
        ];
        ordena(&mut pedidos);
        let numeros: Vec<_> = pedidos.iter().map(|p| p.numero_pedido.as_str()).collect();
        assert_eq!(numeros, vec!["5", "3", "4", "2", "1"]);
    }

    #[test]
    fn datas_ausentes_ficam_no_fim_do_grupo() {
        let mut pedidos = vec![
            pedido("1", Some("Em produção"), ""),
            pedido("2", Some("Em produção"), "2024-05-10"),
        ];
        ordena(&mut pedidos);
        assert_eq!(pedidos[0].numero_pedido, "2");
        assert_eq!(pedidos[1].numero_pedido, "1");
    }

    #[test]
    fn empates_completos_preservam_a_ordem_do_backend() {
        // mesma situação e mesma data prevista: a ordem de chegada vence
        let mut pedidos = vec![
            pedido("3", Some("Em produção"), "2024-05-10"),
            pedido("1", Some("Em produção"), "2024-05-10"),
            pedido("2", Some("Em produção"), "2024-05-10"),
        ];
        ordena(&mut pedidos);
        let numeros: Vec<_> = pedidos.iter().map(|p| p.numero_pedido.as_str()).collect();
        assert_eq!(numeros, vec!["3", "1", "2"]);
    }

    #[test]
    fn status_indefinido_ordena_por_ultimo() {
        let mut pedidos = vec![
            pedido("1", None, "2024-01-01"),
            pedido("2", Some("Saiu"), "2024-06-01"),
        ];
        ordena(&mut pedidos);
        assert_eq!(pedidos[0].numero_pedido, "2");
    }

    #[test]
    fn filtro_de_cliente_ignora_case() {
        let pedidos = vec![pedido("1", None, "2024-05-01")];
        let filtros = FiltrosPedidos {
            cliente: "cliente exem".into(),
            ..Default::default()
        };
        assert_eq!(filtra(&pedidos, &filtros).len(), 1);

        let filtros = FiltrosPedidos {
            cliente: "outro".into(),
            ..Default::default()
        };
        assert!(filtra(&pedidos, &filtros).is_empty());
    }

    #[test]
    fn filtros_combinam_por_e_logico() {
        let pedidos = vec![pedido("5319", None, "2024-05-01")];
        let filtros = FiltrosPedidos {
            numero_pedido: "5319".into(),
            financeira: "financeira".into(),
            ..Default::default()
        };
        assert_eq!(filtra(&pedidos, &filtros).len(), 1);

        let filtros = FiltrosPedidos {
            numero_pedido: "5319".into(),
            financeira: "banco inexistente".into(),
            ..Default::default()
        };
        assert!(filtra(&pedidos, &filtros).is_empty());
    }

    #[test]
    fn filtro_de_data_prevista_casa_por_dia_exato() {
        let pedidos = vec![pedido("1", None, "2024-05-01T10:30:00Z")];
        let casa = FiltrosPedidos {
            data_prevista: "2024-05-01".into(),
            ..Default::default()
        };
        assert_eq!(filtra(&pedidos, &casa).len(), 1);

        let nao_casa = FiltrosPedidos {
            data_prevista: "2024-05-02".into(),
            ..Default::default()
        };
        assert!(filtra(&pedidos, &nao_casa).is_empty());
    }

    #[test]
    fn filtro_de_data_saida_e_substring_do_texto_formatado() {
        let mut com_saida = pedido("1", Some("Saiu"), "2024-05-01");
        com_saida.data_saida = Some("2024-05-03".into());
        let pedidos = vec![com_saida, pedido("2", None, "2024-05-01")];

        let filtros = FiltrosPedidos {
            data_saida: "03/05".into(),
            ..Default::default()
        };
        let resultado = filtra(&pedidos, &filtros);
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].numero_pedido, "1");
    }

    #[test]
    fn paginacao_arredonda_para_cima_e_ajusta() {
        // 10 pedidos, 9 por página -> 2 páginas; página 3 cai para 2
        assert_eq!(total_paginas(10, ITENS_POR_PAGINA), 2);
        assert_eq!(ajusta_pagina(3, 2), 2);
        assert_eq!(ajusta_pagina(0, 2), 1);
        assert_eq!(ajusta_pagina(2, 2), 2);
        // coleção vazia ainda tem uma página
        assert_eq!(total_paginas(0, ITENS_POR_PAGINA), 1);
        assert_eq!(ajusta_pagina(5, 1), 1);
    }

    #[test]
    fn fatia_pagina_respeita_limites() {
        let pedidos: Vec<_> = (1..=10)
            .map(|n| pedido(&n.to_string(), None, "2024-05-01"))
            .collect();
        assert_eq!(fatia_pagina(&pedidos, 1, 9).len(), 9);
        let ultima = fatia_pagina(&pedidos, 2, 9);
        assert_eq!(ultima.len(), 1);
        assert_eq!(ultima[0].numero_pedido, "10");
        assert!(fatia_pagina(&pedidos, 3, 9).is_empty());
    }

    #[test]
    fn derivacao_e_idempotente() {
        let mut pedidos = vec![
            pedido("1", Some("Saiu"), "2024-05-02"),
            pedido("2", Some("Em atraso"), "2024-05-01"),
            pedido("3", Some("Em produção"), "2024-05-03"),
        ];
        ordena(&mut pedidos);
        let primeira = filtra(&pedidos, &FiltrosPedidos::default());
        let mut segunda = primeira.clone();
        ordena(&mut segunda);
        let segunda = filtra(&segunda, &FiltrosPedidos::default());
        assert_eq!(primeira, segunda);
    }

    #[test]
    fn mais_atrasado_ignora_expedidos() {
        let pedidos = vec![
            pedido("1", Some("Saiu"), "2024-01-01"),
            pedido("2", Some("Em atraso"), "2024-03-01"),
            pedido("3", Some("Em produção"), "2024-02-01"),
        ];
        let destaque = mais_atrasado(&pedidos).expect("deveria haver destaque");
        assert_eq!(destaque.numero_pedido, "3");
    }

    #[test]
    fn mais_atrasado_vazio_quando_tudo_saiu() {
        let pedidos = vec![
            pedido("1", Some("Saiu"), "2024-01-01"),
            pedido("2", Some("Saiu em 05/01"), "2024-01-02"),
        ];
        assert!(mais_atrasado(&pedidos).is_none());
        assert!(mais_atrasado(&[]).is_none());
    }

    // O destaque olha o conjunto filtrado inteiro. Se fosse calculado só
    // sobre a página exibida (comportamento antigo), um pedido atrasado fora
    // da página corrente nunca apareceria; os dois casos abaixo fixam a
    // diferença.
    #[test]
    fn mais_atrasado_cobre_o_conjunto_todo_e_nao_so_a_pagina() {
        let mut pedidos: Vec<_> = (1..=12)
            .map(|n| pedido(&n.to_string(), Some("Em produção"), "2024-06-15"))
            .collect();
        pedidos.push(pedido("13", Some("Em atraso"), "2024-01-01"));

        // sobre o conjunto inteiro o atrasado ganha
        assert_eq!(mais_atrasado(&pedidos).unwrap().numero_pedido, "13");

        // sobre só a primeira página (itens 1..=9, sem o "13") o resultado
        // seria outro
        let primeira_pagina = fatia_pagina(&pedidos, 1, ITENS_POR_PAGINA);
        assert_ne!(
            mais_atrasado(&primeira_pagina).unwrap().numero_pedido,
            "13"
        );
    }
}
