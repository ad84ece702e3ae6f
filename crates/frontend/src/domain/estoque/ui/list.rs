use std::collections::{HashMap, HashSet};

use contracts::domain::estoque::{EstoqueDetalhePedido, EstoqueItem};
use leptos::prelude::*;

use super::modal::{ModalMovimento, TipoMovimento};
use crate::domain::estoque::{api, model};
use crate::routes::{use_navegacao, Rota};
use crate::shared::components::pagination::Paginacao;
use crate::shared::date_utils::formata_data_opt;
use crate::system::auth::session::use_session;

#[component]
pub fn Estoque() -> impl IntoView {
    let session = use_session();
    let navegacao = use_navegacao();

    let (itens, set_itens) = signal(Vec::<EstoqueItem>::new());
    let (carregando, set_carregando) = signal(true);
    let filtro = RwSignal::new(String::new());
    let pagina = RwSignal::new(1usize);

    // Detalhes carregados sob demanda, por nome de produto. Só há entrada
    // no mapa depois que a busca termina.
    let expandidos = RwSignal::new(HashSet::<String>::new());
    let detalhes = RwSignal::new(HashMap::<String, Vec<EstoqueDetalhePedido>>::new());

    let (movimento, set_movimento) = signal(Option::<(TipoMovimento, String)>::None);

    let carregar = move || {
        set_carregando.set(true);
        let client = session.client();
        leptos::task::spawn_local(async move {
            match api::listar(&client).await {
                Ok(lista) => {
                    let _ = set_itens.try_set(lista);
                    let _ = set_carregando.try_set(false);
                }
                Err(e) => {
                    log::error!("Erro ao carregar estoque: {}", e);
                    let _ = set_carregando.try_set(false);
                }
            }
        });
    };

    leptos::task::spawn_local(async move {
        carregar();
    });

    let processados = move || {
        let mut lista = model::filtra(&itens.get(), &filtro.get());
        model::ordena(&mut lista);
        lista
    };

    let soma = move || model::totais(&processados());

    let total_pags = move || model::total_paginas(processados().len(), model::ITENS_POR_PAGINA);

    Effect::new(move |_| {
        let total = total_pags();
        if pagina.get_untracked() > total {
            pagina.set(total);
        }
    });

    let itens_da_pagina = move || {
        let lista = processados();
        let atual = model::ajusta_pagina(pagina.get(), total_pags());
        model::fatia_pagina(&lista, atual, model::ITENS_POR_PAGINA)
    };

    let alternar_detalhes = move |nome: String| {
        let aberto = expandidos.get_untracked().contains(&nome);
        if aberto {
            expandidos.update(|e| {
                e.remove(&nome);
            });
            return;
        }
        expandidos.update(|e| {
            e.insert(nome.clone());
        });
        if detalhes.get_untracked().contains_key(&nome) {
            return;
        }
        let client = session.client();
        leptos::task::spawn_local(async move {
            match api::detalhes(&client, &nome).await {
                Ok(pedidos) => {
                    let _ = detalhes.try_update(|d| {
                        d.insert(nome.clone(), pedidos);
                    });
                }
                Err(e) => {
                    log::error!("Erro ao carregar detalhes de {}: {}", nome, e);
                    let _ = expandidos.try_update(|ex| {
                        ex.remove(&nome);
                    });
                }
            }
        });
    };

    // Depois de um movimento as quantidades mudam; o cache de detalhes
    // fica obsoleto junto.
    let recarregar_tudo = move || {
        detalhes.set(HashMap::new());
        expandidos.set(HashSet::new());
        carregar();
    };

    view! {
        <div class="estoque">
            <div class="estoque__topo">
                <h2>"Estoque"</h2>
                <input
                    type="text"
                    placeholder="Filtrar produto..."
                    prop:value=move || filtro.get()
                    on:input=move |ev| {
                        filtro.set(event_target_value(&ev));
                        pagina.set(1);
                    }
                />
            </div>

            <div class="estoque__cards">
                <div class="card">
                    <span class="card__rotulo">"Total em pedidos"</span>
                    <span class="card__valor">{move || soma().pedidos}</span>
                </div>
                <div class="card">
                    <span class="card__rotulo">"Total em estoque"</span>
                    <span class="card__valor">{move || soma().estoque}</span>
                </div>
                <div class="card card--alerta">
                    <span class="card__rotulo">"Falta comprar"</span>
                    <span class="card__valor">{move || soma().falta_comprar}</span>
                </div>
            </div>

            <div class="tabela">
                <table>
                    <thead>
                        <tr>
                            <th>"Produto"</th>
                            <th>"Pedidos"</th>
                            <th>"Estoque"</th>
                            <th>"Falta Comprar"</th>
                            <th>"Saldo"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if carregando.get() && itens.get().is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="tabela__vazia">"Carregando..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let lista = itens_da_pagina();
                            if lista.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="tabela__vazia">
                                            "Nenhum produto encontrado"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            lista
                                .into_iter()
                                .map(|item| {
                                    let falta = item.falta_comprar();
                                    let saldo = item.saldo();
                                    let nome = item.nome.clone();
                                    let nome_expandir = nome.clone();
                                    let nome_aberto = nome.clone();
                                    let nome_detalhes = nome.clone();
                                    let nome_entrada = nome.clone();
                                    let nome_saida = nome.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <button
                                                    class="estoque__expandir"
                                                    title="Pedidos que consomem o produto"
                                                    on:click=move |_| {
                                                        alternar_detalhes(nome_expandir.clone())
                                                    }
                                                >
                                                    {
                                                        let nome = nome_aberto.clone();
                                                        move || {
                                                            if expandidos.get().contains(&nome) {
                                                                "▾"
                                                            } else {
                                                                "▸"
                                                            }
                                                        }
                                                    }
                                                </button>
                                                {item.nome.clone()}
                                            </td>
                                            <td>{item.quantidade_pedidos}</td>
                                            <td>{item.estoque}</td>
                                            <td class={if falta > 0 {
                                                "valor-negativo"
                                            } else {
                                                "valor-ok"
                                            }}>{falta}</td>
                                            <td class={if saldo < 0 {
                                                "valor-negativo"
                                            } else {
                                                "valor-ok"
                                            }}>{saldo}</td>
                                            <td class="tabela__acoes">
                                                <Show when=move || session.is_authenticated()>
                                                    {
                                                        let nome_entrada = nome_entrada.clone();
                                                        let nome_saida = nome_saida.clone();
                                                        view! {
                                                            <button
                                                                title="Registrar compra recebida"
                                                                on:click=move |_| {
                                                                    set_movimento
                                                                        .set(
                                                                            Some((
                                                                                TipoMovimento::Entrada,
                                                                                nome_entrada.clone(),
                                                                            )),
                                                                        )
                                                                }
                                                            >
                                                                "Comprar"
                                                            </button>
                                                            <button
                                                                title="Dar baixa no estoque"
                                                                on:click=move |_| {
                                                                    set_movimento
                                                                        .set(
                                                                            Some((TipoMovimento::Saida, nome_saida.clone())),
                                                                        )
                                                                }
                                                            >
                                                                "Dar baixa"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </td>
                                        </tr>
                                        {
                                            let nome = nome_detalhes.clone();
                                            move || {
                                                if !expandidos.get().contains(&nome) {
                                                    return view! { <></> }.into_any();
                                                }
                                                match detalhes.get().get(&nome).cloned() {
                                                    None => {
                                                        view! {
                                                            <tr class="estoque__detalhes">
                                                                <td colspan="6">"Carregando pedidos..."</td>
                                                            </tr>
                                                        }
                                                            .into_any()
                                                    }
                                                    Some(pedidos) if pedidos.is_empty() => {
                                                        view! {
                                                            <tr class="estoque__detalhes">
                                                                <td colspan="6">
                                                                    "Nenhum pedido em aberto para este produto"
                                                                </td>
                                                            </tr>
                                                        }
                                                            .into_any()
                                                    }
                                                    Some(pedidos) => {
                                                        pedidos
                                                            .into_iter()
                                                            .map(|p| {
                                                                let pedido_id = p.pedido_id.clone();
                                                                view! {
                                                                    <tr class="estoque__detalhes">
                                                                        <td colspan="2">
                                                                            "Pedido "
                                                                            {p.numero_pedido.clone().unwrap_or_else(|| "-".into())}
                                                                        </td>
                                                                        <td>
                                                                            "NFE "
                                                                            {p.numero_nfe.clone().unwrap_or_else(|| "-".into())}
                                                                        </td>
                                                                        <td>
                                                                            "Pedido em "
                                                                            {formata_data_opt(p.data_pedido.as_deref())}
                                                                        </td>
                                                                        <td>
                                                                            "Previsto para "
                                                                            {formata_data_opt(p.data_prevista.as_deref())}
                                                                        </td>
                                                                        <td>
                                                                            {pedido_id
                                                                                .map(|id| {
                                                                                    view! {
                                                                                        <button
                                                                                            title="Produtos do pedido"
                                                                                            on:click=move |_| {
                                                                                                navegacao.ir(Rota::Produtos(id.clone()))
                                                                                            }
                                                                                        >
                                                                                            "Ver produtos"
                                                                                        </button>
                                                                                    }
                                                                                })}
                                                                        </td>
                                                                    </tr>
                                                                }
                                                            })
                                                            .collect_view()
                                                            .into_any()
                                                    }
                                                }
                                            }
                                        }
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>

                <Paginacao
                    pagina=Signal::derive(move || model::ajusta_pagina(pagina.get(), total_pags()))
                    total_paginas=Signal::derive(total_pags)
                    on_mudar=Callback::new(move |nova| pagina.set(nova))
                />
            </div>

            {move || {
                movimento
                    .get()
                    .map(|(tipo, nome)| {
                        view! {
                            <ModalMovimento
                                tipo=tipo
                                nome=nome
                                on_fechar=Callback::new(move |_| set_movimento.set(None))
                                on_concluido=Callback::new(move |_| recarregar_tudo())
                            />
                        }
                    })
            }}
        </div>
    }
}
