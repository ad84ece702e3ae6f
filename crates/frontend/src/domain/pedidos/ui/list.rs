use contracts::domain::pedido::{Pedido, Situacao};
use leptos::prelude::*;

use super::FormularioPedido;
use crate::domain::pedidos::{api, model};
use crate::routes::{use_navegacao, Rota};
use crate::shared::components::pagination::Paginacao;
use crate::shared::date_utils::{formata_data, formata_data_opt};
use crate::system::auth::session::use_session;

fn classe_situacao(situacao: Situacao) -> &'static str {
    match situacao {
        Situacao::Saiu => "status-saiu",
        Situacao::EmAtraso => "status-em-atraso",
        Situacao::EmProducao => "status-em-producao",
        Situacao::Indefinida => "status-indefinido",
    }
}

#[component]
pub fn PlanilhaControle() -> impl IntoView {
    let session = use_session();
    let navegacao = use_navegacao();

    let (todos, set_todos) = signal(Vec::<Pedido>::new());
    let (carregando, set_carregando) = signal(true);
    let filtros = RwSignal::new(model::FiltrosPedidos::default());
    let pagina = RwSignal::new(1usize);

    let (mostrar_form, set_mostrar_form) = signal(false);
    let (editando, set_editando) = signal(Option::<Pedido>::None);

    let carregar = move || {
        set_carregando.set(true);
        let client = session.client();
        leptos::task::spawn_local(async move {
            match api::buscar_todos(&client).await {
                Ok(pedidos) => {
                    let _ = set_todos.try_set(pedidos);
                    let _ = set_carregando.try_set(false);
                }
                Err(e) => {
                    // mantém a lista anterior na tela
                    log::error!("Erro ao carregar pedidos: {}", e);
                    let _ = set_carregando.try_set(false);
                }
            }
        });
    };

    // Carga inicial
    leptos::task::spawn_local(async move {
        carregar();
    });

    // Filtro + ordenação derivados a cada mudança local
    let processados = move || {
        let mut itens = model::filtra(&todos.get(), &filtros.get());
        model::ordena(&mut itens);
        itens
    };

    let total_pags = move || model::total_paginas(processados().len(), model::ITENS_POR_PAGINA);

    // Rebaixa a página corrente quando o conjunto filtrado encolhe
    Effect::new(move |_| {
        let total = total_pags();
        if pagina.get_untracked() > total {
            pagina.set(total);
        }
    });

    let itens_da_pagina = move || {
        let itens = processados();
        let atual = model::ajusta_pagina(pagina.get(), total_pags());
        model::fatia_pagina(&itens, atual, model::ITENS_POR_PAGINA)
    };

    let destaque = move || model::mais_atrasado(&processados()).cloned();

    let definir_saida = move |id: String| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(data) = window
            .prompt_with_message("Data de saída (dd/mm/aaaa):")
            .ok()
            .flatten()
        else {
            return;
        };
        if data.trim().is_empty() {
            let _ = window.alert_with_message("A data de saída não pode ser vazia.");
            return;
        }
        let observacao = window
            .prompt_with_message("Observação (opcional):")
            .ok()
            .flatten()
            .unwrap_or_default();

        leptos::task::spawn_local(async move {
            match api::atualizar_status(&id, data, observacao).await {
                Ok(_) => carregar(),
                Err(e) => log::error!("Erro ao atualizar status: {}", e),
            }
        });
    };

    let excluir = move |id: String| {
        let client = session.client();
        leptos::task::spawn_local(async move {
            match api::excluir(&client, &id).await {
                Ok(()) => carregar(),
                Err(e) => log::error!("Erro ao deletar pedido: {}", e),
            }
        });
    };

    let filtro_input = move |ev: &web_sys::Event, aplica: fn(&mut model::FiltrosPedidos, String)| {
        let valor = event_target_value(ev);
        filtros.update(|f| aplica(f, valor));
        pagina.set(1);
    };

    view! {
        <div class="planilha">
            <div class="planilha__topo">
                <h2>"Controle de Expedição"</h2>
                <Show when=move || session.is_authenticated()>
                    <div class="planilha__acoes">
                        <button class="botao-primario" on:click=move |_| set_mostrar_form.set(true)>
                            "Novo Pedido"
                        </button>
                        <label class="botao-importar">
                            "Importar XML"
                            <input
                                type="file"
                                accept=".xml"
                                style="display: none;"
                                on:change=move |ev| {
                                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                    let Some(arquivos) = input.files() else { return };
                                    let Some(arquivo) = arquivos.get(0) else { return };
                                    input.set_value("");
                                    let client = session.client();
                                    leptos::task::spawn_local(async move {
                                        match api::enviar_xml(&client, arquivo).await {
                                            Ok(()) => carregar(),
                                            Err(e) => log::error!("Erro ao importar XML: {}", e),
                                        }
                                    });
                                }
                            />
                        </label>
                    </div>
                </Show>
            </div>

            {move || {
                destaque()
                    .map(|p| {
                        let rotulo = format!(
                            "Pedido mais atrasado: {} — {} (previsto para {})",
                            p.numero_pedido,
                            p.cliente,
                            formata_data(&p.data_prevista),
                        );
                        view! { <div class="planilha__destaque">{rotulo}</div> }
                    })
            }}

            <div class="tabela">
                <table>
                    <thead>
                        <tr>
                            <th>"Data Pedido"</th>
                            <th>
                                "Cliente"
                                <input
                                    type="text"
                                    placeholder="Filtrar cliente..."
                                    prop:value=move || filtros.get().cliente
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.cliente = v)
                                />
                            </th>
                            <th>
                                "Nº Pedido"
                                <input
                                    type="text"
                                    placeholder="Filtrar pedido..."
                                    prop:value=move || filtros.get().numero_pedido
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.numero_pedido = v)
                                />
                            </th>
                            <th>
                                "NFE"
                                <input
                                    type="text"
                                    placeholder="Filtrar NFE..."
                                    prop:value=move || filtros.get().numero_nfe
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.numero_nfe = v)
                                />
                            </th>
                            <th>
                                "Financeira"
                                <input
                                    type="text"
                                    placeholder="Filtrar financeira..."
                                    prop:value=move || filtros.get().financeira
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.financeira = v)
                                />
                            </th>
                            <th>
                                "Data Prevista"
                                <input
                                    type="date"
                                    prop:value=move || filtros.get().data_prevista
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.data_prevista = v)
                                />
                            </th>
                            <th>"Situação"</th>
                            <th>
                                "Data Saída"
                                <input
                                    type="text"
                                    placeholder="Filtrar data saída..."
                                    prop:value=move || filtros.get().data_saida
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.data_saida = v)
                                />
                            </th>
                            <th>
                                "Transportadora"
                                <input
                                    type="text"
                                    placeholder="Filtrar transportadora..."
                                    prop:value=move || filtros.get().transportadora
                                    on:input=move |ev| filtro_input(&ev, |f, v| f.transportadora = v)
                                />
                            </th>
                            <th>"Observação"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if carregando.get() && todos.get().is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="11" class="tabela__vazia">"Carregando..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let itens = itens_da_pagina();
                            if itens.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="11" class="tabela__vazia">
                                            "Nenhum pedido encontrado"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            itens
                                .into_iter()
                                .map(|pedido| {
                                    let situacao = pedido.situacao();
                                    let id = pedido.id.clone().unwrap_or_default();
                                    let id_saida = id.clone();
                                    let id_excluir = id.clone();
                                    let id_produtos = id.clone();
                                    let para_editar = pedido.clone();
                                    view! {
                                        <tr>
                                            <td>{formata_data(&pedido.data_pedido)}</td>
                                            <td>{pedido.cliente.clone()}</td>
                                            <td class="mono">{pedido.numero_pedido.clone()}</td>
                                            <td class="mono">{pedido.numero_nfe.clone()}</td>
                                            <td>{pedido.financeira.clone()}</td>
                                            <td>{formata_data(&pedido.data_prevista)}</td>
                                            <td>
                                                <span class=classe_situacao(situacao)>
                                                    {pedido.status.clone().unwrap_or_else(|| "-".into())}
                                                </span>
                                            </td>
                                            <td>
                                                {formata_data_opt(pedido.data_saida.as_deref())}
                                                <button
                                                    title="Definir data de saída"
                                                    on:click=move |_| definir_saida(id_saida.clone())
                                                >
                                                    "Saída"
                                                </button>
                                            </td>
                                            <td>
                                                {pedido
                                                    .transportadora
                                                    .clone()
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td>
                                                {pedido.observacao.clone().unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td class="tabela__acoes">
                                                <button
                                                    title="Gerenciar produtos"
                                                    on:click=move |_| {
                                                        navegacao.ir(Rota::Produtos(id_produtos.clone()))
                                                    }
                                                >
                                                    "Produtos"
                                                </button>
                                                <Show when=move || session.is_authenticated()>
                                                    {
                                                        let para_editar = para_editar.clone();
                                                        let id_excluir = id_excluir.clone();
                                                        view! {
                                                            <button
                                                                title="Editar pedido"
                                                                on:click=move |_| {
                                                                    set_editando.set(Some(para_editar.clone()))
                                                                }
                                                            >
                                                                "Editar"
                                                            </button>
                                                            <button
                                                                title="Excluir pedido"
                                                                class="botao-perigo"
                                                                on:click=move |_| excluir(id_excluir.clone())
                                                            >
                                                                "Excluir"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </td>
                                        </tr>
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
                let em_edicao = editando.get();
                if mostrar_form.get() || em_edicao.is_some() {
                    view! {
                        <FormularioPedido
                            pedido=em_edicao
                            on_fechar=Callback::new(move |_| {
                                set_mostrar_form.set(false);
                                set_editando.set(None);
                            })
                            on_salvar=Callback::new(move |_| carregar())
                        />
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
