use contracts::domain::produto::{NovoProduto, Produto};
use leptos::prelude::*;

use super::api;
use crate::routes::{use_navegacao, Rota};
use crate::shared::date_utils::formata_data_opt;
use crate::system::auth::session::use_session;

/// Itens de produto de um pedido. Linhas com o mesmo nome são permitidas e
/// mostradas em separado; não há mesclagem no cliente.
#[component]
pub fn ProdutosPorPedido(#[prop(into)] pedido_id: String) -> impl IntoView {
    let session = use_session();
    let navegacao = use_navegacao();

    let (produtos, set_produtos) = signal(Vec::<Produto>::new());
    let (carregando, set_carregando) = signal(true);
    let (mostrar_form, set_mostrar_form) = signal(false);

    let nome = RwSignal::new(String::new());
    let quantidade = RwSignal::new("1".to_string());

    // O id do pedido é fixo pela vida do componente
    let pedido_id = StoredValue::new(pedido_id);

    let carregar = move || {
        set_carregando.set(true);
        let client = session.client();
        let id = pedido_id.get_value();
        leptos::task::spawn_local(async move {
            match api::buscar(&client, &id).await {
                Ok(lista) => {
                    let _ = set_produtos.try_set(lista);
                    let _ = set_carregando.try_set(false);
                }
                Err(e) => {
                    log::error!("Erro ao carregar produtos: {}", e);
                    let _ = set_carregando.try_set(false);
                }
            }
        });
    };

    leptos::task::spawn_local(async move {
        carregar();
    });

    let adicionar = move || {
        let nome_val = nome.get_untracked().trim().to_string();
        let quantidade_val = quantidade.get_untracked().trim().parse::<i64>().unwrap_or(0);
        if nome_val.is_empty() || quantidade_val < 1 {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .alert_with_message("Informe o nome do produto e uma quantidade maior que zero.");
            }
            return;
        }

        let client = session.client();
        let id = pedido_id.get_value();
        let novo = NovoProduto {
            nome: nome_val,
            quantidade: quantidade_val,
        };
        leptos::task::spawn_local(async move {
            match api::adicionar(&client, &id, &novo).await {
                Ok(_) => {
                    let _ = nome.try_set(String::new());
                    let _ = quantidade.try_set("1".to_string());
                    let _ = set_mostrar_form.try_set(false);
                    carregar();
                }
                Err(e) => log::error!("Erro ao adicionar produto: {}", e),
            }
        });
    };

    let remover = move |produto_id: String| {
        let client = session.client();
        let id = pedido_id.get_value();
        leptos::task::spawn_local(async move {
            match api::remover(&client, &id, &produto_id).await {
                Ok(()) => carregar(),
                Err(e) => log::error!("Erro ao remover produto: {}", e),
            }
        });
    };

    view! {
        <div class="produtos">
            <div class="produtos__topo">
                <div>
                    <button on:click=move |_| navegacao.ir(Rota::Planilha)>"← Voltar"</button>
                    <h2>"Produtos do Pedido"</h2>
                    <p class="produtos__subtitulo">
                        {move || format!("Pedido #{}", pedido_id.get_value())}
                    </p>
                </div>
                <Show when=move || session.is_authenticated()>
                    <button class="botao-primario" on:click=move |_| set_mostrar_form.set(true)>
                        "Adicionar Produto"
                    </button>
                </Show>
            </div>

            <Show when=move || mostrar_form.get() && session.is_authenticated()>
                <form
                    class="produtos__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        adicionar();
                    }
                >
                    <label>
                        "Nome do Produto"
                        <input
                            type="text"
                            placeholder="Digite o nome do produto"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Quantidade"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || quantidade.get()
                            on:input=move |ev| quantidade.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <div>
                        <button type="submit" class="botao-primario">"Adicionar"</button>
                        <button type="button" on:click=move |_| set_mostrar_form.set(false)>
                            "Cancelar"
                        </button>
                    </div>
                </form>
            </Show>

            <div class="tabela">
                <table>
                    <thead>
                        <tr>
                            <th>"Produto"</th>
                            <th>"Quantidade"</th>
                            <th>"Data Adição"</th>
                            <Show when=move || session.is_authenticated()>
                                <th>"Ações"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            // a coluna de ações só existe logado
                            let colunas = if session.is_authenticated() { "4" } else { "3" };
                            if carregando.get() {
                                return view! {
                                    <tr>
                                        <td colspan=colunas class="tabela__vazia">
                                            "Carregando produtos..."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let itens = produtos.get();
                            if itens.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan=colunas class="tabela__vazia">
                                            "Nenhum produto adicionado a este pedido"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            itens
                                .into_iter()
                                .map(|produto| {
                                    let produto_id = produto.id.clone().unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td>{produto.nome.clone()}</td>
                                            <td class="mono">{produto.quantidade}</td>
                                            <td>{formata_data_opt(produto.data_criacao.as_deref())}</td>
                                            <Show when=move || session.is_authenticated()>
                                                {
                                                    let produto_id = produto_id.clone();
                                                    view! {
                                                        <td>
                                                            <button
                                                                class="botao-perigo"
                                                                title="Remover produto"
                                                                on:click=move |_| remover(produto_id.clone())
                                                            >
                                                                "Remover"
                                                            </button>
                                                        </td>
                                                    }
                                                }
                                            </Show>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="produtos__rodape">
                <button on:click=move |_| navegacao.ir(Rota::RelatorioCompras)>
                    "Ver Relatório de Compras"
                </button>
            </div>
        </div>
    }
}
