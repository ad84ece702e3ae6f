use contracts::domain::relatorio::{relatorio_csv, relatorio_txt, RelatorioCompra};
use leptos::prelude::*;

use crate::domain::relatorio::api;
use crate::shared::date_utils::{hoje_br, hoje_iso};
use crate::shared::download::baixar_texto;
use crate::system::auth::session::use_session;

#[component]
pub fn RelatorioCompras() -> impl IntoView {
    let session = use_session();

    let (linhas, set_linhas) = signal(Vec::<RelatorioCompra>::new());
    let (carregando, set_carregando) = signal(true);

    let client = session.client();
    leptos::task::spawn_local(async move {
        match api::buscar(&client).await {
            Ok(lista) => {
                let _ = set_linhas.try_set(lista);
                let _ = set_carregando.try_set(false);
            }
            Err(e) => {
                log::error!("Erro ao carregar relatório: {}", e);
                let _ = set_carregando.try_set(false);
            }
        }
    });

    let total_itens = move || linhas.get().iter().map(|l| l.quantidade_total).sum::<i64>();
    let total_pedidos = move || linhas.get().iter().map(|l| l.numero_pedidos).sum::<i64>();

    let exportar_csv = move |_| {
        let conteudo = relatorio_csv(&linhas.get_untracked());
        let nome = format!("relatorio-compras-{}.csv", hoje_iso());
        if let Err(e) = baixar_texto(&conteudo, &nome, "text/csv;charset=utf-8") {
            log::error!("Erro ao exportar CSV: {}", e);
        }
    };

    let exportar_txt = move |_| {
        let conteudo = relatorio_txt(&linhas.get_untracked(), &hoje_br());
        let nome = format!("resumo-compras-{}.txt", hoje_iso());
        if let Err(e) = baixar_texto(&conteudo, &nome, "text/plain;charset=utf-8") {
            log::error!("Erro ao exportar TXT: {}", e);
        }
    };

    view! {
        <div class="relatorio">
            <div class="relatorio__topo">
                <h2>"Relatório de Compras"</h2>
                <div class="relatorio__acoes">
                    <button class="botao-primario" on:click=exportar_csv>
                        "Exportar CSV"
                    </button>
                    <button class="botao-primario" on:click=exportar_txt>
                        "Exportar TXT"
                    </button>
                </div>
            </div>

            <div class="relatorio__cards">
                <div class="card">
                    <span class="card__rotulo">"Produtos diferentes"</span>
                    <span class="card__valor">{move || linhas.get().len()}</span>
                </div>
                <div class="card">
                    <span class="card__rotulo">"Quantidade total"</span>
                    <span class="card__valor">{total_itens}</span>
                </div>
                <div class="card">
                    <span class="card__rotulo">"Pedidos envolvidos"</span>
                    <span class="card__valor">{total_pedidos}</span>
                </div>
            </div>

            <div class="tabela">
                <table>
                    <thead>
                        <tr>
                            <th>"Produto"</th>
                            <th>"Quantidade Total"</th>
                            <th>"Nº de Pedidos"</th>
                            <th>"Média por Pedido"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if carregando.get() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="tabela__vazia">"Carregando..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let lista = linhas.get();
                            if lista.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="4" class="tabela__vazia">
                                            "Nenhum produto para comprar"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            lista
                                .into_iter()
                                .map(|linha| {
                                    let media = format!("{:.1}", linha.media_por_pedido());
                                    view! {
                                        <tr>
                                            <td>{linha.nome.clone()}</td>
                                            <td>{linha.quantidade_total}</td>
                                            <td>{linha.numero_pedidos}</td>
                                            <td>{media}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
