use leptos::prelude::*;

use crate::routes::{use_navegacao, Rota};
use crate::system::auth::session::use_session;

#[component]
pub fn Cabecalho() -> impl IntoView {
    let session = use_session();
    let navegacao = use_navegacao();

    view! {
        <header class="cabecalho">
            <div class="cabecalho__titulo">
                <h1 on:click=move |_| navegacao.ir(Rota::Planilha)>
                    "Planilha de Controle de Saída"
                </h1>
            </div>
            <nav class="cabecalho__nav">
                <button on:click=move |_| navegacao.ir(Rota::Planilha)>"Pedidos"</button>
                <button on:click=move |_| navegacao.ir(Rota::Estoque)>"Estoque"</button>
                <button on:click=move |_| {
                    navegacao.ir(Rota::RelatorioCompras)
                }>"Relatório de Compras"</button>
                {move || {
                    if session.is_authenticated() {
                        view! {
                            <button
                                class="cabecalho__sair"
                                on:click=move |_| {
                                    session.logout();
                                    navegacao.ir(Rota::Planilha);
                                }
                            >
                                "Sair"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="cabecalho__entrar"
                                on:click=move |_| navegacao.ir(Rota::Login)
                            >
                                "Entrar"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>
    }
}
