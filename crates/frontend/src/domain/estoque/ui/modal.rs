use leptos::prelude::*;

use crate::domain::estoque::{api, model};
use crate::system::auth::session::use_session;

/// Sentido do movimento de estoque disparado pelo modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoMovimento {
    Entrada,
    Saida,
}

impl TipoMovimento {
    fn titulo(self) -> &'static str {
        match self {
            TipoMovimento::Entrada => "Entrada de estoque",
            TipoMovimento::Saida => "Saída de estoque",
        }
    }

    fn rotulo_confirmar(self) -> &'static str {
        match self {
            TipoMovimento::Entrada => "Registrar entrada",
            TipoMovimento::Saida => "Registrar saída",
        }
    }
}

/// Modal de entrada/saída para um produto já escolhido na lista. A
/// quantidade é validada antes de qualquer chamada; em caso de sucesso o
/// chamador recarrega a lista via `on_concluido`.
#[component]
pub fn ModalMovimento(
    tipo: TipoMovimento,
    nome: String,
    on_fechar: Callback<()>,
    on_concluido: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let quantidade = RwSignal::new(String::new());
    let (salvando, set_salvando) = signal(false);
    let nome_produto = StoredValue::new(nome.clone());

    let confirmar = move |_| {
        let nome = nome_produto.get_value();
        let valor: i64 = quantidade.get().trim().parse().unwrap_or(0);
        if let Err(mensagem) = model::valida_movimento(&nome, valor) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&mensagem);
            }
            return;
        }

        set_salvando.set(true);
        let client = session.client();
        leptos::task::spawn_local(async move {
            let resultado = match tipo {
                TipoMovimento::Entrada => api::entrada(&client, &nome, valor).await,
                TipoMovimento::Saida => api::saida(&client, &nome, valor).await,
            };
            match resultado {
                Ok(()) => {
                    let _ = set_salvando.try_set(false);
                    on_concluido.run(());
                    on_fechar.run(());
                }
                Err(e) => {
                    log::error!("Erro ao movimentar estoque: {}", e);
                    let _ = set_salvando.try_set(false);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Erro ao registrar o movimento.");
                    }
                }
            }
        });
    };

    view! {
        <div class="modal-fundo" on:click=move |_| on_fechar.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h3>{tipo.titulo()}</h3>
                <p class="modal__produto">{nome}</p>
                <label>
                    "Quantidade"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantidade.get()
                        on:input=move |ev| quantidade.set(event_target_value(&ev))
                    />
                </label>
                <div class="modal__acoes">
                    <button on:click=move |_| on_fechar.run(())>"Cancelar"</button>
                    <button
                        class="botao-primario"
                        disabled=move || salvando.get()
                        on:click=confirmar
                    >
                        {move || {
                            if salvando.get() { "Salvando..." } else { tipo.rotulo_confirmar() }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
