use contracts::domain::pedido::Pedido;
use leptos::prelude::*;

use crate::domain::pedidos::api;
use crate::shared::date_utils::hoje_iso;
use crate::system::auth::session::use_session;

/// Formulário modal de criação/edição de pedido. Campos obrigatórios seguem
/// o contrato do backend; a validação real é do servidor.
#[component]
pub fn FormularioPedido(
    #[prop(optional_no_strip)] pedido: Option<Pedido>,
    on_fechar: Callback<()>,
    on_salvar: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let editando_id = pedido.as_ref().and_then(|p| p.id.clone());
    let titulo = if editando_id.is_some() {
        "Editar Pedido"
    } else {
        "Novo Pedido"
    };

    let data_pedido = RwSignal::new(
        pedido
            .as_ref()
            .map(|p| p.data_pedido.clone())
            .unwrap_or_else(hoje_iso),
    );
    let cliente = RwSignal::new(pedido.as_ref().map(|p| p.cliente.clone()).unwrap_or_default());
    let numero_pedido = RwSignal::new(
        pedido
            .as_ref()
            .map(|p| p.numero_pedido.clone())
            .unwrap_or_default(),
    );
    let numero_nfe = RwSignal::new(
        pedido
            .as_ref()
            .map(|p| p.numero_nfe.clone())
            .unwrap_or_default(),
    );
    let financeira = RwSignal::new(
        pedido
            .as_ref()
            .map(|p| p.financeira.clone())
            .unwrap_or_default(),
    );
    let data_prevista = RwSignal::new(
        pedido
            .as_ref()
            .map(|p| p.data_prevista.clone())
            .unwrap_or_default(),
    );
    let transportadora = RwSignal::new(
        pedido
            .as_ref()
            .and_then(|p| p.transportadora.clone())
            .unwrap_or_default(),
    );
    let observacao = RwSignal::new(
        pedido
            .as_ref()
            .and_then(|p| p.observacao.clone())
            .unwrap_or_default(),
    );

    let (salvando, set_salvando) = signal(false);
    let (erro, set_erro) = signal(Option::<String>::None);

    let salvar = move || {
        let obrigatorios = [
            data_pedido.get_untracked(),
            cliente.get_untracked(),
            numero_pedido.get_untracked(),
            numero_nfe.get_untracked(),
            financeira.get_untracked(),
            data_prevista.get_untracked(),
        ];
        if obrigatorios.iter().any(|campo| campo.trim().is_empty()) {
            set_erro.set(Some("Preencha todos os campos obrigatórios.".to_string()));
            return;
        }

        let transportadora_val = transportadora.get_untracked();
        let observacao_val = observacao.get_untracked();
        let corpo = Pedido {
            id: None,
            data_pedido: data_pedido.get_untracked(),
            cliente: cliente.get_untracked(),
            numero_pedido: numero_pedido.get_untracked(),
            numero_nfe: numero_nfe.get_untracked(),
            financeira: financeira.get_untracked(),
            data_prevista: data_prevista.get_untracked(),
            transportadora: if transportadora_val.trim().is_empty() {
                None
            } else {
                Some(transportadora_val)
            },
            observacao: if observacao_val.trim().is_empty() {
                None
            } else {
                Some(observacao_val)
            },
            data_saida: None,
            status: None,
            data_criacao: None,
            data_atualizacao: None,
        };

        set_salvando.set(true);
        set_erro.set(None);

        let client = session.client();
        let id = editando_id.clone();
        leptos::task::spawn_local(async move {
            let resultado = match &id {
                Some(id) => api::atualizar(&client, id, &corpo).await,
                None => api::criar(&client, &corpo).await,
            };
            match resultado {
                Ok(_) => {
                    let _ = set_salvando.try_set(false);
                    on_salvar.run(());
                    on_fechar.run(());
                }
                Err(e) => {
                    log::error!("Erro ao salvar pedido: {}", e);
                    let _ = set_erro
                        .try_set(Some("Erro ao salvar pedido. Tente novamente.".to_string()));
                    let _ = set_salvando.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal__cabecalho">
                    <h2>{titulo}</h2>
                    <button on:click=move |_| on_fechar.run(())>"×"</button>
                </div>

                {move || erro.get().map(|e| view! { <div class="erro">{e}</div> })}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    salvar();
                }>
                    <div class="formulario__grade">
                        <label>
                            "Data do Pedido *"
                            <input
                                type="date"
                                prop:value=move || data_pedido.get()
                                on:input=move |ev| data_pedido.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Cliente *"
                            <input
                                type="text"
                                placeholder="Nome do cliente"
                                prop:value=move || cliente.get()
                                on:input=move |ev| cliente.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Número do Pedido *"
                            <input
                                type="text"
                                placeholder="Ex: 5319"
                                prop:value=move || numero_pedido.get()
                                on:input=move |ev| numero_pedido.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Número da NFE *"
                            <input
                                type="text"
                                placeholder="Ex: 5131"
                                prop:value=move || numero_nfe.get()
                                on:input=move |ev| numero_nfe.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Financeira *"
                            <input
                                type="text"
                                placeholder="Nome da financeira"
                                prop:value=move || financeira.get()
                                on:input=move |ev| financeira.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Data Prevista de Saída *"
                            <input
                                type="date"
                                prop:value=move || data_prevista.get()
                                on:input=move |ev| data_prevista.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Transportadora"
                            <input
                                type="text"
                                placeholder="Nome da transportadora (opcional)"
                                prop:value=move || transportadora.get()
                                on:input=move |ev| transportadora.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label>
                        "Observação"
                        <textarea
                            placeholder="Observações adicionais (opcional)"
                            prop:value=move || observacao.get()
                            on:input=move |ev| observacao.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="modal__rodape">
                        <button type="button" on:click=move |_| on_fechar.run(())>
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class="botao-primario"
                            disabled=move || salvando.get()
                        >
                            {move || if salvando.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
