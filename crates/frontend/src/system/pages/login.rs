use leptos::prelude::*;

use crate::routes::{use_navegacao, Rota};
use crate::system::auth::api;
use crate::system::auth::session::use_session;

#[component]
pub fn PaginaLogin() -> impl IntoView {
    let session = use_session();
    let navegacao = use_navegacao();

    let usuario = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let (erro, set_erro) = signal(Option::<String>::None);
    let (enviando, set_enviando) = signal(false);

    let entrar = move || {
        let usuario_val = usuario.get_untracked();
        let senha_val = senha.get_untracked();
        if usuario_val.trim().is_empty() || senha_val.is_empty() {
            set_erro.set(Some("Informe usuário e senha.".to_string()));
            return;
        }

        set_enviando.set(true);
        set_erro.set(None);
        leptos::task::spawn_local(async move {
            match api::login(usuario_val, senha_val).await {
                Ok(token) => {
                    session.login(token);
                    let _ = set_enviando.try_set(false);
                    navegacao.ir(Rota::Planilha);
                }
                Err(e) => {
                    log::error!("Erro ao autenticar: {}", e);
                    let _ = set_erro.try_set(Some("Usuário ou senha inválidos.".to_string()));
                    let _ = set_enviando.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login">
            <h1>"Entrar"</h1>

            {move || erro.get().map(|e| view! { <div class="erro">{e}</div> })}

            <form on:submit=move |ev| {
                ev.prevent_default();
                entrar();
            }>
                <label>
                    "Usuário"
                    <input
                        type="text"
                        prop:value=move || usuario.get()
                        on:input=move |ev| usuario.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Senha"
                    <input
                        type="password"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || enviando.get()>
                    {move || if enviando.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
