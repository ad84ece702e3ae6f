use leptos::prelude::*;

use super::storage;
use crate::shared::api_client::ApiClient;

/// Sessão do usuário. O token não vive em estado global mutável: fica num
/// sinal fornecido via contexto, e todo cliente de API é construído a partir
/// dele. O ciclo de vida é login/logout.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Cliente de API com o token atual anexado (quando presente).
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.token.get_untracked())
    }

    pub fn login(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    pub fn logout(&self) {
        storage::clear_token();
        self.token.set(None);
    }
}

/// Fornece a [`Session`] via contexto para a árvore de componentes.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    // Restaura o token persistido, se houver
    let session = Session {
        token: RwSignal::new(storage::get_token()),
    };
    provide_context(session);

    children()
}

/// Acesso à sessão corrente; exige um [`SessionProvider`] acima na árvore.
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
