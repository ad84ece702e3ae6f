use crate::domain::estoque::ui::Estoque;
use crate::domain::pedidos::ui::PlanilhaControle;
use crate::domain::produtos::ui::ProdutosPorPedido;
use crate::domain::relatorio::ui::RelatorioCompras;
use crate::layout::header::Cabecalho;
use crate::routes::{Navegacao, Rota};
use crate::system::auth::session::SessionProvider;
use crate::system::pages::login::PaginaLogin;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let navegacao = Navegacao::new();
    provide_context(navegacao);

    view! {
        <SessionProvider>
            <Cabecalho />
            <main class="conteudo">
                {move || match navegacao.atual() {
                    Rota::Planilha => view! { <PlanilhaControle /> }.into_any(),
                    Rota::Login => view! { <PaginaLogin /> }.into_any(),
                    Rota::Produtos(pedido_id) => {
                        view! { <ProdutosPorPedido pedido_id=pedido_id /> }.into_any()
                    }
                    Rota::RelatorioCompras => view! { <RelatorioCompras /> }.into_any(),
                    Rota::Estoque => view! { <Estoque /> }.into_any(),
                }}
            </main>
        </SessionProvider>
    }
}
