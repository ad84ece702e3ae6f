use leptos::prelude::*;

/// Rodapé de paginação "Página X de Y" com Voltar/Avançar.
///
/// Some quando há uma página só. As páginas são indexadas a partir de 1 e o
/// dono do sinal é responsável por mantê-las dentro do intervalo válido.
#[component]
pub fn Paginacao(
    #[prop(into)] pagina: Signal<usize>,
    #[prop(into)] total_paginas: Signal<usize>,
    on_mudar: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_paginas.get() > 1 }>
            <div class="paginacao">
                <span>
                    {move || format!("Página {} de {}", pagina.get(), total_paginas.get())}
                </span>
                <div class="paginacao__botoes">
                    <button
                        on:click=move |_| {
                            let atual = pagina.get();
                            if atual > 1 {
                                on_mudar.run(atual - 1);
                            }
                        }
                        disabled=move || pagina.get() <= 1
                    >
                        "Voltar"
                    </button>
                    <button
                        on:click=move |_| {
                            let atual = pagina.get();
                            if atual < total_paginas.get() {
                                on_mudar.run(atual + 1);
                            }
                        }
                        disabled=move || pagina.get() >= total_paginas.get()
                    >
                        "Avançar"
                    </button>
                </div>
            </div>
        </Show>
    }
}
