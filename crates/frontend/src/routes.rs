use leptos::prelude::*;

/// Telas da aplicação. A navegação é um sinal trocado pelo cabeçalho e pelos
/// links internos; não há roteamento por URL.
#[derive(Clone, Debug, PartialEq)]
pub enum Rota {
    Planilha,
    Login,
    /// Produtos de um pedido, identificado pelo id emitido pelo backend.
    Produtos(String),
    RelatorioCompras,
    Estoque,
}

#[derive(Clone, Copy)]
pub struct Navegacao(RwSignal<Rota>);

impl Navegacao {
    pub fn new() -> Self {
        Self(RwSignal::new(Rota::Planilha))
    }

    pub fn ir(&self, rota: Rota) {
        self.0.set(rota);
    }

    pub fn atual(&self) -> Rota {
        self.0.get()
    }
}

impl Default for Navegacao {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navegacao() -> Navegacao {
    use_context::<Navegacao>().expect("Navegacao context not found")
}
