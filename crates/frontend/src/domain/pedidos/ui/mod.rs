mod form;
mod list;

pub use form::FormularioPedido;
pub use list::PlanilhaControle;
