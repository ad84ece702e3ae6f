mod list;
mod modal;

pub use list::Estoque;
