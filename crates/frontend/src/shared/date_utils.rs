//! Formatação de datas no padrão brasileiro (dd/mm/aaaa).

use chrono::NaiveDate;

pub use contracts::domain::pedido::parse_dia;

/// Formata uma data ISO ("2024-03-15" ou "2024-03-15T14:02:26Z") como
/// "15/03/2024". Valores não reconhecidos viram "-".
pub fn formata_data(iso: &str) -> String {
    match parse_dia(iso) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Versão para campos opcionais: `None` e valores inválidos viram "-".
pub fn formata_data_opt(iso: Option<&str>) -> String {
    match iso {
        Some(v) => formata_data(v),
        None => "-".to_string(),
    }
}

/// Data de hoje no formato ISO (aaaa-mm-dd), usada em nomes de arquivo e no
/// valor padrão do formulário de pedido.
pub fn hoje_iso() -> String {
    hoje().format("%Y-%m-%d").to_string()
}

/// Data de hoje formatada para exibição (dd/mm/aaaa).
pub fn hoje_br() -> String {
    hoje().format("%d/%m/%Y").to_string()
}

fn hoje() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_data_e_timestamp() {
        assert_eq!(formata_data("2024-03-15"), "15/03/2024");
        assert_eq!(formata_data("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn valores_invalidos_viram_traco() {
        assert_eq!(formata_data("amanhã"), "-");
        assert_eq!(formata_data(""), "-");
        assert_eq!(formata_data_opt(None), "-");
        assert_eq!(formata_data_opt(Some("2024-12-31")), "31/12/2024");
    }
}
