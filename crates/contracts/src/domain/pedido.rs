use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pedido de venda acompanhado da criação até a expedição.
///
/// O campo `status` é um texto derivado pelo servidor; o cliente só o
/// interpreta por busca de substring (ver [`Situacao`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "dataPedido")]
    pub data_pedido: String,

    pub cliente: String,

    #[serde(rename = "numeroPedido")]
    pub numero_pedido: String,

    #[serde(rename = "numeroNfe")]
    pub numero_nfe: String,

    pub financeira: String,

    #[serde(rename = "dataPrevista")]
    pub data_prevista: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportadora: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,

    #[serde(rename = "dataSaida", default, skip_serializing_if = "Option::is_none")]
    pub data_saida: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "dataCriacao", default, skip_serializing_if = "Option::is_none")]
    pub data_criacao: Option<String>,

    #[serde(rename = "dataAtualizacao", default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<String>,
}

impl Pedido {
    pub fn situacao(&self) -> Situacao {
        Situacao::classifica(self.status.as_deref())
    }

    /// Data prevista como data de calendário, ignorando a parte de hora de
    /// timestamps ISO. `None` quando o campo não é uma data reconhecível.
    pub fn data_prevista_dia(&self) -> Option<NaiveDate> {
        parse_dia(&self.data_prevista)
    }
}

/// Extrai a parte de data (`yyyy-mm-dd`) de uma string ISO.
pub fn parse_dia(iso: &str) -> Option<NaiveDate> {
    let parte = iso.split('T').next().unwrap_or(iso);
    NaiveDate::parse_from_str(parte, "%Y-%m-%d").ok()
}

/// Interpretação do texto de status do servidor.
///
/// A classificação é por substring, sem case: "saiu" marca expedido,
/// "atraso" marca atrasado, qualquer outro texto não vazio é produção em
/// andamento. Status ausente ou vazio fica em [`Situacao::Indefinida`], que
/// ordena por último.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situacao {
    EmAtraso,
    EmProducao,
    Saiu,
    Indefinida,
}

impl Situacao {
    pub fn classifica(status: Option<&str>) -> Situacao {
        let texto = status.unwrap_or("").trim().to_lowercase();
        if texto.is_empty() {
            Situacao::Indefinida
        } else if texto.contains("saiu") {
            Situacao::Saiu
        } else if texto.contains("atraso") {
            Situacao::EmAtraso
        } else {
            Situacao::EmProducao
        }
    }

    /// Prioridade de ordenação na planilha: atrasados primeiro, depois em
    /// produção, depois expedidos, por fim status indefinido.
    pub fn prioridade(&self) -> u8 {
        match self {
            Situacao::EmAtraso => 0,
            Situacao::EmProducao => 1,
            Situacao::Saiu => 2,
            Situacao::Indefinida => 3,
        }
    }
}

/// Resposta paginada de `GET /pedidos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginaPedidos {
    #[serde(default)]
    pub pedidos: Vec<Pedido>,

    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

/// Corpo de `PATCH /pedidos/:id/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtualizaStatus {
    #[serde(rename = "dataSaida", skip_serializing_if = "Option::is_none")]
    pub data_saida: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifica_por_substring_sem_case() {
        assert_eq!(Situacao::classifica(Some("Saiu em 12/05")), Situacao::Saiu);
        assert_eq!(Situacao::classifica(Some("SAIU")), Situacao::Saiu);
        assert_eq!(Situacao::classifica(Some("Em atraso")), Situacao::EmAtraso);
        assert_eq!(
            Situacao::classifica(Some("Em produção")),
            Situacao::EmProducao
        );
        assert_eq!(
            Situacao::classifica(Some("aguardando peça")),
            Situacao::EmProducao
        );
    }

    #[test]
    fn status_ausente_ou_vazio_fica_indefinido() {
        assert_eq!(Situacao::classifica(None), Situacao::Indefinida);
        assert_eq!(Situacao::classifica(Some("")), Situacao::Indefinida);
        assert_eq!(Situacao::classifica(Some("   ")), Situacao::Indefinida);
    }

    #[test]
    fn prioridade_atrasado_vem_primeiro() {
        assert!(Situacao::EmAtraso.prioridade() < Situacao::EmProducao.prioridade());
        assert!(Situacao::EmProducao.prioridade() < Situacao::Saiu.prioridade());
        assert!(Situacao::Saiu.prioridade() < Situacao::Indefinida.prioridade());
    }

    #[test]
    fn parse_dia_aceita_data_e_timestamp() {
        assert_eq!(
            parse_dia("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            parse_dia("2024-03-15T14:02:26.123Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_dia("amanhã"), None);
    }

    #[test]
    fn pedido_serializa_campos_no_contrato_camel_case() {
        let pedido = Pedido {
            id: None,
            data_pedido: "2024-05-01".into(),
            cliente: "ACME".into(),
            numero_pedido: "5319".into(),
            numero_nfe: "5131".into(),
            financeira: "Banco X".into(),
            data_prevista: "2024-05-10".into(),
            transportadora: None,
            observacao: None,
            data_saida: None,
            status: None,
            data_criacao: None,
            data_atualizacao: None,
        };
        let json = serde_json::to_value(&pedido).unwrap();
        assert_eq!(json["dataPedido"], "2024-05-01");
        assert_eq!(json["numeroPedido"], "5319");
        assert_eq!(json["numeroNfe"], "5131");
        assert_eq!(json["dataPrevista"], "2024-05-10");
        // id ausente nunca é enviado: o backend é dono da identidade
        assert!(json.get("_id").is_none());
    }
}
