use serde::{Deserialize, Serialize};

/// A configured financial indicator ("view") of the ERP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialView {
    pub id: i64,
    pub nome: String,
    /// 1 = active
    pub situacao: i32,
    pub periodo_padrao_meses: u32,
}

impl FinancialView {
    /// Card shown under the "not allowed" overlay.
    pub fn placeholder() -> Self {
        Self {
            id: 1,
            nome: "Indicador".to_string(),
            situacao: 1,
            periodo_padrao_meses: 12,
        }
    }

    pub fn is_active(&self) -> bool {
        self.situacao == 1
    }
}

/// Caption under the page title, e.g. "3 indicadores encontrados".
pub fn views_found_caption(count: usize) -> String {
    if count == 1 {
        format!("{} indicador encontrado", count)
    } else {
        format!("{} indicadores encontrados", count)
    }
}
