use serde::{Deserialize, Serialize};

use crate::shared::options::NamedEntity;

/// Almoxarifado: stock-out location fuel is drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub nome: String,
}

impl NamedEntity for Warehouse {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> String {
        self.nome.clone()
    }
}
