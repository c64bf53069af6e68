use serde::{Deserialize, Serialize};

use crate::shared::options::NamedEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetType {
    pub id: i64,
    pub nome: String,
}

impl NamedEntity for AssetType {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> String {
        self.nome.clone()
    }
}
