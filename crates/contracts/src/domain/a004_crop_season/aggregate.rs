use serde::{Deserialize, Serialize};

use crate::shared::options::NamedEntity;

/// Safra: crop season used to group production costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSeason {
    pub id: i64,
    pub nome: String,
}

impl NamedEntity for CropSeason {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> String {
        self.nome.clone()
    }
}
