use serde::{Deserialize, Serialize};

use crate::shared::options::NamedEntity;

/// Patrimônio: a tracked asset (tractor, truck, harvester) that consumes fuel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub descricao: String,
}

impl NamedEntity for Asset {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> String {
        self.descricao.clone()
    }
}
