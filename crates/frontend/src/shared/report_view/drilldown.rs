//! Single-select drill-down over a collection keyed by entity id.

use contracts::shared::filter::ALL;
use contracts::shared::options::{NamedEntity, OptionList};

pub fn drilldown_options<T: NamedEntity>(items: &[T]) -> OptionList {
    OptionList::from_entities(items)
}

/// First entity of the collection, or `"_"` when it is empty.
pub fn default_key<T: NamedEntity>(items: &[T]) -> String {
    items
        .first()
        .map(|item| item.option_value())
        .unwrap_or_else(|| ALL.to_string())
}

/// Record for `key`, or the explicit `fallback` when the lookup misses.
pub fn select_or<T, F>(items: &[T], key: &str, fallback: F) -> T
where
    T: NamedEntity + Clone,
    F: FnOnce() -> T,
{
    items
        .iter()
        .find(|item| item.option_value() == key)
        .cloned()
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d403_grain_stock::ProducerGrainStock;

    fn producer(id: i64, name: &str, balance: f64) -> ProducerGrainStock {
        ProducerGrainStock {
            id_produtor: id,
            produtor: name.to_string(),
            saldo_final: balance,
            ..ProducerGrainStock::none()
        }
    }

    #[test]
    fn test_empty_collection_falls_back() {
        let stocks: Vec<ProducerGrainStock> = Vec::new();
        let key = default_key(&stocks);
        assert_eq!(key, "_");
        let selected = select_or(&stocks, &key, ProducerGrainStock::none);
        assert_eq!(selected.produtor, "NENHUM");
        assert_eq!(selected.saldo_anterior, 0.0);
    }

    #[test]
    fn test_defaults_to_first_producer() {
        let stocks = vec![producer(3, "Sítio Alegre", 10.0), producer(9, "Fazenda Sol", 20.0)];
        let key = default_key(&stocks);
        assert_eq!(key, "3");
        assert_eq!(select_or(&stocks, &key, ProducerGrainStock::none).saldo_final, 10.0);
        assert_eq!(drilldown_options(&stocks).label_of("9"), Some("Fazenda Sol"));
    }

    #[test]
    fn test_removed_producer_falls_back() {
        let stocks = vec![producer(3, "Sítio Alegre", 10.0)];
        let selected = select_or(&stocks, "9", ProducerGrainStock::none);
        assert_eq!(selected, ProducerGrainStock::none());
    }
}
