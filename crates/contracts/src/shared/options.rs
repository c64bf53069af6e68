use serde::{Deserialize, Serialize};

use super::filter::ALL;

/// Label of the "all" option in filter selects.
pub const ALL_LABEL: &str = "Todos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Reference entity that can populate a select.
pub trait NamedEntity {
    fn option_value(&self) -> String;
    fn option_label(&self) -> String;
}

/// Ordered `(value, label)` list backing a select control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionList(Vec<SelectOption>);

impl OptionList {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self(options)
    }

    pub fn from_entities<T: NamedEntity>(items: &[T]) -> Self {
        Self(
            items
                .iter()
                .map(|item| SelectOption::new(item.option_value(), item.option_label()))
                .collect(),
        )
    }

    /// Entity options prefixed with the `"_"` sentinel.
    pub fn with_all<T: NamedEntity>(all_label: &str, items: &[T]) -> Self {
        let mut list = Self::from_entities(items);
        list.prepend_all(all_label);
        list
    }

    pub fn prepend_all(&mut self, all_label: &str) {
        self.0.insert(0, SelectOption::new(ALL, all_label));
    }

    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    pub fn first_value(&self) -> Option<&str> {
        self.0.first().map(|option| option.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.0.iter()
    }

    /// `(value, label)` pairs in display order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|option| (option.value.clone(), option.label.clone()))
            .collect()
    }
}

impl FromIterator<SelectOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(i64, &'static str);

    impl NamedEntity for Named {
        fn option_value(&self) -> String {
            self.0.to_string()
        }

        fn option_label(&self) -> String {
            self.1.to_string()
        }
    }

    #[test]
    fn test_all_option_comes_first() {
        let list = OptionList::with_all(ALL_LABEL, &[Named(3, "Trator"), Named(7, "Colheitadeira")]);
        let pairs = list.to_pairs();
        assert_eq!(pairs[0], ("_".to_string(), "Todos".to_string()));
        assert_eq!(pairs[1], ("3".to_string(), "Trator".to_string()));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_label_lookup() {
        let list = OptionList::with_all(ALL_LABEL, &[Named(3, "Trator")]);
        assert_eq!(list.label_of("3"), Some("Trator"));
        assert_eq!(list.label_of("_"), Some("Todos"));
        assert_eq!(list.label_of("9"), None);
    }

    #[test]
    fn test_empty_entities_still_offer_all() {
        let list = OptionList::with_all(ALL_LABEL, &Vec::<Named>::new());
        assert_eq!(list.first_value(), Some("_"));
    }
}
