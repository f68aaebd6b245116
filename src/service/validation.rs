//! Field validation for product payloads.

use crate::model::{NewProduct, ProductInput};
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

const MIN_DESCRIPTION_CHARS: usize = 10;

/// Display label for an internal field key. Unknown keys pass through unchanged.
pub fn field_label(field: &str) -> &str {
    match field {
        "nome" => "Nome",
        "descricao" => "Descrição",
        "preco" => "Preço",
        "quantidadeEstoque" => "Quantidade",
        "fabricante" => "Fabricante",
        other => other,
    }
}

/// Ordered label -> message map. Serializes as a JSON object in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field` under its display label. A second failure for the same field replaces the first.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        let label = field_label(field);
        let message = message.into();
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some(entry) => entry.1 = message,
            None => self.0.push((label.to_string(), message)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, m)| (l.as_str(), m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(l, m)| format!("{}: {}", l, m)).collect();
        f.write_str(&parts.join("; "))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, message) in &self.0 {
            map.serialize_entry(label, message)?;
        }
        map.end()
    }
}

/// Trimmed-empty or absent text is missing; otherwise the original value is kept.
fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Keep a passing value, or record the failure for `field` and yield `None`.
fn check<T>(errors: &mut FieldErrors, field: &str, rule: Result<T, &str>) -> Option<T> {
    match rule {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

pub struct ProductValidator;

impl ProductValidator {
    /// Check every rule (no short-circuit). Returns the validated fields, or one message per failing field.
    pub fn validate(input: &ProductInput) -> Result<NewProduct, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = check(
            &mut errors,
            "nome",
            non_blank(input.name.as_deref()).ok_or("O nome do produto é obrigatório."),
        );

        let description = check(
            &mut errors,
            "descricao",
            match non_blank(input.description.as_deref()) {
                None => Err("A descrição é obrigatória."),
                Some(d) if d.chars().count() < MIN_DESCRIPTION_CHARS => {
                    Err("A descrição deve ter no mínimo 10 caracteres.")
                }
                Some(d) => Ok(d),
            },
        );

        let price = check(
            &mut errors,
            "preco",
            match input.price {
                None => Err("O preço é obrigatório."),
                Some(p) if p < Decimal::new(1, 2) => Err("O preço deve ser maior que zero."),
                Some(p) => Ok(p),
            },
        );

        let stock_quantity = check(
            &mut errors,
            "quantidadeEstoque",
            match input.stock_quantity {
                None => Err("A quantidade é obrigatória."),
                Some(q) if q < 1 => Err("A quantidade deve ser maior que zero."),
                Some(q) => Ok(q),
            },
        );

        let manufacturer = check(
            &mut errors,
            "fabricante",
            non_blank(input.manufacturer.as_deref()).ok_or("O fabricante é obrigatório."),
        );

        // Every `None` above has recorded its message, so `errors` is non-empty on this path.
        match (name, description, price, stock_quantity, manufacturer) {
            (Some(name), Some(description), Some(price), Some(stock_quantity), Some(manufacturer)) => Ok(NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
                stock_quantity,
                manufacturer: manufacturer.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn valid() -> ProductInput {
        ProductInput {
            id: None,
            name: Some("Mouse".into()),
            description: Some("Mouse óptico USB".into()),
            price: Some(Decimal::from_str("49.90").unwrap()),
            stock_quantity: Some(10),
            manufacturer: Some("Logitech".into()),
        }
    }

    #[test]
    fn accepts_valid_product() {
        let p = ProductValidator::validate(&valid()).unwrap();
        assert_eq!(p.name, "Mouse");
        assert_eq!(p.stock_quantity, 10);
    }

    #[test]
    fn each_missing_field_fails_alone() {
        let clears: [(&str, fn(&mut ProductInput)); 5] = [
            ("Nome", |i| i.name = None),
            ("Descrição", |i| i.description = None),
            ("Preço", |i| i.price = None),
            ("Quantidade", |i| i.stock_quantity = None),
            ("Fabricante", |i| i.manufacturer = None),
        ];
        for (label, clear) in clears {
            let mut input = valid();
            clear(&mut input);
            let errors = ProductValidator::validate(&input).unwrap_err();
            assert_eq!(errors.len(), 1, "{label}");
            assert!(errors.get(label).is_some(), "{label}");
        }
    }

    #[test]
    fn accepted_values_are_kept_verbatim() {
        let mut input = valid();
        input.name = Some("  Mouse ".into());
        let p = ProductValidator::validate(&input).unwrap();
        assert_eq!(p.name, "  Mouse ");
        assert_eq!(p.description, "Mouse óptico USB");
        assert_eq!(p.price, Decimal::from_str("49.90").unwrap());
        assert_eq!(p.manufacturer, "Logitech");
    }

    #[test]
    fn short_description_has_single_entry() {
        let mut input = valid();
        input.description = Some("short".into());
        let errors = ProductValidator::validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("Descrição"),
            Some("A descrição deve ter no mínimo 10 caracteres.")
        );
    }

    #[test]
    fn description_length_counts_characters() {
        let mut input = valid();
        // 10 characters, 14 bytes
        input.description = Some("ação ações".into());
        assert!(ProductValidator::validate(&input).is_ok());
        input.description = Some("çççççççç".into());
        assert!(ProductValidator::validate(&input).is_err());
    }

    #[test]
    fn blank_description_reports_required_only() {
        let mut input = valid();
        input.description = Some("   ".into());
        let errors = ProductValidator::validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("Descrição"), Some("A descrição é obrigatória."));
    }

    #[test]
    fn empty_payload_reports_every_field_in_order() {
        let errors = ProductValidator::validate(&ProductInput::default()).unwrap_err();
        let labels: Vec<&str> = errors.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Nome", "Descrição", "Preço", "Quantidade", "Fabricante"]);
        assert_eq!(errors.get("Preço"), Some("O preço é obrigatório."));
        assert_eq!(errors.get("Quantidade"), Some("A quantidade é obrigatória."));
    }

    #[test]
    fn price_and_quantity_lower_bounds() {
        let mut input = valid();
        input.price = Some(Decimal::from_str("0.009").unwrap());
        input.stock_quantity = Some(0);
        let errors = ProductValidator::validate(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("Preço"), Some("O preço deve ser maior que zero."));
        assert_eq!(errors.get("Quantidade"), Some("A quantidade deve ser maior que zero."));

        input.price = Some(Decimal::from_str("0.01").unwrap());
        input.stock_quantity = Some(1);
        assert!(ProductValidator::validate(&input).is_ok());
    }

    #[test]
    fn whitespace_name_and_manufacturer_are_blank() {
        let mut input = valid();
        input.name = Some(" \t".into());
        input.manufacturer = Some(String::new());
        let errors = ProductValidator::validate(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("Nome"), Some("O nome do produto é obrigatório."));
        assert_eq!(errors.get("Fabricante"), Some("O fabricante é obrigatório."));
    }

    #[test]
    fn labels_pass_unknown_keys_through() {
        assert_eq!(field_label("quantidadeEstoque"), "Quantidade");
        assert_eq!(field_label("sku"), "sku");
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.insert("preco", "b");
        errors.insert("nome", "a");
        assert_eq!(serde_json::to_string(&errors).unwrap(), r#"{"Preço":"b","Nome":"a"}"#);
    }
}
