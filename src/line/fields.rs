//! Ordered column registry for [`Line`].
//!
//! Every rendering (`headers`, `to_pairs`, `to_map`, `to_strings`) walks the
//! same static table, so the column order cannot drift between them.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::record::Line;
use crate::core::{MonetaryAmount, RenderConfig};

/// When a rendered value is replaced by an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suppress {
    Never,
    /// Integer columns rendered as `"0"`.
    ZeroCount,
    /// Amount columns rendered as the zero amount in the active separator.
    ZeroAmount,
}

impl Suppress {
    fn applies(self, rendered: &str, config: &RenderConfig) -> bool {
        match self {
            Self::Never => false,
            Self::ZeroCount => rendered == "0",
            Self::ZeroAmount => rendered == MonetaryAmount::ZERO.display_with(config.decimal_separator),
        }
    }
}

/// One export column: header name, renderer, and zero-suppression rule.
pub(crate) struct Field {
    pub(crate) name: &'static str,
    render: fn(&Line, &RenderConfig) -> String,
    suppress: Suppress,
}

impl Field {
    const fn new(name: &'static str, render: fn(&Line, &RenderConfig) -> String) -> Self {
        Self {
            name,
            render,
            suppress: Suppress::Never,
        }
    }

    const fn suppress_zero_count(mut self) -> Self {
        self.suppress = Suppress::ZeroCount;
        self
    }

    const fn suppress_zero_amount(mut self) -> Self {
        self.suppress = Suppress::ZeroAmount;
        self
    }

    /// Rendered display value with suppression applied.
    pub(crate) fn render(&self, line: &Line, config: &RenderConfig) -> String {
        let value = (self.render)(line, config);
        if self.suppress.applies(&value, config) {
            String::new()
        } else {
            value
        }
    }
}

fn amount(value: &MonetaryAmount, config: &RenderConfig) -> String {
    value.display_with(config.decimal_separator)
}

pub(crate) static FIELDS: [Field; 30] = [
    Field::new("RecordCode", |l, _| l.record_code.to_string()),
    Field::new("InvoiceDate", |l, _| l.invoice_date.to_string()),
    Field::new("ValueDate", |l, _| l.value_date.to_string()),
    Field::new("DebitAccount", |l, _| l.debit_account.to_string()),
    Field::new("CreditAccount", |l, _| l.credit_account.to_string()),
    Field::new("CostCenter", |l, _| l.cost_center.to_string()).suppress_zero_count(),
    Field::new("CostObject", |l, _| l.cost_object.to_string()).suppress_zero_count(),
    Field::new("InvoiceNumber", |l, _| l.invoice_number.clone()),
    Field::new("ReferenceNumber", |l, _| l.reference_number.clone()),
    Field::new("GrossAmount", |l, c| amount(&l.gross_amount, c)),
    Field::new("FCCode", |l, _| l.fc_code.to_string()),
    Field::new("FCGrossAmount", |l, c| amount(&l.fc_gross_amount, c)).suppress_zero_amount(),
    Field::new("VATAmount", |l, c| amount(&l.vat_amount, c)),
    Field::new("FCVATAmount", |l, c| amount(&l.fc_vat_amount, c)).suppress_zero_amount(),
    Field::new("PostingText", |l, _| l.posting_text.clone()),
    Field::new("ARTitle", |l, _| l.ar_title.clone()),
    Field::new("ARName1", |l, _| l.ar_name1.clone()),
    Field::new("ARName2", |l, _| l.ar_name2.clone()),
    Field::new("ARName3", |l, _| l.ar_name3.clone()),
    Field::new("ARStreetName", |l, _| l.ar_street_name.clone()),
    Field::new("ARZipCode", |l, _| l.ar_zip_code.clone()),
    Field::new("ARCity", |l, _| l.ar_city.clone()),
    Field::new("ARCountry", |l, _| l.ar_country.clone()),
    Field::new("ARLanguageCode", |l, _| l.ar_language_code.to_string()),
    Field::new("ARContactPerson", |l, _| l.ar_contact_person.clone()),
    Field::new("ARTelephone", |l, _| l.ar_telephone.clone()),
    Field::new("ARFax", |l, _| l.ar_fax.clone()),
    Field::new("AREmailAddress", |l, _| l.ar_email_address.to_string()),
    Field::new("ARURL", |l, _| l.ar_url.clone()),
    Field::new("ARNetDays", |l, _| l.ar_net_days.to_string()).suppress_zero_count(),
];

static HEADERS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| FIELDS.iter().map(|f| f.name).collect());

impl Line {
    /// Column header names in export order.
    pub fn headers() -> &'static [&'static str] {
        &HEADERS
    }

    /// Ordered `(header, display value)` pairs with zero suppression applied.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.to_pairs_with(&RenderConfig::default())
    }

    pub fn to_pairs_with(&self, config: &RenderConfig) -> Vec<(&'static str, String)> {
        tracing::trace!(separator = %config.decimal_separator, "rendering ledger line");
        FIELDS
            .iter()
            .map(|f| (f.name, f.render(self, config)))
            .collect()
    }

    /// Header name → display value. Same values as [`Line::to_strings`].
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.to_map_with(&RenderConfig::default())
    }

    pub fn to_map_with(&self, config: &RenderConfig) -> BTreeMap<&'static str, String> {
        self.to_pairs_with(config).into_iter().collect()
    }

    /// Display values positionally aligned with [`Line::headers`].
    pub fn to_strings(&self) -> Vec<String> {
        self.to_strings_with(&RenderConfig::default())
    }

    pub fn to_strings_with(&self, config: &RenderConfig) -> Vec<String> {
        self.to_pairs_with(config)
            .into_iter()
            .map(|(_, value)| value)
            .collect()
    }

    /// Display value of a single column, `None` for an unknown header.
    pub fn get(&self, name: &str) -> Option<String> {
        FIELDS
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.render(self, &RenderConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Date, RecordCode, RenderConfigBuilder};
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn header_names_are_unique() {
        let names: HashSet<_> = Line::headers().iter().collect();
        assert_eq!(names.len(), FIELDS.len());
    }

    #[test]
    fn first_columns_in_export_order() {
        assert_eq!(
            &Line::headers()[..5],
            &["RecordCode", "InvoiceDate", "ValueDate", "DebitAccount", "CreditAccount"]
        );
        assert_eq!(Line::headers().last(), Some(&"ARNetDays"));
    }

    #[test]
    fn default_line_suppresses_zero_columns() {
        let m = Line::default().to_map();
        for name in ["CostCenter", "CostObject", "ARNetDays", "FCGrossAmount", "FCVATAmount"] {
            assert_eq!(m[name], "", "{name}");
        }
        // Home-currency amounts are never suppressed.
        assert_eq!(m["GrossAmount"], "0,00");
        assert_eq!(m["VATAmount"], "0,00");
        assert_eq!(m["DebitAccount"], "0");
    }

    #[test]
    fn dot_separator_still_suppresses_zero_amounts() {
        let config = RenderConfigBuilder::new().decimal_separator('.').build();
        let line = Line {
            gross_amount: dec!(10).into(),
            ..Default::default()
        };
        let m = line.to_map_with(&config);
        assert_eq!(m["GrossAmount"], "10.00");
        assert_eq!(m["FCGrossAmount"], "");
    }

    #[test]
    fn fractional_cent_rounds_into_suppression() {
        let line = Line {
            fc_vat_amount: dec!(0.004).into(),
            ..Default::default()
        };
        assert_eq!(line.get("FCVATAmount").as_deref(), Some(""));
    }

    #[test]
    fn get_by_name() {
        let line = Line {
            record_code: RecordCode::new('S'),
            value_date: Date::from_ymd(2024, 1, 31).unwrap(),
            ..Default::default()
        };
        assert_eq!(line.get("RecordCode").as_deref(), Some("S"));
        assert_eq!(line.get("ValueDate").as_deref(), Some("20240131"));
        assert_eq!(line.get("Nope"), None);
    }
}
