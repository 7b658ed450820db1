use chrono::NaiveDate;

use super::record::Line;
use crate::core::{CurrencyCode, Date, DateRangeError, LineError, MonetaryAmount, RecordCode};

/// Builder for ledger lines.
///
/// ```
/// use chrono::NaiveDate;
/// use ledgerline::line::LineBuilder;
/// use rust_decimal_macros::dec;
///
/// let line = LineBuilder::new('A', NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 1400, 8400, "RE-2024-001")
///     .invoice_number("RE-2024-001")
///     .gross_amount(dec!(119.00))
///     .vat_amount(dec!(19.00))
///     .build()
///     .unwrap();
///
/// assert_eq!(line.to_strings()[9], "119,00");
/// ```
#[derive(Debug, Clone)]
pub struct LineBuilder {
    line: Line,
    date_error: Option<DateRangeError>,
}

impl LineBuilder {
    /// Start a line with the fields the validation rules require.
    pub fn new(
        record_code: impl Into<RecordCode>,
        value_date: NaiveDate,
        debit_account: u64,
        credit_account: u64,
        posting_text: impl Into<String>,
    ) -> Self {
        let mut builder = Self {
            line: Line {
                record_code: record_code.into(),
                debit_account,
                credit_account,
                posting_text: posting_text.into(),
                ..Default::default()
            },
            date_error: None,
        };
        builder.line.value_date = builder.checked_date(value_date);
        builder
    }

    pub fn invoice_date(mut self, date: NaiveDate) -> Self {
        self.line.invoice_date = self.checked_date(date);
        self
    }

    /// Out-of-range dates are held back and reported by `build`.
    fn checked_date(&mut self, date: NaiveDate) -> Date {
        Date::new(date).unwrap_or_else(|err| {
            self.date_error.get_or_insert(err);
            Date::ZERO
        })
    }

    pub fn cost_center(mut self, cost_center: u64) -> Self {
        self.line.cost_center = cost_center;
        self
    }

    pub fn cost_object(mut self, cost_object: u64) -> Self {
        self.line.cost_object = cost_object;
        self
    }

    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.line.invoice_number = number.into();
        self
    }

    pub fn reference_number(mut self, reference: impl Into<String>) -> Self {
        self.line.reference_number = reference.into();
        self
    }

    pub fn gross_amount(mut self, amount: impl Into<MonetaryAmount>) -> Self {
        self.line.gross_amount = amount.into();
        self
    }

    pub fn vat_amount(mut self, amount: impl Into<MonetaryAmount>) -> Self {
        self.line.vat_amount = amount.into();
        self
    }

    /// Set the foreign currency and its gross and VAT amounts together.
    pub fn foreign_currency(
        mut self,
        code: impl Into<CurrencyCode>,
        gross: impl Into<MonetaryAmount>,
        vat: impl Into<MonetaryAmount>,
    ) -> Self {
        self.line.fc_code = code.into();
        self.line.fc_gross_amount = gross.into();
        self.line.fc_vat_amount = vat.into();
        self
    }

    /// Counterparty name lines 1-3; pass `""` for unused lines.
    pub fn ar_name(
        mut self,
        name1: impl Into<String>,
        name2: impl Into<String>,
        name3: impl Into<String>,
    ) -> Self {
        self.line.ar_name1 = name1.into();
        self.line.ar_name2 = name2.into();
        self.line.ar_name3 = name3.into();
        self
    }

    pub fn ar_title(mut self, title: impl Into<String>) -> Self {
        self.line.ar_title = title.into();
        self
    }

    /// Counterparty postal address.
    pub fn ar_address(
        mut self,
        street: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.line.ar_street_name = street.into();
        self.line.ar_zip_code = zip_code.into();
        self.line.ar_city = city.into();
        self.line.ar_country = country.into();
        self
    }

    pub fn ar_language_code(mut self, code: &str) -> Self {
        self.line.ar_language_code = code.into();
        self
    }

    /// Contact person, telephone, fax, email, and URL; `None` leaves a column empty.
    pub fn ar_contact(
        mut self,
        person: Option<String>,
        telephone: Option<String>,
        fax: Option<String>,
        email: Option<String>,
        url: Option<String>,
    ) -> Self {
        self.line.ar_contact_person = person.unwrap_or_default();
        self.line.ar_telephone = telephone.unwrap_or_default();
        self.line.ar_fax = fax.unwrap_or_default();
        self.line.ar_email_address = email.unwrap_or_default().into();
        self.line.ar_url = url.unwrap_or_default();
        self
    }

    pub fn ar_net_days(mut self, days: u32) -> Self {
        self.line.ar_net_days = days;
        self
    }

    /// Build the line, failing with every validation defect at once.
    ///
    /// A date outside `0000..=9999` fails with [`LineError::DateRange`]
    /// before validation runs.
    pub fn build(self) -> Result<Line, LineError> {
        let line = self.build_unchecked()?;
        let errors = line.validate();
        if !errors.is_empty() {
            return Err(LineError::Validation(errors));
        }
        Ok(line)
    }

    /// Build without running validation. Out-of-range dates still fail.
    pub fn build_unchecked(self) -> Result<Line, LineError> {
        match self.date_error {
            Some(err) => Err(err.into()),
            None => Ok(self.line),
        }
    }
}
