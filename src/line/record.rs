use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{CountryCode, CurrencyCode, Date, EmailAddress, MonetaryAmount, RecordCode};

/// One ledger line: a single accounting posting in the export format.
///
/// JSON keys are the column header names (`RecordCode`, `FCCode`, `ARURL`,
/// …). Absent keys and `null` values decode to the field default; unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Line {
    /// Posting type tag.
    pub record_code: RecordCode,
    /// Document date (optional).
    pub invoice_date: Date,
    /// Posting date (required).
    pub value_date: Date,
    #[serde(deserialize_with = "nullable")]
    pub debit_account: u64,
    #[serde(deserialize_with = "nullable")]
    pub credit_account: u64,
    #[serde(deserialize_with = "nullable")]
    pub cost_center: u64,
    #[serde(deserialize_with = "nullable")]
    pub cost_object: u64,
    #[serde(deserialize_with = "nullable")]
    pub invoice_number: String,
    #[serde(deserialize_with = "nullable")]
    pub reference_number: String,
    /// Gross amount in the home (bookkeeping) currency.
    pub gross_amount: MonetaryAmount,
    #[serde(rename = "FCCode", deserialize_with = "nullable")]
    pub fc_code: CurrencyCode,
    /// Gross amount in the foreign currency `fc_code`.
    #[serde(rename = "FCGrossAmount")]
    pub fc_gross_amount: MonetaryAmount,
    /// VAT amount in the home currency.
    #[serde(rename = "VATAmount")]
    pub vat_amount: MonetaryAmount,
    /// VAT amount in the foreign currency `fc_code`.
    #[serde(rename = "FCVATAmount")]
    pub fc_vat_amount: MonetaryAmount,
    #[serde(deserialize_with = "nullable")]
    pub posting_text: String,

    // Accounts-receivable master data for the counterparty.
    #[serde(rename = "ARTitle", deserialize_with = "nullable")]
    pub ar_title: String,
    #[serde(rename = "ARName1", deserialize_with = "nullable")]
    pub ar_name1: String,
    #[serde(rename = "ARName2", deserialize_with = "nullable")]
    pub ar_name2: String,
    #[serde(rename = "ARName3", deserialize_with = "nullable")]
    pub ar_name3: String,
    #[serde(rename = "ARStreetName", deserialize_with = "nullable")]
    pub ar_street_name: String,
    #[serde(rename = "ARZipCode", deserialize_with = "nullable")]
    pub ar_zip_code: String,
    #[serde(rename = "ARCity", deserialize_with = "nullable")]
    pub ar_city: String,
    #[serde(rename = "ARCountry", deserialize_with = "nullable")]
    pub ar_country: String,
    #[serde(rename = "ARLanguageCode", deserialize_with = "nullable")]
    pub ar_language_code: CountryCode,
    #[serde(rename = "ARContactPerson", deserialize_with = "nullable")]
    pub ar_contact_person: String,
    #[serde(rename = "ARTelephone", deserialize_with = "nullable")]
    pub ar_telephone: String,
    #[serde(rename = "ARFax", deserialize_with = "nullable")]
    pub ar_fax: String,
    #[serde(rename = "AREmailAddress", deserialize_with = "nullable")]
    pub ar_email_address: EmailAddress,
    #[serde(rename = "ARURL", deserialize_with = "nullable")]
    pub ar_url: String,
    /// Days until the receivable is due.
    #[serde(rename = "ARNetDays", deserialize_with = "nullable")]
    pub ar_net_days: u32,
}

/// `null` decodes to the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
