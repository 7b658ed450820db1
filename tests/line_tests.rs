use chrono::NaiveDate;
use ledgerline::core::*;
use ledgerline::line::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn posting() -> Line {
    Line {
        record_code: RecordCode::new('A'),
        value_date: Date::new(date(2024, 3, 15)).unwrap(),
        debit_account: 100,
        credit_account: 200,
        posting_text: "Invoice 42".into(),
        ..Default::default()
    }
}

fn full_line() -> Line {
    LineBuilder::new('S', date(2024, 6, 30), 1400, 8400, "RE-2024-017 Beratung")
        .invoice_date(date(2024, 6, 15))
        .cost_center(12)
        .cost_object(3)
        .invoice_number("RE-2024-017")
        .reference_number("PO-889")
        .gross_amount(dec!(1190))
        .vat_amount(dec!(190))
        .foreign_currency("CHF", dec!(1150.4), dec!(183.68))
        .ar_title("Firma")
        .ar_name("Kunde AG", "Einkauf", "")
        .ar_address("Marienplatz 1", "80331", "München", "DE")
        .ar_language_code("DE")
        .ar_contact(
            Some("Erika Muster".into()),
            Some("+49 89 1234".into()),
            None,
            Some("einkauf@kunde.example".into()),
            Some("https://kunde.example".into()),
        )
        .ar_net_days(14)
        .build()
        .unwrap()
}

// --- Validation ---

#[test]
fn empty_line_has_five_defects() {
    let errors = Line::default().validate();
    assert_eq!(errors.len(), 5);
    let messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
    assert_eq!(
        messages,
        vec![
            "RecordCode is required",
            "ValueDate is required",
            "DebitAccount is required",
            "CreditAccount is required",
            "PostingText is required",
        ]
    );
}

#[test]
fn only_missing_accounts_reported() {
    let line = Line {
        debit_account: 0,
        credit_account: 0,
        ..posting()
    };
    let fields: Vec<_> = line.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["DebitAccount", "CreditAccount"]);
}

// --- Column contract ---

#[test]
fn headers_are_fixed() {
    assert_eq!(
        Line::headers(),
        &[
            "RecordCode",
            "InvoiceDate",
            "ValueDate",
            "DebitAccount",
            "CreditAccount",
            "CostCenter",
            "CostObject",
            "InvoiceNumber",
            "ReferenceNumber",
            "GrossAmount",
            "FCCode",
            "FCGrossAmount",
            "VATAmount",
            "FCVATAmount",
            "PostingText",
            "ARTitle",
            "ARName1",
            "ARName2",
            "ARName3",
            "ARStreetName",
            "ARZipCode",
            "ARCity",
            "ARCountry",
            "ARLanguageCode",
            "ARContactPerson",
            "ARTelephone",
            "ARFax",
            "AREmailAddress",
            "ARURL",
            "ARNetDays",
        ]
    );
}

#[test]
fn renderings_align_with_headers() {
    for line in [Line::default(), posting(), full_line()] {
        let headers = Line::headers();
        let row = line.to_strings();
        let map = line.to_map();
        assert_eq!(headers.len(), row.len());
        assert_eq!(headers.len(), map.len());
        for (i, name) in headers.iter().enumerate() {
            assert_eq!(map[name], row[i], "column {name}");
        }
    }
}

#[test]
fn pairs_follow_header_order() {
    let names: Vec<_> = full_line().to_pairs().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, Line::headers());
}

// --- Rendering ---

#[test]
fn end_to_end_posting() {
    let line = posting();
    assert!(line.validate().is_empty());
    assert_eq!(&line.to_strings()[0..5], &["A", "", "20240315", "100", "200"]);
}

#[test]
fn zero_suppression_in_map_and_row() {
    let line = posting();
    let map = line.to_map();
    let row = line.to_strings();
    for name in ["CostCenter", "CostObject", "ARNetDays", "FCGrossAmount", "FCVATAmount"] {
        let idx = Line::headers().iter().position(|h| *h == name).unwrap();
        assert_eq!(map[name], "", "{name} in map");
        assert_eq!(row[idx], "", "{name} in row");
    }
}

#[test]
fn non_zero_cost_center_renders() {
    let line = Line {
        cost_center: 7,
        ..posting()
    };
    assert_eq!(line.to_map()["CostCenter"], "7");
    assert_eq!(line.to_strings()[5], "7");
}

#[test]
fn full_line_row() {
    let row = full_line().to_strings();
    assert_eq!(row[1], "20240615");
    assert_eq!(row[5], "12");
    assert_eq!(row[9], "1190,00");
    assert_eq!(row[10], "CHF");
    assert_eq!(row[11], "1150,40");
    assert_eq!(row[12], "190,00");
    assert_eq!(row[13], "183,68");
    assert_eq!(row[21], "München");
    assert_eq!(row[26], "");
    assert_eq!(row[29], "14");
}

#[test]
fn full_line_row_snapshot() {
    insta::assert_snapshot!(
        full_line().to_strings().join(";"),
        @"S;20240615;20240630;1400;8400;12;3;RE-2024-017;PO-889;1190,00;CHF;1150,40;190,00;183,68;RE-2024-017 Beratung;Firma;Kunde AG;Einkauf;;Marienplatz 1;80331;München;DE;DE;Erika Muster;+49 89 1234;;einkauf@kunde.example;https://kunde.example;14"
    );
}

#[test]
fn dot_separator_config() {
    let config = RenderConfigBuilder::new().decimal_separator('.').build();
    let row = full_line().to_strings_with(&config);
    assert_eq!(row[9], "1190.00");
    assert_eq!(row[11], "1150.40");
    // Non-amount columns are unaffected.
    assert_eq!(row[2], "20240630");
}

#[test]
fn negative_amounts_keep_sign() {
    let line = Line {
        gross_amount: dec!(-50.5).into(),
        fc_gross_amount: dec!(-0.01).into(),
        ..posting()
    };
    assert_eq!(line.get("GrossAmount").as_deref(), Some("-50,50"));
    assert_eq!(line.get("FCGrossAmount").as_deref(), Some("-0,01"));
}

// --- Value types ---

#[test]
fn amount_renderings() {
    let a = MonetaryAmount::new(dec!(1234.5));
    assert_eq!(a.canonical(), "1234.50");
    assert_eq!(a.display(), "1234,50");
}

#[test]
fn empty_date_string_is_zero() {
    let d: Date = "".parse().unwrap();
    assert!(d.is_zero());
}

#[test]
fn malformed_date_is_rejected() {
    let err = "2024-13-99".parse::<Date>().unwrap_err();
    assert_eq!(err.input, "2024-13-99");
    assert_eq!(err.patterns.len(), 2);
}
