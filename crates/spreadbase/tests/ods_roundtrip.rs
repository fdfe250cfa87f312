//! End-to-end tests for ODS roundtrip (create -> encode -> decode -> verify)

use chrono::{FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use spreadbase::prelude::*;
use spreadbase::{Decimal, NaiveDate};
use std::str::FromStr;

fn roundtrip(document: &Document, options: &OdsOptions) -> Document {
    let bytes = document.to_archive(&OdsOptions::default()).unwrap();
    Document::from_archive(&bytes, options).unwrap()
}

fn single_table(rows: Vec<Vec<CellValue>>) -> Document {
    let mut document = Document::new();
    document.add_table(Table::with_data("t", rows).unwrap());
    document
}

/// Test the sample document: mixed types, an empty second table
#[test]
fn test_roundtrip_sample_document() {
    let date = NaiveDate::from_ymd_opt(2012, 4, 10).unwrap();
    let datetime = NaiveDate::from_ymd_opt(2012, 4, 11)
        .unwrap()
        .and_hms_opt(23, 33, 42)
        .unwrap();
    let zoned = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2012, 4, 11, 23, 33, 42)
        .unwrap();
    let decimal = Decimal::from_str("1.33").unwrap();

    let abc = Table::with_data(
        "abc",
        vec![
            vec![CellValue::from(1), CellValue::from(1.1), CellValue::from(decimal)],
            vec![CellValue::from(date), CellValue::from(datetime), CellValue::from(zoned)],
            vec![CellValue::Null, CellValue::from("a"), CellValue::Null],
        ],
    )
    .unwrap();

    let mut document = Document::new();
    document.add_table(abc);
    document.add_table(Table::new("cde").unwrap());

    let options = OdsOptions::default().with_floats_as_bigdecimal(true);
    let decoded = roundtrip(&document, &options);

    assert_eq!(decoded.table_count(), 2);

    let abc = &decoded.tables[0];
    assert_eq!(abc.name(), "abc");
    assert_eq!(abc.len(), 3);

    assert_eq!(
        abc.row_values(0).unwrap(),
        vec![
            CellValue::Integer(1),
            CellValue::Decimal(Decimal::from_str("1.1").unwrap()),
            CellValue::Decimal(decimal),
        ]
    );
    assert_eq!(abc.get(2, 0).unwrap().type_name(), "decimal");

    assert_eq!(
        abc.row_values(1).unwrap(),
        vec![
            CellValue::Date(date),
            CellValue::DateTime(datetime),
            CellValue::DateTime(datetime),
        ]
    );
    assert_eq!(abc.get(1, 1).unwrap(), abc.get(2, 1).unwrap());

    // The trailing null is dropped on decode
    assert_eq!(
        abc.row_values(2).unwrap(),
        vec![CellValue::Null, CellValue::text("a")]
    );

    let cde = &decoded.tables[1];
    assert_eq!(cde.name(), "cde");
    assert!(cde.is_empty());
}

/// Test that fractional numbers decode as floats by default
#[test]
fn test_roundtrip_floats() {
    let document = single_table(vec![vec![
        CellValue::from(1.1),
        CellValue::from(-100.5),
        CellValue::from(1e10),
        CellValue::from(Decimal::from_str("0.125").unwrap()),
    ]]);

    let decoded = roundtrip(&document, &OdsOptions::default());

    assert_eq!(
        decoded.tables[0].row_values(0).unwrap(),
        vec![
            CellValue::Float(1.1),
            CellValue::Float(-100.5),
            CellValue::Float(1e10),
            CellValue::Float(0.125),
        ]
    );
}

/// Test that sub-second datetimes survive encoding
#[test]
fn test_roundtrip_fractional_seconds() {
    let day = NaiveDate::from_ymd_opt(2012, 4, 11).unwrap();
    let millis = day.and_hms_milli_opt(23, 33, 42, 500).unwrap();
    let micros = day.and_hms_micro_opt(0, 0, 1, 123_456).unwrap();
    let document = single_table(vec![vec![
        CellValue::DateTime(millis),
        CellValue::DateTime(micros),
    ]]);

    let decoded = roundtrip(&document, &OdsOptions::default());

    assert_eq!(
        decoded.tables[0].row_values(0).unwrap(),
        vec![CellValue::DateTime(millis), CellValue::DateTime(micros)]
    );
}

/// Test string values, including ones that need escaping
#[test]
fn test_roundtrip_strings() {
    let strings = [
        "Hello, World!",
        "",
        "Special: <>&\"'",
        "Multi\nLine",
        "  padded  ",
        "Unicode: \u{1F600}",
    ];
    let document = single_table(vec![strings.iter().map(|s| CellValue::text(*s)).collect()]);

    let decoded = roundtrip(&document, &OdsOptions::default());

    let expected: Vec<_> = strings.iter().map(|s| CellValue::text(*s)).collect();
    assert_eq!(decoded.tables[0].row_values(0).unwrap(), expected);
}

/// Test that blank rows are kept only when content follows them
#[test]
fn test_roundtrip_trims_trailing_blank_rows() {
    let one = || CellValue::from(1);

    let document = single_table(vec![
        vec![],
        vec![],
        vec![one()],
        vec![CellValue::Null, one()],
    ]);
    let decoded = roundtrip(&document, &OdsOptions::default());
    assert_eq!(
        decoded.tables[0].values(),
        vec![vec![], vec![], vec![one()], vec![CellValue::Null, one()]]
    );

    let document = single_table(vec![
        vec![CellValue::Null],
        vec![one()],
        vec![CellValue::Null],
    ]);
    let decoded = roundtrip(&document, &OdsOptions::default());
    assert_eq!(decoded.tables[0].values(), vec![vec![], vec![one()]]);
}

/// Test that a row's trailing nulls are dropped but inner ones are kept
#[test]
fn test_roundtrip_trims_trailing_null_cells() {
    let document = single_table(vec![vec![
        CellValue::Null,
        CellValue::from(1),
        CellValue::Null,
    ]]);

    let decoded = roundtrip(&document, &OdsOptions::default());

    assert_eq!(
        decoded.tables[0].values(),
        vec![vec![CellValue::Null, CellValue::from(1)]]
    );
}

/// Test column width styles survive, including unstyled columns before styled ones
#[test]
fn test_roundtrip_column_width_styles() {
    let mut table = Table::with_data("t", vec![vec![1, 2, 3]]).unwrap();
    table.set_column_width_styles(vec![Some("wide".into()), None, Some("narrow".into())]);

    let mut document = Document::new();
    document
        .column_width_styles
        .insert("wide".into(), "5cm".into());
    document
        .column_width_styles
        .insert("narrow".into(), "1cm".into());
    document.add_table(table);

    let decoded = roundtrip(&document, &OdsOptions::default());

    assert_eq!(decoded.column_width_styles, document.column_width_styles);
    assert_eq!(
        decoded.tables[0].column_width_styles(),
        document.tables[0].column_width_styles()
    );
}

/// Test that prettified output decodes to the same document
#[test]
fn test_prettified_output_decodes_the_same() {
    let document = single_table(vec![
        vec![CellValue::text("a b"), CellValue::from(true)],
        vec![CellValue::Null, CellValue::text("two\nlines")],
    ]);

    let bytes = document
        .to_archive(&OdsOptions::default().with_prettify(true))
        .unwrap();
    let decoded = Document::from_archive(&bytes, &OdsOptions::default()).unwrap();

    assert_eq!(decoded.tables[0].values(), document.tables[0].values());
}

/// Test encoding failures
#[test]
fn test_encode_errors() {
    let err = Document::new().to_archive(&OdsOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::Core(Error::NoTablesPresent)));

    let document = single_table(vec![vec![CellValue::Float(f64::INFINITY)]]);
    let err = document.to_archive(&OdsOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::UnsupportedValue(_)));
}

fn cell_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Null),
        any::<bool>().prop_map(CellValue::Boolean),
        any::<i64>().prop_map(CellValue::Integer),
        "[a-zA-Z0-9 <>&]{0,12}".prop_map(CellValue::Text),
    ]
}

/// Drop trailing nulls per row, then trailing empty rows
fn trimmed(rows: &[Vec<CellValue>]) -> Vec<Vec<CellValue>> {
    let mut rows: Vec<Vec<CellValue>> = rows
        .iter()
        .map(|row| {
            let len = row.iter().rposition(|v| !v.is_null()).map_or(0, |i| i + 1);
            row[..len].to_vec()
        })
        .collect();
    while rows.last().map_or(false, Vec::is_empty) {
        rows.pop();
    }
    rows
}

proptest! {
    #[test]
    fn prop_roundtrip_preserves_values(
        rows in prop::collection::vec(prop::collection::vec(cell_value(), 0..6), 0..6)
    ) {
        let document = single_table(rows.clone());
        let decoded = roundtrip(&document, &OdsOptions::default());

        prop_assert_eq!(decoded.tables[0].values(), trimmed(&rows));
    }
}
