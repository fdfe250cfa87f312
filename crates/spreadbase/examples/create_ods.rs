//! Example: Create an ods file with a few typed columns

use spreadbase::prelude::*;
use spreadbase::{Decimal, NaiveDate};

fn main() -> std::result::Result<(), OdsError> {
    let mut table = Table::new("Inventory")?;

    // Add header row
    table.append_row(["Item", "Count", "Price", "Restocked"]);

    // Add data rows
    let restocked = NaiveDate::from_ymd_opt(2024, 3, 1);
    table.append_row(vec![
        CellValue::from("Apples"),
        CellValue::from(120),
        CellValue::from(Decimal::new(45, 2)),
        CellValue::from(restocked),
    ]);
    table.append_row(vec![
        CellValue::from("Pears"),
        CellValue::from(80),
        CellValue::from(Decimal::new(60, 2)),
        CellValue::Null,
    ]);

    let mut document = Document::with_path("/tmp/inventory.ods");
    document
        .column_width_styles
        .insert("wide".to_string(), "4cm".to_string());
    table.set_column_width_styles(vec![Some("wide".to_string())]);
    document.add_table(table);

    // Save the file
    document.save(&OdsOptions::default().with_prettify(true))?;

    println!("{}", document);
    Ok(())
}
