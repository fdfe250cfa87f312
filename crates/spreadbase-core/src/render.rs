//! Fixed-width grid rendering

use crate::cell::Cell;

/// Render rows as a bordered, fixed-width table.
///
/// Rows may have different lengths; missing positions print as `NIL`. Every
/// line starts with `prefix`. With `with_headers`, the first row is followed by
/// a separator line.
pub fn pretty_print_rows(rows: &[Vec<Cell>], prefix: &str, with_headers: bool) -> String {
    let mut output = String::new();

    if rows.is_empty() {
        return output;
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let formatted: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..width)
                .map(|i| row.get(i).map(Cell::to_string).unwrap_or_else(|| "NIL".into()))
                .collect()
        })
        .collect();

    let mut column_sizes = vec![0usize; width];
    for row in &formatted {
        for (i, value) in row.iter().enumerate() {
            column_sizes[i] = column_sizes[i].max(value.chars().count());
        }
    }

    let separator = format!(
        "{}+-{}-+\n",
        prefix,
        column_sizes
            .iter()
            .map(|size| "-".repeat(*size))
            .collect::<Vec<_>>()
            .join("-+-")
    );

    output.push_str(&separator);
    for (row_index, row) in formatted.iter().enumerate() {
        let padded: Vec<String> = row
            .iter()
            .zip(&column_sizes)
            .map(|(value, size)| {
                let padding = size - value.chars().count();
                format!("{}{}", value, " ".repeat(padding))
            })
            .collect();

        output.push_str(prefix);
        output.push_str("| ");
        output.push_str(&padded.join(" | "));
        output.push_str(" |\n");

        if with_headers && row_index == 0 {
            output.push_str(&separator);
        }
    }
    output.push_str(&separator);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(values: &[i64]) -> Vec<Cell> {
        values.iter().map(|v| Cell::new(*v)).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(pretty_print_rows(&[], "  ", false), "");
    }

    #[test]
    fn test_jagged_rows_are_padded() {
        let rows = vec![row(&[1, 22]), row(&[333])];

        let expected = "\
+-----+-----+
| 1   | 22  |
| 333 | NIL |
+-----+-----+
";
        assert_eq!(pretty_print_rows(&rows, "", false), expected);
    }

    #[test]
    fn test_headers_and_prefix() {
        let rows = vec![vec![Cell::new("name")], vec![Cell::new("x")]];

        let expected = "\
  +------+
  | name |
  +------+
  | x    |
  +------+
";
        assert_eq!(pretty_print_rows(&rows, "  ", true), expected);
    }
}
