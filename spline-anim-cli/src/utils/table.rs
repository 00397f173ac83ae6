//! Table formatting utilities

use prettytable::{Cell, Row, Table};

/// Build a table whose rows all have one cell per header
pub fn build_table<const N: usize>(
    headers: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        headers.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
    ));

    for row in rows {
        table.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table() {
        let table = build_table(
            ["#", "Time"],
            (0..3).map(|i| [i.to_string(), format!("{:.3}s", f64::from(i) * 0.5)]),
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.get_row(2).map(Row::len), Some(2));

        let rendered = table.to_string();
        assert!(rendered.contains("Time"));
        assert!(rendered.contains("1.000s"));
    }

    #[test]
    fn test_build_table_without_rows() {
        let table = build_table(["Position", "Rotation"], std::iter::empty());
        assert!(table.is_empty());
        assert!(table.to_string().contains("Rotation"));
    }
}
