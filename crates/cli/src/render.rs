use scanner::Table;
use std::io::Write;

/// Render a check table with one syscall name per line, columns side by
/// side. Cells hold whitespace-joined name lists, so each cell becomes a
/// column of names under its header.
pub fn table(out: &mut impl Write, table: &Table) -> std::io::Result<()> {
    let columns: Vec<Vec<&str>> = match table.rows.first() {
        Some(row) => row.iter().map(|cell| cell.split_whitespace().collect()).collect(),
        None => Vec::new(),
    };

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            columns
                .get(i)
                .into_iter()
                .flatten()
                .map(|name| name.len())
                .chain([header.len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separators: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(out, table.headers.iter().map(String::as_str), &widths)?;
    write_row(out, separators.iter().map(String::as_str), &widths)?;

    let depth = columns.iter().map(Vec::len).max().unwrap_or(0);
    for line in 0..depth {
        let cells = columns
            .iter()
            .map(|column| column.get(line).copied().unwrap_or(""));
        write_row(out, cells, &widths)?;
    }

    if let Some(comment) = &table.comment {
        writeln!(out)?;
        writeln!(out, "{comment}")?;
    }
    Ok(())
}

/// Serialize the table as pretty JSON.
pub fn json(out: &mut impl Write, table: &Table) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, table)?;
    writeln!(out)?;
    Ok(())
}

fn write_row<'a>(
    out: &mut impl Write,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> std::io::Result<()> {
    let mut line = String::new();
    for (cell, width) in cells.zip(widths.iter().copied()) {
        line.push_str(&format!("{cell:<width$}  "));
    }
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Table {
        Table {
            headers: vec!["blocked".to_owned(), "allowed".to_owned()],
            rows: vec![vec!["CHROOT MOUNT".to_owned(), "READ".to_owned()]],
            comment: Some("[FORK] were not scanned.".to_owned()),
        }
    }

    #[test]
    fn table_lays_names_out_per_line() {
        let mut out = Vec::new();
        table(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "blocked  allowed");
        assert_eq!(lines[2], "CHROOT   READ");
        assert_eq!(lines[3], "MOUNT");
        assert!(text.ends_with("[FORK] were not scanned.\n"));
    }

    #[test]
    fn json_is_valid() {
        let mut out = Vec::new();
        json(&mut out, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["headers"][0], "blocked");
        assert_eq!(value["comment"], "[FORK] were not scanned.");
    }

    proptest! {
        #[test]
        fn every_name_gets_its_own_line(
            blocked in prop::collection::vec("[A-Z_]{1,12}", 0..20),
            allowed in prop::collection::vec("[A-Z_]{1,12}", 0..20),
        ) {
            let t = Table {
                headers: vec!["blocked".to_owned(), "allowed".to_owned()],
                rows: vec![vec![blocked.join(" "), allowed.join(" ")]],
                comment: None,
            };
            let mut out = Vec::new();
            table(&mut out, &t).unwrap();
            let text = String::from_utf8(out).unwrap();

            let body: Vec<&str> = text.lines().skip(2).collect();
            prop_assert_eq!(body.len(), blocked.len().max(allowed.len()));
            for (line, name) in body.iter().zip(blocked.iter()) {
                prop_assert!(line.starts_with(name.as_str()));
            }
        }
    }
}
