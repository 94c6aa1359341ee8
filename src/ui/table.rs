//! Table rendering for formatted output.

/// A simple box-drawing table.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row<S: Into<String>>(&mut self, row: Vec<S>) {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&border(&widths, '┌', '┬', '┐'));
        out.push('\n');
        out.push_str(&row_line(&self.headers, &widths));
        out.push('\n');
        out.push_str(&border(&widths, '├', '┼', '┤'));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row_line(row, &widths));
            out.push('\n');
        }
        out.push_str(&border(&widths, '└', '┴', '┘'));

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| console::measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(console::measure_text_width(cell));
            }
        }
        widths
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            s.push(mid);
        }
        s.push_str(&"─".repeat(width + 2));
    }
    s.push(right);
    s
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('│');
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - console::measure_text_width(cell);
        s.push(' ');
        s.push_str(cell);
        s.push_str(&" ".repeat(pad + 1));
        s.push('│');
    }
    s
}
