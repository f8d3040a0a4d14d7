//! Plain-text tables for terminal output.
//!
//! Column widths are measured in terminal columns, so labels such as `₹23`
//! and wide CJK text line up. Cells may span several lines (pretty-printed
//! JSON values do); the row grows to the tallest cell.
use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left; used for numbers.
    Right,
}

/// Terminal styling switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Emit ANSI bold sequences.
    pub color: bool,
}

impl Style {
    /// No escape sequences at all.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Wraps `text` in bold when colour is on.
    pub fn bold(&self, text: &str) -> String {
        if self.color && !text.is_empty() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    bold: bool,
}

impl Cell {
    /// Regular cell.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Cell drawn in bold when `bold` is true.
    pub fn emphasized(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }
}

struct Column {
    header: String,
    align: Align,
}

enum Row {
    Cells(Vec<Cell>),
    Rule,
}

/// Fixed-column text table.
pub struct TextTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

const GAP: &str = "  ";

fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

impl TextTable {
    /// Table with the given `(header, alignment)` columns.
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(header, align)| Column {
                    header: header.to_string(),
                    align: *align,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing trailing cells render empty; extra cells are
    /// ignored.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(Row::Cells(cells));
    }

    /// Appends a horizontal rule, used to set off groups of rows.
    pub fn push_rule(&mut self) {
        self.rows.push(Row::Rule);
    }

    /// Number of data rows, rules excluded.
    pub fn len(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, Row::Cells(_)))
            .count()
    }

    /// `true` when no data rows were pushed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders header, rule, and rows. Lines end without trailing spaces.
    pub fn render(&self, style: Style) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| match row {
                        Row::Cells(cells) => cells.get(i),
                        Row::Rule => None,
                    })
                    .flat_map(|cell| cell.text.lines())
                    .map(width)
                    .chain(std::iter::once(width(&column.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, w)| pad(&column.header, *w, column.align, true, style))
            .collect();
        push_line(&mut out, &header.join(GAP));

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule = rule.join(GAP);
        push_line(&mut out, &rule);

        for row in &self.rows {
            let row = match row {
                Row::Cells(cells) => cells,
                Row::Rule => {
                    push_line(&mut out, &rule);
                    continue;
                }
            };
            let cell_lines: Vec<Vec<&str>> = (0..self.columns.len())
                .map(|i| match row.get(i) {
                    Some(cell) if !cell.text.is_empty() => cell.text.lines().collect(),
                    _ => vec![""],
                })
                .collect();
            let height = cell_lines.iter().map(Vec::len).max().unwrap_or(1);

            for line_no in 0..height {
                let parts: Vec<String> = self
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let text = cell_lines[i].get(line_no).copied().unwrap_or("");
                        let bold = row.get(i).is_some_and(|cell| cell.bold);
                        pad(text, widths[i], column.align, bold, style)
                    })
                    .collect();
                push_line(&mut out, &parts.join(GAP));
            }
        }
        out
    }
}

fn pad(text: &str, w: usize, align: Align, bold: bool, style: Style) -> String {
    let fill = " ".repeat(w.saturating_sub(width(text)));
    let text = if bold { style.bold(text) } else { text.to_string() };
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
