//! Data table component types.
//!
//! These types define fixed-width text tables for the admin panel.

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Display label for the column header.
    pub label: String,
    /// Width in characters; longer cells are cut with an ellipsis.
    pub width: usize,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(label: &str, width: usize) -> Self {
        Self {
            label: label.to_string(),
            width: width.max(1),
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableConfig {
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Text shown when the table has no rows.
    pub empty_title: String,
}

impl Default for DataTableConfig {
    fn default() -> Self {
        Self {
            columns: vec![],
            empty_title: "No items found".to_string(),
        }
    }
}

impl DataTableConfig {
    /// Create a table with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set empty state text.
    #[must_use]
    pub fn empty_state(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }

    /// Header line built from the column labels.
    #[must_use]
    pub fn header(&self) -> String {
        let labels: Vec<&str> = self.columns.iter().map(|c| c.label.as_str()).collect();
        self.row(&labels)
    }

    /// Separator line matching the header width.
    #[must_use]
    pub fn rule(&self) -> String {
        let width: usize = self.columns.iter().map(|c| c.width).sum::<usize>()
            + self.columns.len().saturating_sub(1) * COLUMN_GAP.len();
        "-".repeat(width)
    }

    /// Format one row. Missing cells are left blank; extra cells are ignored.
    #[must_use]
    pub fn row(&self, cells: &[&str]) -> String {
        let formatted: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| fit(cells.get(i).copied().unwrap_or(""), column.width))
            .collect();
        formatted.join(COLUMN_GAP).trim_end().to_string()
    }
}

const COLUMN_GAP: &str = "  ";

/// Pad or cut `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Build the authors table configuration.
#[must_use]
pub fn authors_table_config() -> DataTableConfig {
    DataTableConfig::new()
        .column(TableColumn::new("ID", 4))
        .column(TableColumn::new("First name", 14))
        .column(TableColumn::new("Last name", 14))
        .column(TableColumn::new("Biography", 36))
        .empty_state("No authors yet. Use 'new' to add one.")
}
