//! Print the persisted author collection.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use author_desk_admin::components::authors_table_config;
use author_desk_admin::config::AdminConfig;
use author_desk_admin::db::{AuthorRepository, FileSlot, KeyValueSlot};
use author_desk_admin::services::search;

/// Format the stored collection as a table, filtered by `term`.
///
/// An unreadable or empty slot lists the seed collection, as the shell
/// would show it.
#[must_use]
pub fn format(slot: impl KeyValueSlot + 'static, term: Option<&str>) -> String {
    let authors = AuthorRepository::new(slot).load();
    let term = term.unwrap_or("");
    let found = search::filter(&authors, term);
    let table = authors_table_config();

    let mut out = format!("{}\n{}\n", table.header(), table.rule());
    if found.is_empty() {
        out.push_str(if term.is_empty() {
            table.empty_title.as_str()
        } else {
            "No authors match the search criteria."
        });
        out.push('\n');
    }
    for author in &found {
        let id = author.id.to_string();
        out.push_str(&table.row(&[&id, &author.first_name, &author.last_name, &author.bio]));
        out.push('\n');
    }
    out
}

async fn write_to<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

/// List authors from the configured data directory.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub async fn run(config: &AdminConfig, term: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    info!(data_dir = %config.data_dir.display(), search = term, "Listing authors");
    let text = format(FileSlot::new(&config.data_dir), term);
    write_to(&mut tokio::io::stdout(), &text).await?;
    Ok(())
}
