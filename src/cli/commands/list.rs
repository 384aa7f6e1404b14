//! `passvault list` — display entries in a table.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, folder: Option<&str>, search: Option<&str>) -> Result<()> {
    let session = Session::open(cli)?;

    let rows: Vec<_> = session
        .vault
        .search(search.unwrap_or(""))
        .into_iter()
        .filter(|(_, e)| folder.map_or(true, |f| e.folder.eq_ignore_ascii_case(f)))
        .collect();

    output::info(&format!(
        "{} of {} entr{}",
        rows.len(),
        session.vault.len(),
        if session.vault.len() == 1 { "y" } else { "ies" }
    ));

    output::print_entries_table(&rows);

    if folder.is_none() && search.is_none() && !session.vault.is_empty() {
        output::tip(&format!("Folders: {}", session.vault.folders().join(", ")));
    }

    Ok(())
}
