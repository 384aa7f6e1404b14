//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::strength::StrengthEstimate;
use crate::vault::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (#, Title, Username, URL, Folder).
///
/// `rows` carries zero-based vault positions; they are shown 1-based.
/// Secrets are never printed here.
pub fn print_entries_table(rows: &[(usize, &Entry)]) {
    if rows.is_empty() {
        info("No matching entries.");
        tip("Run `passvault add <TITLE>` to add an entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Title", "Username", "URL", "Folder"]);

    for (idx, entry) in rows {
        table.add_row(vec![
            (idx + 1).to_string(),
            entry.title.clone(),
            entry.username.clone(),
            entry.url.clone(),
            entry.folder.clone(),
        ]);
    }

    println!("{table}");
}

/// Print a colored strength score line, e.g. "Strength: 3/4 (strong) ~72 bits".
pub fn strength(estimate: &StrengthEstimate) {
    let text = format!("{}/4 ({})", estimate.score, estimate.label());
    let styled = match estimate.score {
        0 | 1 => style(text).red().bold(),
        2 => style(text).yellow().bold(),
        _ => style(text).green().bold(),
    };
    println!("Strength: {} ~{:.0} bits", styled, estimate.bits);
}
