//! Colored terminal output helpers.
//!
//! All status output goes through these functions so we get consistent
//! styling across every command. Status lines go to stderr: stdout is
//! reserved for tokens and decrypted text so they can be piped.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::token::format_file_size;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
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
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a two-column summary (e.g. Filename / Size) to stderr.
pub fn print_summary(rows: &[(&str, String)]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value.clone()]);
    }

    eprintln!("{table}");
}

/// Summary rows for a file.
pub fn file_rows(filename: &str, mime_type: &str, size: u64) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Filename", filename.to_string()),
        ("Size", format_file_size(size)),
    ];
    if !mime_type.is_empty() {
        rows.push(("Type", mime_type.to_string()));
    }
    rows
}
