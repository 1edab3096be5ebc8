use std::fmt::Write;

use weather_page_core::{
    Branch, DetailView,
    presenter::{WELCOME_HINT, WELCOME_TITLE},
};

const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const CELL_WIDTH: usize = 22;

/// Lay out one branch as terminal text.
pub fn draw(branch: &Branch, color: bool) -> String {
    match branch {
        Branch::Welcome => format!("\n{}\n{WELCOME_HINT}\n", paint(WELCOME_TITLE, BOLD, color)),
        Branch::Spinner => "\nLoading...\n".to_string(),
        Branch::Detail(view) => draw_detail(view, color),
        Branch::Error(message) => format!("\n{}\n", paint(message, RED, color)),
    }
}

fn draw_detail(view: &DetailView, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "@ {}", view.headline);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", paint(&view.temperature, BOLD, color));
    let _ = writeln!(out, "  {}", view.condition);
    let _ = writeln!(out, "  {}", view.icon_url);
    let _ = writeln!(out);

    for row in view.grid() {
        let values: String = row.iter().map(|(_, v)| format!("{v:^CELL_WIDTH$}")).collect();
        let labels: String = row.iter().map(|(l, _)| format!("{l:^CELL_WIDTH$}")).collect();
        let _ = writeln!(out, "{}", paint(values.trim_end(), BOLD, color));
        let _ = writeln!(out, "{}", labels.trim_end());
    }

    out
}

fn paint(text: &str, style: &str, color: bool) -> String {
    if color { format!("{style}{text}{RESET}") } else { text.to_string() }
}
