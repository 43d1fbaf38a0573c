//! Panel 3: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1 / 2 / 3", "Life / Asteroid / Help panel");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "e", "Open error history overlay");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Slider");
    key(&mut lines, "h / l  or  \u{2190} / \u{2192}", "Move one step");
    key(&mut lines, "PgDn / PgUp  or  H / L", "Move ten steps");
    key(&mut lines, "Home / End", "Jump to minimum / maximum");
    lines.push(Line::from(""));

    section(&mut lines, "Text Input");
    key(&mut lines, "i  or  /", "Start typing a value");
    key(&mut lines, "Enter", "Apply: moves the slider to the typed value");
    key(&mut lines, "Esc", "Stop editing, keep the slider where it is");
    key(&mut lines, "Ctrl+U", "Clear the input");
    lines.push(Line::from(""));

    section(&mut lines, "Update Graph");
    key(&mut lines, "u  or  Enter", "Redraw the chart at the current slider value");
    lines.push(Line::from(""));

    section(&mut lines, "Panels");
    key(&mut lines, "Intelligent Life", "Linear rise to today, linear decay to 1e12 years");
    key(&mut lines, "Asteroid Collision", "1 - (1 - p)^years over one million years");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>24}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::text()),
    ]));
}
