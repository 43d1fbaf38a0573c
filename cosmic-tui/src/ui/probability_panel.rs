//! Panels 1 and 2: prompt, slider, text input, Update Graph button, chart.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};

use cosmic_core::binding::PanelId;

use crate::app::{AppState, InputMode, PanelView};
use crate::theme;
use crate::ui::chart::ProbabilityChart;

const BUTTON_WIDTH: u16 = 20;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, id: PanelId) {
    let view = app.view(id);
    let editing = app.input_mode == InputMode::Editing;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // prompt
            Constraint::Length(1), // slider
            Constraint::Length(3), // input + button
            Constraint::Min(6),    // chart
        ])
        .split(area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(view.panel.prompt(), theme::accent_bold()),
        Span::raw("  "),
        Span::styled(view.panel.describe_value(), theme::text()),
    ]));
    f.render_widget(prompt, rows[0]);

    render_slider(f, rows[1], view);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(rows[2]);
    render_input(f, controls[0], view, editing);
    render_button(f, controls[1], view);

    f.render_widget(ProbabilityChart::new(&view.chart), rows[3]);
}

fn render_slider(f: &mut Frame, area: Rect, view: &PanelView) {
    let binding = view.panel.binding();
    let scale = binding.scale();
    let position = binding.position();

    let gauge = LineGauge::default()
        .filled_style(theme::slider_filled())
        .unfilled_style(theme::slider_groove())
        .line_set(symbols::line::THICK)
        .ratio(scale.ratio(position))
        .label(Span::styled(
            format!("{position:>5}/{:<5}", scale.max_position()),
            theme::text(),
        ));
    f.render_widget(gauge, area);
}

fn render_input(f: &mut Frame, area: Rect, view: &PanelView, editing: bool) {
    let title = if editing {
        " Value [Enter]apply [Esc]cancel "
    } else {
        " Value [i]edit "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(editing))
        .title(title)
        .title_style(theme::panel_title(editing));

    let text = if view.input.is_empty() && !editing {
        Span::styled(view.panel.placeholder(), theme::muted())
    } else {
        Span::styled(view.input.as_str(), theme::input(editing))
    };

    let inner = block.inner(area);
    f.render_widget(Paragraph::new(text).block(block), area);

    if editing && inner.width > 0 {
        let offset = u16::try_from(view.input.chars().count()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        f.set_cursor_position((x, inner.y));
    }
}

fn render_button(f: &mut Frame, area: Rect, view: &PanelView) {
    let pressed = view.button_flash > 0;
    let button = Paragraph::new(Line::from(Span::styled(
        " Update Graph [u] ",
        theme::button(pressed),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(pressed)),
    );
    f.render_widget(button, area);
}
