use crate::application::{App, AppMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

/// The two color palettes behind the theme toggle.
struct Palette {
    accent: Color,
    text: Color,
    dim: Color,
}

fn palette(dark_theme: bool) -> Palette {
    if dark_theme {
        Palette {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
        }
    } else {
        Palette {
            accent: Color::Blue,
            text: Color::Black,
            dim: Color::Gray,
        }
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_display(f, app, chunks[1]);
    render_keypad(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    match app.mode {
        AppMode::History => render_history_popup(f, app),
        AppMode::Help => render_help_popup(f, app, app.help_scroll),
        AppMode::Normal => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.calculator.is_dark_theme());
    let mut title = String::from("tcalc - Terminal Calculator");
    if app.calculator.is_scientific_mode() {
        title.push_str(" | scientific");
    }

    let header = Paragraph::new(title).style(Style::default().fg(colors.accent));
    f.render_widget(header, area);
}

fn render_display(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.calculator.is_dark_theme());

    let expression_line = Line::from(app.calculator.expression().to_string())
        .style(Style::default().fg(colors.dim));
    let result_line = Line::from(app.calculator.result().to_string()).style(
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    );

    let display = Paragraph::new(vec![expression_line, result_line])
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(display, area);
}

/// The on-screen keypad. The extended rows are only present while scientific
/// mode is on, mirroring which button tokens the input handler accepts.
fn render_keypad(f: &mut Frame, app: &App, area: Rect) {
    const STANDARD_ROWS: [[&str; 4]; 5] = [
        ["C", "±", "%", "÷"],
        ["7", "8", "9", "×"],
        ["4", "5", "6", "-"],
        ["1", "2", "3", "+"],
        ["0", ".", "⌫", "="],
    ];
    const SCIENTIFIC_ROWS: [[&str; 4]; 3] = [
        ["sin", "cos", "tan", "ln"],
        ["log", "√", "x²", "x^y"],
        ["π", "e", "(", ")"],
    ];

    let colors = palette(app.calculator.is_dark_theme());
    let operator_style = Style::default().fg(colors.accent);
    let digit_style = Style::default().fg(colors.text);

    let mut rows = Vec::new();
    if app.calculator.is_scientific_mode() {
        for labels in SCIENTIFIC_ROWS {
            rows.push(Row::new(
                labels.map(|label| Cell::from(label).style(operator_style)),
            ));
        }
    }
    for labels in STANDARD_ROWS {
        rows.push(Row::new(labels.map(|label| {
            let style = if label.chars().all(|ch| ch.is_ascii_digit()) || label == "." {
                digit_style
            } else {
                operator_style
            };
            Cell::from(label).style(style)
        })));
    }

    let widths = [Constraint::Ratio(1, 4); 4];
    let keypad = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Keypad"))
        .column_spacing(1);

    f.render_widget(keypad, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab: history | F1/?: help | F2: scientific | F3: theme | y: copy result | q: quit"
                    .to_string()
            }
        }
        AppMode::History => {
            "↑↓/jk: select | Enter: load | D: clear history | Esc/Tab: close".to_string()
        }
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::History => Style::default().fg(Color::Yellow),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn popup_area(area: Rect) -> Rect {
    Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    }
}

fn render_history_popup(f: &mut Frame, app: &App) {
    let colors = palette(app.calculator.is_dark_theme());
    let area = popup_area(f.area());

    f.render_widget(Clear, area);

    let history = app.calculator.history();
    if history.is_empty() {
        let empty = Paragraph::new("No calculations yet")
            .block(Block::default().borders(Borders::ALL).title("History"))
            .style(Style::default().fg(colors.dim));
        f.render_widget(empty, area);
        return;
    }

    let visible_rows = area.height.saturating_sub(2) as usize;
    let first_visible = app
        .history_cursor
        .saturating_sub(visible_rows.saturating_sub(1));

    let rows: Vec<Row> = history
        .iter()
        .enumerate()
        .skip(first_visible)
        .take(visible_rows)
        .map(|(index, entry)| {
            let style = if index == app.history_cursor {
                Style::default().bg(colors.accent).fg(Color::Black)
            } else {
                Style::default().fg(colors.text)
            };
            Row::new([
                Cell::from(entry.expression.clone()),
                Cell::from(format!("= {}", entry.result)),
            ])
            .style(style)
        })
        .collect();

    let widths = [Constraint::Percentage(60), Constraint::Percentage(40)];
    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("History ({} entries)", history.len()))
                .style(Style::default().fg(colors.accent)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_help_popup(f: &mut Frame, app: &App, scroll: usize) {
    let colors = palette(app.calculator.is_dark_theme());
    let area = popup_area(f.area());

    f.render_widget(Clear, area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("tcalc Key Reference")
                .style(Style::default().fg(colors.accent)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(help_widget, area);
}

fn get_help_text() -> String {
    r#"TCALC KEY REFERENCE

=== ENTRY ===
0-9 .           Digits and decimal point
+ - * / ^       Operators (* and / display as × and ÷ on the keypad)
%               Percent: turns a bare number into itself / 100
n               Toggle the sign of the last operand
Enter or =      Commit the calculation to history and chain from the result
Backspace       Delete the last character
Delete          Clear the expression

The result updates live as you type. A malformed or unfinished expression
shows "Error" until it becomes evaluable; an empty expression shows "0".

=== SCIENTIFIC MODE (F2) ===
s c t           sin( cos( tan(       - arguments in radians
l               ln(                  - natural logarithm
g               log10(               - base-10 logarithm
r               sqrt(
x               Square the current number: (expr)^2
p e             The constants pi and e
( )             Parentheses

=== HISTORY (Tab) ===
Up/Down, j/k    Select an entry
Enter           Load the entry's expression back into the calculator
D               Clear the whole history
Esc/Tab/q       Close the overlay

History holds every committed calculation for this session only; nothing is
written to disk.

=== OTHER ===
F3              Toggle dark/light theme
y               Copy the current result to the system clipboard
F1 or ?         This help (scroll with j/k, PgUp/PgDn, Home)
q               Quit"#
        .to_string()
}
