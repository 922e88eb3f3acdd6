use ratatui::{
    text::{Line, Text},
    style::{Color, Style, Stylize},
};

pub fn error_text(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().fg(Color::Red));
    t
}

/// Key bindings, shown in the bottom bar when there's nothing else to say
pub fn help_line() -> Line<'static> {
    vec![
        "j/k".blue(),
        " move  ".into(),
        "Enter".blue(),
        "/click open  ".into(),
        "r".blue(),
        " reload  ".into(),
        "q".blue(),
        " quit".into(),
    ]
    .into()
}
