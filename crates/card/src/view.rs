use log::{debug, warn};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use thutorium_client::Course;

use crate::{average_rating, format_date, Navigator};

/// Rows taken up by a card, including its border.
pub const CARD_HEIGHT: u16 = 7;

/// Shown in place of a date we couldn't parse
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Appended to the tutor's name if they're verified
pub const VERIFIED_BADGE: &str = "✔";

/// Width of the date chip column
const DATES_WIDTH: u16 = 18;

/// A single course in a list of search results.
pub struct ResultItemView<'a> {
    course: &'a Course,
    navigator: &'a dyn Navigator,
    selected: bool,
}

impl<'a> ResultItemView<'a> {
    pub fn new(course: &'a Course, navigator: &'a dyn Navigator) -> Self {
        Self {
            course,
            navigator,
            selected: false,
        }
    }

    /// Draw the card highlighted
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Stable identity of this item within a list of results.
    pub fn key(&self) -> &'a str {
        &self.course.course_id
    }

    /// Where clicking this card navigates to
    pub fn target(&self) -> String {
        format!("/course?id={}", self.course.course_id)
    }

    pub fn click(&self) {
        let target = self.target();
        debug!("card {} clicked, navigating to {}", self.key(), target);
        self.navigator.navigate_to(&target);
    }

    pub fn rating_text(&self) -> String {
        let ratings = &self.course.ratings;
        if ratings.is_empty() {
            "Not yet rated".to_string()
        } else {
            format!(
                "Average Rating: {} ({})",
                average_rating(ratings),
                ratings.len()
            )
        }
    }

    /// The left column: category, rating, name, description and tutor.
    pub fn details(&self) -> Text<'static> {
        let course = self.course;

        let tutor_style = Style::new().fg(Color::Black).bg(Color::White);
        let mut tutor = vec![Span::styled(
            format!("By {}", course.tutor_name()),
            tutor_style,
        )];
        if course.tutor.is_verified {
            tutor.push(Span::styled(format!(" {}", VERIFIED_BADGE), tutor_style));
        }

        Text::from(vec![
            Line::from(Span::styled(
                format!(" {} ", course.category.category_name),
                Style::new().fg(Color::White).bg(Color::Blue),
            )),
            Line::styled(self.rating_text(), Style::new().fg(Color::Gray)),
            Line::styled(
                course.course_name.clone(),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Line::raw(course.description_short.clone()),
            Line::from(tutor),
        ])
    }

    /// The right column: start and end date chips.
    pub fn dates(&self) -> Text<'static> {
        let label = Style::new().fg(Color::DarkGray);
        Text::from(vec![
            Line::styled("From", label),
            Line::styled(
                display_date(&self.course.start_date),
                Style::new().fg(Color::Green),
            ),
            Line::styled("To", label),
            Line::styled(
                display_date(&self.course.end_date),
                Style::new().fg(Color::Red),
            ),
        ])
    }
}

fn display_date(s: &str) -> String {
    format_date(s).unwrap_or_else(|e| {
        warn!("{}", e);
        UNKNOWN_DATE.to_string()
    })
}

impl Widget for ResultItemView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(0), Constraint::Length(DATES_WIDTH)],
        )
        .split(inner);

        Paragraph::new(self.details()).render(columns[0], buf);
        Paragraph::new(self.dates())
            .alignment(Alignment::Center)
            .render(columns[1], buf);
    }
}
