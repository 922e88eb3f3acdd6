use course_card::{Navigator, ResultItemView, CARD_HEIGHT};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use log::debug;
use ratatui::{
    prelude::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use thutorium_client::Course;

use crate::{app::Action, event::Event, widgets::CardList};

/// Shows search results as a scrolling list of cards
#[derive(Debug, Default)]
pub struct ResultsPane {
    courses: Vec<Course>,
    list: CardList,

    /// Where each visible card was last drawn, for mouse clicks.
    card_areas: Vec<(usize, Rect)>,
}

impl ResultsPane {
    pub fn new(courses: Vec<Course>) -> Self {
        let mut pane = Self::default();
        pane.set_courses(courses);
        pane
    }

    /// Replace the displayed courses, keeping the same course selected if it's still there.
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        let prev_key = self.selected_key().map(str::to_string);
        self.courses = courses;
        self.list.set_len(self.courses.len());
        self.card_areas.clear();

        if let Some(key) = prev_key {
            self.select_key(&key);
        }
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.list
            .selected()
            .and_then(|i| self.courses.get(i))
            .map(|c| c.course_id.as_str())
    }

    /// Select the course with the given id, returning false if there isn't one.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.courses.iter().position(|c| c.course_id == key) {
            Some(idx) => {
                self.list.select(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn draw(&mut self, navigator: &dyn Navigator, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Search results ({})", self.courses.len()))
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.card_areas.clear();
        if self.courses.is_empty() {
            frame.render_widget(
                Paragraph::new("No courses found").alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let selected = self.list.selected();
        for (row, idx) in self.list.visible(inner.height).enumerate() {
            let y = inner.y + row as u16 * CARD_HEIGHT;
            let card_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: CARD_HEIGHT.min(inner.bottom().saturating_sub(y)),
            };
            if card_area.height == 0 {
                break;
            }

            let view = ResultItemView::new(&self.courses[idx], navigator)
                .selected(selected == Some(idx));
            frame.render_widget(view, card_area);
            self.card_areas.push((idx, card_area));
        }
    }

    pub fn handle_event(&mut self, navigator: &dyn Navigator, event: Event) -> Action {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Action::Exit,
                KeyCode::Down | KeyCode::Char('j') => self.list.next(),
                KeyCode::Up | KeyCode::Char('k') => self.list.previous(),
                KeyCode::Home | KeyCode::Char('g') => self.list.first(),
                KeyCode::End | KeyCode::Char('G') => self.list.last(),
                KeyCode::Enter => {
                    if let Some(idx) = self.list.selected() {
                        self.click(navigator, idx);
                    }
                }
                KeyCode::Char('r') => return Action::Reload,
                _ => (),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(idx) = self.card_at(mouse.column, mouse.row) {
                        self.list.select(idx);
                        self.click(navigator, idx);
                    }
                }
                MouseEventKind::ScrollDown => self.list.next(),
                MouseEventKind::ScrollUp => self.list.previous(),
                _ => (),
            },
            _ => (),
        };

        Action::None
    }

    fn click(&self, navigator: &dyn Navigator, idx: usize) {
        ResultItemView::new(&self.courses[idx], navigator).click();
    }

    fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let hit = self.card_areas.iter().find(|(_, r)| {
            (r.x..r.right()).contains(&column) && (r.y..r.bottom()).contains(&row)
        });
        debug!("click at {},{} hit {:?}", column, row, hit);

        hit.map(|(idx, _)| *idx)
    }
}
