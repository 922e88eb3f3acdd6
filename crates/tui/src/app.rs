use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{error, info, warn};
use ratatui::{
    prelude::{Constraint, Direction, Layout},
    text::Text,
    widgets::Paragraph,
    Frame,
};
use thutorium_client::Course;

use crate::{
    event::Event,
    navigator::{BusNavigator, Route},
    results::ResultsPane,
    source::ResultsSource,
    styles::{error_text, help_line},
};

/// An action that the results pane can request to be taken
pub enum Action {
    /// Do nothing
    None,

    /// Quit the application
    Exit,

    /// Re-read the search results
    Reload,

    /// Display the given text at the bottom of the screen
    Flash(Text<'static>),
}

/// Holds all application state
pub struct App {
    pub running: bool,
    results: ResultsPane,
    source: ResultsSource,
    navigator: BusNavigator,

    /// Course pages are opened in the browser under this, if set
    web_base: Option<String>,

    flash: Text<'static>,
}

impl App {
    pub fn new(
        courses: Vec<Course>,
        source: ResultsSource,
        navigator: BusNavigator,
        web_base: Option<String>,
    ) -> Self {
        Self {
            running: true,
            results: ResultsPane::new(courses),
            source,
            navigator,
            web_base,
            flash: Text::default(),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(frame.size());

        self.results.draw(&self.navigator, frame, layout[0]);

        let bottom_bar = if self.flash.lines.is_empty() {
            Paragraph::new(help_line())
        } else {
            Paragraph::new(self.flash.clone())
        };
        frame.render_widget(bottom_bar, layout[1]);
    }

    /// Handle the given event
    pub fn handle_event(&mut self, event: Event) {
        // C-C always exits
        if matches!(
            event,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c') | KeyCode::Char('C'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
        ) {
            self.quit();
            return;
        }

        // Mouse movement shouldn't wipe the message
        if let Event::Key(_) = event {
            self.flash = Text::default();
        }

        let action = match event {
            Event::Navigate(path) => self.navigate(&path),
            Event::Resize(_, _) => Action::None,
            x => self.results.handle_event(&self.navigator, x),
        };

        match action {
            Action::None => (),
            Action::Exit => self.quit(),
            Action::Reload => self.flash = self.reload(),
            Action::Flash(t) => self.flash = t,
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Apply a route change requested by a card
    fn navigate(&mut self, path: &str) -> Action {
        let Some(route) = Route::parse(path) else {
            warn!("ignoring navigation to unknown route {}", path);
            return Action::Flash(error_text(format!("Unknown page: {}", path)));
        };

        match &route {
            Route::Course { id } => {
                if !self.results.select_key(id) {
                    warn!("course {} isn't in the current results", id);
                }
            }
        }

        let Some(base) = &self.web_base else {
            info!("navigated to {:?}", route);
            return Action::Flash(Text::raw(format!("Navigated to {}", path)));
        };

        let url = course_url(base, path);
        match open::that(&url) {
            Ok(()) => {
                info!("opened {}", url);
                Action::Flash(Text::raw(format!("Opened {} in your browser", url)))
            }
            Err(e) => {
                error!("error opening {}: {}", url, e);
                Action::Flash(error_text(format!("Couldn't open {}: {}", url, e)))
            }
        }
    }

    fn reload(&mut self) -> Text<'static> {
        if !self.source.can_reload() {
            return error_text("Can't reload results read from stdin");
        }

        match self.source.load() {
            Ok(courses) => {
                self.results.set_courses(courses);
                info!("reloaded {} results", self.results.len());
                Text::raw(format!("Reloaded {} results", self.results.len()))
            }
            Err(e) => {
                error!("error reloading results: {:?}", e);
                error_text(format!("{:#}", e))
            }
        }
    }
}

/// Join the web app's base URL and a route path
fn course_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
