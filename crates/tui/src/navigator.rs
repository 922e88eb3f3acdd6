use course_card::Navigator;
use log::{debug, error};
use std::sync::mpsc::Sender;

use crate::event::Event;

/// Sends navigation requests back to the main loop, so they're handled after the current event.
#[derive(Debug, Clone)]
pub struct BusNavigator {
    sender: Sender<Event>,
}

impl BusNavigator {
    pub fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }
}

impl Navigator for BusNavigator {
    fn navigate_to(&self, path: &str) {
        debug!("queueing navigation to {}", path);
        if let Err(e) = self.sender.send(Event::Navigate(path.to_string())) {
            error!("couldn't queue navigation to {}: {}", path, e);
        }
    }
}

/// A page we know how to navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The detail page for a course: `/course?id=...`
    Course { id: String },
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let (page, query) = path.split_once('?').unwrap_or((path, ""));
        match page {
            "/course" => query_param(query, "id")
                .filter(|id| !id.is_empty())
                .map(|id| Route::Course { id: id.to_string() }),
            _ => None,
        }
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| match pair.split_once('=') {
        Some((k, v)) if k == name => Some(v),
        _ => None,
    })
}
