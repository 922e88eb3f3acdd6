//! Course search result cards.
//!
//! [`ResultItemView`] draws a single course as a card, using [`average_rating`] and
//! [`format_date`] for its derived values. Clicking a card asks the injected [`Navigator`]
//! to move to the course's page.
use thiserror::Error;

mod date;
mod rating;
mod view;

pub use date::{format_date, ordinal_suffix, parse_local_date};
pub use rating::average_rating;
pub use view::{ResultItemView, CARD_HEIGHT, UNKNOWN_DATE, VERIFIED_BADGE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("couldn't parse date: {:?}", .0)]
    InvalidDate(String),
}

/// Something that can change the active view of the host application.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path)
    }
}
