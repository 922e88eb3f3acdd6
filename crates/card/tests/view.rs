use std::cell::RefCell;

use course_card::{Navigator, ResultItemView, CARD_HEIGHT, UNKNOWN_DATE, VERIFIED_BADGE};
use pretty_assertions::assert_eq;
use ratatui::{buffer::Buffer, layout::Rect, text::Text, widgets::Widget};
use thutorium_client::{Category, Course, Rating, Tutor};

fn course(points: &[f64], is_verified: bool) -> Course {
    Course {
        course_id: "abc123".to_string(),
        category: Category {
            category_name: "Mathematics".to_string(),
        },
        ratings: points.iter().map(|&points| Rating { points }).collect(),
        course_name: "Linear Algebra".to_string(),
        description_short: "Vectors, matrices and more".to_string(),
        tutor: Tutor {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            is_verified,
        },
        start_date: "2024-06-03".to_string(),
        end_date: "2024-01-11".to_string(),
    }
}

fn plain(text: Text) -> Vec<String> {
    text.lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

fn ignore(_: &str) {}

#[test]
fn test_rated_card() {
    let course = course(&[4.0, 5.0], false);
    let view = ResultItemView::new(&course, &ignore);

    assert_eq!(
        plain(view.details()),
        vec![
            " Mathematics ",
            "Average Rating: 4.5 (2)",
            "Linear Algebra",
            "Vectors, matrices and more",
            "By Ada Lovelace",
        ]
    );
}

#[test]
fn test_whole_average_has_no_decimal() {
    let course = course(&[4.0, 4.0, 4.0], false);
    let view = ResultItemView::new(&course, &ignore);
    assert_eq!(view.rating_text(), "Average Rating: 4 (3)");
}

#[test]
fn test_unrated_card() {
    let course = course(&[], false);
    let view = ResultItemView::new(&course, &ignore);
    assert_eq!(view.rating_text(), "Not yet rated");
    assert_eq!(plain(view.details())[1], "Not yet rated");
}

#[test]
fn test_verified_badge() {
    let unverified = course(&[], false);
    let line = plain(ResultItemView::new(&unverified, &ignore).details()).remove(4);
    assert!(!line.contains(VERIFIED_BADGE));

    let verified = course(&[], true);
    let line = plain(ResultItemView::new(&verified, &ignore).details()).remove(4);
    assert_eq!(line, format!("By Ada Lovelace {}", VERIFIED_BADGE));
}

#[test]
fn test_date_chips() {
    let course = course(&[], false);
    let view = ResultItemView::new(&course, &ignore);
    assert_eq!(
        plain(view.dates()),
        vec!["From", "3rd Jun 2024", "To", "11th Jan 2024"]
    );
}

#[test]
fn test_invalid_date_placeholder() {
    let mut course = course(&[], false);
    course.end_date = "whenever".to_string();
    let view = ResultItemView::new(&course, &ignore);
    assert_eq!(
        plain(view.dates()),
        vec!["From", "3rd Jun 2024", "To", UNKNOWN_DATE]
    );
}

#[test]
fn test_click_navigates() {
    let visited = RefCell::new(vec![]);
    let record = |path: &str| visited.borrow_mut().push(path.to_string());

    let course = course(&[], false);
    let view = ResultItemView::new(&course, &record);
    assert_eq!(view.key(), "abc123");
    assert_eq!(view.target(), "/course?id=abc123");

    view.click();
    assert_eq!(*visited.borrow(), vec!["/course?id=abc123".to_string()]);
}

#[test]
fn test_struct_navigator() {
    struct Recorder(RefCell<Option<String>>);
    impl Navigator for Recorder {
        fn navigate_to(&self, path: &str) {
            *self.0.borrow_mut() = Some(path.to_string());
        }
    }

    let nav = Recorder(RefCell::new(None));
    let course = course(&[], true);
    ResultItemView::new(&course, &nav).click();
    assert_eq!(nav.0.into_inner().as_deref(), Some("/course?id=abc123"));
}

#[test]
fn test_render_fits_card() {
    let course = course(&[4.0, 5.0], true);
    let area = Rect::new(0, 0, 60, CARD_HEIGHT);
    let mut buf = Buffer::empty(area);
    ResultItemView::new(&course, &ignore)
        .selected(true)
        .render(area, &mut buf);

    let rows: Vec<String> = (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf.get(x, y).symbol().to_string())
                .collect()
        })
        .collect();

    assert!(rows[0].starts_with('╭'));
    assert!(rows[1].contains("Mathematics"));
    assert!(rows[1].contains("From"));
    assert!(rows[2].contains("3rd Jun 2024"));
    assert!(rows[5].contains("By Ada Lovelace"));
    assert!(rows[6].starts_with('╰'));
}
