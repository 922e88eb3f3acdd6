use std::ops::Range;

use course_card::CARD_HEIGHT;

/// Selection and scroll state for a vertical list of fixed-height cards.
#[derive(Debug, Default)]
pub struct CardList {
    selected: Option<usize>,
    offset: usize,
    item_count: usize,
}

impl CardList {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Set the number of items, keeping the selection in bounds
    pub fn set_len(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.selected = match self.selected {
            _ if item_count == 0 => None,
            Some(i) => Some(i.min(item_count - 1)),
            None => Some(0),
        };
        self.offset = self.offset.min(item_count.saturating_sub(1));
    }

    pub fn select(&mut self, idx: usize) {
        if idx < self.item_count {
            self.selected = Some(idx);
        }
    }

    pub fn next(&mut self) {
        if self.item_count == 0 {
            return;
        }

        let i = match self.selected {
            Some(i) => {
                if i >= self.item_count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn previous(&mut self) {
        if self.item_count == 0 {
            return;
        }

        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    self.item_count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn first(&mut self) {
        self.selected = (self.item_count > 0).then_some(0);
    }

    pub fn last(&mut self) {
        self.selected = self.item_count.checked_sub(1);
    }

    /// The items which fit in the given height, scrolling so the selected one is visible.
    pub fn visible(&mut self, height: u16) -> Range<usize> {
        let fits = usize::from((height / CARD_HEIGHT).max(1));
        if let Some(sel) = self.selected {
            if sel < self.offset {
                self.offset = sel;
            } else if sel >= self.offset + fits {
                self.offset = sel + 1 - fits;
            }
        }

        self.offset..(self.offset + fits).min(self.item_count)
    }
}
