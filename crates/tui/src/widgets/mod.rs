mod card_list;

pub use card_list::CardList;
