pub mod header;
pub mod meeting_card;
pub mod meeting_list;
