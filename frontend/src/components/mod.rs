pub mod day_section;
pub mod meeting_card;
pub mod meeting_list;
