//! UIコンポーネント

pub mod header;
pub mod upload_zone;
pub mod progress_bar;
pub mod passport_card;
pub mod search_panel;
