pub mod bottom_nav;
pub mod empty_state;
pub mod screen_header;
