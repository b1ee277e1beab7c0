pub mod booking_item;
pub mod movie_card;
pub mod movie_option;
pub mod nav_bar;
pub mod notification_stack;
pub mod seat_map;
pub mod status_badge;
pub mod step_indicator;
