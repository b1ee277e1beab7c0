pub mod booking;
pub mod home;
pub mod movies;
pub mod my_bookings;
