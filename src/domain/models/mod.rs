pub mod auth;
pub mod availability;
pub mod booking;
pub mod location;
pub mod payment;
pub mod space;
pub mod user;
