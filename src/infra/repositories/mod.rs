pub mod sqlite_user_repo;
pub mod sqlite_location_repo;
pub mod sqlite_space_repo;
pub mod sqlite_availability_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_payment_repo;

pub mod postgres_user_repo;
pub mod postgres_location_repo;
pub mod postgres_space_repo;
pub mod postgres_availability_repo;
pub mod postgres_booking_repo;
pub mod postgres_payment_repo;
