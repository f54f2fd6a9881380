use crate::domain::models::{
    availability::Availability, booking::{Booking, BookingStatus}, location::Location,
    payment::{Payment, PaymentStatus}, space::{Space, SpaceType}, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, location: &Location) -> Result<Location, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, AppError>;
    async fn list(&self) -> Result<Vec<Location>, AppError>;
    async fn update(&self, location: &Location) -> Result<Location, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn create(&self, space: &Space) -> Result<Space, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Space>, AppError>;
    async fn list(&self, location_id: Option<&str>) -> Result<Vec<Space>, AppError>;
    async fn update(&self, space: &Space) -> Result<Space, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    async fn create_type(&self, space_type: &SpaceType) -> Result<SpaceType, AppError>;
    async fn find_type_by_id(&self, id: &str) -> Result<Option<SpaceType>, AppError>;
    async fn list_types(&self) -> Result<Vec<SpaceType>, AppError>;
    async fn update_type(&self, space_type: &SpaceType) -> Result<SpaceType, AppError>;
    async fn delete_type(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn create(&self, block: &Availability) -> Result<Availability, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Availability>, AppError>;
    async fn list_by_space_date(&self, space_id: &str, date: NaiveDate) -> Result<Vec<Availability>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking after re-verifying availability coverage and the
    /// overlap rule inside one transaction. Fails with Conflict when no
    /// covering block exists or an active booking overlaps.
    async fn create_checked(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_all(&self) -> Result<Vec<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_by_manager(&self, manager_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_active_by_space_date(&self, space_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError>;
    /// Applies the transition inside a transaction, rejecting it with
    /// InvalidState when the booking is already terminal.
    async fn update_status(&self, id: &str, new_status: BookingStatus) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Inserts the settled payment and confirms the booking in one
    /// transaction. Fails with Conflict when a completed payment already
    /// exists, and with InvalidState when the booking turned terminal in
    /// the meantime.
    async fn create_completed(&self, payment: &Payment) -> Result<Payment, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, AppError>;
    async fn find_by_booking(&self, booking_id: &str) -> Result<Vec<Payment>, AppError>;
    /// Updates the payment and applies the implied booking transition
    /// atomically.
    async fn update_status(&self, id: &str, new_status: PaymentStatus) -> Result<Payment, AppError>;
}
