use std::sync::Arc;
use crate::domain::ports::{
    AvailabilityRepository, BookingRepository, LocationRepository,
    PaymentRepository, SpaceRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub location_repo: Arc<dyn LocationRepository>,
    pub space_repo: Arc<dyn SpaceRepository>,
    pub availability_repo: Arc<dyn AvailabilityRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub auth_service: Arc<AuthService>,
}
