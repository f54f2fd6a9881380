use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Manager,
    Admin,
}

impl Role {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "user" => Ok(Self::User),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::Validation(format!("Unknown role: {}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

/// Declarative role gate. Each protected operation names the policy it
/// requires; ownership checks for managers are separate per-operation
/// queries below.
pub struct Policy {
    pub allowed: &'static [Role],
}

pub const ADMIN_ONLY: Policy = Policy { allowed: &[Role::Admin] };
pub const MANAGE_CATALOG: Policy = Policy { allowed: &[Role::Manager, Role::Admin] };
pub const UPDATE_BOOKING_STATUS: Policy = Policy { allowed: &[Role::Manager, Role::Admin] };
pub const UPDATE_PAYMENT_STATUS: Policy = Policy { allowed: &[Role::Manager, Role::Admin] };

impl Policy {
    pub fn check(&self, user: &User) -> Result<Role, AppError> {
        let role = Role::parse(&user.role)?;
        if self.allowed.contains(&role) {
            Ok(role)
        } else {
            Err(AppError::Forbidden("Insufficient role for this operation".into()))
        }
    }
}

pub fn is_admin(user: &User) -> bool {
    user.role == Role::Admin.as_str()
}

/// Admins pass; managers must be the manager of the given location.
pub async fn require_location_manager(state: &AppState, user: &User, location_id: &str) -> Result<(), AppError> {
    if is_admin(user) {
        return Ok(());
    }
    let location = state.location_repo.find_by_id(location_id).await?
        .ok_or(AppError::NotFound("Location not found".into()))?;
    if location.manager_id.as_deref() == Some(user.id.as_str()) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Not the manager of this location".into()))
    }
}

/// Ownership check routed through the space's location.
pub async fn require_space_manager(state: &AppState, user: &User, space_id: &str) -> Result<(), AppError> {
    if is_admin(user) {
        return Ok(());
    }
    let space = state.space_repo.find_by_id(space_id).await?
        .ok_or(AppError::NotFound("Space not found".into()))?;
    require_location_manager(state, user, &space.location_id).await
}

/// Whether the actor may read a booking-scoped resource: the booking's
/// owner, the owning location's manager, or an admin.
pub async fn can_access_booking(state: &AppState, user: &User, booking_user_id: &str, space_id: &str) -> Result<bool, AppError> {
    if is_admin(user) || user.id == booking_user_id {
        return Ok(true);
    }
    if user.role == Role::Manager.as_str() {
        return Ok(require_space_manager(state, user, space_id).await.is_ok());
    }
    Ok(false)
}
