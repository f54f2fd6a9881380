pub mod access;
pub mod auth_service;
pub mod pricing;
pub mod scheduling;
