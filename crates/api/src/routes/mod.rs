pub mod flight;
pub mod health;
pub mod profile;
pub mod trip;
