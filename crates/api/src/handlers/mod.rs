pub mod flight;
pub mod profile;
pub mod trip;
