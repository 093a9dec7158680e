pub mod profile;
pub mod trip;
pub mod verification;
