pub mod film;
pub mod home;
pub mod not_found;
