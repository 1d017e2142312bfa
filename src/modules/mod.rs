pub mod film;
pub mod genre;
pub mod like;
pub mod mpa;
pub mod ranking;
pub mod user;
