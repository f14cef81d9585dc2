pub mod bugs;
pub mod health;
