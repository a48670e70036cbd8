pub mod health;
pub mod welcome;
