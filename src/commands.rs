pub mod check;
pub mod zones;
