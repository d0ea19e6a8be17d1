pub mod controller;
pub mod envy;
pub mod errors;
pub mod models;
pub mod structs;
pub mod util;
