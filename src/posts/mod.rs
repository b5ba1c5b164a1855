pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod service;
pub mod validators;
