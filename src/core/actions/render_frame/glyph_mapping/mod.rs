pub mod factory;
pub mod kinds;
pub mod mapper;
pub mod mappers;
