pub mod decimal_service;
pub mod emit_service;
pub mod scale;
