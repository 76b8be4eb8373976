pub mod domain;
pub mod ports;
pub mod schedule_use_cases;
pub mod services;
