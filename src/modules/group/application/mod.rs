pub mod domain;
pub mod group_use_cases;
pub mod ports;
pub mod services;
