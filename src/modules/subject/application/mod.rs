pub mod domain;
pub mod ports;
pub mod services;
pub mod subject_use_cases;
