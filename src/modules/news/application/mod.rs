pub mod domain;
pub mod news_use_cases;
pub mod ports;
pub mod services;
