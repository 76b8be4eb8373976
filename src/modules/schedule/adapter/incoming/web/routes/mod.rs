pub mod create_slot;
pub mod delete_slot;
pub mod get_schedule;
pub mod update_slot;

pub use create_slot::create_slot_handler;
pub use delete_slot::delete_slot_handler;
pub use get_schedule::get_schedule_handler;
pub use update_slot::update_slot_handler;
