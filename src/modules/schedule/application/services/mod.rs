mod create_slot_service;
mod delete_slot_service;
mod get_schedule_service;
mod update_slot_service;

pub use create_slot_service::CreateSlotService;
pub use delete_slot_service::DeleteSlotService;
pub use get_schedule_service::GetScheduleService;
pub use update_slot_service::UpdateSlotService;
