mod create_slot_use_case;
mod delete_slot_use_case;
mod get_schedule_use_case;
mod update_slot_use_case;

pub use create_slot_use_case::{
    CreateSlotCommand, CreateSlotError, CreateSlotUseCase, SlotCommandError,
};
pub use delete_slot_use_case::{DeleteSlotError, DeleteSlotUseCase};
pub use get_schedule_use_case::{
    GetGroupScheduleUseCase, GetScheduleError, GetTeacherScheduleUseCase,
};
pub use update_slot_use_case::{UpdateSlotCommand, UpdateSlotError, UpdateSlotUseCase};
