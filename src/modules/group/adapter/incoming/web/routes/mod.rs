pub mod create_group;
pub mod delete_group;
pub mod list_groups;
pub mod update_group;

pub use create_group::create_group_handler;
pub use delete_group::delete_group_handler;
pub use list_groups::list_groups_handler;
pub use update_group::update_group_handler;
