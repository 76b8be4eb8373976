mod create_group_service;
mod delete_group_service;
mod list_groups_service;
mod update_group_service;

pub use create_group_service::CreateGroupService;
pub use delete_group_service::DeleteGroupService;
pub use list_groups_service::ListGroupsService;
pub use update_group_service::UpdateGroupService;
