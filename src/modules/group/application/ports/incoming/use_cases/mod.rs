mod create_group_use_case;
mod delete_group_use_case;
mod list_groups_use_case;
mod update_group_use_case;

pub use create_group_use_case::{
    CreateGroupCommand, CreateGroupError, CreateGroupUseCase, GroupCommandError,
};
pub use delete_group_use_case::{DeleteGroupError, DeleteGroupUseCase};
pub use list_groups_use_case::{ListGroupsError, ListGroupsUseCase};
pub use update_group_use_case::{UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase};
