mod group_query;
mod group_repository;

pub use group_query::{GroupQuery, GroupQueryError};
pub use group_repository::{
    CreateGroupData, GroupRepository, GroupRepositoryError, UpdateGroupData,
};
