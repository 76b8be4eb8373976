//! Who may edit or delete a piece of content. Pure checks; the
//! services fetch the rows and let these functions decide.

use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

/// Posts may be edited or deleted by their author or by an admin.
pub fn may_modify_post(author_id: Uuid, caller_id: Uuid, caller_role: Role) -> bool {
    caller_id == author_id || caller_role == Role::Admin
}

/// Comments may be deleted by their author, the author of the post
/// they hang off, or an admin.
pub fn may_delete_comment(
    comment_author_id: Uuid,
    post_author_id: Uuid,
    caller_id: Uuid,
    caller_role: Role,
) -> bool {
    caller_role == Role::Admin
        || caller_id == comment_author_id
        || caller_id == post_author_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_author_may_modify_their_post() {
        let author = Uuid::new_v4();
        assert!(may_modify_post(author, author, Role::Student));
    }

    #[test]
    fn an_admin_may_modify_any_post() {
        assert!(may_modify_post(Uuid::new_v4(), Uuid::new_v4(), Role::Admin));
    }

    #[test]
    fn another_student_may_not_modify_the_post() {
        assert!(!may_modify_post(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Student
        ));
        assert!(!may_modify_post(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Teacher
        ));
    }

    #[test]
    fn comment_author_post_author_and_admin_may_delete_a_comment() {
        let comment_author = Uuid::new_v4();
        let post_author = Uuid::new_v4();

        assert!(may_delete_comment(
            comment_author,
            post_author,
            comment_author,
            Role::Student
        ));
        assert!(may_delete_comment(
            comment_author,
            post_author,
            post_author,
            Role::Teacher
        ));
        assert!(may_delete_comment(
            comment_author,
            post_author,
            Uuid::new_v4(),
            Role::Admin
        ));
    }

    #[test]
    fn a_bystander_may_not_delete_the_comment() {
        assert!(!may_delete_comment(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Student
        ));
    }
}
