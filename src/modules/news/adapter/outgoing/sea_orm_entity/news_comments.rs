use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::news::application::domain::entities::Comment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub content: String,

    pub author_id: Uuid,

    pub post_id: Uuid,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_comment(&self) -> Comment {
        Comment {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            content: self.content.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
