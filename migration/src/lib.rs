pub use sea_orm_migration::prelude::*;

mod m20250712_091400_create_groups_table;
mod m20250712_091522_create_users_table;
mod m20250712_091610_create_subjects_table;
mod m20250712_091655_create_teacher_subjects_table;
mod m20250712_091801_create_schedule_slots_table;
mod m20250712_091905_create_news_posts_table;
mod m20250712_091957_create_news_comments_table;
mod m20250712_092043_create_news_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250712_091400_create_groups_table::Migration),
            Box::new(m20250712_091522_create_users_table::Migration),
            Box::new(m20250712_091610_create_subjects_table::Migration),
            Box::new(m20250712_091655_create_teacher_subjects_table::Migration),
            Box::new(m20250712_091801_create_schedule_slots_table::Migration),
            Box::new(m20250712_091905_create_news_posts_table::Migration),
            Box::new(m20250712_091957_create_news_comments_table::Migration),
            Box::new(m20250712_092043_create_news_likes_table::Migration),
        ]
    }
}
