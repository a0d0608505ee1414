pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250305_090000_create_categories_and_locations;
mod m20250305_090100_create_posts_table;
mod m20250305_090200_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250305_090000_create_categories_and_locations::Migration),
            Box::new(m20250305_090100_create_posts_table::Migration),
            Box::new(m20250305_090200_create_comments_table::Migration),
        ]
    }
}
