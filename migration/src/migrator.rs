use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601100001_create_users::Migration),
            Box::new(migrations::m202601100002_create_classes::Migration),
            Box::new(migrations::m202601100003_create_class_enrollments::Migration),
            Box::new(migrations::m202601100004_create_assignments::Migration),
            Box::new(migrations::m202601100005_create_submissions::Migration),
        ]
    }
}
