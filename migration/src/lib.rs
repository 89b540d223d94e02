pub use sea_orm_migration::prelude::*;

mod m20251101_000001_stepwise_user;
mod m20251101_000002_build_order;
mod m20251101_000003_build_order_step;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_stepwise_user::Migration),
            Box::new(m20251101_000002_build_order::Migration),
            Box::new(m20251101_000003_build_order_step::Migration),
        ]
    }
}
