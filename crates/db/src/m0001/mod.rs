mod user_settings;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "platewise",
    "m0001",
    vec_box![],
    vec_box![user_settings::CreateTable]
);
