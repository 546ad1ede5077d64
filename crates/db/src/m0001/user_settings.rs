use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserSettings;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserSettings::Table)
        .col(
            ColumnDef::new(UserSettings::UserId)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(UserSettings::HasShownFirstSuccess)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(UserSettings::Language).string().string_len(5))
        .col(
            ColumnDef::new(UserSettings::Extra)
                .text()
                .not_null()
                .default("{}"),
        )
        .col(
            ColumnDef::new(UserSettings::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserSettings::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
