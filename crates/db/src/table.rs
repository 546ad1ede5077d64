use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum UserSettings {
    Table,
    UserId,
    HasShownFirstSuccess,
    Language,
    Extra,
    UpdatedAt,
}
