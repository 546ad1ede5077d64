use platewise_settings::{SettingsStore, UserSettings};
use platewise_shared::Language;
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_load_unknown_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    assert_eq!(store.load("nobody").await?, None);

    Ok(())
}

#[tokio::test]
async fn test_upsert_round_trip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    let mut settings = UserSettings {
        has_shown_first_success: true,
        language: Some(Language::Nl),
        ..Default::default()
    };
    settings.extra.insert("theme".to_owned(), json!("dark"));

    store.upsert("user-1", &settings).await?;
    assert_eq!(store.load("user-1").await?, Some(settings.clone()));

    settings.language = None;
    settings.extra.insert("servings".to_owned(), json!(4));
    store.upsert("user-1", &settings).await?;

    let loaded = store.load("user-1").await?.unwrap();
    assert_eq!(loaded.language, None);
    assert_eq!(loaded.extra.get("servings"), Some(&json!(4)));
    assert_eq!(loaded.extra.get("theme"), Some(&json!("dark")));

    Ok(())
}

#[tokio::test]
async fn test_users_are_isolated() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, store) = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    let settings = UserSettings {
        language: Some(Language::Ro),
        ..Default::default()
    };
    store.upsert("user-1", &settings).await?;

    assert_eq!(store.load("user-2").await?, None);

    Ok(())
}

#[tokio::test]
async fn test_unsupported_stored_language_is_ignored() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (pool, store) = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    sqlx::query(
        "INSERT INTO user_settings (user_id, has_shown_first_success, language, extra, updated_at) VALUES ('user-1', 1, 'xx', '{}', 0)",
    )
    .execute(&pool)
    .await?;

    let loaded = store.load("user-1").await?.unwrap();
    assert!(loaded.has_shown_first_success);
    assert_eq!(loaded.language, None);

    Ok(())
}
