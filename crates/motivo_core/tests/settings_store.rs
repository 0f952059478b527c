use motivo_core::db::open_db_in_memory;
use motivo_core::{
    Language, RecordStore, ReminderTime, SettingsService, SqliteRecordStore, ThemeColor,
};

#[test]
fn first_run_yields_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = SettingsService::new(SqliteRecordStore::try_new(&conn).unwrap());

    let settings = service.settings();
    assert_eq!(settings.theme_color, ThemeColor::Light);
    assert_eq!(settings.language, Language::En);
    assert!(!settings.reminder_enabled);
    assert!(settings.reminder_time.is_none());
}

#[test]
fn each_field_round_trips_through_its_own_key() {
    let conn = open_db_in_memory().unwrap();
    let mut service = SettingsService::new(SqliteRecordStore::try_new(&conn).unwrap());

    service.set_theme_color(ThemeColor::Ocean).unwrap();
    service.set_language(Language::De).unwrap();
    service.set_reminder_enabled(true).unwrap();
    service
        .set_reminder_time(ReminderTime::parse("08:30").unwrap())
        .unwrap();

    let fresh = SettingsService::new(SqliteRecordStore::try_new(&conn).unwrap());
    let settings = fresh.settings();
    assert_eq!(settings.theme_color, ThemeColor::Ocean);
    assert_eq!(settings.language, Language::De);
    assert!(settings.reminder_enabled);
    assert_eq!(settings.reminder_time.unwrap().to_string(), "08:30");

    let store = SqliteRecordStore::try_new(&conn).unwrap();
    assert_eq!(
        store.get_raw("@motivo_theme_color").unwrap().as_deref(),
        Some("ocean")
    );
    assert_eq!(
        store.get_raw("@motivo_language").unwrap().as_deref(),
        Some("de")
    );
    assert_eq!(
        store.get_raw("@motivo_reminder_enabled").unwrap().as_deref(),
        Some("1")
    );
    assert_eq!(
        store.get_raw("@motivo_reminder_time").unwrap().as_deref(),
        Some("08:30")
    );
}

#[test]
fn unknown_persisted_values_fall_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    {
        let store = SqliteRecordStore::try_new(&conn).unwrap();
        store.set_raw("@motivo_theme_color", "neon").unwrap();
        store.set_raw("@motivo_language", "fr").unwrap();
        store.set_raw("@motivo_reminder_enabled", "yes").unwrap();
        store.set_raw("@motivo_reminder_time", "25:99").unwrap();
    }

    let service = SettingsService::new(SqliteRecordStore::try_new(&conn).unwrap());
    let settings = service.settings();
    assert_eq!(settings.theme_color, ThemeColor::Light);
    assert_eq!(settings.language, Language::En);
    assert!(!settings.reminder_enabled);
    assert!(settings.reminder_time.is_none());
}

#[test]
fn clearing_the_reminder_time_removes_the_key() {
    let conn = open_db_in_memory().unwrap();
    let mut service = SettingsService::new(SqliteRecordStore::try_new(&conn).unwrap());

    service
        .set_reminder_time(ReminderTime::parse("21:00").unwrap())
        .unwrap();
    service.clear_reminder_time().unwrap();

    assert!(service.settings().reminder_time.is_none());
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    assert_eq!(store.get_raw("@motivo_reminder_time").unwrap(), None);
}

#[test]
fn reload_discards_unpersisted_divergence() {
    let conn = open_db_in_memory().unwrap();
    let mut service = SettingsService::new(SqliteRecordStore::try_new(&conn).unwrap());
    service.set_theme_color(ThemeColor::Forest).unwrap();

    // Another writer changes the stored value behind this controller.
    {
        let store = SqliteRecordStore::try_new(&conn).unwrap();
        store.set_raw("@motivo_theme_color", "ocean").unwrap();
    }
    assert_eq!(service.settings().theme_color, ThemeColor::Forest);

    service.reload();
    assert_eq!(service.settings().theme_color, ThemeColor::Ocean);
}
