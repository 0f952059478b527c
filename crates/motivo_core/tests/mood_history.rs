use chrono::NaiveDate;
use motivo_core::db::open_db_in_memory;
use motivo_core::{Mood, MoodEntry, MoodService, RecordStore, SqliteRecordStore};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

#[test]
fn recording_a_new_date_inserts_and_keeps_descending_order() {
    let conn = open_db_in_memory().unwrap();
    let mut service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());

    service.record_mood(day(10), Mood::Happy).unwrap();
    service.record_mood(day(12), Mood::Tired).unwrap();
    service.record_mood(day(11), Mood::Neutral).unwrap();

    let dates: Vec<_> = service.history().iter().map(|entry| entry.date).collect();
    assert_eq!(dates, vec![day(12), day(11), day(10)]);
}

#[test]
fn recording_an_existing_date_replaces_in_place() {
    let conn = open_db_in_memory().unwrap();
    let mut service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());

    service.record_mood(day(10), Mood::Sad).unwrap();
    service.record_mood(day(11), Mood::Happy).unwrap();
    service.record_mood(day(10), Mood::Angry).unwrap();

    assert_eq!(service.history().len(), 2);
    assert_eq!(service.mood_for(day(10)), Some(Mood::Angry));
}

#[test]
fn out_of_order_stored_history_is_healed_on_mount() {
    let conn = open_db_in_memory().unwrap();
    {
        let store = SqliteRecordStore::try_new(&conn).unwrap();
        // Ascending order, as an older writer that only prepends could leave it.
        let drifted = vec![
            MoodEntry::new(day(8), Mood::Sad),
            MoodEntry::new(day(10), Mood::Happy),
            MoodEntry::new(day(9), Mood::Neutral),
        ];
        store.save("@mood_entries", &drifted).unwrap();
    }

    let service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());
    let dates: Vec<_> = service.history().iter().map(|entry| entry.date).collect();
    assert_eq!(dates, vec![day(10), day(9), day(8)]);
    assert_eq!(service.streak(), 3);
}

#[test]
fn streak_counts_consecutive_days_and_breaks_on_gap() {
    let conn = open_db_in_memory().unwrap();
    let mut service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());

    assert_eq!(service.streak(), 0);

    service.record_mood(day(10), Mood::Happy).unwrap();
    service.record_mood(day(9), Mood::Neutral).unwrap();
    service.record_mood(day(8), Mood::Tired).unwrap();
    assert_eq!(service.streak(), 3);

    let conn_gap = open_db_in_memory().unwrap();
    let mut gapped = MoodService::new(SqliteRecordStore::try_new(&conn_gap).unwrap());
    gapped.record_mood(day(10), Mood::Happy).unwrap();
    gapped.record_mood(day(8), Mood::Sad).unwrap();
    assert_eq!(gapped.streak(), 1);
}

#[test]
fn recent_limits_to_requested_count() {
    let conn = open_db_in_memory().unwrap();
    let mut service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());

    for d in 1..=10 {
        service.record_mood(day(d), Mood::Neutral).unwrap();
    }

    let recent = service.recent(7);
    assert_eq!(recent.len(), 7);
    assert_eq!(recent[0].date, day(10));
    assert_eq!(service.recent(20).len(), 10);
}

#[test]
fn history_survives_a_fresh_mount() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());
        service.record_mood(day(3), Mood::Happy).unwrap();
    }

    let service = MoodService::new(SqliteRecordStore::try_new(&conn).unwrap());
    assert_eq!(service.mood_for(day(3)), Some(Mood::Happy));
}
