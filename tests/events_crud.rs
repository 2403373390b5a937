#[cfg(test)]
mod tests {
    use admcal::db::db::Db;
    use admcal::db::events::Events;
    use admcal::db::time_slots::TimeSlots;
    use admcal::libs::event::{Category, EventDraft};
    use admcal::libs::time_slot::TimeSlot;
    use chrono::NaiveDate;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests share the process environment; serialize the ones that point
    // HOME at a scratch directory.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EventTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for EventTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            EventTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn draft(title: &str, date: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: Some(date.parse().unwrap()),
            category: Category::Exam,
            eligibility: "HSC passed".to_string(),
            website_link: "https://example.edu/".to_string(),
            admit_card_link: String::new(),
            notes: Some("bring pencils".to_string()),
        }
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_first_read_seeds_demo_event(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();

        let all = events.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Dhaka University Admission 2025");
        assert_eq!(all[0].category, Category::Admission);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_empty_collection_is_not_reseeded(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();
        assert_eq!(events.get_all().unwrap().len(), 1);

        // The user deletes the seed; the key now holds an empty array.
        events.save_all(&[]).unwrap();
        assert!(events.get_all().unwrap().is_empty());
        assert!(events.get_all().unwrap().is_empty());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_corrupt_data_reads_as_empty_not_seed(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();
        events.get_all().unwrap();

        Db::new().unwrap().set("adm_events", "{definitely not json").unwrap();
        assert!(events.get_all().unwrap().is_empty());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_upsert_then_get_by_id_round_trips(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();

        let stored = events.upsert(draft("Midterm Exam Notice", "2025-06-01"), None).unwrap();
        let fetched = events.get_by_id(&stored.id).unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.title, "Midterm Exam Notice");
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_update_preserves_id_created_at_and_position(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();

        let first = events.upsert(draft("First", "2025-06-01"), None).unwrap();
        let second = events.upsert(draft("Second", "2025-07-01"), None).unwrap();

        let mut changed = draft("First, renamed", "2025-06-02");
        changed.category = Category::Result;
        let updated = events.upsert(changed, Some(&first.id)).unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.created_at, first.created_at);
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());

        // Position in storage order is unchanged: seed, first, second.
        let all = events.get_all().unwrap();
        assert_eq!(all[1].id, first.id);
        assert_eq!(all[1].title, "First, renamed");
        assert_eq!(all[2].id, second.id);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_upsert_with_unknown_id_is_an_error(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();

        let result = events.upsert(draft("Ghost", "2025-06-01"), Some("no-such-id"));
        assert!(result.is_err());
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_blank_title_is_rejected_before_any_write(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();
        let before = events.get_all().unwrap();

        let mut blank = draft("   ", "2025-06-01");
        assert!(events.upsert(blank.clone(), None).is_err());
        blank.title = "Has title".to_string();
        blank.date = None;
        assert!(events.upsert(blank, None).is_err());

        assert_eq!(events.get_all().unwrap(), before);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_delete_removes_event_and_cascades_to_time_slot(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();
        let slots = TimeSlots::new().unwrap();

        let stored = events.upsert(draft("With slot", "2025-06-01"), None).unwrap();
        slots
            .set(&stored.id, TimeSlot::new("10:00", Some("12:00"), None))
            .unwrap();
        assert!(slots.get(&stored.id).unwrap().is_some());

        events.delete(&stored.id).unwrap();
        assert!(events.get_by_id(&stored.id).unwrap().is_none());
        assert!(slots.get(&stored.id).unwrap().is_none());

        // Deleting an id that is already gone is a no-op, not an error.
        events.delete(&stored.id).unwrap();
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_stored_wire_format_is_stable(_ctx: &mut EventTestContext) {
        let events = Events::new().unwrap();
        let mut admit = draft("Admit cards out", "2025-06-01");
        admit.category = Category::AdmitCard;
        events.upsert(admit, None).unwrap();

        let raw = Db::new().unwrap().get("adm_events").unwrap().unwrap();
        assert!(raw.contains("\"websiteLink\""));
        assert!(raw.contains("\"admitCardLink\""));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"Admit Card\""));
        assert!(raw.contains("2025-06-01"));
    }
}
