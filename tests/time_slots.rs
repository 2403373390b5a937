#[cfg(test)]
mod tests {
    use admcal::db::time_slots::TimeSlots;
    use admcal::libs::time_slot::TimeSlot;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SlotTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for SlotTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SlotTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(SlotTestContext)]
    #[test]
    fn test_set_and_get_round_trip(_ctx: &mut SlotTestContext) {
        let slots = TimeSlots::new().unwrap();

        slots
            .set("ev-1", TimeSlot::new("10:00", Some("12:30"), Some("hall 2")))
            .unwrap();
        let slot = slots.get("ev-1").unwrap().unwrap();
        assert_eq!(slot.start, "10:00");
        assert_eq!(slot.end.as_deref(), Some("12:30"));
        assert_eq!(slot.note.as_deref(), Some("hall 2"));

        assert!(slots.get("ev-2").unwrap().is_none());
    }

    #[test_context(SlotTestContext)]
    #[test]
    fn test_blank_start_is_the_deletion_path(_ctx: &mut SlotTestContext) {
        let slots = TimeSlots::new().unwrap();

        slots.set("ev-1", TimeSlot::new("09:00", None, None)).unwrap();
        assert!(slots.get("ev-1").unwrap().is_some());

        slots.set("ev-1", TimeSlot::new("  ", Some("12:00"), None)).unwrap();
        assert!(slots.get("ev-1").unwrap().is_none());
    }

    #[test_context(SlotTestContext)]
    #[test]
    fn test_blank_end_and_note_are_not_stored(_ctx: &mut SlotTestContext) {
        let slots = TimeSlots::new().unwrap();

        slots
            .set("ev-1", TimeSlot::new(" 10:00 ", Some("  "), Some("")))
            .unwrap();
        let slot = slots.get("ev-1").unwrap().unwrap();
        assert_eq!(slot.start, "10:00");
        assert_eq!(slot.end, None);
        assert_eq!(slot.note, None);
    }

    #[test_context(SlotTestContext)]
    #[test]
    fn test_remove_is_idempotent(_ctx: &mut SlotTestContext) {
        let slots = TimeSlots::new().unwrap();

        slots.set("ev-1", TimeSlot::new("10:00", None, None)).unwrap();
        slots.remove("ev-1").unwrap();
        assert!(slots.get("ev-1").unwrap().is_none());
        slots.remove("ev-1").unwrap();
    }
}
