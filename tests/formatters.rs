#[cfg(test)]
mod tests {
    use admcal::libs::formatter::{format_slot, to_12_hour};
    use admcal::libs::time_slot::TimeSlot;

    #[test]
    fn test_midnight_is_twelve_am() {
        assert_eq!(to_12_hour("00:30"), "12:30 AM");
        assert_eq!(to_12_hour("00:00"), "12:00 AM");
    }

    #[test]
    fn test_noon_is_twelve_pm() {
        assert_eq!(to_12_hour("12:00"), "12:00 PM");
        assert_eq!(to_12_hour("12:45"), "12:45 PM");
    }

    #[test]
    fn test_afternoon_hours_wrap() {
        assert_eq!(to_12_hour("13:05"), "1:05 PM");
        assert_eq!(to_12_hour("23:59"), "11:59 PM");
    }

    #[test]
    fn test_morning_hours_keep_am() {
        assert_eq!(to_12_hour("09:15"), "9:15 AM");
        assert_eq!(to_12_hour("11:00"), "11:00 AM");
    }

    #[test]
    fn test_empty_and_malformed_yield_empty() {
        assert_eq!(to_12_hour(""), "");
        assert_eq!(to_12_hour("1030"), "");
        assert_eq!(to_12_hour("xx:30"), "");
    }

    #[test]
    fn test_slot_with_only_start() {
        let slot = TimeSlot::new("10:00", None, None);
        assert_eq!(format_slot(&slot), "10:00 AM");
    }

    #[test]
    fn test_slot_with_start_and_end_uses_en_dash() {
        let slot = TimeSlot::new("10:00", Some("13:30"), None);
        assert_eq!(format_slot(&slot), "10:00 AM – 1:30 PM");
    }

    #[test]
    fn test_blank_slot_renders_as_nothing() {
        assert_eq!(format_slot(&TimeSlot::default()), "");
    }
}
