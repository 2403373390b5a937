#[cfg(test)]
mod tests {
    use admcal::libs::messages::Lang;
    use admcal::libs::study::{StudySession, Subject};
    use admcal::libs::summary::{
        chart_ceiling, subject_label, today_total, total_minutes, week_study, CHART_FLOOR,
    };
    use chrono::NaiveDate;

    fn session(date: &str, minutes: u32) -> StudySession {
        StudySession {
            id: format!("s-{date}-{minutes}"),
            subject_id: "1".to_string(),
            date: date.parse().unwrap(),
            minutes,
            notes: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    #[test]
    fn test_week_covers_seven_days_ending_today() {
        let days = week_study(&[], today());
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 4, 4).unwrap());
        assert_eq!(days[6].date, today());
        assert!(days.iter().all(|d| d.minutes == 0));
    }

    #[test]
    fn test_sessions_outside_window_contribute_nothing() {
        let sessions = vec![session("2025-03-01", 120), session("2025-04-03", 90)];
        let days = week_study(&sessions, today());
        assert!(days.iter().all(|d| d.minutes == 0));
        assert_eq!(chart_ceiling(&days), CHART_FLOOR);
    }

    #[test]
    fn test_same_day_sessions_sum_into_one_bucket() {
        let sessions = vec![
            session("2025-04-10", 30),
            session("2025-04-10", 45),
            session("2025-04-08", 25),
        ];
        let days = week_study(&sessions, today());
        assert_eq!(days[6].minutes, 75);
        assert_eq!(days[4].minutes, 25);
        assert_eq!(chart_ceiling(&days), 75);
    }

    #[test]
    fn test_ceiling_never_drops_below_floor() {
        let sessions = vec![session("2025-04-10", 10)];
        let days = week_study(&sessions, today());
        assert_eq!(chart_ceiling(&days), 60);
    }

    #[test]
    fn test_totals() {
        let sessions = vec![
            session("2025-04-10", 30),
            session("2025-04-09", 40),
            session("2024-01-01", 500),
        ];
        assert_eq!(today_total(&sessions, today()), 30);
        assert_eq!(total_minutes(&sessions), 570);
    }

    #[test]
    fn test_dangling_subject_gets_placeholder_label() {
        let subjects = vec![Subject::general()];
        assert_eq!(subject_label(&subjects, "1", Lang::En), "General");
        assert_eq!(subject_label(&subjects, "gone", Lang::En), "Deleted Subject");
        // The placeholder only exists in English; Bangla falls back to it.
        assert_eq!(subject_label(&subjects, "gone", Lang::Bn), "Deleted Subject");
    }
}
