#[cfg(test)]
mod tests {
    use admcal::libs::countdown::{days_until, label};
    use admcal::libs::messages::Lang;
    use chrono::NaiveDate;

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_far_future_counts_days() {
        let days = days_until(date("2099-01-01"), date("2025-01-01"));
        assert_eq!(days, 27028);
        assert_eq!(
            label(date("2099-01-01"), date("2025-01-01"), Lang::En),
            "27028 Days left"
        );
    }

    #[test]
    fn test_tomorrow_is_one_day_left() {
        assert_eq!(days_until(date("2025-01-02"), date("2025-01-01")), 1);
        assert_eq!(
            label(date("2025-01-02"), date("2025-01-01"), Lang::En),
            "1 Days left"
        );
    }

    #[test]
    fn test_today_and_yesterday_are_time_up() {
        assert_eq!(label(date("2025-01-01"), date("2025-01-01"), Lang::En), "Time Up");
        assert_eq!(label(date("2024-12-31"), date("2025-01-01"), Lang::En), "Time Up");
    }

    #[test]
    fn test_labels_localize() {
        assert_eq!(label(date("2024-12-31"), date("2025-01-01"), Lang::Bn), "সময় শেষ");
        assert_eq!(
            label(date("2025-01-11"), date("2025-01-01"), Lang::Bn),
            "10 দিন বাকি"
        );
    }
}
