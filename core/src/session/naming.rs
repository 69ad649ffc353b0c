use chrono::NaiveDateTime;

/// `<YYYY-MM-DD>_<HH-MM-SS>_map<id>`
pub fn default_export_name(map_id: u32, now: NaiveDateTime) -> String {
    format!("{}_map{map_id}", now.format("%Y-%m-%d_%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn name_has_date_time_and_map() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();
        assert_eq!(default_export_name(177, now), "2024-03-09_07-05-01_map177");
    }
}
