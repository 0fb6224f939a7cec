use nepdate_calendar::{
    MAX_BS_YEAR, MAX_DAY_DIFF, MIN_BS_YEAR, TOTAL_DAYS, days_in_month, days_in_year,
    month_lengths, years,
};

#[test]
fn year_totals_equal_month_sums() {
    for year in years() {
        let months = month_lengths(year).unwrap();
        let sum: u32 = months.iter().map(|&d| u32::from(d)).sum();
        assert_eq!(
            u32::from(days_in_year(year).unwrap()),
            sum,
            "year {year}: total does not match months {months:?}"
        );
    }
}

#[test]
fn month_lengths_plausible() {
    for year in years() {
        for month in 1..=12 {
            let len = days_in_month(year, month).unwrap();
            assert!((29..=32).contains(&len), "{year}-{month:02} has {len} days");
        }
        let total = days_in_year(year).unwrap();
        assert!((365..=366).contains(&total), "{year} has {total} days");
    }
}

#[test]
fn span_matches_year_totals() {
    let sum: u32 = years().map(|y| u32::from(days_in_year(y).unwrap())).sum();
    assert_eq!(sum, TOTAL_DAYS);
    assert_eq!(MAX_DAY_DIFF, TOTAL_DAYS - 1);
}

#[test]
fn lookups_outside_table() {
    assert!(days_in_year(MIN_BS_YEAR - 1).is_none());
    assert!(days_in_year(MAX_BS_YEAR + 1).is_none());
    assert!(month_lengths(MAX_BS_YEAR + 1).is_none());
    assert_eq!(years().count(), 91);
}
