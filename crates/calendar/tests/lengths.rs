use almanac_calendar::Month;

#[test]
fn year_lengths() {
    let common: u16 = Month::all().map(|m| u16::from(m.length(false))).sum();
    let leap: u16 = Month::all().map(|m| u16::from(m.length(true))).sum();
    assert_eq!(common, 365);
    assert_eq!(leap, 366);
}

#[test]
fn length_within_min_max() {
    for month in Month::all() {
        for leap in [false, true] {
            let length = month.length(leap);
            assert!(
                (month.min_length()..=month.max_length()).contains(&length),
                "{month} leap={leap}: {length}"
            );
        }
    }
}

#[test]
fn first_day_of_year_is_running_sum() {
    for leap in [false, true] {
        assert_eq!(Month::January.first_day_of_year(leap), 1);
        for pair in Month::ALL.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert_eq!(
                next.first_day_of_year(leap),
                prev.first_day_of_year(leap) + u16::from(prev.length(leap)),
                "{next} leap={leap}"
            );
        }
    }
}

#[test]
fn first_day_of_year_table() {
    let cases: &[(i32, bool, u16)] = &[
        (1, false, 1),
        (2, false, 32),
        (3, false, 60),
        (4, false, 91),
        (5, false, 121),
        (6, false, 152),
        (7, false, 182),
        (8, false, 213),
        (9, false, 244),
        (10, false, 274),
        (11, false, 305),
        (12, false, 335),
        (1, true, 1),
        (2, true, 32),
        (3, true, 61),
        (8, true, 214),
        (12, true, 336),
    ];
    for &(ordinal, leap, expected) in cases {
        let month = Month::of(ordinal).unwrap();
        assert_eq!(
            month.first_day_of_year(leap),
            expected,
            "{month} leap={leap}"
        );
    }
}

#[test]
fn last_day_of_december_is_year_length() {
    for (leap, days) in [(false, 365_u16), (true, 366)] {
        let dec = Month::December;
        assert_eq!(
            dec.first_day_of_year(leap) + u16::from(dec.length(leap)) - 1,
            days
        );
    }
}
