// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{Datelike, Local};

/// 1-based day of the year: January 1st is 1, December 31st is 365 or 366.
///
/// ```
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2022, 11, 22).unwrap();
/// assert_eq!(tidbit_util::day_of_year(&date), 326);
/// ```
pub fn day_of_year<D: Datelike>(date: &D) -> u32 {
    date.ordinal()
}

/// Day of the year of the current local date.
pub fn day_of_year_today() -> u32 {
    day_of_year(&Local::now())
}
