use crate::error::FilterError;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref DATE_FILTER: Regex =
        Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:,(\d{4}-\d{2}-\d{2}))?$").unwrap();
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A lesson date constraint, either one day or an inclusive range of days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Single(NaiveDate),
    Range { start: NaiveDate, end: NaiveDate },
}

fn parse_date(raw: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FilterError::InvalidDateFormat)
}

impl FromStr for DateFilter {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let captures = DATE_FILTER
            .captures(raw)
            .ok_or(FilterError::InvalidDateFormat)?;

        let start = parse_date(&captures[1])?;
        match captures.get(2) {
            None => Ok(Self::Single(start)),
            Some(end) => {
                let end = parse_date(end.as_str())?;
                if start > end {
                    return Err(FilterError::InvalidDateRange);
                }
                Ok(Self::Range { start, end })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_date() {
        let filter = DateFilter::from_str("2022-01-01").unwrap();
        assert_eq!(filter, DateFilter::Single(date(2022, 1, 1)));
    }

    #[test]
    fn test_date_range() {
        let filter = DateFilter::from_str("2022-01-01,2022-01-31").unwrap();
        assert_eq!(
            filter,
            DateFilter::Range {
                start: date(2022, 1, 1),
                end: date(2022, 1, 31)
            }
        );
    }

    #[test]
    fn test_same_day_range() {
        assert!(DateFilter::from_str("2022-03-05,2022-03-05").is_ok());
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(
            DateFilter::from_str("2022-02-01,2022-01-01"),
            Err(FilterError::InvalidDateRange)
        );
    }

    #[test]
    fn test_malformed_dates() {
        for raw in [
            "2022/01/01",
            "22-01-01",
            "2022-1-1",
            "2022-01-01;2022-01-02",
            "2022-01-01,2022-01-02,2022-01-03",
            "2022-01-01,",
            " 2022-01-01",
            "yesterday",
            "2022-13-45",
        ] {
            assert_eq!(
                DateFilter::from_str(raw),
                Err(FilterError::InvalidDateFormat),
                "{raw} should be rejected"
            );
        }
    }
}
