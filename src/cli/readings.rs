use chrono::NaiveDate;
use meterbook::{prelude::*, reading::Reading};

/// Fill in the previous reading from the last saved one when it is not given explicitly.
pub fn resolve_previous<Q: Copy>(
    value: Option<Q>,
    date: Option<NaiveDate>,
    last: Option<Reading<Q>>,
) -> Result<Reading<Q>> {
    let value = value
        .or_else(|| last.map(|last| last.value))
        .context("no previous reading saved yet, pass `--previous-reading`")?;
    let date = date
        .or_else(|| last.map(|last| last.date))
        .context("no previous reading saved yet, pass `--previous-date`")?;
    Ok(Reading::new(value, date))
}

#[cfg(test)]
mod tests {
    use meterbook::quantity::volume::CubicMeters;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_explicit_wins() -> Result {
        let last = Reading::new(CubicMeters::new(10.0), date(1));
        let previous = resolve_previous(Some(CubicMeters::new(12.0)), None, Some(last))?;
        assert_eq!(previous, Reading::new(CubicMeters::new(12.0), date(1)));
        Ok(())
    }

    #[test]
    fn test_falls_back_to_last() -> Result {
        let last = Reading::new(CubicMeters::new(10.0), date(1));
        assert_eq!(resolve_previous(None, None, Some(last))?, last);
        Ok(())
    }

    #[test]
    fn test_missing() {
        assert!(resolve_previous::<CubicMeters>(None, Some(date(1)), None).is_err());
        assert!(resolve_previous(Some(CubicMeters::new(1.0)), None, None).is_err());
    }
}
