use time::Weekday;

use crate::{DaySchedule, Error, Result, WEEK, WeeklySchedule, weekday_from_index, weekday_index};

/// One day of the week as seen from today.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedDay<'a> {
    pub schedule: &'a DaySchedule,
    pub is_today: bool,
    pub days_from_now: u8,
}

impl RotatedDay<'_> {
    pub fn day(&self) -> Weekday {
        self.schedule.day
    }
}

impl WeeklySchedule {
    /// The week reordered to start at `today`, wrapping around to the day before it.
    pub fn rotate(&self, today: Weekday) -> Vec<RotatedDay<'_>> {
        let start = weekday_index(today);

        (0..7u8)
            .map(|offset| {
                let day = WEEK[usize::from((start + offset) % 7)];

                RotatedDay {
                    schedule: self.get(day),
                    is_today: offset == 0,
                    days_from_now: offset,
                }
            })
            .collect()
    }

    pub fn rotate_from_index(&self, today_index: u8) -> Result<Vec<RotatedDay<'_>>> {
        let today = weekday_from_index(today_index).ok_or(Error::InvalidWeekday(today_index))?;

        Ok(self.rotate(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friday_first() {
        let schedule = WeeklySchedule::builtin().unwrap();
        let week = schedule.rotate_from_index(5).unwrap();

        assert_eq!(week[0].day(), Weekday::Friday);
        assert!(week[0].is_today);
        assert_eq!(week[0].days_from_now, 0);

        assert_eq!(week[1].day(), Weekday::Saturday);
        assert!(!week[1].is_today);
        assert_eq!(week[1].days_from_now, 1);

        assert_eq!(week[6].day(), Weekday::Thursday);
        assert_eq!(week[6].days_from_now, 6);
    }

    #[test]
    fn test_out_of_range_index() {
        let schedule = WeeklySchedule::builtin().unwrap();

        assert!(matches!(
            schedule.rotate_from_index(7),
            Err(Error::InvalidWeekday(7))
        ));
    }
}
