use crate::core::service::ZooQueryService;
use crate::core::views::Schedule;
use crate::domain::model::OpeningHours;
use crate::utils::error::{Entity, Result, ZooError};

pub const CLOSED_DAY: &str = "Monday";
pub const CLOSED_MESSAGE: &str = "CLOSED";

/// 固定的週營業表，不從 HoursTable 重新計算
const WEEKLY_SCHEDULE: [(&str, &str); 7] = [
    ("Tuesday", "Open from 8am until 6pm"),
    ("Wednesday", "Open from 8am until 6pm"),
    ("Thursday", "Open from 10am until 8pm"),
    ("Friday", "Open from 10am until 8pm"),
    ("Saturday", "Open from 8am until 10pm"),
    ("Sunday", "Open from 8am until 8pm"),
    ("Monday", CLOSED_MESSAGE),
];

pub fn weekly_schedule() -> Schedule {
    WEEKLY_SCHEDULE
        .iter()
        .map(|(day, message)| (*day, message.to_string()))
        .collect()
}

pub fn describe_hours(hours: &OpeningHours) -> String {
    format!("Open from {}am until {}pm", hours.open, hours.close - 12)
}

impl ZooQueryService {
    pub fn schedule(&self, day: Option<&str>) -> Result<Schedule> {
        let day = match day {
            Some(day) if !day.is_empty() => day,
            _ => return Ok(weekly_schedule()),
        };

        let mut schedule = Schedule::new();
        if day == CLOSED_DAY {
            schedule.insert(CLOSED_DAY, CLOSED_MESSAGE.to_string());
            return Ok(schedule);
        }

        let hours = self
            .store
            .hours
            .get(day)
            .ok_or_else(|| ZooError::not_found(Entity::Weekday, day))?;
        schedule.insert(day, describe_hours(hours));
        Ok(schedule)
    }
}
