//! Contact page scheduler and form. Everything here is local state for a
//! mock booking flow; nothing is submitted or stored.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveTime, Utc, Weekday};
use std::fmt;
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("{0} is not available")]
    Unavailable(NaiveDate),
    #[error("{0} is not an offered time")]
    UnknownSlot(NaiveTime),
    #[error("pick a date first")]
    NoDate,
    #[error("pick a time first")]
    NoSlot,
    #[error("this booking is already confirmed")]
    AlreadyConfirmed,
}

/// Calendar page for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(BookingError::InvalidMonth { year, month })?;
        Ok(Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        // every month has a day 1
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The following month, or this one at the end of the calendar range.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// The previous month, or this one at the start of the calendar range.
    #[must_use]
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn days_in_month(&self) -> u32 {
        let days = match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days(),
            // last representable month runs to NaiveDate::MAX
            None => (NaiveDate::MAX - self.first).num_days() + 1,
        };
        days as u32
    }

    /// Sunday-first weeks; days outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.first;
        let lead = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        cells.extend((0..self.days_in_month()).map(|d| Some(first + Duration::days(d as i64))));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }
}

/// Calendar date of `now` for a visitor at `offset` from UTC.
///
/// Bookability depends on this, so it must come from the visitor's clock,
/// never the server's.
pub fn today_at(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Weekdays strictly after today can be booked.
pub fn is_bookable(date: NaiveDate, today: NaiveDate) -> bool {
    date > today && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Half-hour slots from 09:00 to 16:30.
pub fn time_slots() -> Vec<NaiveTime> {
    (18..34)
        .filter_map(|half_hours: u32| NaiveTime::from_hms_opt(half_hours / 2, (half_hours % 2) * 30, 0))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Booking {
    #[default]
    Idle,
    DateChosen(NaiveDate),
    SlotChosen {
        date: NaiveDate,
        time: NaiveTime,
    },
    Confirmed {
        date: NaiveDate,
        time: NaiveTime,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    PickDate(NaiveDate),
    PickSlot(NaiveTime),
    Confirm,
    Reset,
}

impl Booking {
    pub fn date(&self) -> Option<NaiveDate> {
        match *self {
            Self::Idle => None,
            Self::DateChosen(date)
            | Self::SlotChosen { date, .. }
            | Self::Confirmed { date, .. } => Some(date),
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match *self {
            Self::SlotChosen { time, .. } | Self::Confirmed { time, .. } => Some(time),
            _ => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn apply(self, event: BookingEvent, today: NaiveDate) -> Result<Self, BookingError> {
        match (self, event) {
            (_, BookingEvent::Reset) => Ok(Self::Idle),
            (Self::Confirmed { .. }, _) => Err(BookingError::AlreadyConfirmed),
            (_, BookingEvent::PickDate(date)) => {
                if is_bookable(date, today) {
                    Ok(Self::DateChosen(date))
                } else {
                    Err(BookingError::Unavailable(date))
                }
            }
            (Self::Idle, BookingEvent::PickSlot(_)) => Err(BookingError::NoDate),
            (
                Self::DateChosen(date) | Self::SlotChosen { date, .. },
                BookingEvent::PickSlot(time),
            ) => {
                if time_slots().contains(&time) {
                    Ok(Self::SlotChosen { date, time })
                } else {
                    Err(BookingError::UnknownSlot(time))
                }
            }
            (Self::SlotChosen { date, time }, BookingEvent::Confirm) => {
                Ok(Self::Confirmed { date, time })
            }
            (Self::Idle | Self::DateChosen(_), BookingEvent::Confirm) => Err(BookingError::NoSlot),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail => Field::Email,
            Self::MessageTooShort { .. } => Field::Message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional.
    pub subject: String,
    pub message: String,
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

impl ContactForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !looks_like_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::Required(Field::Message));
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::MessageTooShort {
                min: MIN_MESSAGE_LEN,
            });
        }
        errors
    }

    /// Mock submission: succeeds only for a valid form.
    pub fn submit(&self) -> Result<FormStatus, Vec<FieldError>> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(FormStatus::Sent)
        } else {
            Err(errors)
        }
    }
}
