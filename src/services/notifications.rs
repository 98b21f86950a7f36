use chrono::NaiveDate;
use serde::Serialize;

use crate::{models::UserProfile, services::calendar};

/// How close the birthday is
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    BirthdayToday,
    BirthdayTomorrow,
    BirthdayWeek,
    BirthdayMonth,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BirthdayNotification {
    pub user_id: String,
    pub full_name: String,
    pub birth_day: u32,
    pub birth_month: u32,
    pub days_until_birthday: i64,
    pub notification_type: NotificationType,
    pub message: String,
}

/// Reminder for a birthday within the next 30 days, if any
pub fn notification_for(profile: &UserProfile, today: NaiveDate) -> Option<BirthdayNotification> {
    let days = calendar::days_until_birthday(profile.birth_month, profile.birth_day, today);
    let name = &profile.full_name;

    let (notification_type, message) = match days {
        0 => (
            NotificationType::BirthdayToday,
            format!("Happy Birthday {}! Hope you have a wonderful day!", name),
        ),
        1 => (
            NotificationType::BirthdayTomorrow,
            format!(
                "{}'s birthday is tomorrow! Don't forget to get cake ingredients!",
                name
            ),
        ),
        2..=7 => (
            NotificationType::BirthdayWeek,
            format!(
                "{}'s birthday is in {} days. Time to plan the celebration!",
                name, days
            ),
        ),
        8..=30 => (
            NotificationType::BirthdayMonth,
            format!("{}'s birthday is coming up in {} days.", name, days),
        ),
        _ => return None,
    };

    Some(BirthdayNotification {
        user_id: profile.id.clone(),
        full_name: profile.full_name.clone(),
        birth_day: profile.birth_day,
        birth_month: profile.birth_month,
        days_until_birthday: days,
        notification_type,
        message,
    })
}
