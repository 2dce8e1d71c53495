//! Dashboard overview: a time-of-day greeting for the signed-in user.
//!
//! The overview is a one-shot snapshot. It is computed once when built and
//! does not change if the clock later crosses noon or 18:00.

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Greeting {
    #[serde(rename = "Good Morning")]
    Morning,
    #[serde(rename = "Good Afternoon")]
    Afternoon,
    #[serde(rename = "Good Evening")]
    Evening,
}

impl Greeting {
    /// Pick the greeting for a local hour (0–23).
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}

/// The authenticated user, handed in explicitly by whoever owns the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: Option<DbId>,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub username: String,
    pub greeting: Greeting,
    pub message: String,
    pub time_zone: String,
}

impl Overview {
    /// Build the overview for `user` at the given local hour.
    pub fn mount(user: &SessionUser, hour: u32, time_zone: impl Into<String>) -> Self {
        let greeting = Greeting::for_hour(hour);
        let time_zone = time_zone.into();
        tracing::info!(time_zone = %time_zone, "Resolved local time zone");
        Self {
            username: user.username.clone(),
            greeting,
            message: format!("{}, {}", greeting.text(), user.username),
            time_zone,
        }
    }

    /// Build the overview from the server's local clock.
    pub fn mount_now(user: &SessionUser) -> Self {
        let now = Local::now();
        Self::mount(user, now.hour(), local_time_zone_name())
    }
}

/// Name of the local time zone.
///
/// Uses `TZ` when set, otherwise falls back to the current UTC offset.
pub fn local_time_zone_name() -> String {
    match std::env::var("TZ") {
        Ok(tz) if !tz.trim().is_empty() => tz,
        _ => format!("UTC{}", Local::now().format("%:z")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> SessionUser {
        SessionUser {
            user_id: Some(1),
            username: "alice".to_string(),
        }
    }

    #[test]
    fn hour_boundaries() {
        let cases = [
            (0, "Good Morning"),
            (11, "Good Morning"),
            (12, "Good Afternoon"),
            (17, "Good Afternoon"),
            (18, "Good Evening"),
            (23, "Good Evening"),
        ];
        for (hour, expected) in cases {
            assert_eq!(Greeting::for_hour(hour).text(), expected, "hour {hour}");
        }
    }

    #[test]
    fn overview_greets_by_username() {
        let overview = Overview::mount(&alice(), 9, "Europe/Berlin");
        assert_eq!(overview.greeting, Greeting::Morning);
        assert_eq!(overview.message, "Good Morning, alice");
        assert_eq!(overview.time_zone, "Europe/Berlin");
    }

    #[test]
    fn greeting_serializes_as_text() {
        let json = serde_json::to_value(Greeting::Evening).unwrap();
        assert_eq!(json, "Good Evening");
    }

    #[test]
    fn mount_now_produces_some_greeting() {
        let overview = Overview::mount_now(&alice());
        assert!(overview.message.ends_with(", alice"));
        assert!(!overview.time_zone.is_empty());
    }
}
