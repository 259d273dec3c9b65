//! User settings model bound by the dashboard's settings panel.
//!
//! Persistence is external; this module owns the shape of the settings and
//! the rules for changing one field at a time.

pub mod error;
pub mod types;
pub mod update;
pub mod validation;


pub use error::SettingsError;
pub use types::{
    Appearance, ChannelSettings, DateFormat, NotificationChannel, NotificationTopic,
    Notifications, Preferences, Profile, Theme, UserSettings,
};
pub use update::SettingsUpdate;
