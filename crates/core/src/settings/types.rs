//! Settings data types.

use cashflow_shared::types::Currency;
use chrono::NaiveDate;
use garde::Validate;
use serde::{Deserialize, Serialize};

use super::validation::not_blank;

/// Who the user is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name.
    #[garde(custom(not_blank))]
    pub name: String,
    /// Contact email, also the email notification target.
    #[garde(email)]
    pub email: String,
    /// Phone in international form, the WhatsApp notification target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub phone: Option<String>,
    /// Company the dashboard belongs to, for business users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub company: Option<String>,
}

impl Profile {
    /// Creates a profile with no phone or company.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
        }
    }
}

/// How dates are written across the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `31/12/2024`
    #[default]
    DayMonthYear,
    /// `12/31/2024`
    MonthDayYear,
    /// `2024-12-31`
    Iso,
}

impl DateFormat {
    /// The `chrono` format pattern.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "%d/%m/%Y",
            Self::MonthDayYear => "%m/%d/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    /// Formats a date with this pattern.
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Currency and date preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Display currency.
    pub currency: Currency,
    /// Date format.
    pub date_format: DateFormat,
    /// Locale tag, e.g. `pt-BR`.
    pub locale: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            date_format: DateFormat::default(),
            locale: "pt-BR".to_string(),
        }
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

/// Visual preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    /// Colour theme.
    pub theme: Theme,
}

/// A delivery channel for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    /// Email to the profile address.
    Email,
    /// WhatsApp to the profile phone.
    WhatsApp,
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTopic {
    /// Monthly cash-flow summary.
    MonthlyReport,
    /// Actual falls short of or exceeds plan.
    VarianceAlerts,
    /// Upcoming planned entries.
    DueReminders,
}

/// Toggles for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSettings {
    /// Master switch for the channel.
    pub enabled: bool,
    /// Monthly report toggle.
    pub monthly_report: bool,
    /// Variance alert toggle.
    pub variance_alerts: bool,
    /// Due reminder toggle.
    pub due_reminders: bool,
}

impl ChannelSettings {
    /// A channel that is switched off with every topic on, ready to enable.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            monthly_report: true,
            variance_alerts: true,
            due_reminders: true,
        }
    }

    /// Topic toggle.
    #[must_use]
    pub const fn topic(&self, topic: NotificationTopic) -> bool {
        match topic {
            NotificationTopic::MonthlyReport => self.monthly_report,
            NotificationTopic::VarianceAlerts => self.variance_alerts,
            NotificationTopic::DueReminders => self.due_reminders,
        }
    }

    pub(crate) fn set_topic(&mut self, topic: NotificationTopic, enabled: bool) {
        match topic {
            NotificationTopic::MonthlyReport => self.monthly_report = enabled,
            NotificationTopic::VarianceAlerts => self.variance_alerts = enabled,
            NotificationTopic::DueReminders => self.due_reminders = enabled,
        }
    }

    /// True when the channel is on and the topic is on.
    #[must_use]
    pub const fn delivers(&self, topic: NotificationTopic) -> bool {
        self.enabled && self.topic(topic)
    }
}

/// Notification toggles per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    /// Email channel.
    pub email: ChannelSettings,
    /// WhatsApp channel.
    pub whatsapp: ChannelSettings,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: ChannelSettings {
                enabled: true,
                ..ChannelSettings::disabled()
            },
            whatsapp: ChannelSettings::disabled(),
        }
    }
}

impl Notifications {
    /// Settings for a channel.
    #[must_use]
    pub const fn channel(&self, channel: NotificationChannel) -> &ChannelSettings {
        match channel {
            NotificationChannel::Email => &self.email,
            NotificationChannel::WhatsApp => &self.whatsapp,
        }
    }

    pub(crate) fn channel_mut(&mut self, channel: NotificationChannel) -> &mut ChannelSettings {
        match channel {
            NotificationChannel::Email => &mut self.email,
            NotificationChannel::WhatsApp => &mut self.whatsapp,
        }
    }
}

/// Everything the settings panel edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Profile.
    pub profile: Profile,
    /// Currency and date preferences.
    #[serde(default)]
    pub preferences: Preferences,
    /// Appearance.
    #[serde(default)]
    pub appearance: Appearance,
    /// Notification toggles.
    #[serde(default)]
    pub notifications: Notifications,
}

impl UserSettings {
    /// Creates settings with defaults for everything but the profile.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            preferences: Preferences::default(),
            appearance: Appearance::default(),
            notifications: Notifications::default(),
        }
    }

    /// Sets the display currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.preferences.currency = currency;
        self
    }

    /// Sets the date format.
    #[must_use]
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.preferences.date_format = date_format;
        self
    }

    /// Sets the locale tag without validation; see [`SettingsUpdate::Locale`](super::SettingsUpdate::Locale).
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.preferences.locale = locale.into();
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.appearance.theme = theme;
        self
    }

    /// Sets notification toggles.
    #[must_use]
    pub fn with_notifications(mut self, notifications: Notifications) -> Self {
        self.notifications = notifications;
        self
    }
}
