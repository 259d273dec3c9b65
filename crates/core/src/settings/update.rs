//! Targeted, validated updates to a single settings field.

use cashflow_shared::types::Currency;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SettingsError;
use super::types::{
    DateFormat, NotificationChannel, NotificationTopic, Profile, Theme, UserSettings,
};
use super::validation::{validate_locale, validate_phone, validate_profile};

/// One edit made in the settings panel.
///
/// Each variant touches exactly one field; nothing else in the settings changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SettingsUpdate {
    /// Replace the display name.
    Name(String),
    /// Replace the email address.
    Email(String),
    /// Set or clear the phone number.
    Phone(Option<String>),
    /// Set or clear the company.
    Company(Option<String>),
    /// Change the display currency.
    Currency(Currency),
    /// Change the date format.
    DateFormat(DateFormat),
    /// Change the locale tag.
    Locale(String),
    /// Change the theme.
    Theme(Theme),
    /// Switch a channel on or off.
    Channel {
        /// Channel to switch.
        channel: NotificationChannel,
        /// New state.
        enabled: bool,
    },
    /// Switch one topic on a channel.
    Topic {
        /// Channel the topic belongs to.
        channel: NotificationChannel,
        /// Topic to switch.
        topic: NotificationTopic,
        /// New state.
        enabled: bool,
    },
}

impl UserSettings {
    /// Applies a single update.
    ///
    /// The settings are left untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns the `SettingsError` for the field being changed, or
    /// `SettingsError::PhoneRequired` when the change would leave WhatsApp
    /// notifications enabled without a phone number.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        self.check(&update)?;
        debug!(field = update.field_name(), "Applying settings update");

        match update {
            SettingsUpdate::Name(name) => self.profile.name = name.trim().to_string(),
            SettingsUpdate::Email(email) => self.profile.email = email,
            SettingsUpdate::Phone(phone) => self.profile.phone = phone,
            SettingsUpdate::Company(company) => {
                self.profile.company = company
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty());
            }
            SettingsUpdate::Currency(currency) => self.preferences.currency = currency,
            SettingsUpdate::DateFormat(format) => self.preferences.date_format = format,
            SettingsUpdate::Locale(locale) => self.preferences.locale = locale,
            SettingsUpdate::Theme(theme) => self.appearance.theme = theme,
            SettingsUpdate::Channel { channel, enabled } => {
                self.notifications.channel_mut(channel).enabled = enabled;
            }
            SettingsUpdate::Topic {
                channel,
                topic,
                enabled,
            } => self.notifications.channel_mut(channel).set_topic(topic, enabled),
        }
        Ok(())
    }

    /// Applies a batch of updates atomically: all succeed or none is kept.
    ///
    /// # Errors
    ///
    /// Returns the first error; the settings are unchanged in that case.
    pub fn apply_all(
        &mut self,
        updates: impl IntoIterator<Item = SettingsUpdate>,
    ) -> Result<(), SettingsError> {
        let mut staged = self.clone();
        for update in updates {
            staged.apply(update)?;
        }
        *self = staged;
        Ok(())
    }

    /// Validates the settings as a whole, e.g. after loading them.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_profile(&self.profile)?;
        validate_locale(&self.preferences.locale)?;
        if self.notifications.whatsapp.enabled && self.profile.phone.is_none() {
            return Err(SettingsError::PhoneRequired);
        }
        Ok(())
    }

    /// Profile edits are checked against the profile they would produce.
    fn check(&self, update: &SettingsUpdate) -> Result<(), SettingsError> {
        match update {
            SettingsUpdate::Name(name) => validate_profile(&Profile {
                name: name.trim().to_string(),
                ..self.profile.clone()
            }),
            SettingsUpdate::Email(email) => validate_profile(&Profile {
                email: email.clone(),
                ..self.profile.clone()
            }),
            SettingsUpdate::Phone(Some(phone)) => validate_phone(phone),
            SettingsUpdate::Phone(None) if self.notifications.whatsapp.enabled => {
                Err(SettingsError::PhoneRequired)
            }
            SettingsUpdate::Locale(locale) => validate_locale(locale),
            SettingsUpdate::Channel {
                channel: NotificationChannel::WhatsApp,
                enabled: true,
            } if self.profile.phone.is_none() => Err(SettingsError::PhoneRequired),
            _ => Ok(()),
        }
    }
}

impl SettingsUpdate {
    /// Name of the field this update touches, for logging.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
            Self::Company(_) => "company",
            Self::Currency(_) => "currency",
            Self::DateFormat(_) => "date_format",
            Self::Locale(_) => "locale",
            Self::Theme(_) => "theme",
            Self::Channel { .. } => "channel",
            Self::Topic { .. } => "topic",
        }
    }
}
