//! Settings Module - Dashboard preferences dialog
//!
//! Every change emits the same toast the dialog shows. Nothing is persisted.

pub mod types;

use serde::{Deserialize, Serialize};

use crate::logic::notify::{Notification, Notifier};
pub use types::{DataRetention, Language, RefreshRate, SettingsError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub auto_backup: bool,
    pub refresh_rate: RefreshRate,
    pub language: Language,
    pub data_retention: DataRetention,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            auto_backup: false,
            refresh_rate: RefreshRate::default(),
            language: Language::default(),
            data_retention: DataRetention::default(),
        }
    }
}

impl Settings {
    pub fn set_dark_mode(&mut self, enabled: bool, notifier: &dyn Notifier) {
        self.dark_mode = enabled;
        let title = if enabled { "Dark mode enabled" } else { "Light mode enabled" };
        notifier.notify(Notification::info(title, "Theme preference has been updated."));
    }

    pub fn set_notifications(&mut self, enabled: bool, notifier: &dyn Notifier) {
        self.notifications = enabled;
        let title = if enabled { "Notifications enabled" } else { "Notifications disabled" };
        notifier.notify(Notification::info(
            title,
            "Your notification preferences have been updated.",
        ));
    }

    /// No toast; the dialog shows none for this switch
    pub fn set_auto_backup(&mut self, enabled: bool) {
        self.auto_backup = enabled;
    }

    pub fn set_refresh_rate(
        &mut self,
        value: &str,
        notifier: &dyn Notifier,
    ) -> Result<(), SettingsError> {
        let rate: RefreshRate = value.parse()?;
        self.refresh_rate = rate;
        notifier.notify(Notification::info(
            "Refresh rate updated",
            format!("Dashboard will refresh every {} minutes.", rate.minutes()),
        ));
        Ok(())
    }

    pub fn set_language(
        &mut self,
        value: &str,
        notifier: &dyn Notifier,
    ) -> Result<(), SettingsError> {
        let language: Language = value.parse()?;
        self.language = language;
        notifier.notify(Notification::info(
            "Language updated",
            format!("Interface language set to {}.", language),
        ));
        Ok(())
    }

    pub fn set_data_retention(
        &mut self,
        value: &str,
        notifier: &dyn Notifier,
    ) -> Result<(), SettingsError> {
        let retention: DataRetention = value.parse()?;
        self.data_retention = retention;
        notifier.notify(Notification::info(
            "Data retention updated",
            format!("Logs will be kept for {} days.", retention.days()),
        ));
        Ok(())
    }

    pub fn reset_defaults(&mut self, notifier: &dyn Notifier) {
        *self = Self::default();
        log::info!("Settings reset to defaults");
        notifier.notify(Notification::info(
            "Settings reset",
            "All settings have been reset to default values.",
        ));
    }

    pub fn save(&self, notifier: &dyn Notifier) {
        log::info!("Settings saved: {:?}", self);
        notifier.notify(Notification::success(
            "Settings saved",
            "Your settings have been saved successfully.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::notify::ToastQueue;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.dark_mode);
        assert!(s.notifications);
        assert!(!s.auto_backup);
        assert_eq!(s.refresh_rate.minutes(), 5);
        assert_eq!(s.language, Language::English);
        assert_eq!(s.data_retention.days(), 30);
    }

    #[test]
    fn test_refresh_rate_toast() {
        let toasts = ToastQueue::new();
        let mut s = Settings::default();

        s.set_refresh_rate("15", &toasts).unwrap();
        assert_eq!(s.refresh_rate.minutes(), 15);

        let t = toasts.drain();
        assert_eq!(t[0].title, "Refresh rate updated");
        assert_eq!(t[0].description, "Dashboard will refresh every 15 minutes.");
    }

    #[test]
    fn test_invalid_choices_rejected() {
        let toasts = ToastQueue::new();
        let mut s = Settings::default();

        assert_eq!(
            s.set_refresh_rate("2", &toasts),
            Err(SettingsError::InvalidRefreshRate("2".to_string()))
        );
        assert!(s.set_language("klingon", &toasts).is_err());
        assert!(s.set_data_retention("365", &toasts).is_err());

        assert_eq!(s, Settings::default());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_reset_defaults() {
        let toasts = ToastQueue::new();
        let mut s = Settings::default();
        s.set_dark_mode(false, &toasts);
        s.set_language("Japanese", &toasts).unwrap();
        s.set_data_retention("90", &toasts).unwrap();
        s.set_auto_backup(true);

        s.reset_defaults(&toasts);
        assert_eq!(s, Settings::default());

        let t = toasts.drain();
        assert_eq!(t[0].title, "Light mode enabled");
        assert_eq!(t[1].description, "Interface language set to japanese.");
        assert_eq!(t[2].description, "Logs will be kept for 90 days.");
        assert_eq!(t.last().unwrap().title, "Settings reset");
    }

    #[test]
    fn test_save_toast() {
        let toasts = ToastQueue::new();
        Settings::default().save(&toasts);

        let t = toasts.drain();
        assert_eq!(t[0].title, "Settings saved");
        assert_eq!(t[0].description, "Your settings have been saved successfully.");
    }
}
