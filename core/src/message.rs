//! Message catalog for user-facing failure texts.
//!
//! The classifier stores resolved text in
//! [`ErrorResult::message`](crate::ErrorResult); host applications that
//! run their own localization can ignore the built-in catalog and match
//! on [`MessageKey::as_str`] instead.

/// Keys of the failure-message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ChallengeFail,
    AuthFail,
    TimestampFail,
    TimestampReject,
    VerifyFail,
    InvalidJson,
    InvalidBaseUrl,
    ServiceUnavailable,
}

impl MessageKey {
    /// Wire key of this message, as published by the service catalogs.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::ChallengeFail => "challenge_fail",
            MessageKey::AuthFail => "auth_fail",
            MessageKey::TimestampFail => "timestamp_fail",
            MessageKey::TimestampReject => "timestamp_reject",
            MessageKey::VerifyFail => "verify_fail",
            MessageKey::InvalidJson => "invalid_json",
            MessageKey::InvalidBaseUrl => "invalid_base_url",
            MessageKey::ServiceUnavailable => "service_unavailable",
        }
    }
}

/// Catalog language for resolved messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Uz,
}

/// Resolve a message key to its catalog text.
pub fn text(key: MessageKey, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en(key),
        Locale::Ru => ru(key),
        Locale::Uz => uz(key),
    }
}

fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::ChallengeFail => "Failed to get challenge from E-IMZO server",
        MessageKey::AuthFail => "Authentication failed",
        MessageKey::TimestampFail => "Failed to attach timestamp",
        MessageKey::TimestampReject => "Timestamp rejected",
        MessageKey::VerifyFail => "Verification failed",
        MessageKey::InvalidJson => "Invalid JSON response from E-IMZO server",
        MessageKey::InvalidBaseUrl => {
            "E-IMZO base URL is missing or invalid. Must start with http/https"
        }
        MessageKey::ServiceUnavailable => "E-IMZO service is currently unavailable",
    }
}

fn ru(key: MessageKey) -> &'static str {
    match key {
        MessageKey::ChallengeFail => "Не удалось получить challenge от E-IMZO сервера",
        MessageKey::AuthFail => "Аутентификация не удалась",
        MessageKey::TimestampFail => "Не удалось добавить timestamp",
        MessageKey::TimestampReject => "Timestamp отклонен",
        MessageKey::VerifyFail => "Проверка не удалась",
        MessageKey::InvalidJson => "Неверный JSON ответ от E-IMZO сервера",
        MessageKey::InvalidBaseUrl => {
            "E-IMZO базовый URL отсутствует или неверный. Должен начинаться с http/https"
        }
        MessageKey::ServiceUnavailable => "Служба E-IMZO в настоящее время недоступна",
    }
}

fn uz(key: MessageKey) -> &'static str {
    match key {
        MessageKey::ChallengeFail => "E-IMZO serverdan challenge olishda xatolik yuz berdi",
        MessageKey::AuthFail => "Autentifikatsiya muvaffaqiyatsiz",
        MessageKey::TimestampFail => "Timestamp qo'shishda xatolik",
        MessageKey::TimestampReject => "Timestamp rad etildi",
        MessageKey::VerifyFail => "Tekshirish muvaffaqiyatsiz",
        MessageKey::InvalidJson => "E-IMZO serverdan noto'g'ri JSON javob",
        MessageKey::InvalidBaseUrl => {
            "E-IMZO base URL mavjud emas yoki noto'g'ri. http/https bilan boshlanishi kerak"
        }
        MessageKey::ServiceUnavailable => "E-IMZO xizmati hozirgi vaqtda mavjud emas",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_match_catalog() {
        assert_eq!(MessageKey::ChallengeFail.as_str(), "challenge_fail");
        assert_eq!(MessageKey::TimestampReject.as_str(), "timestamp_reject");
        assert_eq!(MessageKey::ServiceUnavailable.as_str(), "service_unavailable");
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(
            text(MessageKey::AuthFail, Locale::default()),
            "Authentication failed"
        );
    }

    #[test]
    fn every_locale_resolves_every_key() {
        let keys = [
            MessageKey::ChallengeFail,
            MessageKey::AuthFail,
            MessageKey::TimestampFail,
            MessageKey::TimestampReject,
            MessageKey::VerifyFail,
            MessageKey::InvalidJson,
            MessageKey::InvalidBaseUrl,
            MessageKey::ServiceUnavailable,
        ];
        for locale in [Locale::En, Locale::Ru, Locale::Uz] {
            for key in keys {
                assert!(!text(key, locale).is_empty());
            }
        }
    }
}
