#![forbid(unsafe_code)]

//! The example user profile: values, option lists and validation rules.

use std::fmt;
use std::sync::LazyLock;

use fform_codec::{OptionValue, PrimitiveValue, SelectOption};
use fform_runtime::{FieldErrors, FieldLens, field_lens};
use regex::Regex;
use serde::Serialize;

/// Who can see the profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Friends,
    Private,
}

impl ProfileVisibility {
    pub const ALL: [Self; 3] = [Self::Public, Self::Friends, Self::Private];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Friends => "friends",
            Self::Private => "private",
        }
    }
}

/// Kinds of email notification a user can opt into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    News,
    Messages,
    Mentions,
    Updates,
}

impl NotificationType {
    pub const ALL: [Self; 4] = [Self::News, Self::Messages, Self::Mentions, Self::Updates];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Messages => "messages",
            Self::Mentions => "mentions",
            Self::Updates => "updates",
        }
    }
}

macro_rules! string_option_value {
    ($t:ty) => {
        impl OptionValue for $t {
            fn to_primitive(&self) -> PrimitiveValue {
                PrimitiveValue::from(self.as_str())
            }

            fn from_primitive(value: PrimitiveValue) -> Option<Self> {
                let s = value.as_str()?;
                <$t>::ALL.into_iter().find(|v| v.as_str() == s)
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_option_value!(ProfileVisibility);
string_option_value!(NotificationType);

/// Everything the profile form edits.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileValues {
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub profile_visibility: ProfileVisibility,
    pub bio: String,
    pub profile_color: String,
    pub enable_email_notifications: bool,
    pub notification_types: Vec<NotificationType>,
    pub notification_frequency: u32,
    pub donation_amount: String,
    pub agree_to_terms: bool,
}

impl Default for ProfileValues {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            country: String::new(),
            profile_visibility: ProfileVisibility::Public,
            bio: String::new(),
            profile_color: "#000000".to_owned(),
            enable_email_notifications: true,
            notification_types: Vec::new(),
            notification_frequency: 1,
            donation_amount: "0.00".to_owned(),
            agree_to_terms: false,
        }
    }
}

pub const FULL_NAME: FieldLens<ProfileValues, String> =
    field_lens!(ProfileValues, full_name: String, "fullName");
pub const EMAIL: FieldLens<ProfileValues, String> = field_lens!(ProfileValues, email: String);
pub const COUNTRY: FieldLens<ProfileValues, String> = field_lens!(ProfileValues, country: String);
pub const PROFILE_VISIBILITY: FieldLens<ProfileValues, ProfileVisibility> =
    field_lens!(ProfileValues, profile_visibility: ProfileVisibility, "profileVisibility");
pub const BIO: FieldLens<ProfileValues, String> = field_lens!(ProfileValues, bio: String);
pub const PROFILE_COLOR: FieldLens<ProfileValues, String> =
    field_lens!(ProfileValues, profile_color: String, "profileColor");
pub const ENABLE_EMAIL_NOTIFICATIONS: FieldLens<ProfileValues, bool> =
    field_lens!(ProfileValues, enable_email_notifications: bool, "enableEmailNotifications");
pub const NOTIFICATION_TYPES: FieldLens<ProfileValues, Vec<NotificationType>> = field_lens!(
    ProfileValues,
    notification_types: Vec<NotificationType>,
    "notificationTypes"
);
pub const NOTIFICATION_FREQUENCY: FieldLens<ProfileValues, u32> =
    field_lens!(ProfileValues, notification_frequency: u32, "notificationFrequency");
pub const DONATION_AMOUNT: FieldLens<ProfileValues, String> =
    field_lens!(ProfileValues, donation_amount: String, "donationAmount");
pub const AGREE_TO_TERMS: FieldLens<ProfileValues, bool> =
    field_lens!(ProfileValues, agree_to_terms: bool, "agreeToTerms");

const COUNTRIES: [(&str, &str); 31] = [
    ("us", "United States"),
    ("ca", "Canada"),
    ("uk", "United Kingdom"),
    ("au", "Australia"),
    ("de", "Germany"),
    ("fr", "France"),
    ("jp", "Japan"),
    ("cn", "China"),
    ("in", "India"),
    ("br", "Brazil"),
    ("za", "South Africa"),
    ("ru", "Russia"),
    ("it", "Italy"),
    ("es", "Spain"),
    ("mx", "Mexico"),
    ("kr", "South Korea"),
    ("sg", "Singapore"),
    ("ae", "United Arab Emirates"),
    ("nl", "Netherlands"),
    ("se", "Sweden"),
    ("no", "Norway"),
    ("fi", "Finland"),
    ("dk", "Denmark"),
    ("pl", "Poland"),
    ("cz", "Czech Republic"),
    ("hu", "Hungary"),
    ("ro", "Romania"),
    ("tr", "Turkey"),
    ("gr", "Greece"),
    ("pt", "Portugal"),
    ("ie", "Ireland"),
];

#[must_use]
pub fn country_options() -> Vec<SelectOption<String>> {
    COUNTRIES
        .iter()
        .map(|(code, name)| SelectOption::new((*code).to_owned(), *name))
        .collect()
}

#[must_use]
pub fn visibility_options() -> Vec<SelectOption<ProfileVisibility>> {
    vec![
        SelectOption::new(ProfileVisibility::Public, "Public"),
        SelectOption::new(ProfileVisibility::Private, "Private"),
        SelectOption::new(ProfileVisibility::Friends, "Friends"),
    ]
}

#[must_use]
pub fn notification_type_options() -> Vec<SelectOption<NotificationType>> {
    vec![
        SelectOption::new(NotificationType::News, "News"),
        SelectOption::new(NotificationType::Messages, "Messages"),
        SelectOption::new(NotificationType::Mentions, "Mentions"),
        SelectOption::new(NotificationType::Updates, "Updates"),
    ]
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\w+-]+(?:\.[\w+-]+)*@[\da-z]+(?:[.-][\da-z]+)*\.[a-z]{2,}$")
        .expect("email pattern is valid")
});

fn check_length(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    (min, min_msg): (usize, &str),
    (max, max_msg): (usize, &str),
) {
    let len = value.chars().count();
    if len < min {
        errors.push(field, min_msg);
    }
    if len > max {
        errors.push(field, max_msg);
    }
}

/// Schema rules for [`ProfileValues`]. Every failing rule reports, so a
/// field can carry several messages.
#[must_use]
pub fn validate_profile(v: &ProfileValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_length(
        &mut errors,
        FULL_NAME.name(),
        &v.full_name,
        (1, "Full name is required"),
        (50, "Full name cannot exceed 50 characters"),
    );
    check_length(
        &mut errors,
        EMAIL.name(),
        &v.email,
        (1, "Email is required"),
        (100, "Email cannot exceed 100 characters"),
    );
    if !EMAIL_PATTERN.is_match(&v.email) {
        errors.push(EMAIL.name(), "Invalid email address");
    }
    check_length(
        &mut errors,
        COUNTRY.name(),
        &v.country,
        (1, "Country selection is required"),
        (50, "Country cannot exceed 50 characters"),
    );
    check_length(
        &mut errors,
        BIO.name(),
        &v.bio,
        (0, ""),
        (500, "Bio cannot exceed 500 characters"),
    );
    check_length(
        &mut errors,
        PROFILE_COLOR.name(),
        &v.profile_color,
        (7, "Profile color is required"),
        (7, "Profile color must be a valid hex color code"),
    );
    let frequency = NOTIFICATION_FREQUENCY.name();
    if v.notification_frequency < 1 {
        errors.push(frequency, "Frequency must be at least 1 day");
    }
    if v.notification_frequency > 30 {
        errors.push(frequency, "Frequency cannot exceed 30 days");
    }
    check_length(
        &mut errors,
        DONATION_AMOUNT.name(),
        &v.donation_amount,
        (1, "Donation amount is required"),
        (10, "Donation amount cannot exceed 10 characters"),
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fail_on_required_fields_only() {
        let errors = validate_profile(&ProfileValues::default());
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["country", "email", "fullName"]);
        assert_eq!(
            errors.get("email"),
            ["Email is required", "Invalid email address"]
        );
    }

    #[test]
    fn email_pattern() {
        for ok in ["ada@example.com", "a.b+c@mail.example.org", "X_Y@EXAMPLE.NL"] {
            assert!(EMAIL_PATTERN.is_match(ok), "{ok}");
        }
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a..b@example.com"] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn limits_are_enforced() {
        let v = ProfileValues {
            full_name: "x".repeat(51),
            email: "ada@example.com".into(),
            country: "nl".into(),
            profile_color: "#fff".into(),
            notification_frequency: 31,
            donation_amount: "12345678901".into(),
            ..ProfileValues::default()
        };
        let errors = validate_profile(&v);
        assert_eq!(errors.get("fullName"), ["Full name cannot exceed 50 characters"]);
        assert_eq!(errors.get("profileColor"), ["Profile color is required"]);
        assert_eq!(errors.get("notificationFrequency"), ["Frequency cannot exceed 30 days"]);
        assert_eq!(errors.get("donationAmount"), ["Donation amount cannot exceed 10 characters"]);
        assert!(errors.get("email").is_empty());
    }

    #[test]
    fn enums_round_trip_through_option_keys() {
        for v in ProfileVisibility::ALL {
            assert_eq!(fform_codec::decode_value(&fform_codec::encode_value(&v)), Some(v));
        }
        assert_eq!(
            NotificationType::from_primitive(PrimitiveValue::from("mentions")),
            Some(NotificationType::Mentions)
        );
        assert_eq!(NotificationType::from_primitive(PrimitiveValue::from(3)), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ProfileValues::default()).unwrap();
        assert_eq!(json["profileVisibility"], "public");
        assert_eq!(json["enableEmailNotifications"], true);
        assert_eq!(json["notificationFrequency"], 1);
        assert!(json.get("full_name").is_none());
    }
}
