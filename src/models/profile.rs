use serde::{Deserialize, Serialize};

/// Studio member profile.
///
/// The `uid` is the subject identifier issued by the external identity
/// provider; everything else is profile data the member fills in. The
/// wire format is camelCase to match the existing frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub custom_gender: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

fn default_role() -> String {
    "user".to_string()
}

impl UserProfile {
    /// Minimal profile with only the identity subject set.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            role: default_role(),
            first_name: None,
            middle_name: None,
            last_name: None,
            age: None,
            city: None,
            state: None,
            gender: None,
            custom_gender: None,
            profile_picture: None,
            bio: None,
            preferences: Preferences::default(),
        }
    }

    /// "First Last" display name, falling back to the uid when the
    /// profile has no name yet.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.uid.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Member class preferences.
///
/// Modeled as an explicit record with enumerated fields, not an open
/// map, so producer and consumer cannot drift on key names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub yoga_types: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}
