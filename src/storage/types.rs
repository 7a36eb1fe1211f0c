use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store when a profile is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u64);

impl ProfileId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn location(&self) -> &str {
        &self.fields.location
    }
}

/// Everything about a profile except its id.
///
/// This is what `add` and `update` accept. Build it through
/// [`ProfileForm::validate`](crate::form::ProfileForm::validate) so the
/// required fields are non-empty and list entries are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub name: String,
    /// External URL or an embedded `data:` URL.
    pub photo: String,
    pub description: String,
    pub location: String,

    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Older snapshots store unset contact fields as `""`.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_flat() {
        let profile = Profile {
            id: ProfileId(42),
            fields: ProfileFields {
                name: "Ada".into(),
                photo: "https://example.com/ada.png".into(),
                description: "Mathematician".into(),
                location: "London".into(),
                interests: vec!["Math".into()],
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["interests"][0], "Math");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_blank_contact_fields_load_as_none() {
        let json = r#"{
            "id": 1700000000000,
            "name": "Bob",
            "photo": "data:image/png;base64,AAAA",
            "description": "Builder",
            "location": "Boston",
            "email": "",
            "phone": "  ",
            "website": "https://bob.example"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, ProfileId(1_700_000_000_000));
        assert_eq!(profile.fields.email, None);
        assert_eq!(profile.fields.phone, None);
        assert_eq!(profile.fields.website.as_deref(), Some("https://bob.example"));
        assert!(profile.fields.interests.is_empty());
        assert!(profile.fields.skills.is_empty());
    }
}
