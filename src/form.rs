//! Admin form input.
//!
//! Raw strings as a form collects them, turned into [`ProfileFields`] before
//! anything reaches the store.

use crate::error::{DirectoryError, Result};
use crate::storage::{Profile, ProfileFields};
use crate::utils::parsing::{join_list, optional_text, split_list};

/// Unvalidated profile form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub photo: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Comma-separated.
    pub interests: String,
    /// Comma-separated.
    pub skills: String,
}

impl ProfileForm {
    /// Pre-fill a form for editing an existing profile.
    pub fn from_profile(profile: &Profile) -> Self {
        let f = &profile.fields;
        Self {
            name: f.name.clone(),
            photo: f.photo.clone(),
            description: f.description.clone(),
            location: f.location.clone(),
            email: f.email.clone().unwrap_or_default(),
            phone: f.phone.clone().unwrap_or_default(),
            website: f.website.clone().unwrap_or_default(),
            interests: join_list(&f.interests),
            skills: join_list(&f.skills),
        }
    }

    /// Check required fields and parse list fields.
    ///
    /// Fails with [`DirectoryError::MissingField`] naming the first blank
    /// required field (name, photo, description, location in that order).
    pub fn validate(&self) -> Result<ProfileFields> {
        let name = required("name", &self.name)?;
        let photo = required("photo", &self.photo)?;
        let description = required("description", &self.description)?;
        let location = required("location", &self.location)?;

        Ok(ProfileFields {
            name,
            photo,
            description,
            location,
            email: optional_text(&self.email),
            phone: optional_text(&self.phone),
            website: optional_text(&self.website),
            interests: split_list(&self.interests),
            skills: split_list(&self.skills),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ProfileId;

    fn filled() -> ProfileForm {
        ProfileForm {
            name: " Ada ".into(),
            photo: "https://example.com/ada.png".into(),
            description: "First programmer".into(),
            location: "London".into(),
            interests: "Math, Computing".into(),
            skills: " , Analysis,".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_parses_lists_and_trims() {
        let fields = filled().validate().unwrap();
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.interests, vec!["Math", "Computing"]);
        assert_eq!(fields.skills, vec!["Analysis"]);
        assert_eq!(fields.email, None);
    }

    #[test]
    fn test_validate_rejects_blank_required() {
        for field in ["name", "photo", "description", "location"] {
            let mut form = filled();
            match field {
                "name" => form.name = "  ".into(),
                "photo" => form.photo.clear(),
                "description" => form.description = "\n".into(),
                _ => form.location.clear(),
            }
            match form.validate() {
                Err(DirectoryError::MissingField { field: missing }) => assert_eq!(missing, field),
                other => panic!("expected MissingField for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_photo_data_url_passes_through() {
        let mut form = filled();
        form.photo = "data:image/png;base64,iVBORw0KGgo=".into();
        assert_eq!(form.validate().unwrap().photo, form.photo);
    }

    #[test]
    fn test_from_profile_prefills_edit_form() {
        let profile = Profile {
            id: ProfileId(9),
            fields: ProfileFields {
                email: Some("ada@example.com".into()),
                ..filled().validate().unwrap()
            },
        };
        let form = ProfileForm::from_profile(&profile);
        assert_eq!(form.interests, "Math, Computing");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.phone, "");
        assert_eq!(form.validate().unwrap(), profile.fields);
    }
}
