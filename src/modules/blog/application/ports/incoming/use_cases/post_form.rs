use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::blog::application::domain::entities::{Category, Location, PostView};
use crate::blog::application::domain::media::{ImagePolicy, ImageUpload};
use crate::blog::application::ports::outgoing::PostData;
use crate::shared::forms::{check_max_length, clean_required, FormErrors, REQUIRED_MESSAGE};

pub const TITLE_MAX_LENGTH: usize = 256;
pub const INVALID_CHOICE_MESSAGE: &str =
    "Select a valid choice. That choice is not one of the available choices.";
pub const INVALID_DATETIME_MESSAGE: &str = "Enter a valid date/time.";
pub const IMAGE_CONFLICT_MESSAGE: &str =
    "Please either submit a file or check the clear checkbox, not both.";

/// Format used to pre-fill the `pub_date` input.
pub const PUB_DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const PUB_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

//
// ──────────────────────────────────────────────────────────
// Form data
// ──────────────────────────────────────────────────────────
//

/// Post fields as submitted, or as pre-filled from an existing post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostForm {
    pub title: String,
    pub text: String,
    pub pub_date: String,
    pub location: String,
    pub category: String,
    pub is_published: bool,
    /// Stored image of the post being edited.
    pub image: Option<String>,
    pub image_clear: bool,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            pub_date: String::new(),
            location: String::new(),
            category: String::new(),
            is_published: true,
            image: None,
            image_clear: false,
        }
    }
}

impl From<&PostView> for PostForm {
    fn from(post: &PostView) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
            pub_date: post.pub_date.format(PUB_DATE_INPUT_FORMAT).to_string(),
            location: post
                .location
                .as_ref()
                .map(|l| l.id.to_string())
                .unwrap_or_default(),
            category: post
                .category
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            is_published: post.is_published,
            image: post.image.clone(),
            image_clear: false,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Choices
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostChoices {
    pub categories: Vec<Choice>,
    pub locations: Vec<Choice>,
}

impl PostChoices {
    pub fn from_rows(categories: &[Category], locations: &[Location]) -> Self {
        Self {
            categories: categories
                .iter()
                .map(|c| Choice {
                    id: c.id,
                    label: c.to_string(),
                })
                .collect(),
            locations: locations
                .iter()
                .map(|l| Choice {
                    id: l.id,
                    label: l.to_string(),
                })
                .collect(),
        }
    }

    fn has_category(&self, id: i32) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    fn has_location(&self, id: i32) -> bool {
        self.locations.iter().any(|l| l.id == id)
    }
}

/// A post form ready to render: current values plus what can be selected.
#[derive(Debug, Clone, PartialEq)]
pub struct EditablePost {
    pub form: PostForm,
    pub choices: PostChoices,
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum ImageChange {
    Keep,
    Clear,
    Replace(ImageUpload),
}

#[derive(Debug, Clone)]
pub struct PostCommand {
    title: String,
    text: String,
    pub_date: DateTime<Utc>,
    category_id: i32,
    location_id: Option<i32>,
    is_published: bool,
    image: ImageChange,
}

impl PostCommand {
    pub fn new(
        form: &PostForm,
        upload: Option<ImageUpload>,
        choices: &PostChoices,
        policy: &ImagePolicy,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        let title = clean_required(&mut errors, "title", &form.title);
        check_max_length(&mut errors, "title", &title, TITLE_MAX_LENGTH);
        let text = clean_required(&mut errors, "text", &form.text);

        let pub_date = match form.pub_date.trim() {
            "" => {
                errors.add("pub_date", REQUIRED_MESSAGE);
                None
            }
            raw => {
                let parsed = parse_pub_date(raw);
                if parsed.is_none() {
                    errors.add("pub_date", INVALID_DATETIME_MESSAGE);
                }
                parsed
            }
        };

        let category_id = match form.category.trim() {
            "" => {
                errors.add("category", REQUIRED_MESSAGE);
                None
            }
            raw => {
                let id = raw.parse::<i32>().ok().filter(|id| choices.has_category(*id));
                if id.is_none() {
                    errors.add("category", INVALID_CHOICE_MESSAGE);
                }
                id
            }
        };

        let location_id = match form.location.trim() {
            "" => None,
            raw => {
                let id = raw.parse::<i32>().ok().filter(|id| choices.has_location(*id));
                if id.is_none() {
                    errors.add("location", INVALID_CHOICE_MESSAGE);
                }
                id
            }
        };

        let image = match upload {
            Some(_) if form.image_clear => {
                errors.add("image", IMAGE_CONFLICT_MESSAGE);
                ImageChange::Keep
            }
            Some(upload) => match policy.check(&upload) {
                Ok(()) => ImageChange::Replace(upload),
                Err(message) => {
                    errors.add("image", message);
                    ImageChange::Keep
                }
            },
            None if form.image_clear => ImageChange::Clear,
            None => ImageChange::Keep,
        };

        match (pub_date, category_id) {
            (Some(pub_date), Some(category_id)) if errors.is_empty() => Ok(Self {
                title,
                text,
                pub_date,
                category_id,
                location_id,
                is_published: form.is_published,
                image,
            }),
            _ => Err(errors),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_change(&self) -> &ImageChange {
        &self.image
    }

    /// Column values with the image path the caller settled on.
    pub fn into_post_data(self, image: Option<String>) -> PostData {
        PostData {
            title: self.title,
            text: self.text,
            pub_date: self.pub_date,
            category_id: Some(self.category_id),
            location_id: self.location_id,
            is_published: self.is_published,
            image,
        }
    }
}

/// Accepts `datetime-local` input and `YYYY-MM-DD HH:MM[:SS]`, both read as UTC,
/// plus RFC 3339 with an explicit offset.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    PUB_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
