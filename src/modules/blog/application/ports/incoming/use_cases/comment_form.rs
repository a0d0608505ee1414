use serde::{Deserialize, Serialize};

use crate::shared::forms::{clean_required, FormErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CommentCommand {
    text: String,
}

impl CommentCommand {
    pub fn new(form: &CommentForm) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let text = clean_required(&mut errors, "text", &form.text);
        errors.into_result(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
