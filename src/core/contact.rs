//! # Contact Form
//!
//! Validation rules for the three contact fields and the `mailto:` link a
//! valid submission turns into. Sending happens in the user's mail client.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "your.email@example.com",
            Field::Message => "Your message...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    InvalidEmail,
    MessageTooShort,
    MessageTooLong,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameTooShort => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::MessageTooShort | FieldError::MessageTooLong => Field::Message,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FieldError::NameTooShort => "Name must be at least 2 characters.",
            FieldError::InvalidEmail => "Please enter a valid email address.",
            FieldError::MessageTooShort => "Message must be at least 10 characters.",
            FieldError::MessageTooLong => "Message cannot exceed 500 characters.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field().label(), self.message())
    }
}

impl std::error::Error for FieldError {}

/// At most one error per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn for_field(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if input_len(&self.name) < NAME_MIN_CHARS {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        let message_len = input_len(&self.message);
        if message_len < MESSAGE_MIN_CHARS {
            errors.push(FieldError::MessageTooShort);
        } else if message_len > MESSAGE_MAX_CHARS {
            errors.push(FieldError::MessageTooLong);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

/// Length as a browser form counts it: UTF-16 code units, so characters
/// outside the Basic Multilingual Plane (most emoji) count as two.
pub fn input_len(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Build the `mailto:` link that hands a submission to the mail client.
pub fn mailto_link(recipient: &str, form: &ContactForm) -> String {
    let subject = format!("Contact Form Submission from {}", form.name);
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name, form.email, form.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(&subject),
        encode_component(&body)
    )
}

fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
