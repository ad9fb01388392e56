//! Pure logic behind the portfolio page interactions.
//!
//! The web frontend gathers values from the DOM and applies the results; the
//! rules themselves live here so they can be tested on the host.

use thiserror::Error;

/// Pixels subtracted from a section's offset when deciding which one is current.
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
/// Pixels left above a section when scrolling to it from the nav.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const FILTER_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Id of the section the page is scrolled into; later sections win ties.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.offset_top - SECTION_ACTIVATION_OFFSET;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

#[inline]
pub fn nav_href_matches(href: &str, section_id: Option<&str>) -> bool {
    match section_id {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => href == "#",
    }
}

#[inline]
pub fn nav_scroll_target(offset_top: f64) -> f64 {
    offset_top - NAV_SCROLL_OFFSET
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// `all` shows every card; any other filter is a substring match on the categories.
#[inline]
pub fn project_matches(filter: &str, categories: &str) -> bool {
    filter == FILTER_ALL || categories.contains(filter)
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Every failing rule, in form order.
    pub fn validate(&self) -> Result<(), Vec<ContactFieldError>> {
        let mut errors = Vec::new();
        if trimmed_len(&self.name) < 2 {
            errors.push(ContactFieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if trimmed_len(&self.subject) < 5 {
            errors.push(ContactFieldError::SubjectTooShort);
        }
        if trimmed_len(&self.message) < 10 {
            errors.push(ContactFieldError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Browser whitespace: what `String.prototype.trim` strips and `\s` matches.
/// Differs from `char::is_whitespace` on U+FEFF (included) and U+0085 (not).
pub fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Length in UTF-16 units after browser trimming, as form inputs measure it.
fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_browser_whitespace).encode_utf16().count()
}

/// Same acceptance as `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_browser_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // some dot must have at least one char on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validation_message(errors: &[ContactFieldError]) -> String {
    let items: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    format!("Please fix the following errors:\n• {}", items.join("\n• "))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification notification--info",
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }
}
