// SPDX-License-Identifier: MPL-2.0
//! `mailto:` link construction for the compose form.
//!
//! Encoding is a fixed five-entry substitution table rather than full URI
//! percent-encoding. Mail clients receive exactly these bytes, so the table and
//! its order are part of the output contract:
//!
//! | order | input    | output |
//! |-------|----------|--------|
//! | 1     | `%`      | `%25`  |
//! | 2     | space    | `%20`  |
//! | 3     | newline  | `%0A`  |
//! | 4     | `&`      | `%26`  |
//! | 5     | `?`      | `%3F`  |
//!
//! `%` goes first so the escapes introduced by later rows are never re-escaped.
//!
//! # Example
//!
//! ```
//! use iced_showcase::presentation::mailto;
//!
//! let uri = mailto::build("a@b.com", "Hi there", "Line1\nLine2").unwrap();
//! assert_eq!(uri, "mailto:a@b.com?subject=Hi%20there&body=Line1%0ALine2");
//! ```

use crate::error::ValidationError;

const SCHEME: &str = "mailto:";

const SUBSTITUTIONS: [(&str, &str); 5] = [
    ("%", "%25"),
    (" ", "%20"),
    ("\n", "%0A"),
    ("&", "%26"),
    ("?", "%3F"),
];

/// Outcome of [`build`]: the link, or why the draft was rejected.
pub type MailtoResult = Result<String, ValidationError>;

/// Builds a `mailto:` URI from the raw form fields.
///
/// The recipient is only checked for being non-blank and containing `@`, and
/// is copied verbatim. Subject and body go through [`encode_component`]; empty
/// parts are omitted, and so is the `?` when both are empty.
pub fn build(to: &str, subject: &str, body: &str) -> MailtoResult {
    if to.trim().is_empty() || !to.contains('@') {
        return Err(ValidationError::InvalidRecipient);
    }

    let subject = encode_component(subject);
    let body = encode_component(body);

    let mut uri = String::with_capacity(SCHEME.len() + to.len() + subject.len() + body.len() + 15);
    uri.push_str(SCHEME);
    uri.push_str(to);

    let mut separator = '?';
    if !subject.is_empty() {
        uri.push(separator);
        uri.push_str("subject=");
        uri.push_str(&subject);
        separator = '&';
    }
    if !body.is_empty() {
        uri.push(separator);
        uri.push_str("body=");
        uri.push_str(&body);
    }

    Ok(uri)
}

/// Applies the minimal substitution table to one query value.
#[must_use]
pub fn encode_component(value: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(value.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Compose form contents, owned by the host screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Message shown under the form after a failed send.
    pub last_error: Option<String>,
}

impl EmailDraft {
    /// Replaces the recipient; any stale error is cleared since the user is
    /// correcting the input.
    pub fn set_recipient(&mut self, to: String) {
        self.to = to;
        self.last_error = None;
    }

    /// Builds the link for the current contents without touching the draft.
    pub fn mailto(&self) -> MailtoResult {
        build(&self.to, &self.subject, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_at_is_rejected() {
        for to in ["", "   ", "\t\n", "alice", "alice.example.com"] {
            assert_eq!(
                build(to, "s", "b"),
                Err(ValidationError::InvalidRecipient),
                "recipient {to:?}"
            );
        }
    }

    #[test]
    fn rejection_carries_exact_message() {
        let err = build("nobody", "", "").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid recipient email.");
    }

    #[test]
    fn bare_at_is_accepted() {
        assert_eq!(build("@", "", ""), Ok("mailto:@".to_string()));
    }

    #[test]
    fn empty_subject_and_body_omit_query() {
        assert_eq!(build("a@b.com", "", ""), Ok("mailto:a@b.com".to_string()));
    }

    #[test]
    fn subject_and_body_joined_with_ampersand() {
        assert_eq!(
            build("a@b.com", "Hi there", "Line1\nLine2"),
            Ok("mailto:a@b.com?subject=Hi%20there&body=Line1%0ALine2".to_string())
        );
    }

    #[test]
    fn body_only_has_no_leading_ampersand() {
        assert_eq!(
            build("a@b.com", "", "x&y?z"),
            Ok("mailto:a@b.com?body=x%26y%3Fz".to_string())
        );
    }

    #[test]
    fn subject_only() {
        assert_eq!(
            build("a@b.com", "Status?", ""),
            Ok("mailto:a@b.com?subject=Status%3F".to_string())
        );
    }

    #[test]
    fn literal_percent_is_encoded_first() {
        assert_eq!(encode_component("%20"), "%2520");
        assert_eq!(encode_component("100% done"), "100%25%20done");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(encode_component("a+b=c#d/é\t"), "a+b=c#d/é\t");
    }

    #[test]
    fn recipient_is_never_encoded() {
        assert_eq!(
            build("first last@b.com?x", "", ""),
            Ok("mailto:first last@b.com?x".to_string())
        );
    }

    #[test]
    fn draft_delegates_without_mutation() {
        let draft = EmailDraft {
            to: "a@b.com".into(),
            subject: "Hi".into(),
            body: String::new(),
            last_error: Some("old".into()),
        };
        let before = draft.clone();
        assert_eq!(draft.mailto(), Ok("mailto:a@b.com?subject=Hi".to_string()));
        assert_eq!(draft, before);
    }

    #[test]
    fn set_recipient_clears_error() {
        let mut draft = EmailDraft {
            last_error: Some("Please enter a valid recipient email.".into()),
            ..EmailDraft::default()
        };
        draft.set_recipient("a@b.com".into());
        assert_eq!(draft.to, "a@b.com");
        assert!(draft.last_error.is_none());
    }
}
