use serde::{Deserialize, Serialize};

use crate::{
    domain::{CardField, FormFields, Mode},
    error::IntentParseError,
};

pub const SAVED_MESSAGE: &str = "Saved successfully!";
pub const MISSING_PREFIX: &str = "Please enter: ";

/// User intents reported by a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    SetField { field: CardField, value: String },
    ToggleMode,
    RequestSave,
    RequestEdit,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SetField { .. } => "set_field",
            Intent::ToggleMode => "toggle_mode",
            Intent::RequestSave => "request_save",
            Intent::RequestEdit => "request_edit",
        }
    }

    /// Parses `set <field> <value...>`, `toggle`, `save` or `edit`.
    ///
    /// The value of `set` is everything after the field token with a single
    /// separating space removed, so `set age` clears the age.
    pub fn parse(line: &str) -> Result<Self, IntentParseError> {
        let line = line.trim_start();
        let (command, rest) = split_token(line);
        match command {
            "set" => {
                let (field, value) = split_token(rest);
                if field.is_empty() {
                    return Err(IntentParseError::MissingArgument {
                        command: "set",
                        argument: "field",
                    });
                }
                let field = parse_field(field)?;
                Ok(Intent::SetField {
                    field,
                    value: value.to_string(),
                })
            }
            "toggle" => Ok(Intent::ToggleMode),
            "save" => Ok(Intent::RequestSave),
            "edit" => Ok(Intent::RequestEdit),
            "" => Err(IntentParseError::Empty),
            other => Err(IntentParseError::UnknownCommand(other.to_string())),
        }
    }
}

pub fn parse_field(token: &str) -> Result<CardField, IntentParseError> {
    match token.to_ascii_lowercase().as_str() {
        "name" => Ok(CardField::Name),
        "hobby" => Ok(CardField::Hobby),
        "age" => Ok(CardField::Age),
        _ => Err(IntentParseError::UnknownField(token.to_string())),
    }
}

/// Splits off the first whitespace-delimited token, skipping leading whitespace.
/// Only the single whitespace character ending the token is consumed, so the
/// remainder keeps its own spacing.
pub fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.char_indices().find(|(_, ch)| ch.is_whitespace()) {
        Some((at, ch)) => (&input[..at], &input[at + ch.len_utf8()..]),
        None => (input, ""),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Warning,
}

/// Short-lived user-facing message produced by a save attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn saved() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SAVED_MESSAGE.to_string(),
        }
    }

    pub fn missing(fields: &[CardField]) -> Self {
        let labels = fields
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            kind: NotificationKind::Warning,
            message: format!("{MISSING_PREFIX}{labels}"),
        }
    }
}

/// What a renderer reads each frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub mode: Mode,
    pub hint_banner_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_spaces_in_value() {
        assert_eq!(
            Intent::parse("set hobby rock climbing").expect("parse"),
            Intent::SetField {
                field: CardField::Hobby,
                value: "rock climbing".to_string()
            }
        );
    }

    #[test]
    fn parses_set_without_value_as_clear() {
        assert_eq!(
            Intent::parse("set Age").expect("parse"),
            Intent::SetField {
                field: CardField::Age,
                value: String::new()
            }
        );
    }

    #[test]
    fn tokens_may_be_separated_by_tabs_and_space_runs() {
        assert_eq!(Intent::parse("toggle\t").expect("parse"), Intent::ToggleMode);
        assert_eq!(
            Intent::parse("set\tname Ada").expect("parse"),
            Intent::SetField {
                field: CardField::Name,
                value: "Ada".to_string()
            }
        );
        assert_eq!(
            Intent::parse("set   hobby  go fishing ").expect("parse"),
            Intent::SetField {
                field: CardField::Hobby,
                value: " go fishing ".to_string()
            }
        );
    }

    #[test]
    fn split_token_keeps_remainder_spacing() {
        assert_eq!(split_token("  wait \t250"), ("wait", "\t250"));
        assert_eq!(split_token("show"), ("show", ""));
        assert_eq!(split_token("   "), ("", ""));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(
            Intent::parse("set email a@b.c"),
            Err(IntentParseError::UnknownField("email".to_string()))
        );
        assert_eq!(
            Intent::parse("lock"),
            Err(IntentParseError::UnknownCommand("lock".to_string()))
        );
        assert!(matches!(
            Intent::parse("set"),
            Err(IntentParseError::MissingArgument { .. })
        ));
        assert_eq!(Intent::parse("   "), Err(IntentParseError::Empty));
    }

    #[test]
    fn missing_message_lists_labels_in_order() {
        let note = Notification::missing(&[CardField::Name, CardField::Age]);
        assert_eq!(note.message, "Please enter: Name, Age");
        assert_eq!(note.kind, NotificationKind::Warning);
        assert_eq!(Notification::saved().message, "Saved successfully!");
    }

    #[test]
    fn intents_serialize_with_type_tag() {
        let json = serde_json::to_string(&Intent::ToggleMode).expect("serialize");
        assert_eq!(json, r#"{"type":"toggle_mode"}"#);
    }
}
