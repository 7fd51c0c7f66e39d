use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Name,
    Hobby,
    Age,
}

impl CardField {
    /// Fixed validation and reporting order.
    pub const ALL: [CardField; 3] = [CardField::Name, CardField::Hobby, CardField::Age];

    pub fn label(self) -> &'static str {
        match self {
            CardField::Name => "Name",
            CardField::Hobby => "Hobby",
            CardField::Age => "Age",
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Editing,
    Locked,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Editing => Mode::Locked,
            Mode::Locked => Mode::Editing,
        }
    }

    pub fn is_editing(self) -> bool {
        self == Mode::Editing
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Locked => "Locked",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub hobby: String,
    pub age: String,
}

impl FormFields {
    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Hobby => &self.hobby,
            CardField::Age => &self.age,
        }
    }

    fn slot_mut(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::Name => &mut self.name,
            CardField::Hobby => &mut self.hobby,
            CardField::Age => &mut self.age,
        }
    }

    /// Writes `value` into `field` if the field's input rule allows it.
    /// Returns whether the value was applied.
    pub fn try_set(&mut self, field: CardField, value: &str) -> bool {
        if field == CardField::Age && !is_age_input(value) {
            return false;
        }
        let slot = self.slot_mut(field);
        slot.clear();
        slot.push_str(value);
        true
    }

    /// Blank fields in `CardField::ALL` order.
    pub fn missing(&self) -> Vec<CardField> {
        CardField::ALL
            .into_iter()
            .filter(|field| is_blank(self.get(*field)))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        CardField::ALL
            .into_iter()
            .all(|field| !is_blank(self.get(field)))
    }
}

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Age input accepts ASCII decimal digits only; the empty string means "no input yet".
pub fn is_age_input(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_rejects_mixed_input_without_truncating() {
        let mut fields = FormFields::default();
        assert!(fields.try_set(CardField::Age, "42"));
        assert!(!fields.try_set(CardField::Age, "4a2"));
        assert_eq!(fields.age, "42");
        assert!(fields.try_set(CardField::Age, ""));
        assert_eq!(fields.age, "");
    }

    #[test]
    fn age_rejects_sign_and_whitespace() {
        let mut fields = FormFields::default();
        assert!(!fields.try_set(CardField::Age, "-3"));
        assert!(!fields.try_set(CardField::Age, " 3"));
        assert!(!fields.try_set(CardField::Age, "3.5"));
        assert_eq!(fields.age, "");
    }

    #[test]
    fn name_and_hobby_are_stored_verbatim() {
        let mut fields = FormFields::default();
        assert!(fields.try_set(CardField::Name, "  Ada Lovelace "));
        assert!(fields.try_set(CardField::Hobby, "4 chess clubs!"));
        assert_eq!(fields.name, "  Ada Lovelace ");
        assert_eq!(fields.hobby, "4 chess clubs!");
    }

    #[test]
    fn missing_is_reported_in_fixed_order() {
        let mut fields = FormFields::default();
        assert_eq!(fields.missing(), CardField::ALL.to_vec());

        fields.try_set(CardField::Hobby, "\t \n");
        fields.try_set(CardField::Age, "7");
        assert_eq!(fields.missing(), vec![CardField::Name, CardField::Hobby]);
        assert!(!fields.is_complete());
    }

    #[test]
    fn mode_toggle_is_an_involution() {
        assert_eq!(Mode::Editing.toggled().toggled(), Mode::Editing);
        assert_eq!(Mode::default(), Mode::Editing);
    }
}
