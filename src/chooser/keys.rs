/// Keys the chooser reacts to on an ontology field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Control,
    Meta, // apple cmd
    Enter,
    Backspace,
    Char(char),
    Other,
}

impl Key {
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Control | Key::Meta)
    }

    /// Maps browser `keyCode` values.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            17 => Key::Control,
            224 => Key::Meta,
            13 => Key::Enter,
            8 => Key::Backspace,
            65..=90 => char::from_u32(code).map(|c| Key::Char(c.to_ascii_lowercase())).unwrap_or(Key::Other),
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Copy,
    Paste,
}

/// Copy and paste are only recognised while a modifier key is held.
pub fn intent(key: Key, modifier_held: bool) -> Option<KeyIntent> {
    match key {
        Key::Char('c') if modifier_held => Some(KeyIntent::Copy),
        Key::Char('v') if modifier_held => Some(KeyIntent::Paste),
        _ => None,
    }
}
