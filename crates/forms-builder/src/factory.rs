//! Creation of the widgets the panel builder adds.

use std::fmt;
use std::hash::Hash;

/// A text with an optional mnemonic, encoded with an `&` marker.
///
/// `"&Save"` has the mnemonic `S` at index 0; `"Save && Exit"` has no
/// mnemonic and the text `"Save & Exit"`. Only the first marker counts, later
/// single `&`s are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MnemonicText {
    pub text: String,
    pub mnemonic: Option<char>,
    /// Character index of the mnemonic in `text`
    pub mnemonic_index: Option<usize>,
}

impl MnemonicText {
    pub fn parse(encoded: &str) -> Self {
        let mut text = String::with_capacity(encoded.len());
        let mut mnemonic = None;
        let mut mnemonic_index = None;
        let mut count = 0;

        let mut chars = encoded.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '&' {
                match chars.peek().copied() {
                    Some('&') => {
                        chars.next();
                    }
                    Some(next) if mnemonic.is_none() => {
                        mnemonic = Some(next);
                        mnemonic_index = Some(count);
                        continue;
                    }
                    _ => {}
                }
            }
            text.push(c);
            count += 1;
        }

        Self {
            text,
            mnemonic,
            mnemonic_index,
        }
    }

    pub fn has_mnemonic(&self) -> bool {
        self.mnemonic.is_some()
    }
}

impl From<&str> for MnemonicText {
    fn from(encoded: &str) -> Self {
        Self::parse(encoded)
    }
}

impl fmt::Display for MnemonicText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Side of a titled separator that carries the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorAlignment {
    Left,
    Right,
}

/// Creates labels, titles, separators, and buttons in the host toolkit.
pub trait ComponentFactory {
    /// Handle the layout uses to address created widgets.
    type Widget: Clone + Eq + Hash;

    fn create_label(&mut self, text: &MnemonicText) -> Self::Widget;

    /// A label styled as a section title.
    fn create_title(&mut self, text: &MnemonicText) -> Self::Widget;

    /// A horizontal separator, titled unless `text` is empty.
    fn create_separator(&mut self, text: &MnemonicText, alignment: SeparatorAlignment) -> Self::Widget;

    fn create_button(&mut self, text: &MnemonicText) -> Self::Widget;
}
