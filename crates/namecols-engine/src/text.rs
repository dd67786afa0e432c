//! Canonical text handling for filenames.
//!
//! Raw filenames arrive as bytes in whatever encoding the user's locale uses.
//! [`TextService`] turns them into NFC-normalized UTF-8 and back again for
//! output. Grapheme segmentation and display-width measurement don't depend on
//! the configured encoding, so they are plain functions.
//!
//! ```rust
//! use namecols_engine::text::{display_width, pad_right, TextConfig, TextService};
//!
//! let service = TextService::new(TextConfig::default());
//! // "e" + combining acute accent composes to a single "é"
//! let name = service.to_canonical(b"cafe\xcc\x81.txt").unwrap();
//! assert_eq!(name, "caf\u{e9}.txt");
//! assert_eq!(display_width(&name), 8);
//! assert_eq!(pad_right("ab", 4), "ab  ");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};
use unicode_width::UnicodeWidthStr;

use crate::error::TextError;

/// Character encodings filenames can be read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Encoding {
    /// UTF-8 (the default).
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
    /// ISO-8859-1, every byte maps to the code point of the same value.
    #[serde(rename = "ISO-8859-1")]
    Latin1,
    /// 7-bit US-ASCII, as used by the `C` and `POSIX` locales.
    #[serde(rename = "ASCII")]
    Ascii,
}

impl Encoding {
    /// The canonical label for this encoding.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Ascii => "ASCII",
        }
    }

    /// Looks up an encoding by label.
    ///
    /// Matching ignores case, `-` and `_`, so `utf8`, `UTF-8` and `utf_8` are
    /// all accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "utf8" => Some(Encoding::Utf8),
            "iso88591" | "latin1" | "l1" | "cp819" => Some(Encoding::Latin1),
            "ascii" | "usascii" | "ansix3.41968" | "646" => Some(Encoding::Ascii),
            _ => None,
        }
    }

    /// Derives the encoding from a POSIX locale name such as `en_US.UTF-8`.
    ///
    /// The `C` and `POSIX` locales are ASCII. Locales without a codeset, or
    /// with one this crate doesn't support, yield `None`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        if locale == "C" || locale == "POSIX" {
            return Some(Encoding::Ascii);
        }
        let (_, codeset) = locale.split_once('.')?;
        let codeset = codeset.split('@').next().unwrap_or(codeset);
        Self::from_label(codeset)
    }

    /// True if `c` can be written in this encoding.
    pub fn can_represent(&self, c: char) -> bool {
        match self {
            Encoding::Utf8 => true,
            Encoding::Latin1 => u32::from(c) <= 0xff,
            Encoding::Ascii => c.is_ascii(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| TextError::UnknownEncoding(s.to_string()))
    }
}

/// What to do with bytes that are invalid in the source encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replacement {
    /// Replace each invalid sequence with U+FFFD and keep going.
    #[default]
    Substitute,
    /// Reject the whole filename.
    Strict,
}

/// Encoding settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextConfig {
    /// Encoding raw filenames are decoded from.
    pub source: Encoding,
    /// Encoding rendered output is written in.
    pub output: Encoding,
    /// Policy for invalid input bytes.
    pub replacement: Replacement,
}

impl TextConfig {
    /// Uses `encoding` for both input and output.
    pub fn new(encoding: Encoding) -> Self {
        Self {
            source: encoding,
            output: encoding,
            replacement: Replacement::default(),
        }
    }

    /// Sets the invalid-input policy.
    pub fn replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }
}

/// Converts between raw filename bytes and canonical (NFC, UTF-8) text.
#[derive(Debug, Clone, Default)]
pub struct TextService {
    config: TextConfig,
}

impl TextService {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Decodes `raw` from the source encoding and normalizes it to NFC.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Malformed`] when `raw` is invalid in the source
    /// encoding and the replacement policy is [`Replacement::Strict`].
    pub fn to_canonical(&self, raw: &[u8]) -> Result<String, TextError> {
        let decoded = self.decode(raw)?;
        Ok(normalize(&decoded))
    }

    fn decode(&self, raw: &[u8]) -> Result<String, TextError> {
        let strict = self.config.replacement == Replacement::Strict;
        match self.config.source {
            Encoding::Utf8 => match std::str::from_utf8(raw) {
                Ok(text) => Ok(text.to_string()),
                Err(err) if strict => Err(TextError::Malformed {
                    encoding: Encoding::Utf8,
                    offset: err.valid_up_to(),
                }),
                Err(_) => Ok(String::from_utf8_lossy(raw).into_owned()),
            },
            Encoding::Latin1 => Ok(raw.iter().map(|&b| char::from(b)).collect()),
            Encoding::Ascii => {
                if strict {
                    if let Some(offset) = raw.iter().position(|b| !b.is_ascii()) {
                        return Err(TextError::Malformed {
                            encoding: Encoding::Ascii,
                            offset,
                        });
                    }
                }
                Ok(raw
                    .iter()
                    .map(|&b| {
                        if b.is_ascii() {
                            char::from(b)
                        } else {
                            char::REPLACEMENT_CHARACTER
                        }
                    })
                    .collect())
            }
        }
    }

    /// The text as it will read once written in the output encoding.
    ///
    /// Characters the output encoding can't represent become `?`. Measuring
    /// this instead of the canonical text keeps padding right after encoding.
    pub fn representable<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let output = self.config.output;
        if text.chars().all(|c| output.can_represent(c)) {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(
                text.chars()
                    .map(|c| if output.can_represent(c) { c } else { '?' })
                    .collect(),
            )
        }
    }

    /// Re-encodes canonical text into the output encoding.
    ///
    /// Characters the output encoding can't represent become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self.config.output {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            // every char of the representable text is below 0x100
            Encoding::Latin1 | Encoding::Ascii => self
                .representable(text)
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }
}

/// Normalizes text to Unicode canonical composition (NFC).
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Extended grapheme clusters of `text` with their byte offsets.
pub fn grapheme_indices(text: &str) -> GraphemeIndices<'_> {
    text.grapheme_indices(true)
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Terminal display width of `text` in columns.
///
/// Wide characters (CJK, most emoji) count as two columns, combining marks as zero.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Pads `s` with trailing spaces up to `width` display columns.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let padding = width - current;
    let mut result = String::with_capacity(s.len() + padding);
    result.push_str(s);
    result.extend(std::iter::repeat(' ').take(padding));
    result
}
