// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::time::SystemTime;

use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::error::{Error, Result};
use crate::format::Format;
use crate::layout::{self, ParseError};

/// A point in time bound to the layout of the format `F`.
///
/// The format only decides how the value is written and read as text; the
/// value itself is a [`Zoned`] instant. Equality, ordering and hashing look
/// at the instant alone, so two values that describe the same moment in
/// different time zones are equal.
///
/// # Rendering and parsing
///
/// [`Display`] and [`render`][Self::render] write the value with
/// `F::LAYOUT`; [`FromStr`] and [`parse`][Self::parse] read it back strictly.
/// Layouts that omit fields lose them: a [`Kitchen`][crate::format::Kitchen]
/// value only keeps the hour and minute, and parsing fills the rest with
/// year 0, January 1st, UTC.
///
/// # Serialization and deserialization
///
/// With the `serde` feature, values serialize as the rendered string and
/// deserialize by parsing a string with the same layout, so a field keeps its
/// wire format from end to end.
///
/// # Examples
///
/// ```
/// use datestamp::Formatted;
/// use datestamp::format::{Rfc1123, Rfc3339};
///
/// let stamp: Formatted<Rfc3339> = "2024-08-06T21:30:00+02:00".parse()?;
/// assert_eq!(stamp.to_string(), "2024-08-06T21:30:00+02:00");
///
/// let http = stamp.reformat::<Rfc1123>();
/// assert_eq!(http.to_string(), "Tue, 06 Aug 2024 21:30:00 +0200");
///
/// # Ok::<(), datestamp::Error>(())
/// ```
pub struct Formatted<F: Format> {
    zoned: Zoned,
    format: PhantomData<fn() -> F>,
}

impl<F: Format> Formatted<F> {
    /// Wraps `zoned`.
    #[must_use]
    pub const fn new(zoned: Zoned) -> Self {
        Self {
            zoned,
            format: PhantomData,
        }
    }

    /// The current time in the system time zone.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Zoned::now())
    }

    /// The wrapped value.
    #[must_use]
    pub const fn as_zoned(&self) -> &Zoned {
        &self.zoned
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_zoned(self) -> Zoned {
        self.zoned
    }

    /// The instant of the value.
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.zoned.timestamp()
    }

    /// Binds the same value to the format `G`.
    #[must_use]
    pub fn reformat<G: Format>(self) -> Formatted<G> {
        Formatted::new(self.zoned)
    }

    /// Renders the value with the layout of `F`.
    #[must_use]
    pub fn render(&self) -> String {
        layout::format(&self.zoned, F::LAYOUT)
    }

    /// Parses `text` strictly with the layout of `F`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] when `text` does not conform to the
    /// layout.
    pub fn parse(text: &str) -> Result<Self> {
        layout::parse(F::LAYOUT, text).map(Self::new).map_err(Error::format_mismatch)
    }

    /// Renders the value as a JSON string literal.
    ///
    /// The rendered text is wrapped in double quotes. No escaping is applied;
    /// none of the layouts produce characters that need it.
    ///
    /// ```
    /// use datestamp::Formatted;
    /// use datestamp::format::DateOnly;
    ///
    /// let date: Formatted<DateOnly> = "2024-01-01".parse()?;
    /// assert_eq!(date.to_json_text(), r#""2024-01-01""#);
    ///
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // capacity changes are not observable
    pub fn to_json_text(&self) -> String {
        let mut out = String::with_capacity(F::LAYOUT.len() + 12);
        out.push('"');
        layout::format_into(&mut out, &self.zoned, F::LAYOUT);
        out.push('"');
        out
    }

    /// Parses a JSON string literal produced by [`to_json_text`][Self::to_json_text].
    ///
    /// Every `"` at the start and at the end of `raw` is removed before the
    /// remaining text is parsed, so unquoted input is accepted too. This is a
    /// trim, not a JSON decoder: escape sequences inside the string are not
    /// interpreted, and whitespace around the quotes is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] when the unquoted text is not UTF-8
    /// or does not conform to the layout.
    ///
    /// ```
    /// use datestamp::Formatted;
    /// use datestamp::format::DateOnly;
    ///
    /// let quoted = Formatted::<DateOnly>::from_json_text(br#""2024-01-01""#)?;
    /// let bare = Formatted::<DateOnly>::from_json_text(b"2024-01-01")?;
    /// assert_eq!(quoted, bare);
    ///
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    pub fn from_json_text(raw: &[u8]) -> Result<Self> {
        let unquoted = trim_quotes(raw);
        let result = match std::str::from_utf8(unquoted) {
            Ok(text) => Self::parse(text),
            Err(_) => Err(Error::format_mismatch(ParseError::invalid_utf8(F::LAYOUT, unquoted))),
        };
        Self::observe_decode(result)
    }

    /// Reports rejected input of structured-data decoding.
    fn observe_decode(result: Result<Self>) -> Result<Self> {
        #[cfg(any(feature = "logs", test))]
        if let Err(error) = &result {
            tracing::event!(
                name: "datestamp.decode",
                tracing::Level::DEBUG,
                datestamp.format = F::NAME,
                datestamp.layout = F::LAYOUT,
                error = %error,
            );
        }

        result
    }
}

fn trim_quotes(raw: &[u8]) -> &[u8] {
    let start = raw.iter().position(|&b| b != b'"').unwrap_or(raw.len());
    let end = raw.iter().rposition(|&b| b != b'"').map_or(start, |last| last + 1);
    &raw[start..end]
}

impl<F: Format> Clone for Formatted<F> {
    fn clone(&self) -> Self {
        Self::new(self.zoned.clone())
    }
}

impl<F: Format> Debug for Formatted<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatted")
            .field("format", &F::NAME)
            .field("zoned", &self.zoned)
            .finish()
    }
}

impl<F: Format> Display for Formatted<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<F: Format> FromStr for Formatted<F> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<F: Format> PartialEq for Formatted<F> {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp() == other.timestamp()
    }
}

impl<F: Format> Eq for Formatted<F> {}

impl<F: Format> PartialOrd for Formatted<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Format> Ord for Formatted<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp().cmp(&other.timestamp())
    }
}

impl<F: Format> Hash for Formatted<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp().hash(state);
    }
}

impl<F: Format> From<Zoned> for Formatted<F> {
    fn from(value: Zoned) -> Self {
        Self::new(value)
    }
}

impl<F: Format> From<Timestamp> for Formatted<F> {
    fn from(value: Timestamp) -> Self {
        Self::new(value.to_zoned(TimeZone::UTC))
    }
}

impl<F: Format> TryFrom<SystemTime> for Formatted<F> {
    type Error = jiff::Error;

    fn try_from(value: SystemTime) -> std::result::Result<Self, Self::Error> {
        Timestamp::try_from(value).map(Self::from)
    }
}

impl<F: Format> From<Formatted<F>> for Zoned {
    fn from(value: Formatted<F>) -> Self {
        value.zoned
    }
}

impl<F: Format> From<Formatted<F>> for Timestamp {
    fn from(value: Formatted<F>) -> Self {
        value.timestamp()
    }
}

impl<F: Format> From<Formatted<F>> for SystemTime {
    fn from(value: Formatted<F>) -> Self {
        value.timestamp().into()
    }
}

#[cfg(any(feature = "serde", test))]
impl<F: Format> serde_core::Serialize for Formatted<F> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de, F: Format> serde_core::Deserialize<'de> for Formatted<F> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        deserializer.deserialize_str(FormattedVisitor(PhantomData))
    }
}

#[cfg(any(feature = "serde", test))]
struct FormattedVisitor<F>(PhantomData<fn() -> F>);

#[cfg(any(feature = "serde", test))]
impl<F: Format> serde_core::de::Visitor<'_> for FormattedVisitor<F> {
    type Value = Formatted<F>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "a time in {:?} format", F::LAYOUT)
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde_core::de::Error,
    {
        Formatted::<F>::observe_decode(Formatted::parse(v)).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<Self::Value, E>
    where
        E: serde_core::de::Error,
    {
        Formatted::<F>::from_json_text(v).map_err(E::custom)
    }
}
