// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Format tags that bind a [`Formatted`] value to a layout.
//!
//! Each tag is an uninhabited type that only exists at the type level. The
//! layout of a tag is fixed at compile time and shared by every value that
//! uses the tag.
//!
//! | Tag | Layout |
//! |---|---|
//! | [`Ansic`] | `Mon Jan _2 15:04:05 2006` |
//! | [`UnixDate`] | `Mon Jan _2 15:04:05 MST 2006` |
//! | [`RubyDate`] | `Mon Jan 02 15:04:05 -0700 2006` |
//! | [`Rfc822`] | `02 Jan 06 15:04 MST` |
//! | [`Rfc822Z`] | `02 Jan 06 15:04 -0700` |
//! | [`Rfc850`] | `Monday, 02-Jan-06 15:04:05 MST` |
//! | [`Rfc1123`] | `Mon, 02 Jan 2006 15:04:05 MST` |
//! | [`Rfc1123Z`] | `Mon, 02 Jan 2006 15:04:05 -0700` |
//! | [`Rfc3339`] | `2006-01-02T15:04:05Z07:00` |
//! | [`Rfc3339Nano`] | `2006-01-02T15:04:05.999999999Z07:00` |
//! | [`Kitchen`] | `3:04PM` |
//! | [`Stamp`] | `Jan _2 15:04:05` |
//! | [`StampMilli`] | `Jan _2 15:04:05.000` |
//! | [`StampMicro`] | `Jan _2 15:04:05.000000` |
//! | [`StampNano`] | `Jan _2 15:04:05.000000000` |
//! | [`DateTime`] | `2006-01-02 15:04:05` |
//! | [`DateOnly`] | `2006-01-02` |
//! | [`TimeOnly`] | `15:04:05` |
//!
//! See the [`layout`][crate::layout] module for the meaning of each element.

use jiff::Zoned;

use crate::Formatted;

mod private {
    pub trait Sealed {}
}

/// A named textual layout that a [`Formatted`] value renders to and parses from.
///
/// This trait is sealed; the set of formats is fixed.
///
/// # Examples
///
/// ```
/// use datestamp::format::{Format, Kitchen, Rfc3339};
///
/// assert_eq!(Rfc3339::layout(), "2006-01-02T15:04:05Z07:00");
/// assert_eq!(Kitchen::NAME, "Kitchen");
/// ```
pub trait Format: private::Sealed + 'static {
    /// The layout pattern, written in terms of the reference time.
    const LAYOUT: &'static str;

    /// A human readable name of the format.
    const NAME: &'static str;

    /// Returns [`Self::LAYOUT`].
    #[must_use]
    fn layout() -> &'static str {
        Self::LAYOUT
    }

    /// Wraps `zoned` in a value bound to this format.
    #[must_use]
    fn stamp(zoned: Zoned) -> Formatted<Self>
    where
        Self: Sized,
    {
        Formatted::new(zoned)
    }
}

macro_rules! formats {
    ($($(#[$attr:meta])* $tag:ident => ($name:literal, $layout:literal);)+) => {
        $(
            $(#[$attr])*
            #[doc = ""]
            #[doc = concat!("Layout: `", $layout, "`.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub enum $tag {}

            impl private::Sealed for $tag {}

            impl Format for $tag {
                const LAYOUT: &'static str = $layout;
                const NAME: &'static str = $name;
            }
        )+

        #[cfg(test)]
        const ALL_LAYOUTS: &[(&str, &str)] = &[$(($name, $layout)),+];
    };
}

formats! {
    /// The C `asctime` layout.
    Ansic => ("ANSIC", "Mon Jan _2 15:04:05 2006");
    /// The layout of the Unix `date` command.
    UnixDate => ("UnixDate", "Mon Jan _2 15:04:05 MST 2006");
    /// The layout of Ruby's `Time#to_s`.
    RubyDate => ("RubyDate", "Mon Jan 02 15:04:05 -0700 2006");
    /// RFC 822 with a zone abbreviation.
    Rfc822 => ("RFC822", "02 Jan 06 15:04 MST");
    /// RFC 822 with a numeric zone.
    Rfc822Z => ("RFC822Z", "02 Jan 06 15:04 -0700");
    /// RFC 850.
    Rfc850 => ("RFC850", "Monday, 02-Jan-06 15:04:05 MST");
    /// RFC 1123 with a zone abbreviation.
    Rfc1123 => ("RFC1123", "Mon, 02 Jan 2006 15:04:05 MST");
    /// RFC 1123 with a numeric zone.
    Rfc1123Z => ("RFC1123Z", "Mon, 02 Jan 2006 15:04:05 -0700");
    /// RFC 3339 with whole seconds.
    Rfc3339 => ("RFC3339", "2006-01-02T15:04:05Z07:00");
    /// RFC 3339 with trimmed nanoseconds.
    Rfc3339Nano => ("RFC3339Nano", "2006-01-02T15:04:05.999999999Z07:00");
    /// A wall clock reading such as `3:04PM`.
    Kitchen => ("Kitchen", "3:04PM");
    /// A log stamp without year or zone.
    Stamp => ("Stamp", "Jan _2 15:04:05");
    /// A log stamp with milliseconds.
    StampMilli => ("StampMilli", "Jan _2 15:04:05.000");
    /// A log stamp with microseconds.
    StampMicro => ("StampMicro", "Jan _2 15:04:05.000000");
    /// A log stamp with nanoseconds.
    StampNano => ("StampNano", "Jan _2 15:04:05.000000000");
    /// A date and a time without a zone.
    DateTime => ("DateTime", "2006-01-02 15:04:05");
    /// A calendar date.
    DateOnly => ("DateOnly", "2006-01-02");
    /// A time of day.
    TimeOnly => ("TimeOnly", "15:04:05");
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    static_assertions::assert_impl_all!(Rfc3339: Format, Send, Sync, Copy);
    static_assertions::const_assert_eq!(std::mem::size_of::<Formatted<Kitchen>>(), std::mem::size_of::<Zoned>());

    #[test]
    fn eighteen_distinct_layouts() {
        assert_eq!(ALL_LAYOUTS.len(), 18);

        let layouts: HashSet<_> = ALL_LAYOUTS.iter().map(|(_, layout)| *layout).collect();
        assert_eq!(layouts.len(), ALL_LAYOUTS.len());

        let names: HashSet<_> = ALL_LAYOUTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), ALL_LAYOUTS.len());
    }

    #[test]
    fn layout_returns_constant() {
        assert_eq!(Ansic::layout(), Ansic::LAYOUT);
        assert_eq!(DateOnly::layout(), "2006-01-02");
        assert_eq!(Rfc3339Nano::layout(), "2006-01-02T15:04:05.999999999Z07:00");
        assert_eq!(TimeOnly::NAME, "TimeOnly");
    }

    #[test]
    fn stamp_wraps_value() {
        let zoned = jiff::Timestamp::UNIX_EPOCH.to_zoned(jiff::tz::TimeZone::UTC);
        let stamped = DateOnly::stamp(zoned.clone());
        assert_eq!(stamped.as_zoned(), &zoned);
        assert_eq!(stamped.to_string(), "1970-01-01");
    }
}
