//! Line prefix flags
//!
//! The bit values are stable and match the classic line-logger layout, so a
//! raw integer read from configuration keeps its meaning across versions.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// Bitmask selecting which metadata prefixes each log line.
///
/// # Examples
///
/// ```
/// use logf::Flags;
///
/// let flags = Flags::DATE | Flags::TIME | Flags::SHORT_FILE;
/// assert!(flags.contains(Flags::TIME));
/// assert!(!flags.contains(Flags::LEVEL));
/// assert_eq!(flags.bits(), 19);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    /// Date in the local time zone: `2009/01/23`
    pub const DATE: Flags = Flags(1);
    /// Time in the local time zone: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Requires `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone for `DATE`/`TIME`.
    pub const UTC: Flags = Flags(1 << 5);
    /// Inject `[LEVEL] ` in front of the message.
    pub const LEVEL: Flags = Flags(1 << 6);

    /// Initial flags of every logger.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0 | Self::LEVEL.0);

    /// The subset understood by the line writer (everything except `LEVEL`).
    pub const LINE_MASK: Flags = Flags(
        Self::DATE.0
            | Self::TIME.0
            | Self::MICROSECONDS.0
            | Self::LONG_FILE.0
            | Self::SHORT_FILE.0
            | Self::UTC.0,
    );

    const ALL: Flags = Flags(Self::LINE_MASK.0 | Self::LEVEL.0);

    const NAMES: [(&'static str, Flags); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("longfile", Self::LONG_FILE),
        ("shortfile", Self::SHORT_FILE),
        ("utc", Self::UTC),
        ("level", Self::LEVEL),
    ];

    pub const fn empty() -> Self {
        Flags(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, or `None` if any unknown bit is set.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL.0 != 0 {
            None
        } else {
            Some(Flags(bits))
        }
    }

    /// Build from raw bits, dropping any bit with no meaning.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL.0)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flags to hand to the line writer.
    pub const fn line_flags(self) -> Flags {
        Flags(self.0 & Self::LINE_MASK.0)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl BitAndAssign for Flags {
    fn bitand_assign(&mut self, rhs: Flags) {
        self.0 &= rhs.0;
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::ALL.0)
    }
}

/// Accepts the raw integer or the `|`-joined names understood by [`FromStr`].
impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(u32),
            Names(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bits(bits) => {
                Flags::from_bits(bits).ok_or_else(|| format!("Invalid flag bits: {}", bits))
            }
            Repr::Names(names) => names.parse(),
        }
        .map_err(de::Error::custom)
    }
}

impl From<Flags> for u32 {
    fn from(flags: Flags) -> u32 {
        flags.0
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({})", self)
    }
}

/// Renders as `date|time|level`, or `empty` when no bit is set.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        let mut first = true;
        for (name, flag) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Parses either a raw integer (`"67"`) or names joined by `|`
/// (`"date|time|level"`, case-insensitive). `std` expands to [`Flags::STD`].
impl FromStr for Flags {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u32>() {
            return Flags::from_bits(bits).ok_or_else(|| format!("Invalid flag bits: {}", bits));
        }

        let mut flags = Flags::empty();
        for part in s.split('|').map(str::trim) {
            let lower = part.to_lowercase();
            match lower.as_str() {
                "" | "empty" => {}
                "std" => flags |= Self::STD,
                name => {
                    let flag = Self::NAMES
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map(|(_, f)| *f)
                        .ok_or_else(|| format!("Invalid flag name: '{}'", part))?;
                    flags |= flag;
                }
            }
        }
        Ok(flags)
    }
}
