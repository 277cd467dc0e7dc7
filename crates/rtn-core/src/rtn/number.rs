//! Validated routing transit number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{validate, RtnError};

/// A routing transit number that has passed [`validate`].
///
/// Checksum validity does not mean the number is assigned to an institution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rtn(String);

impl Rtn {
    /// Wrap a string already known to pass [`validate`].
    pub(super) fn from_checked(s: String) -> Self {
        debug_assert_eq!(validate(&s), Ok(()));
        Rtn(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The nine digit values, most significant first.
    pub fn digits(&self) -> [u8; 9] {
        let mut out = [0u8; 9];
        for (slot, b) in out.iter_mut().zip(self.0.bytes()) {
            *slot = b - b'0';
        }
        out
    }

    /// The final (check) digit.
    pub fn check_digit(&self) -> u8 {
        self.digits()[8]
    }
}

impl FromStr for Rtn {
    type Err = RtnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Rtn(s.to_owned()))
    }
}

impl TryFrom<&str> for Rtn {
    type Error = RtnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl AsRef<str> for Rtn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rtn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Rtn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Rtn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
