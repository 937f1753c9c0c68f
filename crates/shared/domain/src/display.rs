use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Decorations drawn around a country label.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DisplayOptions: u8 {
        const SHOW_FLAG = 1 << 0;
        const SHOW_COUNTRY_NAME = 1 << 1;

        const ALL = Self::SHOW_FLAG.bits() | Self::SHOW_COUNTRY_NAME.bits();
    }
}

impl DisplayOptions {
    #[must_use]
    pub const fn show_flag(self) -> bool {
        self.contains(Self::SHOW_FLAG)
    }

    #[must_use]
    pub const fn show_country_name(self) -> bool {
        self.contains(Self::SHOW_COUNTRY_NAME)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for DisplayOptions {
    fn from(s: &str) -> Self {
        s.split(',').map(str::trim).fold(Self::empty(), |acc, name| {
            acc | match name {
                "flag" => Self::SHOW_FLAG,
                "name" | "country_name" => Self::SHOW_COUNTRY_NAME,
                "all" | "*" => Self::ALL,
                _ => Self::empty(),
            }
        })
    }
}

impl Serialize for DisplayOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for DisplayOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_names() {
        assert_eq!(DisplayOptions::from("flag"), DisplayOptions::SHOW_FLAG);
        assert_eq!(DisplayOptions::from("flag, name"), DisplayOptions::ALL);
        assert_eq!(DisplayOptions::from("none"), DisplayOptions::empty());
        assert!(DisplayOptions::default().show_country_name());
    }
}
