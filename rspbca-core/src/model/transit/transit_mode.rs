use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// transit segments are reported as bus or rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitMode {
    /// CTA and Pace bus, including express and BRT (modes B, E, P, Q, L)
    Bus,
    /// CTA rail and Metra (modes C, M)
    Rail,
}

impl TransitMode {
    pub fn name(&self) -> &'static str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Rail => "rail",
        }
    }
}

impl FromStr for TransitMode {
    type Err = String;

    /// accepts the mode names or single-letter network mode codes, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bus" | "b" | "e" | "p" | "q" | "l" => Ok(TransitMode::Bus),
            "rail" | "c" | "m" => Ok(TransitMode::Rail),
            other => Err(format!("unknown transit mode '{other}'")),
        }
    }
}

impl Display for TransitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::TransitMode;

    #[test]
    fn test_parse() {
        assert_eq!("bus".parse::<TransitMode>(), Ok(TransitMode::Bus));
        assert_eq!("Q".parse::<TransitMode>(), Ok(TransitMode::Bus));
        assert_eq!(" rail ".parse::<TransitMode>(), Ok(TransitMode::Rail));
        assert_eq!("M".parse::<TransitMode>(), Ok(TransitMode::Rail));
        assert!("ferry".parse::<TransitMode>().is_err());
    }
}
