//! Transport mode type.

use std::fmt;

/// The mode of transport a service operates under.
///
/// This is an open enumeration: catalog data may carry mode strings we
/// have never heard of, and those fall back to [`Mode::Other`] rather
/// than failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Train,
    Tram,
    Bus,
    Ferry,
    Trolleybus,
    Plane,
    /// Any mode we do not specifically know about.
    Other,
}

impl Mode {
    /// Parse a mode from its label, case-insensitively.
    ///
    /// Returns `None` for labels that are not a known mode; callers that
    /// want the open-enum fallback use [`Mode::parse`] instead.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "train" => Some(Mode::Train),
            "tram" => Some(Mode::Tram),
            "bus" => Some(Mode::Bus),
            "ferry" => Some(Mode::Ferry),
            "trolleybus" => Some(Mode::Trolleybus),
            "plane" => Some(Mode::Plane),
            _ => None,
        }
    }

    /// Parse a mode from its label, falling back to [`Mode::Other`].
    ///
    /// Never fails: the mode enumeration is open.
    pub fn parse(s: &str) -> Self {
        Self::from_label(s).unwrap_or(Mode::Other)
    }

    /// Returns the canonical lowercase label for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Train => "train",
            Mode::Tram => "tram",
            Mode::Bus => "bus",
            Mode::Ferry => "ferry",
            Mode::Trolleybus => "trolleybus",
            Mode::Plane => "plane",
            Mode::Other => "other",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_labels() {
        assert_eq!(Mode::parse("train"), Mode::Train);
        assert_eq!(Mode::parse("tram"), Mode::Tram);
        assert_eq!(Mode::parse("bus"), Mode::Bus);
        assert_eq!(Mode::parse("ferry"), Mode::Ferry);
        assert_eq!(Mode::parse("trolleybus"), Mode::Trolleybus);
        assert_eq!(Mode::parse("plane"), Mode::Plane);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Mode::parse("Train"), Mode::Train);
        assert_eq!(Mode::parse("FERRY"), Mode::Ferry);
        assert_eq!(Mode::parse("TrAm"), Mode::Tram);
    }

    #[test]
    fn unknown_labels_fall_back_to_other() {
        assert_eq!(Mode::parse("zeppelin"), Mode::Other);
        assert_eq!(Mode::parse(""), Mode::Other);
        assert_eq!(Mode::parse("cable car"), Mode::Other);
    }

    #[test]
    fn from_label_reports_unknown() {
        assert_eq!(Mode::from_label("train"), Some(Mode::Train));
        assert_eq!(Mode::from_label("zeppelin"), None);
    }

    #[test]
    fn label_roundtrip() {
        for mode in [
            Mode::Train,
            Mode::Tram,
            Mode::Bus,
            Mode::Ferry,
            Mode::Trolleybus,
            Mode::Plane,
        ] {
            assert_eq!(Mode::parse(mode.label()), mode);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Mode::Ferry), "ferry");
        assert_eq!(format!("{}", Mode::Other), "other");
    }
}
