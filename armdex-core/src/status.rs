/// Compatibility classification of a catalog item on Windows ARM.
///
/// This is a closed set. Raw status strings from the catalog document are
/// mapped onto it once, at the load boundary, via [`Status::normalize`];
/// nothing downstream ever sees the external string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    AvailableNatively,
    AvailableViaEmulation,
    NotAvailable,
    #[default]
    Unknown,
}

/// All status variants in display order.
const ALL_STATUSES: &[Status] = &[
    Status::AvailableNatively,
    Status::AvailableViaEmulation,
    Status::NotAvailable,
    Status::Unknown,
];

impl Status {
    /// Human-readable label, identical to the value used by the catalog document.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AvailableNatively => "Available Natively",
            Self::AvailableViaEmulation => "Available via Emulation",
            Self::NotAvailable => "Not Available",
            Self::Unknown => "Unknown",
        }
    }

    /// Short identifier used on the command line and in JSON output.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::AvailableNatively => "native",
            Self::AvailableViaEmulation => "emulation",
            Self::NotAvailable => "unavailable",
            Self::Unknown => "unknown",
        }
    }

    /// All accepted spellings for this status (compared case-insensitively).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::AvailableNatively => &[
                "native",
                "available natively",
                "availablenatively",
                "available_natively",
            ],
            Self::AvailableViaEmulation => &[
                "emulation",
                "available via emulation",
                "availableviaemulation",
                "available_via_emulation",
                "emulated",
            ],
            Self::NotAvailable => &[
                "unavailable",
                "not available",
                "notavailable",
                "not_available",
            ],
            Self::Unknown => &["unknown"],
        }
    }

    /// Map a raw external value onto the closed set.
    ///
    /// Total: anything unrecognized, including a missing value, becomes
    /// [`Status::Unknown`].
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or(Self::Unknown)
    }

    /// Whether the item can be run on ARM at all (natively or emulated).
    pub fn is_available(&self) -> bool {
        matches!(self, Self::AvailableNatively | Self::AvailableViaEmulation)
    }

    /// All four variants.
    pub fn all() -> &'static [Status] {
        ALL_STATUSES
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string is not a recognized status spelling.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown status: '{0}'")]
pub struct StatusParseError(pub String);

impl std::str::FromStr for Status {
    type Err = StatusParseError;

    /// Strict parse, used for user input. Catalog data goes through
    /// [`Status::normalize`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &status in ALL_STATUSES {
            if status.display_name().to_lowercase() == lower {
                return Ok(status);
            }
            if status.aliases().iter().any(|alias| *alias == lower) {
                return Ok(status);
            }
        }
        Err(StatusParseError(s.to_string()))
    }
}

impl serde::Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> serde::Deserialize<'de> for Status {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::normalize(raw.as_deref()))
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
