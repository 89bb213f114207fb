use crate::config::constants::domains;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain/mode selector sent with each request to the domain-aware backend.
///
/// The backend treats it as a routing hint; `Auto` lets it pick from the
/// conversation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Auto,
    Hr,
    Legal,
    L1,
    L2,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Auto,
        Domain::Hr,
        Domain::Legal,
        Domain::L1,
        Domain::L2,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => domains::AUTO,
            Self::Hr => domains::HR,
            Self::Legal => domains::LEGAL,
            Self::L1 => domains::L1,
            Self::L2 => domains::L2,
        }
    }

    /// Human label used in headers and menus
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Hr => "HR",
            Self::Legal => "Legal",
            Self::L1 => "L1 Support",
            Self::L2 => "L2 Support",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain '{0}' (expected one of: auto, hr, legal, l1, l2)")]
pub struct ParseDomainError(String);

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Domain::ALL
            .into_iter()
            .find(|domain| domain.as_str() == normalized)
            .ok_or_else(|| ParseDomainError(s.to_string()))
    }
}

/// Wire encoding spoken by a chat backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full `{role, content}` log, domain tag and session id
    #[default]
    Domain,
    /// Newest message plus paired `{user, assistant}` history
    Persona,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Persona => "persona",
        }
    }

    /// Whether requests carry a domain tag and session id
    pub fn is_domain_aware(&self) -> bool {
        matches!(self, Self::Domain)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "domain" => Ok(Self::Domain),
            "persona" => Ok(Self::Persona),
            other => Err(format!(
                "unknown backend variant '{other}' (expected domain or persona)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("HR".parse::<Domain>().unwrap(), Domain::Hr);
        assert_eq!(" legal ".parse::<Domain>().unwrap(), Domain::Legal);
        assert_eq!("l2".parse::<Domain>().unwrap(), Domain::L2);
        assert!("finance".parse::<Domain>().is_err());
    }

    #[test]
    fn tags_match_the_fixed_set() {
        let tags: Vec<&str> = Domain::ALL.iter().map(Domain::as_str).collect();
        assert_eq!(tags, domains::ALL);
    }

    #[test]
    fn labels() {
        assert_eq!(Domain::Auto.label(), "Auto");
        assert_eq!(Domain::L1.label(), "L1 Support");
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        assert_eq!(serde_json::to_string(&Domain::Hr).unwrap(), "\"hr\"");
        assert_eq!(serde_json::to_string(&Variant::Persona).unwrap(), "\"persona\"");
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("Persona".parse::<Variant>().unwrap(), Variant::Persona);
        assert!(Variant::Domain.is_domain_aware());
        assert!(!Variant::Persona.is_domain_aware());
        assert!("grpc".parse::<Variant>().is_err());
    }
}
