//! EMPI deployment environments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A deployed EMPI query service
///
/// Parsing is case-insensitive and only looks at the leading letter, so
/// `P`, `prod` and `Production` all select [`Endpoint::Production`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Endpoint {
    Production,
    Testing,
    #[default]
    Development,
}

impl Endpoint {
    /// Default service URL for this environment
    pub fn url(&self) -> &'static str {
        match self {
            Endpoint::Production => {
                "https://mpilivequeries.cymru.nhs.uk/PatientDemographicsQueryWS.asmx"
            }
            Endpoint::Testing => "https://mpitest.cymru.nhs.uk/PatientDemographicsQueryWS.asmx",
            Endpoint::Development => {
                "http://ndc06srvmpidev2.cymru.nhs.uk:23000/PatientDemographicsQueryWS.asmx"
            }
        }
    }

    /// HL7 processing id (`MSH.11`) for this environment
    pub fn processing_id(&self) -> &'static str {
        match self {
            Endpoint::Production => "P",
            Endpoint::Testing => "U",
            Endpoint::Development => "T",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Production => "production",
            Endpoint::Testing => "testing",
            Endpoint::Development => "development",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('P') => Ok(Endpoint::Production),
            Some('T') => Ok(Endpoint::Testing),
            Some('D') => Ok(Endpoint::Development),
            _ => Err(format!(
                "unknown EMPI environment '{s}': expected production, testing or development"
            )),
        }
    }
}

impl TryFrom<String> for Endpoint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("P", Endpoint::Production ; "letter")]
    #[test_case("production", Endpoint::Production ; "full name")]
    #[test_case("testing", Endpoint::Testing ; "testing")]
    #[test_case("t", Endpoint::Testing ; "lowercase letter")]
    #[test_case("Dev", Endpoint::Development ; "abbreviation")]
    fn test_parse(input: &str, expected: Endpoint) {
        assert_eq!(input.parse::<Endpoint>().unwrap(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("uat" ; "unknown")]
    fn test_parse_rejects(input: &str) {
        assert!(input.parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_testing_uses_uat_processing_id() {
        assert_eq!(Endpoint::Testing.processing_id(), "U");
        assert_eq!(Endpoint::Development.processing_id(), "T");
        assert!(Endpoint::Production.url().starts_with("https://mpilivequeries"));
    }

    #[test]
    fn test_serde_uses_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            environment: Endpoint,
        }

        let parsed: Wrapper = toml::from_str("environment = \"Prod\"").unwrap();
        assert_eq!(parsed.environment, Endpoint::Production);
        let rendered = toml::to_string(&parsed).unwrap();
        assert_eq!(rendered.trim(), "environment = \"production\"");
    }
}
