//! Identifier-issuing authorities known to the EMPI
//!
//! The set is closed: every code the EMPI accepts as `PID.3.4` is listed
//! here, together with its HL7 identifier type code and the identifier-system
//! URI the registry exposes it under.

use crate::domain::ids::{EMPI_NUMBER, NHS_NUMBER};
use crate::domain::{EmpiError, Result};
use std::fmt;
use std::str::FromStr;

/// An organization or code system that issues patient identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    /// NHS number
    Nhs,
    /// EMPI internal (ephemeral) number
    Empi,
    /// Aneurin Bevan
    Abuhb,
    /// Swansea Bay (formerly ABM)
    Sbuhb,
    /// Betsi Cadwaladr, central
    BcuCentral,
    /// Betsi Cadwaladr, Maelor
    BcuMaelor,
    /// Betsi Cadwaladr, west
    BcuWest,
    /// Cwm Taf Morgannwg
    Ctmuhb,
    /// Cardiff and Vale
    Cav,
    /// Hywel Dda
    Hduhb,
    /// Powys
    Powys,
}

const ALL: [Authority; 11] = [
    Authority::Nhs,
    Authority::Empi,
    Authority::Abuhb,
    Authority::Sbuhb,
    Authority::BcuCentral,
    Authority::BcuMaelor,
    Authority::BcuWest,
    Authority::Ctmuhb,
    Authority::Cav,
    Authority::Hduhb,
    Authority::Powys,
];

impl Authority {
    /// All known authorities
    pub fn all() -> &'static [Authority] {
        &ALL
    }

    /// Look up an authority by its exact code
    ///
    /// # Errors
    ///
    /// Returns [`EmpiError::InvalidAuthority`] for codes outside the closed set.
    pub fn from_code(code: &str) -> Result<Self> {
        ALL.iter()
            .copied()
            .find(|authority| authority.code() == code)
            .ok_or_else(|| EmpiError::InvalidAuthority(format!("unknown authority code '{code}'")).into())
    }

    /// Look up an authority by the identifier-system URI it is exposed under
    pub fn from_system(uri: &str) -> Option<Self> {
        ALL.iter().copied().find(|authority| authority.system_uri() == uri)
    }

    /// Code sent as the assigning authority (`PID.3.4`)
    pub fn code(&self) -> &'static str {
        match self {
            Authority::Nhs => "NHS",
            Authority::Empi => "100",
            Authority::Abuhb => "139",
            Authority::Sbuhb => "108",
            Authority::BcuCentral => "109",
            Authority::BcuMaelor => "110",
            Authority::BcuWest => "111",
            Authority::Ctmuhb => "126",
            Authority::Cav => "140",
            Authority::Hduhb => "149",
            Authority::Powys => "170",
        }
    }

    /// HL7 identifier type code (`PID.3.5`)
    pub fn type_code(&self) -> &'static str {
        match self {
            Authority::Nhs => "NH",
            Authority::Empi => "PE",
            _ => "PI",
        }
    }

    pub fn system_uri(&self) -> &'static str {
        match self {
            Authority::Nhs => NHS_NUMBER,
            Authority::Empi => EMPI_NUMBER,
            Authority::Abuhb => "https://fhir.abuhb.wales.nhs.uk/Id/pas-identifier",
            Authority::Sbuhb => "https://fhir.sbuhb.wales.nhs.uk/Id/pas-identifier",
            Authority::BcuCentral => "https://fhir.bcuhb.wales.nhs.uk/Id/central-pas-identifier",
            Authority::BcuMaelor => "https://fhir.bcuhb.wales.nhs.uk/Id/maelor-pas-identifier",
            Authority::BcuWest => "https://fhir.bcuhb.wales.nhs.uk/Id/west-pas-identifier",
            Authority::Ctmuhb => "https://fhir.ctmuhb.wales.nhs.uk/Id/pas-identifier",
            Authority::Cav => "https://fhir.cav.wales.nhs.uk/Id/pas-identifier",
            Authority::Hduhb => "https://fhir.hduhb.wales.nhs.uk/Id/pas-identifier",
            Authority::Powys => "https://fhir.powys.wales.nhs.uk/Id/pas-identifier",
        }
    }

    /// Human readable name, used when registering the identifier system
    pub fn display_name(&self) -> &'static str {
        match self {
            Authority::Nhs => "NHS number",
            Authority::Empi => "EMPI number",
            Authority::Abuhb => "Aneurin Bevan PAS identifier",
            Authority::Sbuhb => "Swansea Bay PAS identifier",
            Authority::BcuCentral => "BCU Central PAS identifier",
            Authority::BcuMaelor => "BCU Maelor PAS identifier",
            Authority::BcuWest => "BCU West PAS identifier",
            Authority::Ctmuhb => "Cwm Taf Morgannwg PAS identifier",
            Authority::Cav => "Cardiff and Vale PAS identifier",
            Authority::Hduhb => "Hywel Dda PAS identifier",
            Authority::Powys => "Powys PAS identifier",
        }
    }

    /// Check a value is plausible for this authority before asking the EMPI
    ///
    /// # Errors
    ///
    /// Blank values, and NHS numbers that are not exactly ten ASCII digits,
    /// are rejected with `InvalidIdentifier`.
    pub fn validate_value(&self, value: &str) -> Result<()> {
        use crate::domain::IdentifierError;

        if value.trim().is_empty() {
            return Err(IdentifierError::InvalidIdentifier(format!(
                "empty identifier for authority {}",
                self.code()
            ))
            .into());
        }
        if *self == Authority::Nhs && !(value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())) {
            return Err(IdentifierError::InvalidIdentifier(format!(
                "'{value}' is not an NHS number: must be 10 digits"
            ))
            .into());
        }
        Ok(())
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Authority {
    type Err = crate::domain::ConciergeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// Identifier-system URI for an authority code found in a response
///
/// Codes outside the closed set are passed through unchanged.
pub fn system_for_code(code: &str) -> String {
    Authority::from_code(code)
        .map(|authority| authority.system_uri().to_string())
        .unwrap_or_else(|_| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConciergeError, IdentifierError};
    use test_case::test_case;

    #[test_case("NHS", "NH" ; "national")]
    #[test_case("100", "PE" ; "empi")]
    #[test_case("140", "PI" ; "cardiff")]
    #[test_case("170", "PI" ; "powys")]
    fn test_type_codes(code: &str, type_code: &str) {
        let authority = Authority::from_code(code).unwrap();
        assert_eq!(authority.type_code(), type_code);
        assert_eq!(authority.code(), code);
    }

    #[test_case("ZZZ" ; "unknown")]
    #[test_case("nhs" ; "lowercase")]
    #[test_case(" 140" ; "padded")]
    #[test_case("" ; "empty")]
    fn test_unknown_codes_rejected(code: &str) {
        let err = Authority::from_code(code).unwrap_err();
        assert!(matches!(err, ConciergeError::Empi(EmpiError::InvalidAuthority(_))));
    }

    #[test]
    fn test_system_uris_are_unique_and_round_trip() {
        let mut uris: Vec<_> = Authority::all().iter().map(|a| a.system_uri()).collect();
        uris.sort_unstable();
        uris.dedup();
        assert_eq!(uris.len(), Authority::all().len());

        for authority in Authority::all() {
            assert_eq!(Authority::from_system(authority.system_uri()), Some(*authority));
        }
    }

    #[test]
    fn test_system_for_code() {
        assert_eq!(system_for_code("NHS"), NHS_NUMBER);
        assert_eq!(system_for_code("103"), "103");
    }

    #[test]
    fn test_validate_value() {
        assert!(Authority::Nhs.validate_value("1234567890").is_ok());
        assert!(Authority::Cav.validate_value("X123456").is_ok());

        for (authority, value) in [
            (Authority::Nhs, "123456789"),
            (Authority::Nhs, "123456789X"),
            (Authority::Nhs, "12345678901"),
            (Authority::Cav, "   "),
        ] {
            let err = authority.validate_value(value).unwrap_err();
            assert!(
                matches!(err, ConciergeError::Identifier(IdentifierError::InvalidIdentifier(_))),
                "{authority}/{value}"
            );
        }
    }
}
