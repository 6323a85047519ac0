//! SNOMED CT identifier (SCTID) grammar
//!
//! An SCTID is a 6 to 18 digit integer without leading zeros whose last digit
//! is a Verhoeff check digit and whose two preceding digits are the partition
//! identifier (`00`/`10` concept, `01`/`11` description, `02`/`12` relationship).

use std::fmt;
use std::str::FromStr;

const VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const VERHOEFF_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Kind of component an SCTID denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Concept,
    Description,
    Relationship,
}

/// A syntactically valid SNOMED CT identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SctId(u64);

impl SctId {
    /// Parse and validate an SCTID
    ///
    /// # Errors
    ///
    /// Returns a description of the first rule the input breaks.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.len() < 6 || s.len() > 18 {
            return Err(format!("'{s}' is not a SNOMED CT identifier: must be 6-18 digits"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("'{s}' is not a SNOMED CT identifier: must be numeric"));
        }
        if s.starts_with('0') {
            return Err(format!("'{s}' is not a SNOMED CT identifier: leading zero"));
        }
        if !verhoeff_valid(s) {
            return Err(format!("'{s}' is not a SNOMED CT identifier: invalid check digit"));
        }
        let value = s
            .parse::<u64>()
            .map_err(|e| format!("'{s}' is not a SNOMED CT identifier: {e}"))?;
        let id = Self(value);
        if id.partition().is_none() {
            return Err(format!(
                "'{s}' is not a SNOMED CT identifier: unknown partition"
            ));
        }
        Ok(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Partition identifier, from the two digits before the check digit
    pub fn partition(&self) -> Option<Partition> {
        match (self.0 / 10) % 100 {
            0 | 10 => Some(Partition::Concept),
            1 | 11 => Some(Partition::Description),
            2 | 12 => Some(Partition::Relationship),
            _ => None,
        }
    }

    pub fn is_concept(&self) -> bool {
        self.partition() == Some(Partition::Concept)
    }
}

impl fmt::Display for SctId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SctId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn verhoeff_valid(digits: &str) -> bool {
    let mut check = 0u8;
    for (i, b) in digits.bytes().rev().enumerate() {
        let digit = (b - b'0') as usize;
        check = VERHOEFF_D[check as usize][VERHOEFF_P[i % 8][digit] as usize];
    }
    check == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("768839008" ; "consultant")]
    #[test_case("62247001" ; "general practitioner")]
    #[test_case("100005" ; "shortest")]
    fn test_valid_concepts(s: &str) {
        let id = SctId::parse(s).unwrap();
        assert!(id.is_concept());
        assert_eq!(id.to_string(), s);
    }

    #[test]
    fn test_description_partition() {
        let id = SctId::parse("41398015").unwrap();
        assert_eq!(id.partition(), Some(Partition::Description));
        assert!(!id.is_concept());
    }

    #[test_case("768839009" ; "bad check digit")]
    #[test_case("12345" ; "too short")]
    #[test_case("0768839008" ; "leading zero")]
    #[test_case("76883900A" ; "not numeric")]
    #[test_case("" ; "empty")]
    fn test_invalid(s: &str) {
        assert!(SctId::parse(s).is_err());
    }
}
