//! Normalization of patient demographics query responses (RSP^K22)

use super::authority::system_for_code;
use super::document::Element;
use crate::domain::{
    Address, ContactPoint, ContactPointUse, EmpiError, Identifier, IdentifierUse, Patient, Period,
    Reference, Result,
};
use chrono::NaiveDate;
use roxmltree::Document;

const RESPONSE_SPINE: [&str; 3] = ["Body", "InvokePatientDemographicsQueryResponse", "RSP_K21"];

/// Parse a response body into a patient
///
/// Returns `Ok(None)` when the EMPI matched nobody, which it signals by an
/// empty name.
///
/// # Errors
///
/// Returns [`EmpiError::MalformedResponse`] if the body is not XML or lacks
/// the `Envelope/Body/InvokePatientDemographicsQueryResponse/RSP_K21` spine.
pub fn parse_patient(body: &str) -> Result<Option<Patient>> {
    let doc = Document::parse(body)
        .map_err(|e| EmpiError::MalformedResponse(format!("response is not XML: {e}")))?;

    let envelope = Element::new(doc.root_element());
    if envelope.name() != "Envelope" {
        return Err(EmpiError::MalformedResponse(format!(
            "expected a SOAP envelope, got <{}>",
            envelope.name()
        ))
        .into());
    }
    let response = envelope.at(&RESPONSE_SPINE).ok_or_else(|| {
        EmpiError::MalformedResponse("missing InvokePatientDemographicsQueryResponse/RSP_K21".into())
    })?;

    let Some(query) = response.child("RSP_K21.QUERY_RESPONSE") else {
        return Ok(None);
    };
    let Some(pid) = query.child("PID") else {
        return Ok(None);
    };

    let name = pid.child("PID.5");
    let last_name = name.map(|n| n.text(&["XPN.1", "FN.1"])).unwrap_or_default();
    let first_names = name
        .map(|n| collapse_whitespace(&format!("{} {}", n.text(&["XPN.2"]), n.text(&["XPN.3"]))))
        .unwrap_or_default();
    if last_name.is_empty() && first_names.is_empty() {
        return Ok(None);
    }

    let pd1 = query.child("PD1");
    Ok(Some(Patient {
        last_name,
        first_names,
        title: name.map(|n| n.text(&["XPN.5"])).unwrap_or_default(),
        gender: pid.text(&["PID.8"]),
        birth_date: parse_date(&pid.text(&["PID.7", "TS.1"])),
        death_date: parse_date(&pid.text(&["PID.29", "TS.1"])),
        surgery: pd1.map(|p| p.text(&["PD1.3", "XON.3"])).unwrap_or_default(),
        general_practitioner: pd1.map(|p| p.text(&["PD1.4", "XCN.1"])).unwrap_or_default(),
        identifiers: identifiers(&pid),
        addresses: addresses(&pid),
        telecom: telecom(&pid),
    }))
}

/// Parse an HL7 `TS` value by its leading `YYYYMMDD`
///
/// The prefix must be exactly eight ASCII digits. Anything that does not
/// yield a calendar date (blank, short, padded, all zeros) is unknown.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date = value.get(..8)?;
    if !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y%m%d").ok()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn identifiers(pid: &Element) -> Vec<Identifier> {
    pid.children("PID.3")
        .filter_map(|cx| {
            let authority = cx.text(&["CX.4", "HD.1"]);
            let value = cx.text(&["CX.1"]);
            if authority.is_empty() || value.is_empty() {
                return None;
            }
            Some(
                Identifier::new(system_for_code(&authority), value)
                    .with_use(IdentifierUse::Official)
                    .with_assigner(Reference::organization(authority)),
            )
        })
        .collect()
}

fn addresses(pid: &Element) -> Vec<Address> {
    pid.children("PID.11")
        .map(|xad| {
            let mut address = Address {
                line: xad.text(&["XAD.1", "SAD.1"]),
                city: xad.text(&["XAD.2"]),
                district: xad.text(&["XAD.3"]),
                country: xad.text(&["XAD.4"]),
                postal_code: xad.text(&["XAD.5"]),
                period: Period::from_bounds(
                    parse_date(&xad.text(&["XAD.13"])),
                    parse_date(&xad.text(&["XAD.14"])),
                ),
                ..Address::default()
            };
            address.text = [
                &address.line,
                &address.city,
                &address.district,
                &address.postal_code,
                &address.country,
            ]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join("\n");
            address
        })
        .collect()
}

fn telecom(pid: &Element) -> Vec<ContactPoint> {
    let home = pid.children("PID.13").map(|xtn| (xtn, ContactPointUse::Home));
    let work = pid.children("PID.14").map(|xtn| (xtn, ContactPointUse::Work));

    let mut result = Vec::new();
    for (xtn, use_) in home.chain(work) {
        let number = xtn.text(&["XTN.1"]);
        if !number.is_empty() {
            result.push(
                ContactPoint::phone(number)
                    .with_use(use_)
                    .with_description(xtn.attribute("LongName")),
            );
        }
        let email = xtn.text(&["XTN.4"]);
        if !email.is_empty() {
            result.push(ContactPoint::email(email).with_use(use_));
        }
    }
    result
}
