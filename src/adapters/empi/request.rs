//! Patient demographics query (QBP^Q22) request documents

use super::authority::Authority;
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use uuid::Uuid;

/// Sending application and facility: PatientCare
pub const SENDER: &str = "221";

/// Receiving application and facility: the NHS Wales EMPI
pub const RECEIVER: &str = "100";

/// Values interpolated into a demographics query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRequest {
    pub identifier: String,
    pub authority: String,
    pub authority_type: String,
    pub sending_application: String,
    pub sending_facility: String,
    pub receiving_application: String,
    pub receiving_facility: String,
    /// `YYYYMMDDHHMMSS`, UTC
    pub date_time: String,
    /// `MSH.10`, a fresh UUID per message
    pub message_control_id: String,
    /// `MSH.11`, one of `P`, `U` or `T`
    pub processing_id: String,
}

impl IdentifierRequest {
    /// Build a query for `identifier` issued by `authority`, stamped now
    pub fn new(identifier: &str, authority: Authority, processing_id: &str) -> Self {
        Self::at(identifier, authority, processing_id, Utc::now())
    }

    /// Build a query stamped with the given time
    pub fn at(
        identifier: &str,
        authority: Authority,
        processing_id: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier: identifier.to_string(),
            authority: authority.code().to_string(),
            authority_type: authority.type_code().to_string(),
            sending_application: SENDER.to_string(),
            sending_facility: SENDER.to_string(),
            receiving_application: RECEIVER.to_string(),
            receiving_facility: RECEIVER.to_string(),
            date_time: now.format("%Y%m%d%H%M%S").to_string(),
            message_control_id: Uuid::new_v4().to_string(),
            processing_id: processing_id.to_string(),
        }
    }

    /// Render the SOAP envelope
    pub fn to_xml(&self) -> String {
        format!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:mpi="http://apps.wales.nhs.uk/mpi/" xmlns="urn:hl7-org:v2xml">
<soapenv:Header/>
<soapenv:Body>
  <mpi:InvokePatientDemographicsQuery>
    <QBP_Q21>
      <MSH>
        <MSH.1>|</MSH.1>
        <MSH.2>^~\&amp;</MSH.2>
        <MSH.3><HD.1>{sending_application}</HD.1></MSH.3>
        <MSH.4><HD.1>{sending_facility}</HD.1></MSH.4>
        <MSH.5><HD.1>{receiving_application}</HD.1></MSH.5>
        <MSH.6><HD.1>{receiving_facility}</HD.1></MSH.6>
        <MSH.7><TS.1>{date_time}</TS.1></MSH.7>
        <MSH.9>
          <MSG.1>QBP</MSG.1>
          <MSG.2>Q22</MSG.2>
          <MSG.3>QBP_Q21</MSG.3>
        </MSH.9>
        <MSH.10>{message_control_id}</MSH.10>
        <MSH.11><PT.1>{processing_id}</PT.1></MSH.11>
        <MSH.12><VID.1>2.5</VID.1></MSH.12>
        <MSH.17>GBR</MSH.17>
      </MSH>
      <QPD>
        <QPD.1><CE.1>IHE PDQ Query</CE.1></QPD.1>
        <QPD.2>PatientQuery</QPD.2>
        <QPD.3><QIP.1>@PID.3.1</QIP.1><QIP.2>{identifier}</QIP.2></QPD.3>
        <QPD.3><QIP.1>@PID.3.4</QIP.1><QIP.2>{authority}</QIP.2></QPD.3>
        <QPD.3><QIP.1>@PID.3.5</QIP.1><QIP.2>{authority_type}</QIP.2></QPD.3>
      </QPD>
      <RCP>
        <RCP.1>I</RCP.1>
        <RCP.2><CQ.1>50</CQ.1></RCP.2>
      </RCP>
    </QBP_Q21>
  </mpi:InvokePatientDemographicsQuery>
</soapenv:Body>
</soapenv:Envelope>
"#,
            sending_application = escape(&self.sending_application),
            sending_facility = escape(&self.sending_facility),
            receiving_application = escape(&self.receiving_application),
            receiving_facility = escape(&self.receiving_facility),
            date_time = escape(&self.date_time),
            message_control_id = escape(&self.message_control_id),
            processing_id = escape(&self.processing_id),
            identifier = escape(&self.identifier),
            authority = escape(&self.authority),
            authority_type = escape(&self.authority_type),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn field<'a>(doc: &'a roxmltree::Document, path: &[&str]) -> Vec<&'a str> {
        doc.descendants()
            .filter(|n| n.tag_name().name() == path[0])
            .filter_map(|n| {
                path[1..]
                    .iter()
                    .try_fold(n, |node, name| {
                        node.children().find(|c| c.tag_name().name() == *name)
                    })
                    .and_then(|node| node.text())
            })
            .collect()
    }

    #[test]
    fn test_request_fields() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let request = IdentifierRequest::at("1234567890", Authority::Nhs, "T", now);
        let xml = request.to_xml();
        let doc = roxmltree::Document::parse(&xml).unwrap();

        assert_eq!(field(&doc, &["MSH.7", "TS.1"]), vec!["20240309140507"]);
        assert_eq!(field(&doc, &["MSH.11", "PT.1"]), vec!["T"]);
        assert_eq!(field(&doc, &["MSH.3", "HD.1"]), vec!["221"]);
        assert_eq!(field(&doc, &["MSH.6", "HD.1"]), vec!["100"]);
        assert_eq!(field(&doc, &["MSH.2"]), vec!["^~\\&"]);
        assert_eq!(
            field(&doc, &["QPD.3", "QIP.2"]),
            vec!["1234567890", "NHS", "NH"]
        );
        assert!(Uuid::parse_str(&request.message_control_id).is_ok());
    }

    #[test]
    fn test_authority_type_follows_authority() {
        let request = IdentifierRequest::new("X1", Authority::Cav, "P");
        assert_eq!(request.authority, "140");
        assert_eq!(request.authority_type, "PI");

        let request = IdentifierRequest::new("X1", Authority::Empi, "P");
        assert_eq!(request.authority_type, "PE");
    }

    #[test]
    fn test_message_control_ids_differ() {
        let a = IdentifierRequest::new("X1", Authority::Cav, "P");
        let b = IdentifierRequest::new("X1", Authority::Cav, "P");
        assert_ne!(a.message_control_id, b.message_control_id);
    }

    #[test]
    fn test_values_are_escaped() {
        let request = IdentifierRequest::new("A<B>&\"C'", Authority::Cav, "P");
        let xml = request.to_xml();
        assert!(xml.contains("A&lt;B&gt;&amp;&quot;C&apos;"));

        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(field(&doc, &["QPD.3", "QIP.2"])[0], "A<B>&\"C'");
    }
}
