use std::borrow::Cow;
use std::io::Cursor;
use std::time::Duration;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use reqwest::Client;

use crate::domain::models::{GatewayAccount, LabelPaths, LabelRequest, ShipmentRequest};
use crate::domain::value_objects::TrackingNumber;
use crate::ports::gateway::{CarrierGateway, GatewayError, GatewayResult};

const SOAP_NAMESPACE: &str = "http://www.mondialrelay.fr/webservice/";
const ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

const SUBMIT_ACTION: &str = "WSI2_CreationExpedition";
const LABEL_ACTION: &str = "WSI2_GetEtiquettes";

/// Carrier status code meaning "accepted"
const STAT_OK: &str = "0";

/// Client for the carrier's legacy SOAP web service
///
/// Both operations follow the same shape: a flat parameter list signed with
/// an MD5 hash of the concatenated values plus the account private key,
/// wrapped in a SOAP 1.1 envelope, answered with a `STAT` code and a few
/// result elements.
pub struct SoapCarrierGateway {
    client: Client,
}

impl SoapCarrierGateway {
    pub fn new() -> Self {
        // reqwest client with a bounded timeout so a stalled carrier call
        // surfaces as a transport error instead of blocking the export
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    async fn call(
        &self,
        endpoint: &str,
        action: &str,
        params: &[(&str, String)],
    ) -> GatewayResult<String> {
        let body = build_envelope(action, params)?;

        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("{}{}", SOAP_NAMESPACE, action))
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "carrier answered HTTP {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

impl Default for SoapCarrierGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CarrierGateway for SoapCarrierGateway {
    async fn submit_shipment(
        &self,
        request: &ShipmentRequest,
        account: &GatewayAccount,
    ) -> GatewayResult<TrackingNumber> {
        let params = submission_params(request, account);
        let xml = self.call(&account.endpoint, SUBMIT_ACTION, &params).await?;

        parse_submission_response(&xml)
    }

    async fn get_label(
        &self,
        request: &LabelRequest,
        account: &GatewayAccount,
    ) -> GatewayResult<LabelPaths> {
        let mut params = vec![
            ("Enseigne", account.merchant_id.clone()),
            ("Expeditions", request.tracking.as_str().to_string()),
            ("Langue", request.country_code.clone()),
        ];
        sign(&mut params, &account.private_key);

        let xml = self.call(&account.endpoint, LABEL_ACTION, &params).await?;

        parse_label_response(&xml)
    }
}

/// Flat parameter list for a shipment submission, in the order the carrier
/// hashes them
fn submission_params(request: &ShipmentRequest, account: &GatewayAccount) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("Enseigne", account.merchant_id.clone()),
        ("ModeCol", request.collection_mode.clone()),
        ("ModeLiv", request.delivery_mode.clone()),
        ("NDossier", request.order_number.clone()),
        ("NClient", request.customer_id.to_string()),
        ("Expe_Langage", request.shipper.language.clone()),
        ("Expe_Ad1", request.shipper.line1.clone()),
        ("Expe_Ad2", request.shipper.line2.clone()),
        ("Expe_Ad3", request.shipper.street.clone()),
        ("Expe_Ad4", String::new()),
        ("Expe_Ville", request.shipper.city.clone()),
        ("Expe_CP", request.shipper.postcode.clone()),
        ("Expe_Pays", request.shipper.country_code.clone()),
        ("Expe_Tel1", request.shipper.phone.clone()),
        ("Expe_Tel2", String::new()),
        ("Expe_Mail", request.shipper.email.clone()),
        ("Dest_Langage", request.recipient.language.clone()),
        ("Dest_Ad1", request.recipient.line1.clone()),
        ("Dest_Ad2", request.recipient.line2.clone()),
        ("Dest_Ad3", request.recipient.street.clone()),
        ("Dest_Ad4", String::new()),
        ("Dest_Ville", request.recipient.city.clone()),
        ("Dest_CP", request.recipient.postcode.clone()),
        ("Dest_Pays", request.recipient.country_code.clone()),
        ("Dest_Tel1", request.recipient.phone.clone()),
        ("Dest_Tel2", String::new()),
        ("Dest_Mail", request.recipient.email.clone()),
        ("Poids", request.weight_grams.to_string()),
        ("NbColis", request.parcel_count.to_string()),
        ("CRT_Valeur", request.insured_value.to_string()),
        ("CRT_Devise", String::new()),
        ("Exp_Valeur", String::new()),
        ("Exp_Devise", String::new()),
        ("COL_Rel_Pays", request.shipper.country_code.clone()),
        ("COL_Rel", "0".to_string()),
        ("LIV_Rel_Pays", request.pickup.country_code().to_string()),
        ("LIV_Rel", request.pickup.point_id().to_string()),
        ("TAvisage", String::new()),
        ("TReprise", String::new()),
        ("Montage", String::new()),
        ("TRDV", String::new()),
        ("Assurance", "0".to_string()),
        ("Instructions", request.instructions.clone()),
    ];
    sign(&mut params, &account.private_key);

    params
}

/// Append the MD5 security hash the web service checks on every call:
/// uppercase hex of all parameter values concatenated with the private key
fn sign(params: &mut Vec<(&'static str, String)>, private_key: &str) {
    let mut concatenated: String = params.iter().map(|(_, value)| value.as_str()).collect();
    concatenated.push_str(private_key);

    let digest = format!("{:x}", md5::compute(concatenated.as_bytes())).to_uppercase();
    params.push(("Security", digest));
}

/// Wrap a parameter list in a SOAP 1.1 envelope
fn build_envelope(action: &str, params: &[(&str, String)]) -> GatewayResult<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let encode = |e: quick_xml::Error| GatewayError::MalformedResponse(format!("envelope encoding failed: {}", e));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(encode)?;

    let mut envelope = BytesStart::new("soap:Envelope");
    envelope.push_attribute(("xmlns:soap", ENVELOPE_NAMESPACE));
    writer.write_event(Event::Start(envelope)).map_err(encode)?;

    writer
        .write_event(Event::Start(BytesStart::new("soap:Body")))
        .map_err(encode)?;

    let mut operation = BytesStart::new(action);
    operation.push_attribute(("xmlns", SOAP_NAMESPACE));
    writer.write_event(Event::Start(operation)).map_err(encode)?;

    for (name, value) in params {
        writer
            .write_event(Event::Start(BytesStart::new(*name)))
            .map_err(encode)?;
        writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(encode)?;
        writer
            .write_event(Event::End(BytesEnd::new(*name)))
            .map_err(encode)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(action)))
        .map_err(encode)?;
    writer
        .write_event(Event::End(BytesEnd::new("soap:Body")))
        .map_err(encode)?;
    writer
        .write_event(Event::End(BytesEnd::new("soap:Envelope")))
        .map_err(encode)?;

    Ok(writer.into_inner().into_inner())
}

// Helper to read the text content of the element just opened
fn element_text<'a>(
    reader: &mut Reader<&[u8]>,
    buf: &'a mut Vec<u8>,
) -> GatewayResult<Cow<'a, str>> {
    match reader.read_event_into(buf) {
        Ok(Event::Text(e)) => e
            .unescape()
            .map_err(|e| GatewayError::MalformedResponse(format!("bad XML text: {}", e))),
        _ => Ok(Cow::Borrowed("")),
    }
}

/// Collect the response elements this client cares about into (tag, text)
/// pairs
fn collect_elements(xml: &str, tags: &[&str]) -> GatewayResult<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut found = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if tags.contains(&name.as_str()) {
                    buf.clear();
                    let mut text_buf = Vec::new();
                    let text = element_text(&mut reader, &mut text_buf)?.to_string();
                    found.push((name, text));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(GatewayError::MalformedResponse(format!(
                    "XML parse error: {}",
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(found)
}

fn element<'a>(elements: &'a [(String, String)], tag: &str) -> Option<&'a str> {
    elements
        .iter()
        .find(|(name, _)| name == tag)
        .map(|(_, text)| text.as_str())
}

fn check_stat(elements: &[(String, String)]) -> GatewayResult<()> {
    match element(elements, "STAT") {
        Some(STAT_OK) => Ok(()),
        Some(code) => Err(GatewayError::Rejected {
            code: code.to_string(),
        }),
        None => Err(GatewayError::MalformedResponse(
            "response carries no STAT element".to_string(),
        )),
    }
}

fn parse_submission_response(xml: &str) -> GatewayResult<TrackingNumber> {
    let elements = collect_elements(xml, &["STAT", "ExpeditionNum"])?;
    check_stat(&elements)?;

    let expedition = element(&elements, "ExpeditionNum").ok_or_else(|| {
        GatewayError::MalformedResponse("response carries no ExpeditionNum".to_string())
    })?;

    TrackingNumber::new(expedition.to_string())
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

fn parse_label_response(xml: &str) -> GatewayResult<LabelPaths> {
    let elements = collect_elements(xml, &["STAT", "URL_PDF_A4", "URL_PDF_A5", "URL_PDF_10x15"])?;
    check_stat(&elements)?;

    let non_empty = |tag: &str| {
        element(&elements, tag)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    Ok(LabelPaths {
        a4: non_empty("URL_PDF_A4"),
        a5: non_empty("URL_PDF_A5"),
        wallet: non_empty("URL_PDF_10x15"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_with_uppercase_md5_of_values_and_key() {
        let mut params = vec![("Enseigne", "BDTEST13".to_string()), ("Langue", "FR".to_string())];
        sign(&mut params, "PrivateK");

        let (name, digest) = params.last().unwrap();
        assert_eq!(*name, "Security");
        let expected = format!("{:x}", md5::compute("BDTEST13FRPrivateK".as_bytes())).to_uppercase();
        assert_eq!(*digest, expected);
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn envelope_wraps_parameters_in_operation() {
        let params = vec![("Enseigne", "BDTEST13".to_string())];
        let body = build_envelope("WSI2_GetEtiquettes", &params).unwrap();
        let xml = String::from_utf8(body).unwrap();

        assert!(xml.contains("<soap:Envelope"));
        assert!(xml.contains("<WSI2_GetEtiquettes xmlns=\"http://www.mondialrelay.fr/webservice/\">"));
        assert!(xml.contains("<Enseigne>BDTEST13</Enseigne>"));
    }

    #[test]
    fn parses_accepted_submission() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
              <soap:Body>
                <WSI2_CreationExpeditionResponse>
                  <WSI2_CreationExpeditionResult>
                    <STAT>0</STAT>
                    <ExpeditionNum>31000001</ExpeditionNum>
                  </WSI2_CreationExpeditionResult>
                </WSI2_CreationExpeditionResponse>
              </soap:Body>
            </soap:Envelope>"#;

        let tracking = parse_submission_response(xml).unwrap();
        assert_eq!(tracking.as_str(), "31000001");
    }

    #[test]
    fn surfaces_rejection_code() {
        let xml = "<r><STAT>24</STAT></r>";

        match parse_submission_response(xml) {
            Err(GatewayError::Rejected { code }) => assert_eq!(code, "24"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn parses_label_paths_by_size() {
        let xml = r#"<r>
            <STAT>0</STAT>
            <URL_PDF_A4>/ww2/PDF/a4.pdf</URL_PDF_A4>
            <URL_PDF_A5>/ww2/PDF/a5.pdf</URL_PDF_A5>
            <URL_PDF_10x15></URL_PDF_10x15>
        </r>"#;

        let paths = parse_label_response(xml).unwrap();
        assert_eq!(paths.a4.as_deref(), Some("/ww2/PDF/a4.pdf"));
        assert_eq!(paths.a5.as_deref(), Some("/ww2/PDF/a5.pdf"));
        assert_eq!(paths.wallet, None);
    }

    #[test]
    fn missing_stat_is_malformed() {
        assert!(matches!(
            parse_submission_response("<r><ExpeditionNum>1</ExpeditionNum></r>"),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
