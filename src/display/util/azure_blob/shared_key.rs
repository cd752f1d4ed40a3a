//! Shared Key authorization for the Blob service.
//!
//! See "Authorize with Shared Key" in the Azure Storage REST reference. Only the
//! blob flavour (version 2009-09-19 and later) is implemented.

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use reqwest::{header::HeaderMap, Method, Url};
use sha2::Sha256;

use crate::display::errors::DisplayError;

const STANDARD_HEADERS: [&str; 11] = [
    "content-encoding",
    "content-language",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "if-modified-since",
    "if-match",
    "if-none-match",
    "if-unmodified-since",
    "range",
];

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn string_to_sign(method: &Method, account: &str, url: &Url, headers: &HeaderMap) -> String {
    let mut out = String::new();
    out.push_str(method.as_str());
    out.push('\n');

    for name in STANDARD_HEADERS {
        let value = match (name, header_value(headers, name)) {
            // zero length is sent as an empty line
            ("content-length", "0") => "",
            (_, value) => value,
        };
        out.push_str(value);
        out.push('\n');
    }

    out.push_str(&canonicalized_headers(headers));
    out.push_str(&canonicalized_resource(account, url));

    out
}

fn canonicalized_headers(headers: &HeaderMap) -> String {
    let mut ms_headers: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (name, value) in headers {
        if !name.as_str().starts_with("x-ms-") {
            continue;
        }
        if let Ok(value) = value.to_str() {
            ms_headers.entry(name.as_str()).or_default().push(value.trim());
        }
    }

    ms_headers
        .into_iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect()
}

fn canonicalized_resource(account: &str, url: &Url) -> String {
    let mut resource = format!("/{}{}", account, url.path());

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in url.query_pairs() {
        params
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into_owned());
    }

    for (name, mut values) in params {
        values.sort();
        resource.push_str(&format!("\n{}:{}", name, values.join(",")));
    }

    resource
}

/// Base64 HMAC-SHA256 of `string_to_sign` keyed by the decoded account key.
pub fn sign(key: &[u8], string_to_sign: &str) -> Result<String, DisplayError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| DisplayError::InvalidAccountKey(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());

    Ok(base64::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_string_to_sign_for_put_blob() {
        let url = Url::parse("https://receipts.blob.core.windows.net/display/current_form.html")
            .unwrap();
        let mut map = headers(&[
            ("x-ms-version", "2021-08-06"),
            ("x-ms-date", "Sat, 01 Jun 2024 12:00:00 GMT"),
            ("x-ms-blob-type", "BlockBlob"),
            ("content-encoding", "utf-8"),
        ]);
        map.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        map.insert(CONTENT_LENGTH, HeaderValue::from(42usize));

        let expected = [
            "PUT",
            "utf-8",
            "",
            "42",
            "",
            "text/html",
            "",
            "",
            "",
            "",
            "",
            "",
            "x-ms-blob-type:BlockBlob",
            "x-ms-date:Sat, 01 Jun 2024 12:00:00 GMT",
            "x-ms-version:2021-08-06",
            "/receipts/display/current_form.html",
        ]
        .join("\n");

        assert_eq!(string_to_sign(&Method::PUT, "receipts", &url, &map), expected);
    }

    #[test]
    fn test_zero_content_length_is_blank() {
        let url = Url::parse("https://receipts.blob.core.windows.net/display").unwrap();
        let mut map = HeaderMap::new();
        map.insert(CONTENT_LENGTH, HeaderValue::from(0usize));

        let signed = string_to_sign(&Method::GET, "receipts", &url, &map);

        assert_eq!(signed, format!("GET{}/receipts/display", "\n".repeat(12)));
    }

    #[test]
    fn test_query_parameters_are_sorted_and_lowercased() {
        let url = Url::parse(
            "http://127.0.0.1:10000/devstoreaccount1/display?restype=container&Comp=list&comp=meta",
        )
        .unwrap();

        assert_eq!(
            canonicalized_resource("devstoreaccount1", &url),
            "/devstoreaccount1/devstoreaccount1/display\ncomp:list,meta\nrestype:container"
        );
    }

    #[test]
    fn test_signature_is_hmac_of_string_to_sign() {
        let key = b"test-account-key";
        let signature = sign(key, "GET\n/receipts/display").unwrap();

        let mut mac = Hmac::<Sha256>::new_from_slice(key).unwrap();
        mac.update(b"GET\n/receipts/display");
        mac.verify_slice(&base64::decode(signature).unwrap()).unwrap();
    }
}
