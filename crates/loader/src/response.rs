use serde::Deserialize;

use formflow_core::SelectOption;

/// Server verdict on a zones request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Wire format of the zones endpoint. Anything that does not parse into
/// exactly this shape is a malformed response.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZonesResponse {
    pub status: ResponseStatus,
    pub data: Vec<SelectOption>,
}

impl ZonesResponse {
    /// Whether this response carries options to display. An error status
    /// and an empty option list lead to the same empty outcome.
    pub fn has_options(&self) -> bool {
        self.status == ResponseStatus::Ok && !self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_successful_response() {
        let response: ZonesResponse = serde_json::from_str(
            r#"{"status":"ok","data":[{"label":"Berlin","value":"BE"},{"label":"Bavaria","value":"BY"}]}"#,
        )
        .unwrap();

        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].label, "Berlin");
        assert!(response.has_options());
    }

    #[test]
    fn test_error_status_has_no_options() {
        let response: ZonesResponse =
            serde_json::from_str(r#"{"status":"error","data":[]}"#).unwrap();

        assert_eq!(response.status, ResponseStatus::Error);
        assert!(!response.has_options());
    }

    #[test]
    fn test_ok_status_with_empty_data_has_no_options() {
        let response: ZonesResponse = serde_json::from_str(r#"{"status":"ok","data":[]}"#).unwrap();

        assert!(!response.has_options());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<ZonesResponse>(r#"{"status":"maybe","data":[]}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result =
            serde_json::from_str::<ZonesResponse>(r#"{"status":"ok","data":[],"extra":1}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_data_is_rejected() {
        let result = serde_json::from_str::<ZonesResponse>(r#"{"status":"ok"}"#);

        assert!(result.is_err());
    }
}
