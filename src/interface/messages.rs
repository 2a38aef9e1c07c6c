use std::fmt;

use crate::rpc::health::{HealthCheckRequest, HealthCheckResponse, ServingStatus};

impl HealthCheckRequest {
    /// query the health of a named service.
    pub fn for_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// query the health of the whole process (empty service name).
    pub fn whole_process() -> Self {
        Self::default()
    }

    pub fn is_whole_process(&self) -> bool {
        self.service.is_empty()
    }
}

impl HealthCheckResponse {
    pub fn with_status(status: ServingStatus) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl ServingStatus {
    /// Decode a raw wire value, mapping values outside the enum to `Unknown`.
    pub fn from_wire(value: i32) -> Self {
        Self::from_i32(value).unwrap_or(Self::Unknown)
    }

    pub fn is_serving(&self) -> bool {
        *self == Self::Serving
    }

    /// `SERVICE_UNKNOWN` is conventionally only sent on `Watch` streams.
    pub fn is_watch_only(&self) -> bool {
        *self == Self::ServiceUnknown
    }
}

impl fmt::Display for ServingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

/// Status a `Watch` client should report.
///
/// A closed stream means the status is unknown, never `NOT_SERVING`. While the
/// stream is open the last received update stands, or `UNKNOWN` before the
/// first one arrives.
pub fn status_after_close(last: Option<&HealthCheckResponse>, closed: bool) -> ServingStatus {
    match last {
        Some(response) if !closed => response.status(),
        _ => ServingStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_constructors() {
        let named = HealthCheckRequest::for_service("website.Crawler");
        assert_eq!(named.service, "website.Crawler");
        assert!(!named.is_whole_process());

        let process = HealthCheckRequest::whole_process();
        assert_eq!(process.service, "");
        assert!(process.is_whole_process());
    }

    #[test]
    fn lenient_status_decode() {
        assert_eq!(ServingStatus::from_wire(1), ServingStatus::Serving);
        assert_eq!(ServingStatus::from_wire(3), ServingStatus::ServiceUnknown);
        assert_eq!(ServingStatus::from_wire(42), ServingStatus::Unknown);
        assert_eq!(ServingStatus::from_wire(-1), ServingStatus::Unknown);
    }

    #[test]
    fn response_accessor_for_unrecognized_value() {
        let response = HealthCheckResponse { status: 9 };

        assert_eq!(response.status, 9);
        assert_eq!(response.status(), ServingStatus::Unknown);
    }

    #[test]
    fn only_serving_is_serving() {
        assert!(ServingStatus::Serving.is_serving());
        assert!(!ServingStatus::Unknown.is_serving());
        assert!(!ServingStatus::NotServing.is_serving());
        assert!(!ServingStatus::ServiceUnknown.is_serving());

        assert!(ServingStatus::ServiceUnknown.is_watch_only());
        assert!(!ServingStatus::NotServing.is_watch_only());
    }

    #[test]
    fn display_uses_proto_names() {
        assert_eq!(ServingStatus::NotServing.to_string(), "NOT_SERVING");
        assert_eq!(
            HealthCheckResponse::with_status(ServingStatus::Serving)
                .status()
                .to_string(),
            "SERVING"
        );
    }

    #[test]
    fn closed_watch_is_unknown() {
        let serving = HealthCheckResponse::with_status(ServingStatus::Serving);
        let not_serving = HealthCheckResponse::with_status(ServingStatus::NotServing);

        assert_eq!(status_after_close(Some(&serving), false), ServingStatus::Serving);
        assert_eq!(
            status_after_close(Some(&not_serving), false),
            ServingStatus::NotServing
        );
        assert_eq!(status_after_close(Some(&serving), true), ServingStatus::Unknown);
        assert_eq!(status_after_close(Some(&not_serving), true), ServingStatus::Unknown);
        assert_eq!(status_after_close(None, false), ServingStatus::Unknown);
    }
}
