//! AVTransport service identity and control-endpoint resolution
//!
//! Discovery itself lives outside this crate: an SSDP layer finds devices
//! and fetches their description documents. This module gives that layer
//! the filter it needs and turns a fetched description's service list into
//! the control URL all commands are POSTed to.

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Service URN used to namespace-qualify every SOAP action
pub const AV_TRANSPORT_SERVICE: &str = "urn:schemas-upnp-org:service:AVTransport:1";

/// SSDP search target for devices this adapter can control
pub const MEDIA_RENDERER_DEVICE: &str = "urn:schemas-upnp-org:device:MediaRenderer:1";

/// Service id this adapter registers under in a discovery registry
pub const DISCOVERY_SERVICE_ID: &str = "DLNA";

/// Parameters an external discovery layer should use to find devices
/// controllable by this adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryFilter {
    pub service_id: &'static str,
    pub search_target: &'static str,
}

/// The discovery filter for DLNA media renderers
pub fn discovery_filter() -> DiscoveryFilter {
    DiscoveryFilter {
        service_id: DISCOVERY_SERVICE_ID,
        search_target: MEDIA_RENDERER_DEVICE,
    }
}

/// One `<service>` entry from a device description's `<serviceList>`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceService {
    #[serde(rename = "serviceType", default)]
    pub service_type: String,
    #[serde(rename = "controlURL", default)]
    pub control_url: String,
}

/// The slice of a UPnP device description this adapter needs: where the
/// device lives and which services it advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceDescription {
    /// Scheme://host:port prefix control paths are resolved against
    pub base_url: String,
    pub services: Vec<DeviceService>,
}

impl DeviceDescription {
    pub fn new(base_url: impl Into<String>, services: Vec<DeviceService>) -> Self {
        Self {
            base_url: base_url.into(),
            services,
        }
    }

    /// Parse a device description document fetched from `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if the XML is malformed.
    pub fn from_xml(base_url: &str, xml: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Root {
            device: DeviceNode,
        }

        #[derive(Deserialize)]
        struct DeviceNode {
            #[serde(rename = "serviceList")]
            service_list: Option<ServiceListNode>,
        }

        #[derive(Deserialize)]
        struct ServiceListNode {
            #[serde(default)]
            service: Vec<DeviceService>,
        }

        let root: Root = quick_xml::de::from_str(xml)
            .map_err(|e| ApiError::Parse(format!("Failed to parse device description: {}", e)))?;

        let services = root
            .device
            .service_list
            .map(|list| list.service)
            .unwrap_or_default();

        Ok(Self::new(base_url, services))
    }

    /// Resolve the AVTransport control endpoint: the first advertised
    /// service whose control path mentions AVTransport, joined onto the
    /// base URL. Devices without one yield an empty string, and every
    /// command against them fails at the transport layer.
    pub fn control_url(&self) -> String {
        self.services
            .iter()
            .find(|service| service.control_url.contains("AVTransport"))
            .map(|service| format!("{}{}", self.base_url, service.control_url))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn av_transport_service() -> DeviceService {
        DeviceService {
            service_type: AV_TRANSPORT_SERVICE.to_string(),
            control_url: "/MediaRenderer/AVTransport/Control".to_string(),
        }
    }

    #[test]
    fn test_control_url_joins_base_and_path() {
        let description = DeviceDescription::new(
            "http://192.168.1.50:8080",
            vec![
                DeviceService {
                    service_type: "urn:schemas-upnp-org:service:ConnectionManager:1".to_string(),
                    control_url: "/MediaRenderer/ConnectionManager/Control".to_string(),
                },
                av_transport_service(),
            ],
        );

        assert_eq!(
            description.control_url(),
            "http://192.168.1.50:8080/MediaRenderer/AVTransport/Control"
        );
    }

    #[test]
    fn test_control_url_empty_without_av_transport() {
        let description = DeviceDescription::new("http://192.168.1.50:8080", vec![]);
        assert_eq!(description.control_url(), "");
    }

    #[test]
    fn test_from_xml_extracts_service_list() {
        let xml = r#"<?xml version="1.0"?>
            <root xmlns="urn:schemas-upnp-org:device-1-0">
                <device>
                    <deviceType>urn:schemas-upnp-org:device:MediaRenderer:1</deviceType>
                    <friendlyName>Living Room TV</friendlyName>
                    <serviceList>
                        <service>
                            <serviceType>urn:schemas-upnp-org:service:AVTransport:1</serviceType>
                            <controlURL>/upnp/control/AVTransport1</controlURL>
                        </service>
                    </serviceList>
                </device>
            </root>"#;

        let description = DeviceDescription::from_xml("http://10.0.0.7:49152", xml).unwrap();

        assert_eq!(description.services.len(), 1);
        assert_eq!(
            description.control_url(),
            "http://10.0.0.7:49152/upnp/control/AVTransport1"
        );
    }

    #[test]
    fn test_from_xml_without_service_list() {
        let xml = r#"<root><device><friendlyName>Bare</friendlyName></device></root>"#;
        let description = DeviceDescription::from_xml("http://10.0.0.7", xml).unwrap();

        assert!(description.services.is_empty());
        assert_eq!(description.control_url(), "");
    }

    #[test]
    fn test_from_xml_rejects_malformed_document() {
        let result = DeviceDescription::from_xml("http://10.0.0.7", "not xml at all");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_discovery_filter() {
        let filter = discovery_filter();
        assert_eq!(filter.service_id, "DLNA");
        assert_eq!(
            filter.search_target,
            "urn:schemas-upnp-org:device:MediaRenderer:1"
        );
    }
}
