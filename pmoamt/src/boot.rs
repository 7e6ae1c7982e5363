//! Ordre de boot et rôle de la configuration de boot

use crate::builder::EnvelopeBuilder;
use crate::envelope::SoapEnvelope;
use crate::error::Result;
use crate::fragment::CimFragment;
use crate::resources::{
    BOOT_CONFIGURATION_0, BOOT_SERVICE_NAME, CIM_BOOT_CONFIG_SETTING, CIM_BOOT_SERVICE,
    CIM_BOOT_SOURCE_SETTING,
};
use crate::selector::create_selectorset;
use crate::states::BootDevice;

pub const CHANGE_BOOT_ORDER: &str = "ChangeBootOrder";
pub const SET_BOOT_CONFIG_ROLE: &str = "SetBootConfigRole";

/// `Role` = 1 : configuration utilisée au prochain démarrage uniquement
pub const BOOT_CONFIG_ROLE_NEXT_BOOT: u32 = 1;

impl EnvelopeBuilder {
    /// `ChangeBootOrder` sur `Intel(r) AMT: Boot Configuration 0`
    pub fn change_boot_order(&self, host_uri: &str, boot_device: BootDevice) -> SoapEnvelope {
        let method_input =
            CimFragment::method_input(self.context(), CIM_BOOT_CONFIG_SETTING, CHANGE_BOOT_ORDER)
                .reference(
                    "Source",
                    CIM_BOOT_SOURCE_SETTING,
                    &create_selectorset("InstanceID", boot_device.instance_id()),
                )
                .into_element();
        self.invoke(
            host_uri,
            CIM_BOOT_CONFIG_SETTING,
            CHANGE_BOOT_ORDER,
            Some(create_selectorset("InstanceID", BOOT_CONFIGURATION_0)),
            Some(method_input),
        )
    }

    /// `SetBootConfigRole` sur le service de boot AMT
    pub fn set_boot_config_role(&self, host_uri: &str) -> SoapEnvelope {
        let method_input =
            CimFragment::method_input(self.context(), CIM_BOOT_SERVICE, SET_BOOT_CONFIG_ROLE)
                .reference(
                    "BootConfigSetting",
                    CIM_BOOT_CONFIG_SETTING,
                    &create_selectorset("InstanceID", BOOT_CONFIGURATION_0),
                )
                .param("Role", BOOT_CONFIG_ROLE_NEXT_BOOT)
                .into_element();
        self.invoke(
            host_uri,
            CIM_BOOT_SERVICE,
            SET_BOOT_CONFIG_ROLE,
            Some(create_selectorset("Name", BOOT_SERVICE_NAME)),
            Some(method_input),
        )
    }
}

/// Change the boot order to `boot_device` (`pxe`, `hd` or `cd`)
pub fn change_boot_order_request(host_uri: &str, boot_device: &str) -> Result<String> {
    let boot_device: BootDevice = boot_device.parse()?;
    EnvelopeBuilder::default()
        .change_boot_order(host_uri, boot_device)
        .to_xml()
}

pub fn change_boot_to_pxe_request(host_uri: &str) -> Result<String> {
    change_boot_order_request(host_uri, BootDevice::Pxe.token())
}

/// Enable boot configuration 0 for the next boot
pub fn enable_boot_config_request(host_uri: &str) -> Result<String> {
    EnvelopeBuilder::default()
        .set_boot_config_role(host_uri)
        .to_xml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WsmanError;

    const HOST: &str = "http://10.0.0.5:16992/wsman";

    #[test]
    fn test_change_boot_order_envelope() {
        let envelope = EnvelopeBuilder::new().change_boot_order(HOST, BootDevice::Cd);

        assert_eq!(
            envelope.action(),
            format!("{}/ChangeBootOrder", CIM_BOOT_CONFIG_SETTING)
        );
        assert_eq!(
            envelope.header().selector_set().and_then(|s| s.get("InstanceID")),
            Some(BOOT_CONFIGURATION_0)
        );

        let input = envelope.body().content().unwrap();
        assert_eq!(input.name, "n1:ChangeBootOrder_INPUT");
        let resource_uri = input
            .get_child("n1:Source")
            .and_then(|e| e.get_child("wsa:ReferenceParameters"))
            .and_then(|e| e.get_child("wsman:ResourceURI"))
            .unwrap();
        assert_eq!(resource_uri.get_text().as_deref(), Some(CIM_BOOT_SOURCE_SETTING));
    }

    #[test]
    fn test_boot_config_role_envelope() {
        let envelope = EnvelopeBuilder::new().set_boot_config_role(HOST);

        assert_eq!(
            envelope.header().selector_set().and_then(|s| s.get("Name")),
            Some(BOOT_SERVICE_NAME)
        );
        let input = envelope.body().content().unwrap();
        let names: Vec<&str> = input
            .children
            .iter()
            .filter_map(|n| n.as_element())
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["n1:BootConfigSetting", "n1:Role"]);
        assert_eq!(
            input.get_child("n1:Role").unwrap().get_text().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_unsupported_boot_device_fails_fast() {
        let err = change_boot_order_request(HOST, "usb").unwrap_err();
        assert!(matches!(err, WsmanError::UnsupportedBootDevice(ref t) if t == "usb"));
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_pxe_shorthand() {
        let xml = change_boot_to_pxe_request(HOST).unwrap();
        assert!(xml.contains("Intel(r) AMT: Force PXE Boot"));
    }
}
