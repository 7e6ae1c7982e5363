//! Redirection KVM : activation des réglages et ouverture du SAP

use crate::builder::EnvelopeBuilder;
use crate::envelope::SoapEnvelope;
use crate::error::Result;
use crate::fragment::CimFragment;
use crate::resources::{
    CIM_KVM_REDIRECTION_SAP, IPS_KVM_REDIRECTION_SETTING_DATA, KVM_REDIRECTION_SETTINGS,
};

pub const REQUEST_STATE_CHANGE: &str = "RequestStateChange";

/// `RequestedState` = 2 (enabled)
pub const KVM_REQUESTED_STATE_ENABLED: u32 = 2;

impl EnvelopeBuilder {
    /// Put de `IPS_KVMRedirectionSettingData` avec le mot de passe RFB
    pub fn kvm_settings(&self, host_uri: &str, rfb_password: &str) -> SoapEnvelope {
        let representation = CimFragment::instance(self.context(), IPS_KVM_REDIRECTION_SETTING_DATA)
            .param("DefaultScreen", 0)
            .param("ElementName", KVM_REDIRECTION_SETTINGS)
            .param("EnabledByMEBx", true)
            .param("InstanceID", KVM_REDIRECTION_SETTINGS)
            .param("Is5900PortEnabled", true)
            .param("OptInPolicy", false)
            .param("RFBPassword", rfb_password)
            .param("SessionTimeout", 0)
            .into_element();
        self.put(host_uri, IPS_KVM_REDIRECTION_SETTING_DATA, None, representation)
    }

    pub fn kvm_redirection(&self, host_uri: &str) -> SoapEnvelope {
        let method_input =
            CimFragment::method_input(self.context(), CIM_KVM_REDIRECTION_SAP, REQUEST_STATE_CHANGE)
                .param("RequestedState", KVM_REQUESTED_STATE_ENABLED)
                .into_element();
        self.invoke(
            host_uri,
            CIM_KVM_REDIRECTION_SAP,
            REQUEST_STATE_CHANGE,
            None,
            Some(method_input),
        )
    }
}

/// Enable KVM redirection settings, protected by `passwd`
pub fn enable_remote_kvm(host_uri: &str, passwd: &str) -> Result<String> {
    EnvelopeBuilder::default()
        .kvm_settings(host_uri, passwd)
        .to_xml()
}

/// Enable the KVM redirection service access point
pub fn kvm_redirect(host_uri: &str) -> Result<String> {
    EnvelopeBuilder::default().kvm_redirection(host_uri).to_xml()
}
