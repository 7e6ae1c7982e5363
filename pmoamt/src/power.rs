//! Changement et lecture de l'état d'alimentation

use xmltree::Element;

use crate::builder::EnvelopeBuilder;
use crate::envelope::SoapEnvelope;
use crate::error::Result;
use crate::fragment::CimFragment;
use crate::namespaces::NamespaceContext;
use crate::resources::{
    CIM_ASSOCIATED_POWER_MANAGEMENT_SERVICE, CIM_COMPUTER_SYSTEM, CIM_POWER_MANAGEMENT_SERVICE,
    MANAGED_SYSTEM_NAME, POWER_MANAGEMENT_SERVICE_NAME,
};
use crate::selector::create_selectorset;
use crate::states::PowerState;

pub const REQUEST_POWER_STATE_CHANGE: &str = "RequestPowerStateChange";

/// `RequestPowerStateChange_INPUT` : `PowerState` puis `ManagedElement`
pub fn power_action_input(ctx: &NamespaceContext, power_state: PowerState) -> Element {
    CimFragment::method_input(ctx, CIM_POWER_MANAGEMENT_SERVICE, REQUEST_POWER_STATE_CHANGE)
        .param("PowerState", power_state.code())
        .reference(
            "ManagedElement",
            CIM_COMPUTER_SYSTEM,
            &create_selectorset("Name", MANAGED_SYSTEM_NAME),
        )
        .into_element()
}

impl EnvelopeBuilder {
    pub fn power_state_change(&self, host_uri: &str, power_state: PowerState) -> SoapEnvelope {
        let selector_set = create_selectorset("Name", POWER_MANAGEMENT_SERVICE_NAME);
        let method_input = power_action_input(self.context(), power_state);
        self.invoke(
            host_uri,
            CIM_POWER_MANAGEMENT_SERVICE,
            REQUEST_POWER_STATE_CHANGE,
            Some(selector_set),
            Some(method_input),
        )
    }

    /// Lecture de l'association donnant l'état d'alimentation courant
    pub fn power_status(&self, host_uri: &str) -> SoapEnvelope {
        self.get(host_uri, CIM_ASSOCIATED_POWER_MANAGEMENT_SERVICE, None)
    }
}

/// Change AMT server power state
///
/// `power_state` is one of `on`, `off`, `reboot`; any other token is
/// rejected before the envelope is built.
pub fn power_state_request(host_uri: &str, power_state: &str) -> Result<String> {
    let power_state: PowerState = power_state.parse()?;
    EnvelopeBuilder::default()
        .power_state_change(host_uri, power_state)
        .to_xml()
}

/// Read the current power state association
pub fn power_status_request(host_uri: &str) -> Result<String> {
    EnvelopeBuilder::default().power_status(host_uri).to_xml()
}
