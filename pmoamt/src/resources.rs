//! URI des schémas CIM/IPS et instances bien connues du firmware AMT

macro_rules! cim_resource {
    ($name:ident, $class:literal) => {
        pub const $name: &str = concat!("http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/", $class);
    };
}

cim_resource!(CIM_ASSOCIATED_POWER_MANAGEMENT_SERVICE, "CIM_AssociatedPowerManagementService");
cim_resource!(CIM_POWER_MANAGEMENT_SERVICE, "CIM_PowerManagementService");
cim_resource!(CIM_COMPUTER_SYSTEM, "CIM_ComputerSystem");
cim_resource!(CIM_BOOT_CONFIG_SETTING, "CIM_BootConfigSetting");
cim_resource!(CIM_BOOT_SOURCE_SETTING, "CIM_BootSourceSetting");
cim_resource!(CIM_BOOT_SERVICE, "CIM_BootService");
cim_resource!(CIM_KVM_REDIRECTION_SAP, "CIM_KVMRedirectionSAP");

pub const IPS_KVM_REDIRECTION_SETTING_DATA: &str =
    "http://intel.com/wbem/wscim/1/ips-schema/1/IPS_KVMRedirectionSettingData";

// Valeurs de sélecteurs fixées par le firmware
pub const POWER_MANAGEMENT_SERVICE_NAME: &str = "Intel(r) AMT Power Management Service";
pub const MANAGED_SYSTEM_NAME: &str = "ManagedSystem";
pub const BOOT_CONFIGURATION_0: &str = "Intel(r) AMT: Boot Configuration 0";
pub const BOOT_SERVICE_NAME: &str = "Intel(r) AMT Boot Service";
pub const KVM_REDIRECTION_SETTINGS: &str = "Intel(r) KVM Redirection Settings";

/// Nom de classe CIM d'une URI de ressource (dernier segment)
///
/// `http://.../CIM_BootService` → `CIM_BootService`
pub fn class_name(resource_uri: &str) -> &str {
    resource_uri
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(resource_uri)
}
