//! # pmoamt - Enveloppes WS-Management pour Intel AMT
//!
//! Ce crate construit les requêtes SOAP/WS-Management envoyées au firmware
//! Intel AMT pour le contrôle hors bande d'une machine.
//!
//! ## Fonctionnalités
//!
//! - ✅ Get WS-Transfer sur une ressource CIM
//! - ✅ Invocation de méthode (`<Method>_INPUT`) avec SelectorSet et références
//! - ✅ Changement d'état d'alimentation (on, off, reboot)
//! - ✅ Ordre de boot (pxe, hd, cd) et rôle de configuration de boot
//! - ✅ Activation et redirection KVM
//!
//! Le transport HTTP (authentification digest) et l'analyse des réponses
//! restent à la charge de l'appelant.
//!
//! ## Architecture
//!
//! - [`EnvelopeBuilder`] : assemble Header + Body avec un [`NamespaceContext`]
//! - [`SoapEnvelope`] : document produit, sérialisable en texte
//! - [`CimFragment`] : fragments spécifiques à une ressource CIM
//! - [`PowerState`], [`BootDevice`] : énumérations fermées
//!
//! ## Example
//!
//! ```rust
//! use pmoamt::{power_state_request, change_boot_order_request};
//!
//! let xml = power_state_request("http://10.0.0.5:16992/wsman", "on").unwrap();
//! assert!(xml.contains("<n1:PowerState>2</n1:PowerState>"));
//!
//! // Jeton inconnu : erreur avant toute construction XML
//! assert!(change_boot_order_request("http://10.0.0.5:16992/wsman", "usb").is_err());
//! ```

mod boot;
mod builder;
mod envelope;
mod error;
mod fragment;
mod kvm;
mod power;
mod selector;
mod states;

pub mod config;
pub mod namespaces;
pub mod resources;

pub use crate::boot::{
    BOOT_CONFIG_ROLE_NEXT_BOOT, CHANGE_BOOT_ORDER, SET_BOOT_CONFIG_ROLE,
    change_boot_order_request, change_boot_to_pxe_request, enable_boot_config_request,
};
pub use crate::builder::{
    EnvelopeBuilder, get_request, new_message_id, wsman_get, wsman_invoke, wsman_put,
};
pub use crate::config::{AmtConfig, AmtEndpoint, XmlOptions};
pub use crate::envelope::{SoapBody, SoapEnvelope, SoapHeader};
pub use crate::error::{Result, WsmanError};
pub use crate::fragment::CimFragment;
pub use crate::kvm::{
    KVM_REQUESTED_STATE_ENABLED, REQUEST_STATE_CHANGE, enable_remote_kvm, kvm_redirect,
};
pub use crate::namespaces::{Namespace, NamespaceContext};
pub use crate::power::{
    REQUEST_POWER_STATE_CHANGE, power_action_input, power_state_request, power_status_request,
};
pub use crate::selector::{Selector, SelectorSet, create_reference, create_selectorset};
pub use crate::states::{BootDevice, PowerState, friendly_power_state};
