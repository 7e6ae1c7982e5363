//! Énumérations fermées : états d'alimentation et périphériques de boot
//!
//! Chaque variante porte à la fois son jeton lisible (`on`, `pxe`, ...) et sa
//! valeur protocolaire ; les deux sens de conversion sont des `match` directs.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Result, WsmanError};

/// État d'alimentation demandé via `RequestPowerStateChange`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    On,
    Off,
    Reboot,
}

impl PowerState {
    pub const ALL: [PowerState; 3] = [PowerState::On, PowerState::Off, PowerState::Reboot];

    /// Code CIM `PowerState`
    pub const fn code(self) -> u32 {
        match self {
            Self::On => 2,
            Self::Off => 8,
            Self::Reboot => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Reboot => "reboot",
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            2 => Some(Self::On),
            8 => Some(Self::Off),
            5 => Some(Self::Reboot),
            _ => None,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PowerState {
    type Err = WsmanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "reboot" => Ok(Self::Reboot),
            other => {
                warn!(token = other, "Unsupported power state");
                Err(WsmanError::unsupported_power_state(other))
            }
        }
    }
}

/// Jeton lisible d'un code d'état d'alimentation rapporté par le firmware
pub fn friendly_power_state(code: u32) -> Result<&'static str> {
    PowerState::from_code(code)
        .map(PowerState::name)
        .ok_or(WsmanError::UnknownPowerStateCode(code))
}

/// Source de boot forcée pour le prochain démarrage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BootDevice {
    Pxe,
    HardDrive,
    Cd,
}

impl BootDevice {
    pub const ALL: [BootDevice; 3] = [BootDevice::Pxe, BootDevice::HardDrive, BootDevice::Cd];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Pxe => "pxe",
            Self::HardDrive => "hd",
            Self::Cd => "cd",
        }
    }

    /// `InstanceID` du `CIM_BootSourceSetting` correspondant
    pub const fn instance_id(self) -> &'static str {
        match self {
            Self::Pxe => "Intel(r) AMT: Force PXE Boot",
            Self::HardDrive => "Intel(r) AMT: Force Hard-drive Boot",
            Self::Cd => "Intel(r) AMT: Force CD/DVD Boot",
        }
    }
}

impl fmt::Display for BootDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for BootDevice {
    type Err = WsmanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pxe" => Ok(Self::Pxe),
            "hd" => Ok(Self::HardDrive),
            "cd" => Ok(Self::Cd),
            other => {
                warn!(token = other, "Unsupported boot device");
                Err(WsmanError::unsupported_boot_device(other))
            }
        }
    }
}
