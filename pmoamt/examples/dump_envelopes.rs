//! Affiche les enveloppes produites pour une machine AMT
//!
//! ```text
//! cargo run -p pmoamt --example dump_envelopes -- 10.0.0.5
//! ```

use std::env;

use pmoamt::{
    AmtEndpoint, change_boot_order_request, enable_boot_config_request, enable_remote_kvm,
    kvm_redirect, power_state_request, power_status_request,
};

fn main() -> pmoamt::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let host = env::args().nth(1).unwrap_or_else(|| "10.0.0.5".to_string());
    let uri = AmtEndpoint::new(host).uri();
    println!("Target: {}\n", uri);

    println!("--- power status ---\n{}\n", power_status_request(&uri)?);
    println!("--- power on ---\n{}\n", power_state_request(&uri, "on")?);
    println!("--- boot order (pxe) ---\n{}\n", change_boot_order_request(&uri, "pxe")?);
    println!("--- boot config role ---\n{}\n", enable_boot_config_request(&uri)?);
    println!("--- KVM settings ---\n{}\n", enable_remote_kvm(&uri, "Passw0rd!")?);
    println!("--- KVM redirect ---\n{}", kvm_redirect(&uri)?);

    Ok(())
}
