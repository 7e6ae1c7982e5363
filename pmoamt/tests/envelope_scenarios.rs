use std::collections::HashSet;
use std::thread;

use pmoamt::namespaces::{ANONYMOUS, METHOD_GET, NS_SOAP_ENV, NS_WS_ADDR, NS_WSMAN};
use pmoamt::resources::{CIM_COMPUTER_SYSTEM, CIM_POWER_MANAGEMENT_SERVICE};
use pmoamt::{
    EnvelopeBuilder, WsmanError, change_boot_order_request, enable_remote_kvm, get_request,
    power_state_request,
};
use xmltree::Element;

const HOST: &str = "http://10.0.0.5:16992";

fn parse(xml: &str) -> Element {
    Element::parse(xml.as_bytes()).unwrap()
}

fn child<'a>(el: &'a Element, name: &str) -> &'a Element {
    el.get_child(name)
        .unwrap_or_else(|| panic!("missing <{}> under <{}>", name, el.name))
}

fn text(el: &Element, name: &str) -> String {
    child(el, name).get_text().unwrap_or_default().to_string()
}

fn elements(el: &Element) -> Vec<&Element> {
    el.children.iter().filter_map(|n| n.as_element()).collect()
}

#[test]
fn test_get_has_one_header_and_empty_body() {
    let xml = get_request(HOST, CIM_COMPUTER_SYSTEM).unwrap();
    let root = parse(&xml);

    assert_eq!(root.name, "Envelope");
    assert_eq!(root.namespace.as_deref(), Some(NS_SOAP_ENV));
    let names: Vec<&str> = elements(&root).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Header", "Body"]);
    assert!(elements(child(&root, "Body")).is_empty());

    let header = child(&root, "Header");
    assert_eq!(text(header, "Action"), METHOD_GET);
    assert_eq!(text(header, "To"), HOST);
    assert_eq!(text(header, "ResourceURI"), CIM_COMPUTER_SYSTEM);
    assert_eq!(text(child(header, "ReplyTo"), "Address"), ANONYMOUS);
    assert_eq!(child(header, "Action").namespace.as_deref(), Some(NS_WS_ADDR));
    assert_eq!(child(header, "ResourceURI").namespace.as_deref(), Some(NS_WSMAN));

    for name in ["Action", "To", "ResourceURI", "MessageID"] {
        assert!(
            xml.contains(&format!(":{} s:mustUnderstand=\"true\">", name)),
            "{} is not marked mustUnderstand",
            name
        );
    }
}

#[test]
fn test_power_on_scenario() {
    let xml = power_state_request(HOST, "on").unwrap();
    let root = parse(&xml);
    let header = child(&root, "Header");

    assert_eq!(
        text(header, "Action"),
        format!("{}/RequestPowerStateChange", CIM_POWER_MANAGEMENT_SERVICE)
    );
    let selector = child(child(header, "SelectorSet"), "Selector");
    assert_eq!(selector.attributes.get("Name").map(|v| v.as_str()), Some("Name"));
    assert_eq!(
        selector.get_text().as_deref(),
        Some("Intel(r) AMT Power Management Service")
    );

    let input = child(child(&root, "Body"), "RequestPowerStateChange_INPUT");
    assert_eq!(input.namespace.as_deref(), Some(CIM_POWER_MANAGEMENT_SERVICE));
    assert_eq!(text(input, "PowerState"), "2");

    let reference = child(input, "ManagedElement");
    assert_eq!(text(reference, "Address"), ANONYMOUS);
    let parameters = child(reference, "ReferenceParameters");
    assert_eq!(text(parameters, "ResourceURI"), CIM_COMPUTER_SYSTEM);
    let managed = child(child(parameters, "SelectorSet"), "Selector");
    assert_eq!(managed.attributes.get("Name").map(|v| v.as_str()), Some("Name"));
    assert_eq!(managed.get_text().as_deref(), Some("ManagedSystem"));
}

#[test]
fn test_boot_order_pxe_scenario() {
    let xml = change_boot_order_request(HOST, "pxe").unwrap();
    let root = parse(&xml);

    let source = child(
        child(child(&root, "Body"), "ChangeBootOrder_INPUT"),
        "Source",
    );
    let selector = child(
        child(child(source, "ReferenceParameters"), "SelectorSet"),
        "Selector",
    );
    assert_eq!(selector.get_text().as_deref(), Some("Intel(r) AMT: Force PXE Boot"));

    let header_selector = child(child(child(&root, "Header"), "SelectorSet"), "Selector");
    assert_eq!(
        header_selector.get_text().as_deref(),
        Some("Intel(r) AMT: Boot Configuration 0")
    );
}

#[test]
fn test_boot_order_rejects_usb() {
    match change_boot_order_request(HOST, "usb") {
        Err(WsmanError::UnsupportedBootDevice(token)) => assert_eq!(token, "usb"),
        other => panic!("expected UnsupportedBootDevice, got {:?}", other),
    }
}

#[test]
fn test_enable_remote_kvm_scenario() {
    let first = enable_remote_kvm(HOST, "secret").unwrap();
    let second = enable_remote_kvm(HOST, "secret").unwrap();

    let message_id = |xml: &str| text(child(&parse(xml), "Header"), "MessageID");
    let data = |xml: &str| {
        let root = parse(xml);
        text(
            child(child(&root, "Body"), "IPS_KVMRedirectionSettingData"),
            "RFBPassword",
        )
    };

    assert_eq!(data(&first), "secret");
    assert!(message_id(&first).starts_with("uuid:"));
    assert_ne!(message_id(&first), message_id(&second));
}

#[test]
fn test_kvm_password_round_trips_through_escaping() {
    let password = "a<b&c\"d";
    let xml = enable_remote_kvm(HOST, password).unwrap();
    let root = parse(&xml);

    assert_eq!(
        text(
            child(child(&root, "Body"), "IPS_KVMRedirectionSettingData"),
            "RFBPassword"
        ),
        password
    );
}

#[test]
fn test_message_ids_unique_across_threads() {
    let builder = EnvelopeBuilder::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let builder = builder.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|_| builder.kvm_redirection(HOST).message_id().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate MessageID");
        }
    }
    assert_eq!(seen.len(), 400);
}
