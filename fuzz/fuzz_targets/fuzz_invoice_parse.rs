#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = xero_invoice::Invoice::from_xml_str(s, None);
        let _ = xero_invoice::Response::from_xml(s, None);
    }
});
