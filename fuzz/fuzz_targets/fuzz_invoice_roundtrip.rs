#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → serialize → parse must not panic at any step.
        if let Ok(invoice) = xero_invoice::Invoice::from_xml_str(s, None) {
            if let Ok(xml2) = invoice.to_xml_string() {
                let _ = xero_invoice::Invoice::from_xml_str(&xml2, None);
            }
        }
    }
});
