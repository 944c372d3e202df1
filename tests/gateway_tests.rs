//! Lazy line-item loading and persistence delegation through a stub gateway.

#![cfg(feature = "xml")]

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use rust_decimal_macros::dec;
use xero_invoice::core::*;
use xero_invoice::xml::Element;

const INVOICE_ID: &str = "0e64a623-c2a1-446a-93ed-eb897f118cbc";

/// Gateway returning a canned answer and recording every call.
struct StubGateway {
    answer: Option<Response>,
    fetches: Cell<usize>,
    requested_ids: RefCell<Vec<String>>,
    created: RefCell<Vec<usize>>,
}

impl StubGateway {
    fn answering(response: Response) -> Self {
        Self {
            answer: Some(response),
            fetches: Cell::new(0),
            requested_ids: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }

    /// Fails every fetch at the transport level.
    fn broken() -> Self {
        Self {
            answer: None,
            ..Self::answering(Response::default())
        }
    }
}

impl Gateway for StubGateway {
    fn get_invoice(&self, invoice_id: &str) -> Result<Response, XeroError> {
        self.fetches.set(self.fetches.get() + 1);
        self.requested_ids.borrow_mut().push(invoice_id.to_string());
        self.answer
            .clone()
            .ok_or_else(|| XeroError::Gateway("connection reset".into()))
    }

    fn create_invoice(&self, invoice: &Invoice) -> Result<Response, XeroError> {
        self.created
            .borrow_mut()
            .push(invoice as *const Invoice as usize);
        Ok(Response::with_invoice(invoice.clone()))
    }
}

fn full_invoice() -> Invoice {
    let xml = format!(
        "<Invoice>\
            <InvoiceID>{INVOICE_ID}</InvoiceID>\
            <Type>ACCREC</Type>\
            <InvoiceNumber>INV-0042</InvoiceNumber>\
            <LineItems>\
              <LineItem><Description>Consulting</Description><Quantity>10</Quantity><UnitAmount>150.00</UnitAmount><TaxAmount>225.00</TaxAmount></LineItem>\
              <LineItem><Description>Travel</Description><Quantity>1</Quantity><UnitAmount>80.00</UnitAmount><TaxAmount>12.00</TaxAmount></LineItem>\
            </LineItems>\
        </Invoice>"
    );
    Invoice::from_xml_str(&xml, None).unwrap()
}

fn summary_element() -> Element {
    Element::parse(&format!(
        "<Invoice>\
            <InvoiceID>{INVOICE_ID}</InvoiceID>\
            <Type>ACCREC</Type>\
            <InvoiceNumber>INV-0042</InvoiceNumber>\
            <Total>1817.00</Total>\
        </Invoice>"
    ))
    .unwrap()
}

fn stub_pair(stub: StubGateway) -> (Arc<StubGateway>, Arc<dyn Gateway>) {
    let stub = Arc::new(stub);
    let gateway: Arc<dyn Gateway> = stub.clone();
    (stub, gateway)
}

// --- Pending-remote → Downloaded ---

#[test]
fn summary_invoice_fetches_line_items_once() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();

    assert!(!invoice.line_items_downloaded());
    assert_eq!(invoice.total(), dec!(0));

    let items = invoice.line_items().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].description, "Consulting");
    assert!(invoice.line_items_downloaded());
    assert_eq!(invoice.total(), dec!(1817));
    assert!(invoice.totals_match_reported());

    let again = invoice.line_items().unwrap();
    assert_eq!(again.len(), 2);
    assert_eq!(stub.fetches.get(), 1);
    assert_eq!(*stub.requested_ids.borrow(), [INVOICE_ID]);
}

#[test]
fn fetched_items_replace_local_ones() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();
    invoice
        .add_line_item(LineItem::new("Local only", dec!(1), dec!(1)))
        .unwrap();

    let items = invoice.line_items().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.description != "Local only"));
    assert_eq!(stub.fetches.get(), 1);
}

#[test]
fn pending_remote_without_gateway_fails() {
    let mut invoice = Invoice::from_xml(&summary_element(), None, None).unwrap();
    assert!(matches!(invoice.line_items(), Err(XeroError::NoGateway)));
    assert!(!invoice.line_items_downloaded());
}

#[test]
fn dropped_gateway_counts_as_missing() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();
    assert!(invoice.has_gateway());

    drop(stub);
    drop(gateway);
    assert!(!invoice.has_gateway());
    assert!(matches!(invoice.line_items(), Err(XeroError::NoGateway)));
}

#[test]
fn unsuccessful_response_is_not_found() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::failure(vec![
        "Invoice not found".into(),
    ])));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();

    match invoice.line_items() {
        Err(XeroError::NotFound(id)) => assert_eq!(id, INVOICE_ID),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(!invoice.line_items_downloaded());
    assert_eq!(stub.fetches.get(), 1);
}

#[test]
fn successful_response_without_invoice_is_not_found() {
    let empty = Response {
        success: true,
        ..Response::default()
    };
    let (_stub, gateway) = stub_pair(StubGateway::answering(empty));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();
    assert!(matches!(invoice.line_items(), Err(XeroError::NotFound(_))));
}

#[test]
fn transport_errors_propagate() {
    let (_stub, gateway) = stub_pair(StubGateway::broken());
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();
    assert!(matches!(invoice.line_items(), Err(XeroError::Gateway(_))));
}

// --- Serializing summaries ---

#[test]
fn summary_reserializes_as_summary() {
    let invoice = Invoice::from_xml(&summary_element(), None, None).unwrap();
    assert!(invoice.awaiting_remote_line_items());

    let el = invoice.to_xml();
    assert!(el.child("LineItems").is_none());
    assert_eq!(el.child("Total").unwrap().text(), "1817.00");
    assert!(el.child("SubTotal").is_none());

    let again = Invoice::from_xml_str(&invoice.to_xml_string().unwrap(), None).unwrap();
    assert!(!again.line_items_downloaded());
    assert!(again.awaiting_remote_line_items());
    assert_eq!(again.reported_totals().total, Some(dec!(1817)));
    assert_eq!(again.invoice_id.as_deref(), Some(INVOICE_ID));
}

#[test]
fn complete_xml_fetches_line_items() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();

    let el = invoice.to_complete_xml().unwrap();
    assert_eq!(el.child("LineItems").unwrap().children.len(), 2);
    assert_eq!(el.child("Total").unwrap().text(), "1817.00");
    assert_eq!(stub.fetches.get(), 1);

    let again = Invoice::from_xml(&el, None, None).unwrap();
    assert!(again.line_items_downloaded());
    assert!(again.totals_match_reported());
}

#[test]
fn complete_xml_without_gateway_fails() {
    let mut invoice = Invoice::from_xml(&summary_element(), None, None).unwrap();
    assert!(matches!(invoice.to_complete_xml(), Err(XeroError::NoGateway)));
}

// --- Local-draft and Downloaded ---

#[test]
fn local_draft_never_contacts_gateway() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::builder().gateway(&gateway).build();

    assert!(invoice.line_items().unwrap().is_empty());
    assert!(!invoice.line_items_downloaded());
    assert_eq!(stub.fetches.get(), 0);
}

#[test]
fn non_guid_id_is_treated_as_local() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::builder()
        .invoice_id("INV-0042")
        .gateway(&gateway)
        .add_line_item(LineItem::new("Widget", dec!(1), dec!(5)))
        .build();

    assert_eq!(invoice.line_items().unwrap().len(), 1);
    assert_eq!(stub.fetches.get(), 0);
}

#[test]
fn local_draft_without_gateway_is_fine() {
    let mut invoice = Invoice::default();
    assert!(invoice.line_items().unwrap().is_empty());
}

#[test]
fn full_invoice_never_fetches() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = full_invoice();
    invoice.attach_gateway(&gateway);

    assert!(invoice.line_items_downloaded());
    assert_eq!(invoice.line_items().unwrap().len(), 2);
    assert_eq!(stub.fetches.get(), 0);
}

// --- Persistence ---

#[test]
fn create_without_gateway_fails() {
    let mut invoice = full_invoice();
    assert!(matches!(invoice.create(), Err(XeroError::NoGateway)));
    assert!(matches!(invoice.save(), Err(XeroError::NoGateway)));
}

#[test]
fn create_delegates_once_with_same_instance() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::default()));
    let mut invoice = Invoice::builder()
        .invoice_number("INV-0100")
        .gateway(&gateway)
        .build();

    let response = invoice.create().unwrap();
    assert!(response.success);
    assert_eq!(
        response.invoice().unwrap().invoice_number.as_deref(),
        Some("INV-0100")
    );
    assert_eq!(*stub.created.borrow(), [&invoice as *const Invoice as usize]);
    assert_eq!(stub.fetches.get(), 0);
}

#[test]
fn create_fetches_remote_line_items_first() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let mut invoice = Invoice::from_xml(&summary_element(), Some(&gateway), None).unwrap();

    let response = invoice.create().unwrap();
    assert_eq!(stub.fetches.get(), 1);
    assert_eq!(stub.created.borrow().len(), 1);
    assert_eq!(response.invoice().unwrap().cached_line_items().len(), 2);
    assert!(invoice.line_items_downloaded());
}

#[test]
fn save_is_create() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::default()));
    let mut invoice = Invoice::default();
    invoice.attach_gateway(&gateway);

    invoice.save().unwrap();
    assert_eq!(stub.created.borrow().len(), 1);
    assert_eq!(stub.fetches.get(), 0);
}

// --- Response documents ---

#[test]
fn invoices_from_response_carry_gateway() {
    let (stub, gateway) = stub_pair(StubGateway::answering(Response::with_invoice(full_invoice())));
    let xml = format!(
        "<Response><Status>OK</Status><Invoices>\
            <Invoice><InvoiceID>{INVOICE_ID}</InvoiceID><Type>ACCREC</Type></Invoice>\
        </Invoices></Response>"
    );
    let response = Response::from_xml(&xml, Some(&gateway)).unwrap();
    let mut invoice = response.into_invoice().unwrap();

    assert_eq!(invoice.line_items().unwrap().len(), 2);
    assert_eq!(stub.fetches.get(), 1);
}
