use serde::{Deserialize, Serialize};

/// Invoice type: which side of the ledger the invoice sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceType {
    /// ACCREC: sales invoice, money owed to us.
    #[default]
    AccRec,
    /// ACCPAY: bill, money we owe.
    AccPay,
}

impl InvoiceType {
    pub const ALL: [InvoiceType; 2] = [Self::AccRec, Self::AccPay];

    /// Wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccRec => "ACCREC",
            Self::AccPay => "ACCPAY",
        }
    }

    /// Parse from wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACCREC" => Some(Self::AccRec),
            "ACCPAY" => Some(Self::AccPay),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AccRec => "Accounts Receivable",
            Self::AccPay => "Accounts Payable",
        }
    }
}

/// Invoice status as reported by the service.
///
/// Unrecognized wire values are kept in [`InvoiceStatus::Other`] so that
/// validation can report them instead of losing them during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// AUTHORISED: approved, awaiting payment.
    Authorised,
    /// DELETED: draft that was deleted.
    Deleted,
    /// DRAFT: saved as draft or entered via API.
    Draft,
    /// PAID: approved and fully paid.
    Paid,
    /// SUBMITTED: entered by an employee, awaiting approval.
    Submitted,
    /// VOID: approved, then voided.
    Void,
    /// Any other code value.
    Other(String),
}

impl InvoiceStatus {
    /// Every status the service defines, in alphabetical code order.
    pub const RECOGNIZED: [InvoiceStatus; 6] = [
        Self::Authorised,
        Self::Deleted,
        Self::Draft,
        Self::Paid,
        Self::Submitted,
        Self::Void,
    ];

    pub fn code(&self) -> &str {
        match self {
            Self::Authorised => "AUTHORISED",
            Self::Deleted => "DELETED",
            Self::Draft => "DRAFT",
            Self::Paid => "PAID",
            Self::Submitted => "SUBMITTED",
            Self::Void => "VOID",
            Self::Other(code) => code,
        }
    }

    /// Parse from wire code. Never fails; unknown codes become `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "AUTHORISED" => Self::Authorised,
            "DELETED" => Self::Deleted,
            "DRAFT" => Self::Draft,
            "PAID" => Self::Paid,
            "SUBMITTED" => Self::Submitted,
            "VOID" => Self::Void,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Authorised => "Approved invoices awaiting payment",
            Self::Deleted => "Draft invoices that are deleted",
            Self::Draft => "Invoices saved as draft or entered via API",
            Self::Paid => "Invoices approved and fully paid",
            Self::Submitted => "Invoices entered by an employee awaiting approval",
            Self::Void => "Approved invoices that are voided",
            Self::Other(_) => "Unrecognized invoice status",
        }
    }

    /// Comma-separated list of recognized codes, for error messages.
    pub fn recognized_codes() -> String {
        Self::RECOGNIZED
            .iter()
            .map(|s| s.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// How line amounts relate to tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineAmountType {
    /// Line amounts exclude tax.
    #[default]
    Exclusive,
    /// Line amounts include tax.
    Inclusive,
    /// Line amounts carry no tax.
    NoTax,
}

impl LineAmountType {
    pub const ALL: [LineAmountType; 3] = [Self::Exclusive, Self::Inclusive, Self::NoTax];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Exclusive => "Exclusive",
            Self::Inclusive => "Inclusive",
            Self::NoTax => "NoTax",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Exclusive" => Some(Self::Exclusive),
            "Inclusive" => Some(Self::Inclusive),
            "NoTax" => Some(Self::NoTax),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Exclusive => "Line amounts are exclusive of tax",
            Self::Inclusive => "Line amounts are inclusive of tax",
            Self::NoTax => "Line amounts have no tax",
        }
    }
}

/// Check a service identifier against the GUID shape
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (lowercase hex).
pub fn is_guid(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_digit() || (b'a'..=b'f').contains(b),
    })
}
