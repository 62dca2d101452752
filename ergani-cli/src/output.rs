//! Output formatting for submission results

use ergani_client::{DocumentKind, SubmissionReceipt};

/// Output formatter for receipts
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format one receipt as a line
    pub fn format_receipt(&self, receipt: &SubmissionReceipt) -> String {
        if self.quiet {
            return receipt.protocol.clone();
        }
        format!(
            "{}  protocol {}  submitted {}",
            receipt.id,
            receipt.protocol,
            receipt.submitted_at.format("%d/%m/%Y %H:%M")
        )
    }

    /// Print all receipts of one submission
    pub fn print_receipts(&self, kind: DocumentKind, receipts: &[SubmissionReceipt]) {
        if receipts.is_empty() {
            if !self.quiet {
                println!("{} submission accepted, no receipts returned", kind);
            }
            return;
        }

        if !self.quiet {
            println!("{} submission accepted ({} receipt(s)):", kind, receipts.len());
        }
        for receipt in receipts {
            println!("{}", self.format_receipt(receipt));
        }
    }
}
