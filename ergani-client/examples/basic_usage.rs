//! Basic usage example for the Ergani client
//!
//! This example demonstrates how to:
//! - Create a client with default settings and with a custom timeout
//! - Authenticate up front to check credentials
//! - Submit a work card with an optional late-declaration justification
//! - Inspect API failures
//!
//! Note: This example talks to the Ergani trial environment and needs
//! `ERGANI_USERNAME` and `ERGANI_PASSWORD` to be set.

use chrono::Utc;
use ergani_client::{
    CompanyWorkCardBatch, ErganiClient, ErganiError, LateDeclarationJustification, MovementType,
    WorkCardEntry,
};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("ERGANI_USERNAME")?;
    let password = std::env::var("ERGANI_PASSWORD")?;

    // Example 1: Create a client with default settings
    println!("=== Example 1: Default Client ===");
    let _default_client = ErganiClient::new(&username, &password)?;
    println!("✓ Client created for {}", ergani_client::DEFAULT_BASE_URL);

    // Example 2: Custom timeout
    println!("\n=== Example 2: Custom Timeout ===");
    let mut client = ErganiClient::builder(&username, &password)
        .timeout(Duration::from_secs(10))
        .build()?;
    println!("✓ Client created with custom timeout (10s)");

    // Authentication would also happen on the first submission
    println!("\nAuthenticating...");
    client.authenticate()?;
    println!("✓ Authenticated");

    let now = Utc::now();
    let cards = vec![CompanyWorkCardBatch {
        employer_tax_id: "999999999".to_string(),
        branch_number: 1,
        comments: Some("API submission from Rust".to_string()),
        entries: vec![
            WorkCardEntry {
                employee_tax_id: "123456789".to_string(),
                employee_last_name: "Papadopoulos".to_string(),
                employee_first_name: "Giorgos".to_string(),
                movement: MovementType::Arrival,
                submission_date: now.date_naive(),
                movement_time: now.fixed_offset(),
                late_justification: Some(LateDeclarationJustification::PowerOutage),
            },
            WorkCardEntry {
                employee_tax_id: "987654321".to_string(),
                employee_last_name: "Vassiliou".to_string(),
                employee_first_name: "Maria".to_string(),
                movement: MovementType::Arrival,
                submission_date: now.date_naive(),
                movement_time: now.fixed_offset(),
                late_justification: None,
            },
        ],
    }];

    println!("\nSubmitting work cards...");
    match client.submit_work_cards(&cards) {
        Ok(receipts) if receipts.is_empty() => {
            println!("✓ Accepted, no receipts returned");
        }
        Ok(receipts) => {
            for receipt in receipts {
                println!(
                    "✓ ID: {}, protocol: {}, submitted: {}",
                    receipt.id,
                    receipt.protocol,
                    receipt.submitted_at.format("%d/%m/%Y %H:%M")
                );
            }
        }
        Err(ErganiError::Api(failure)) => {
            println!(
                "✗ Rejected with status {}: {}\n  body: {}",
                failure.status, failure.message, failure.body
            );
        }
        Err(e) => {
            println!("✗ Failed to submit: {}", e);
        }
    }

    Ok(())
}
