//! Example demonstrating lenient contact-card import.
//!
//! Shows how records, diagnostics, and JSON export interact: malformed
//! values never abort the parse, they only surface on the reporting sink.
//!
//! Run with: `cargo run --package meishi-rfc --example import_contacts`

use meishi_core::report::MemoryReporter;
use meishi_rfc::vcard::parse;

const INPUT: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Doe;Jane;;;\r\n\
FN:Jane Doe\r\n\
TEL;TYPE=home;PREF:555-1234\r\n\
TEL;TYPE=cell:555-9876\r\n\
ADR;TYPE=home:;;123 Main St;Springfield;IL;62704;USA\r\n\
BDAY:not-a-date\r\n\
X-SOCIAL-PROFILE:ignored\r\n\
END:VCARD\r\n";

fn main() {
    let mut reporter = MemoryReporter::new();
    let cards = parse(INPUT, &mut reporter);

    println!("=== Parsed {} record(s) ===\n", cards.len());

    for card in &cards {
        if let Some(name) = card.display_name() {
            println!("Contact: {name}");
        }
        if let Some(telephones) = card.entries("telephone") {
            for entry in telephones {
                let marker = if entry.is_preferred { " (preferred)" } else { "" };
                if let Some(number) = entry.value.as_text() {
                    println!("  tel: {number}{marker}");
                }
            }
        }
        match serde_json::to_string_pretty(card) {
            Ok(json) => println!("\nAs JSON:\n{json}"),
            Err(err) => println!("\nJSON export failed: {err}"),
        }
    }

    println!("\n=== Diagnostics ===");
    for info in &reporter.infos {
        println!("info:  {info}");
    }
    for error in &reporter.errors {
        println!("error: {error}");
    }
}
