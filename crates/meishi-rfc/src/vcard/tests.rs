//! End-to-end parsing tests.

use chrono::NaiveDate;
use meishi_core::{AttributeValue, EntryValue, MemoryReporter};

use super::parse::{ParseOptions, parse, parse_logged, parse_with_options};

const SINGLE_CARD: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Smith;John;;;\r\n\
FN:John Smith\r\n\
TEL;TYPE=home;PREF:555-1234\r\n\
EMAIL;TYPE=work:john@example.com\r\n\
ADR;TYPE=home:;;123 Main St;Springfield;IL;62704;USA\r\n\
BDAY:19960415\r\n\
CATEGORIES:friend,colleague\r\n\
NOTE:first note\r\n\
NOTE:second note\r\n\
END:VCARD\r\n";

#[test_log::test]
fn one_record_per_bracket_pair() {
    let input = "\
BEGIN:VCARD\r\n\
FN:Alice\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
FN:Bob\r\n\
END:VCARD\r\n";

    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].display_name(), Some("Alice"));
    assert_eq!(cards[1].display_name(), Some("Bob"));
}

#[test_log::test]
fn full_card_interprets_every_field_shape() {
    let mut reporter = MemoryReporter::new();
    let cards = parse(SINGLE_CARD, &mut reporter);
    assert_eq!(cards.len(), 1);
    let card = &cards[0];

    let name = card.get("name").and_then(AttributeValue::as_name).unwrap();
    assert_eq!(name.surname, "Smith");
    assert_eq!(name.name, "John");
    assert_eq!(name.additional_name, "");
    assert_eq!(name.prefix, "");
    assert_eq!(name.suffix, "");

    let tel = &card.entries("telephone").unwrap()[0];
    assert!(tel.is_preferred);
    assert!(!tel.parameters.contains_key("pref"));
    assert_eq!(tel.parameters["type"], "home");
    assert_eq!(tel.value.as_text(), Some("555-1234"));

    let email = &card.entries("email").unwrap()[0];
    assert!(!email.is_preferred);
    assert_eq!(email.value.as_text(), Some("john@example.com"));

    let adr = &card.entries("address").unwrap()[0];
    let addr = adr.value.as_address().unwrap();
    assert_eq!(addr.street, "123 Main St");
    assert_eq!(addr.city, "Springfield");
    assert_eq!(addr.country, "USA");

    let bday = card.get("birthday").and_then(AttributeValue::as_date);
    assert_eq!(bday, NaiveDate::from_ymd_opt(1996, 4, 15));

    let categories = card.get("categories").and_then(AttributeValue::as_list);
    assert_eq!(categories, Some(&["friend".to_string(), "colleague".to_string()][..]));

    assert_eq!(card.text("notes"), Some("first note\nsecond note"));
}

#[test]
fn folded_lines_rejoin_before_tokenization() {
    let input = "\
BEGIN:VCARD\r\n\
NOTE:a very long\r\n \
note that was folded\r\n\
END:VCARD\r\n";

    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);
    assert_eq!(
        cards[0].text("notes"),
        Some("a very longnote that was folded")
    );
}

#[test]
fn escaped_newline_becomes_real_line_break() {
    let input = "BEGIN:VCARD\nNOTE:line one\\nline two\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);
    assert_eq!(cards[0].text("notes"), Some("line one\nline two"));
}

#[test]
fn invalid_date_stores_null_and_reports() {
    let input = "BEGIN:VCARD\nBDAY:not-a-date\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    assert_eq!(cards[0].get("birthday"), Some(&AttributeValue::Date(None)));
    assert_eq!(reporter.errors, vec!["invalid date format not-a-date"]);
}

#[test]
fn compact_date_time_zone_form_truncates_to_date() {
    let input = "BEGIN:VCARD\nBDAY:19531015T231000Z\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);
    assert_eq!(
        cards[0].get("birthday").and_then(AttributeValue::as_date),
        NaiveDate::from_ymd_opt(1953, 10, 15)
    );
}

#[test]
fn extension_fields_drop_silently() {
    let input = "BEGIN:VCARD\nX-CUSTOM:foo\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    assert!(cards[0].is_empty());
    assert!(reporter.is_empty());
}

#[test]
fn unknown_fields_drop_with_notice() {
    let input = "BEGIN:VCARD\nFROBNICATE:yes\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    assert!(cards[0].is_empty());
    assert_eq!(reporter.infos, vec!["unknown field FROBNICATE with value yes"]);
}

#[test]
fn registry_gap_reuses_field_name() {
    let input = "BEGIN:VCARD\nNICKNAME:Johnny,JD\nUID:abc-123\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    let nick = cards[0].get("NICKNAME").and_then(AttributeValue::as_list);
    assert_eq!(nick, Some(&["Johnny".to_string(), "JD".to_string()][..]));
    assert_eq!(cards[0].text("UID"), Some("abc-123"));
    assert_eq!(
        reporter.infos,
        vec![
            "define property name for NICKNAME",
            "define property name for UID",
        ]
    );
}

#[test]
fn version_line_reports_registry_gap_and_stores_nothing() {
    let input = "BEGIN:VCARD\nVERSION:2.1\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    assert!(cards[0].is_empty());
    assert_eq!(reporter.infos, vec!["define property name for VERSION"]);
}

#[test]
fn item_prefixed_lines_parse_as_their_field() {
    let input = "BEGIN:VCARD\nitem1.ADR;TYPE=work:;;1 Work Way;Metropolis;;;\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    let adr = &cards[0].entries("address").unwrap()[0];
    assert_eq!(adr.parameters["type"], "work");
    assert_eq!(adr.value.as_address().unwrap().street, "1 Work Way");
}

#[test]
fn quoted_parameter_values_lose_one_quote_pair() {
    let input = "BEGIN:VCARD\nTEL;TYPE=\"cell\":555-9876\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    let tel = &cards[0].entries("telephone").unwrap()[0];
    assert_eq!(tel.parameters["type"], "cell");
}

#[test]
fn address_with_missing_trailing_components() {
    let input = "BEGIN:VCARD\nADR:Box 7\nEND:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    let addr = cards[0].entries("address").unwrap()[0]
        .value
        .as_address()
        .unwrap();
    assert_eq!(addr.post_office_box.as_deref(), Some("Box 7"));
    assert!(addr.number.is_none());
    assert_eq!(addr.street, "");
}

#[test]
fn repeated_typed_fields_accumulate_in_order() {
    let input = "\
BEGIN:VCARD\n\
TEL;TYPE=home:111\n\
TEL;TYPE=work:222\n\
END:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    let tels = cards[0].entries("telephone").unwrap();
    assert_eq!(tels.len(), 2);
    assert_eq!(tels[0].value.as_text(), Some("111"));
    assert_eq!(tels[1].value.as_text(), Some("222"));
}

#[test]
fn repeated_list_and_name_fields_replace() {
    let input = "\
BEGIN:VCARD\n\
CATEGORIES:a,b\n\
CATEGORIES:c\n\
N:First;;;;\n\
N:Second;;;;\n\
END:VCARD\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    let categories = cards[0].get("categories").and_then(AttributeValue::as_list);
    assert_eq!(categories, Some(&["c".to_string()][..]));
    let name = cards[0].get("name").and_then(AttributeValue::as_name).unwrap();
    assert_eq!(name.surname, "Second");
}

#[test]
fn unterminated_record_drops_silently_by_default() {
    let input = "BEGIN:VCARD\nFN:Lost Record\n";
    let mut reporter = MemoryReporter::new();
    let cards = parse(input, &mut reporter);

    assert!(cards.is_empty());
    assert!(reporter.is_empty());
}

#[test]
fn unterminated_record_reports_when_opted_in() {
    let input = "BEGIN:VCARD\nFN:Lost Record\n";
    let options = ParseOptions {
        report_unterminated: true,
    };
    let mut reporter = MemoryReporter::new();
    let cards = parse_with_options(input, options, &mut reporter);

    assert!(cards.is_empty());
    assert_eq!(
        reporter.errors,
        vec!["incomplete record discarded at end of input"]
    );
}

#[test]
fn parsing_is_idempotent() {
    let mut first_reporter = MemoryReporter::new();
    let first = parse(SINGLE_CARD, &mut first_reporter);
    let mut second_reporter = MemoryReporter::new();
    let second = parse(SINGLE_CARD, &mut second_reporter);

    assert_eq!(first, second);
    assert_eq!(first_reporter, second_reporter);
}

#[test_log::test]
fn parse_logged_runs_without_a_sink() {
    let cards = parse_logged(SINGLE_CARD);
    assert_eq!(cards.len(), 1);
}

#[test]
fn empty_input_yields_no_records() {
    let mut reporter = MemoryReporter::new();
    assert!(parse("", &mut reporter).is_empty());
    assert!(reporter.is_empty());
}

#[test]
fn serialized_card_uses_interchange_shapes() {
    let mut reporter = MemoryReporter::new();
    let cards = parse(SINGLE_CARD, &mut reporter);
    let json = serde_json::to_value(&cards[0]).unwrap();

    assert_eq!(json["displayName"], "John Smith");
    assert_eq!(json["birthday"], "1996-04-15");
    assert_eq!(json["name"]["additionalName"], "");

    let tel = &json["telephone"][0];
    assert_eq!(tel["isPreferred"], true);
    assert!(tel["parameters"].get("pref").is_none());
    assert_eq!(tel["value"], "555-1234");

    let addr = &json["address"][0]["value"];
    assert_eq!(addr["street"], "123 Main St");
    assert_eq!(addr["postOfficeBox"], "");
}
