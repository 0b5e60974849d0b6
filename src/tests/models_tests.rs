use crate::scraper::models::{collapse_whitespace, split_zip_city, AddressFields, ExposePage, PageStatus};
use crate::tests::utils::fixture;

#[test]
fn classifies_full_address_page() {
    let status = ExposePage::parse(fixture("street_and_neighborhood"))
        .classify()
        .unwrap();

    assert_eq!(
        status,
        PageStatus::Found(AddressFields {
            street: Some("Husemannstraße 5".to_string()),
            postal_code: Some("10435".to_string()),
            city: Some("Berlin".to_string()),
        })
    );
}

#[test]
fn classifies_removed_listing() {
    let status = ExposePage::parse(fixture("not_found")).classify().unwrap();
    assert_eq!(status, PageStatus::NotFound);
}

#[test]
fn error_marker_wins_over_address_block() {
    let html = r#"<div class="is24-error">weg</div>
        <div class="address-block"><span data-qa="zip">10115</span><span data-qa="city">Berlin</span></div>"#;
    assert_eq!(ExposePage::parse(html).classify().unwrap(), PageStatus::NotFound);
}

#[test]
fn page_without_address_block_is_not_found() {
    let html = "<html><body><h1>Willkommen</h1></body></html>";
    assert_eq!(ExposePage::parse(html).classify().unwrap(), PageStatus::NotFound);
}

#[test]
fn blank_street_is_ignored() {
    let html = r#"<div class="address-block">
        <span data-qa="street"> , </span>
        <span data-qa="zip">10555</span> <span data-qa="city">Berlin</span>
    </div>"#;
    let PageStatus::Found(fields) = ExposePage::parse(html).classify().unwrap() else {
        panic!("expected a found page");
    };
    assert_eq!(fields.street, None);
    assert_eq!(fields.full_address().as_deref(), Some("10555 Berlin"));
}

#[test]
fn full_address_needs_zip_and_city() {
    let fields = AddressFields {
        street: Some("Husemannstraße 5".to_string()),
        postal_code: None,
        city: Some("Berlin".to_string()),
    };
    assert_eq!(fields.full_address(), None);
}

#[test]
fn combined_span_drops_neighborhood() {
    let html = r#"<div class="address-block">
        <span class="zip-region-and-country">10555 Berlin, Tiergarten (Tiergarten)</span>
    </div>"#;
    let PageStatus::Found(fields) = ExposePage::parse(html).classify().unwrap() else {
        panic!("expected a found page");
    };
    assert_eq!(fields.full_address().as_deref(), Some("10555 Berlin"));
}

#[test]
fn street_with_combined_zip_city_span() {
    let html = r#"<div class="address-block">
        <span class="block font-nowrap print-hide street-name">Husemannstraße 5, </span>
        <span class="zip-region-and-country">10435 Berlin, Prenzlauer Berg (Prenzlauer Berg)</span>
    </div>"#;
    let PageStatus::Found(fields) = ExposePage::parse(html).classify().unwrap() else {
        panic!("expected a found page");
    };
    assert_eq!(
        fields.full_address().as_deref(),
        Some("Husemannstraße 5, 10435 Berlin")
    );
}

#[test]
fn zip_city_splitting() {
    assert_eq!(
        split_zip_city(" 10435 Berlin "),
        (Some("10435".to_string()), Some("Berlin".to_string()))
    );
    assert_eq!(
        split_zip_city("10435 Berlin, Prenzlauer Berg (Prenzlauer Berg)"),
        (Some("10435".to_string()), Some("Berlin".to_string()))
    );
    assert_eq!(split_zip_city("10435, Mitte"), (Some("10435".to_string()), None));
    assert_eq!(split_zip_city("10435"), (Some("10435".to_string()), None));
    assert_eq!(split_zip_city("Berlin Mitte"), (None, None));
    assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
}
