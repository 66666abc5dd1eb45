use venue_intel::utils::formatting::{
    UNDEFINED, format_currency_cents, format_optional_currency,
};
use venue_intel::utils::{format_count, format_currency, format_percent};

#[test]
fn whole_currency_groups_thousands() {
    assert_eq!(format_currency(1234.6, "$"), "$1,235");
    assert_eq!(format_currency(-40.0, "$"), "-$40");
    assert_eq!(format_currency(-0.4, "$"), "$0");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn cents_never_show_negative_zero() {
    assert_eq!(format_currency_cents(-0.001, "$"), "$0.00");
    assert_eq!(format_currency_cents(-0.004, "€"), "€0.00");
    assert_eq!(format_currency_cents(-0.006, "$"), "-$0.01");
}

#[test]
fn cents_round_and_carry() {
    assert_eq!(format_currency_cents(12.5, "$"), "$12.50");
    assert_eq!(format_currency_cents(0.999, "$"), "$1.00");
    assert_eq!(format_currency_cents(-1234.567, "$"), "-$1,234.57");
}

#[test]
fn undefined_amounts_and_percentages() {
    assert_eq!(format_optional_currency(None, "$"), UNDEFINED);
    assert_eq!(format_optional_currency(Some(45.0), "$"), "$45.00");
    assert_eq!(format_percent(2.0 / 3.0), "66.7%");
}
