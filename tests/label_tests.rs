use chartify_scales::scales::{
    comma_format, comma_format_digits, group_thousands, interval_breaks, large_num_labels,
    percent_format, plain_labels, Breaks, Labeller,
};

#[test]
fn large_numbers_use_short_scale_suffixes() {
    let labels = large_num_labels(None, false);
    assert_eq!(labels.label(1500.0), "1.5 K");
    assert_eq!(labels.label(2_000_000.0), "2 M");
    assert_eq!(labels.label(3e9), "3 B");
    assert_eq!(labels.label(7.25e12), "7.25 T");
}

#[test]
fn zero_is_always_plain_zero() {
    assert_eq!(large_num_labels(None, false).label(0.0), "0");
    assert_eq!(large_num_labels(Some(3), true).label(0.0), "0");
}

#[test]
fn values_below_a_thousand_have_no_suffix() {
    let labels = large_num_labels(None, false);
    assert_eq!(labels.label(999.0), "999");
    assert_eq!(labels.label(12.5), "12.5");
    assert_eq!(labels.label(0.5), "0.5");
}

#[test]
fn negative_values_keep_their_sign() {
    let labels = large_num_labels(None, false);
    assert_eq!(labels.label(-1500.0), "-1.5 K");
    assert_eq!(labels.label(-42.0), "-42");
}

#[test]
fn fixed_decimals_apply_to_fractional_values_only() {
    let labels = large_num_labels(Some(2), false);
    assert_eq!(labels.label(1234.0), "1.23 K");
    assert_eq!(labels.label(2000.0), "2 K");
    assert_eq!(labels.label(17.0), "17");
}

#[test]
fn zero_decimals_behaves_like_shortest_form() {
    let labels = large_num_labels(Some(0), false);
    assert_eq!(labels.label(1500.0), "1.5 K");
}

#[test]
fn si_units_switch_billions_to_giga() {
    let labels = large_num_labels(None, true);
    assert_eq!(labels.label(3e9), "3 G");
    assert_eq!(labels.label(4e15), "4 P");
    assert_eq!(labels.label(5e18), "5 E");
}

#[test]
fn unit_group_is_clamped_to_largest_suffix() {
    let labels = large_num_labels(None, false);
    assert_eq!(labels.label(5e18), "5,000,000 T");
}

#[test]
fn large_num_labels_map_whole_slices() {
    let labels = large_num_labels(None, false).labels(&[0.0, 1500.0, 2e6]);
    assert_eq!(labels, vec!["0", "1.5 K", "2 M"]);
}

#[test]
fn comma_format_groups_thousands_and_rounds() {
    let labels = comma_format().labels(&[1_234_567.0, 0.0, -9_876.4, 999.0]);
    assert_eq!(labels, vec!["1,234,567", "0", "-9,876", "999"]);
}

#[test]
fn comma_format_digits_keeps_fixed_decimals() {
    let labels = comma_format_digits(2).labels(&[1234.5, 0.126]);
    assert_eq!(labels, vec!["1,234.50", "0.12"]);
}

#[test]
fn percent_format_labels_unit_interval_breaks() {
    let breaks = interval_breaks(0.2).breaks((0.0, 1.0));
    let labels = percent_format().labels(&breaks);
    assert_eq!(labels, vec!["0%", "20%", "40%", "60%", "80%", "100%"]);
}

#[test]
fn percent_format_adds_decimals_only_when_needed() {
    let labels = percent_format().labels(&[0.125, 0.25]);
    assert_eq!(labels, vec!["12.5%", "25.0%"]);
}

#[test]
fn plain_labels_use_shared_precision() {
    assert_eq!(plain_labels().labels(&[0.0, 2.5, 5.0]), vec!["0.0", "2.5", "5.0"]);
    assert_eq!(plain_labels().labels(&[10.0, 20.0]), vec!["10", "20"]);
}

#[test]
fn closures_act_as_labellers() {
    let upper = |values: &[f64]| -> Vec<String> {
        values.iter().map(|v| format!("<{v}>")).collect()
    };
    assert_eq!(upper.labels(&[1.0]), vec!["<1>"]);
}

#[test]
fn group_thousands_handles_signs_and_fractions() {
    assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
    assert_eq!(group_thousands("-1000"), "-1,000");
    assert_eq!(group_thousands("100"), "100");
    assert_eq!(group_thousands("inf"), "inf");
}

#[test]
fn labellers_are_idempotent() {
    let labels = large_num_labels(Some(1), true);
    let values = [12_345.0, 6.5e7, -0.25];
    assert_eq!(labels.labels(&values), labels.labels(&values));
}
