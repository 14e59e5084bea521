//! Quote totals arithmetic, including the documented reference fixture and
//! property-level checks over arbitrary line inputs.

use isletme_api::services::totals::{grand_total, kalem_totals, KalemInput};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line(miktar: Decimal, birim_fiyat: Decimal, indirim: Decimal, kdv: Decimal) -> KalemInput {
    KalemInput {
        miktar,
        birim_fiyat,
        indirim,
        kdv_orani: kdv,
    }
}

#[test]
fn reference_fixture() {
    // 2 x 100, 10 discount, 20% VAT.
    let t = kalem_totals(&line(dec!(2), dec!(100), dec!(10), dec!(20)));
    assert_eq!(t.tutar, dec!(200));
    assert_eq!(t.net_tutar, dec!(190));
    assert_eq!(t.kdv_tutari, dec!(38));
    assert_eq!(t.toplam, dec!(228));
}

#[test]
fn zero_vat_total_equals_net() {
    let t = kalem_totals(&line(dec!(3), dec!(50), dec!(0), dec!(0)));
    assert_eq!(t.kdv_tutari, dec!(0));
    assert_eq!(t.toplam, t.net_tutar);
}

#[test]
fn fractional_quantities_keep_precision() {
    let t = kalem_totals(&line(dec!(1.5), dec!(33.33), dec!(0), dec!(18)));
    assert_eq!(t.tutar, dec!(49.995));
    assert_eq!(t.net_tutar, dec!(49.995));
    assert_eq!(t.toplam, dec!(49.995) + dec!(49.995) * dec!(18) / dec!(100));
}

#[test]
fn discount_beyond_gross_drives_net_negative() {
    let t = kalem_totals(&line(dec!(1), dec!(100), dec!(150), dec!(20)));
    assert_eq!(t.net_tutar, dec!(-50));
    assert_eq!(t.toplam, dec!(-60));
}

#[rstest]
#[case::plain(dec!(1), dec!(72), dec!(0), dec!(0), dec!(72))]
#[case::discount_and_vat(dec!(2), dec!(100), dec!(10), dec!(20), dec!(228))]
#[case::fractional_quantity(dec!(0.5), dec!(90), dec!(5), dec!(10), dec!(44))]
#[case::discount_exceeds_gross(dec!(1), dec!(100), dec!(150), dec!(20), dec!(-60))]
fn line_total_cases(
    #[case] miktar: Decimal,
    #[case] birim_fiyat: Decimal,
    #[case] indirim: Decimal,
    #[case] kdv: Decimal,
    #[case] expected: Decimal,
) {
    let t = kalem_totals(&line(miktar, birim_fiyat, indirim, kdv));
    assert_eq!(t.toplam, expected);
}

#[test]
fn grand_total_sums_line_totals() {
    let lines = [
        kalem_totals(&line(dec!(2), dec!(100), dec!(10), dec!(20))),
        kalem_totals(&line(dec!(1), dec!(72), dec!(0), dec!(0))),
    ];
    assert_eq!(grand_total(&lines), dec!(300));
}

#[test]
fn grand_total_of_nothing_is_zero() {
    assert_eq!(grand_total(&[]), Decimal::ZERO);
}

proptest! {
    #[test]
    fn tutar_is_quantity_times_unit_price(
        miktar in 1i64..10_000,
        birim_fiyat in 0i64..1_000_000,
        indirim in 0i64..1_000,
        kdv in 0i64..=100,
    ) {
        let input = line(
            Decimal::from(miktar),
            Decimal::from(birim_fiyat),
            Decimal::from(indirim),
            Decimal::from(kdv),
        );
        let t = kalem_totals(&input);
        prop_assert_eq!(t.tutar, input.miktar * input.birim_fiyat);
        prop_assert_eq!(t.net_tutar, t.tutar - input.indirim);
        prop_assert_eq!(t.toplam, t.net_tutar + t.kdv_tutari);
    }

    #[test]
    fn zero_discount_keeps_net_equal_to_gross(
        miktar in 1i64..10_000,
        birim_fiyat in 0i64..1_000_000,
    ) {
        let t = kalem_totals(&line(
            Decimal::from(miktar),
            Decimal::from(birim_fiyat),
            Decimal::ZERO,
            dec!(20),
        ));
        prop_assert_eq!(t.net_tutar, t.tutar);
    }
}
