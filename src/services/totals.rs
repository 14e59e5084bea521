//! Quote line-item totals calculator.
//!
//! Pure `Decimal` arithmetic, full precision throughout; rounding to the
//! currency's display precision is the client's concern. A discount larger
//! than the line gross is allowed and drives the net (and the totals built
//! on it) negative.

use rust_decimal::Decimal;

/// Raw line input as submitted with a quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalemInput {
    pub miktar: Decimal,
    pub birim_fiyat: Decimal,
    pub indirim: Decimal,
    /// VAT percentage in [0, 100].
    pub kdv_orani: Decimal,
}

/// Derived amounts for one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalemTotals {
    /// miktar x birim_fiyat, before discount.
    pub tutar: Decimal,
    /// tutar - indirim. May be negative.
    pub net_tutar: Decimal,
    /// net_tutar x kdv_orani / 100.
    pub kdv_tutari: Decimal,
    /// net_tutar + kdv_tutari.
    pub toplam: Decimal,
}

/// Computes the derived amounts for a single line item.
pub fn kalem_totals(input: &KalemInput) -> KalemTotals {
    let tutar = input.miktar * input.birim_fiyat;
    let net_tutar = tutar - input.indirim;
    let kdv_tutari = net_tutar * input.kdv_orani / Decimal::from(100);
    let toplam = net_tutar + kdv_tutari;

    KalemTotals {
        tutar,
        net_tutar,
        kdv_tutari,
        toplam,
    }
}

/// Grand total of a quote: the sum of its lines' gross totals.
pub fn grand_total<'a, I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = &'a KalemTotals>,
{
    lines.into_iter().map(|l| l.toplam).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(miktar: Decimal, birim_fiyat: Decimal, indirim: Decimal, kdv: Decimal) -> KalemInput {
        KalemInput {
            miktar,
            birim_fiyat,
            indirim,
            kdv_orani: kdv,
        }
    }

    #[test]
    fn reference_fixture() {
        // 2 x 100, 10 discount, 20% VAT
        let t = kalem_totals(&input(dec!(2), dec!(100), dec!(10), dec!(20)));
        assert_eq!(t.tutar, dec!(200));
        assert_eq!(t.net_tutar, dec!(190));
        assert_eq!(t.kdv_tutari, dec!(38));
        assert_eq!(t.toplam, dec!(228));
    }

    #[test]
    fn zero_vat_and_zero_discount() {
        let t = kalem_totals(&input(dec!(3), dec!(50), dec!(0), dec!(0)));
        assert_eq!(t.net_tutar, dec!(150));
        assert_eq!(t.kdv_tutari, dec!(0));
        assert_eq!(t.toplam, dec!(150));
    }

    #[test]
    fn fractional_quantity_keeps_precision() {
        let t = kalem_totals(&input(dec!(1.5), dec!(99.90), dec!(0), dec!(18)));
        assert_eq!(t.tutar, dec!(149.85));
        assert_eq!(t.net_tutar, dec!(149.85));
        assert_eq!(t.kdv_tutari, dec!(26.9730));
        assert_eq!(t.toplam, dec!(176.8230));
    }

    #[test]
    fn discount_larger_than_gross_goes_negative() {
        let t = kalem_totals(&input(dec!(1), dec!(100), dec!(150), dec!(20)));
        assert_eq!(t.net_tutar, dec!(-50));
        assert_eq!(t.toplam, dec!(-60));
    }

    #[test]
    fn grand_total_sums_line_totals() {
        let lines: Vec<KalemTotals> = [
            input(dec!(2), dec!(100), dec!(10), dec!(20)),
            input(dec!(1), dec!(500), dec!(0), dec!(18)),
            input(dec!(4), dec!(25), dec!(0), dec!(0)),
        ]
        .iter()
        .map(kalem_totals)
        .collect();

        assert_eq!(grand_total(&lines), dec!(228) + dec!(590) + dec!(100));
    }

    #[test]
    fn grand_total_of_no_lines_is_zero() {
        assert_eq!(grand_total([].iter()), Decimal::ZERO);
    }
}
