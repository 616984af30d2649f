//! Property-based tests for blade canonicalization and multivector
//! normalization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::basis::digit_of;
    use crate::{Blade, Multivector, Signature, Source};

    // Signatures with at least one direction
    fn signature() -> impl Strategy<Value = Signature> {
        (0i64..=3, 0i64..=3, 0i64..=3)
            .prop_filter("dimension must be positive", |(p, q, r)| p + q + r > 0)
            .prop_map(|(p, q, r)| Signature::new(p, q, r).unwrap())
    }

    // A signature with a shuffled selection of distinct indices
    fn distinct_indices() -> impl Strategy<Value = (Signature, Vec<u8>)> {
        signature().prop_flat_map(|sig| {
            let all: Vec<u8> = (0..u8::try_from(sig.dimension()).unwrap()).collect();
            let len = all.len();
            (
                Just(sig),
                proptest::sample::subsequence(all, 0..=len).prop_shuffle(),
            )
        })
    }

    // A signature with a raw index string that may repeat indices
    fn raw_indices() -> impl Strategy<Value = (Signature, String)> {
        signature().prop_flat_map(|sig| {
            let dim = u8::try_from(sig.dimension()).unwrap();
            (
                Just(sig),
                proptest::collection::vec(0..dim, 0..12)
                    .prop_map(|ordinals| ordinals.into_iter().map(digit_of).collect::<String>()),
            )
        })
    }

    fn coeff() -> impl Strategy<Value = i64> {
        prop_oneof![(-100i64..=-1i64), (1i64..=100i64)]
    }

    fn to_string(ordinals: &[u8]) -> String {
        ordinals.iter().copied().map(digit_of).collect()
    }

    fn inversions(ordinals: &[u8]) -> usize {
        let mut count = 0;
        for i in 0..ordinals.len() {
            for j in i + 1..ordinals.len() {
                if ordinals[i] > ordinals[j] {
                    count += 1;
                }
            }
        }
        count
    }

    proptest! {
        #[test]
        fn permutation_sign((sig, ordinals) in distinct_indices(), c in coeff()) {
            let blade = Blade::new(&to_string(&ordinals), c, sig).unwrap();

            let mut sorted = ordinals.clone();
            sorted.sort_unstable();
            let expected = if inversions(&ordinals) % 2 == 0 { c } else { -c };

            prop_assert_eq!(blade.indices().to_string(), to_string(&sorted));
            prop_assert_eq!(*blade.scalar(), expected);
        }

        #[test]
        fn canonical_form_is_idempotent((sig, raw) in raw_indices(), c in coeff()) {
            let blade = Blade::new(&raw, c, sig).unwrap();
            let again = Blade::new(&blade.indices().to_string(), *blade.scalar(), sig).unwrap();
            prop_assert_eq!(again, blade);
        }

        #[test]
        fn canonical_indices_strictly_increase((sig, raw) in raw_indices(), c in coeff()) {
            let blade = Blade::new(&raw, c, sig).unwrap();
            prop_assert!(blade.indices().ordinals().windows(2).all(|w| w[0] < w[1]));
            if blade.is_zero() {
                prop_assert!(blade.is_scalar());
            }
        }

        #[test]
        fn squares_follow_the_metric(sig in signature(), c in coeff(), pick in any::<prop::sample::Index>()) {
            let ordinal = u8::try_from(pick.index(sig.dimension())).unwrap();
            let digit = digit_of(ordinal);
            let blade = Blade::new(&format!("{digit}{digit}"), c, sig).unwrap();

            let form = sig.form(usize::from(ordinal)).unwrap();
            prop_assert!(blade.is_scalar());
            prop_assert_eq!(*blade.scalar(), c * i64::from(form.value()));
        }

        #[test]
        fn merge_is_order_independent(
            (sig, raws) in signature().prop_flat_map(|sig| {
                let dim = u8::try_from(sig.dimension()).unwrap();
                let term = (proptest::collection::vec(0..dim, 0..4), -5i64..5);
                (Just(sig), proptest::collection::vec(term, 0..8))
            }),
            seed in any::<u64>(),
        ) {
            let terms: Vec<(String, i64)> = raws
                .iter()
                .map(|(ordinals, c)| (to_string(ordinals), *c))
                .collect();

            let mut shuffled = terms.clone();
            if !shuffled.is_empty() {
                let len = shuffled.len();
                let shift = usize::try_from(seed % len as u64).unwrap();
                shuffled.rotate_left(shift);
                shuffled.reverse();
            }

            let a = Multivector::new(Source::Terms(terms), Some(sig)).unwrap();
            let b = Multivector::new(Source::Terms(shuffled), Some(sig)).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn stored_terms_are_nonzero((sig, raw) in raw_indices(), c in -3i64..3) {
            let mv = Multivector::new(
                Source::Terms(vec![(raw.clone(), c), (raw, 1), (String::new(), -1)]),
                Some(sig),
            ).unwrap();
            prop_assert!(mv.terms().all(|(_, c)| *c != 0));
        }

        #[test]
        fn additive_inverse((sig, raw) in raw_indices(), c in coeff()) {
            let mv = Multivector::new(Source::Term(raw, c), Some(sig)).unwrap();
            prop_assert!(mv.add(mv.neg().unwrap()).unwrap().is_zero());
        }

        #[test]
        fn addition_commutes(
            (sig, a) in raw_indices(),
            b in "[1-3]{0,4}",
            ca in coeff(),
            cb in coeff(),
        ) {
            prop_assume!(b.chars().all(|d| crate::basis::ordinal_of(d).is_some_and(|o| usize::from(o) < sig.dimension())));
            let x = Blade::new(&a, ca, sig).unwrap();
            let y = Blade::new(&b, cb, sig).unwrap();

            let xy = x.add(&y).unwrap().into_multivector();
            let yx = y.add(&x).unwrap().into_multivector();
            prop_assert_eq!(xy, yx);
        }
    }
}
