use plusar::prelude::*;
use quickcheck::{quickcheck, TestResult};

quickcheck! {
    fn prop_collect_into_preserves_sequence(xs: Vec<i32>) -> bool {
        let mut sink = Vec::new();
        from_iter(xs.clone()).collect_into(&mut sink);
        sink == xs
    }

    fn prop_take_yields_prefix(xs: Vec<i32>, n: u8) -> bool {
        let n = n as usize;
        let taken = from_iter(xs.clone()).take(n).to_vec();
        taken == xs[..n.min(xs.len())]
    }

    fn prop_skip_yields_suffix(xs: Vec<i32>, n: u8) -> bool {
        let n = n as usize;
        let rest = from_iter(xs.clone()).skip(n).to_vec();
        if n <= xs.len() { rest == xs[n..] } else { rest.is_empty() }
    }

    fn prop_map_matches_iterator(xs: Vec<i32>) -> bool {
        let mapped = from_iter(xs.clone()).map(|x| x.wrapping_mul(3)).to_vec();
        mapped == xs.iter().map(|x| x.wrapping_mul(3)).collect::<Vec<_>>()
    }

    fn prop_filter_keeps_matching_in_order(xs: Vec<i32>) -> bool {
        let kept = from_iter(xs.clone()).filter(|x| x % 3 != 0).to_vec();
        kept == xs.iter().copied().filter(|x| x % 3 != 0).collect::<Vec<_>>()
    }

    fn prop_reduce_is_left_fold_once(xs: Vec<i64>, z: i64) -> bool {
        let mut s = from_iter(xs.clone()).reduce(z, |acc, x| acc.wrapping_sub(x));
        let expected = xs.iter().fold(z, |acc, x| acc.wrapping_sub(*x));
        s.collect() == Ok(expected) && s.collect() == Err(StreamError::EmptyAccess)
    }

    fn prop_zip_length_is_min(xs: Vec<i32>, ys: Vec<i32>) -> bool {
        let mut s = from_iter(xs.clone()).zip(from_iter(ys.clone()), |a, b| (a, b));
        let zipped = s.to_vec();
        let expected: Vec<(i32, i32)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        zipped == expected && s.collect() == Err(StreamError::EmptyAccess)
    }

    fn prop_slice_matches_indexing(xs: Vec<u8>, start: u8, end: u8, step: u8) -> TestResult {
        let (start, end, step) = (start as usize % 40, end as usize % 40, step as usize % 6);
        let sliced = from_iter(xs.clone()).slice(start, end, step).to_vec();

        let step = step.max(1);
        let end = end.max(start).min(xs.len());
        let expected: Vec<u8> = if start >= end {
            Vec::new()
        } else {
            xs[start..end].iter().copied().step_by(step).collect()
        };
        TestResult::from_bool(sliced == expected)
    }

    fn prop_has_value_is_idempotent(x: Option<i32>) -> bool {
        let o = Optional::from(x);
        let first = o.has_value();
        (0..4).all(|_| o.has_value() == first) && first == x.is_some()
    }
}
