use plusar::prelude::*;

fn naturals() -> impl Stream<Item = u32> + Clone {
    let mut n = 0;
    make_stream(move || {
        let v = n;
        n += 1;
        make_optional(v)
    })
}

/// Yields 1, then absent, then 3, 4, ... forever
fn resuming() -> impl Stream<Item = u32> {
    let mut n = 0;
    make_stream(move || {
        n += 1;
        if n == 2 { Optional::none() } else { make_optional(n) }
    })
}

#[test]
fn test_counted_counts_own_yields() {
    let mut s = naturals().skip(5).counted();
    assert_eq!(s.count(), 0);
    s.next();
    s.next();
    assert_eq!(s.count(), 2);
}

#[test]
fn test_counted_ignores_absent_pulls() {
    let mut s = from_iter([1, 2, 3]).counted();
    assert_eq!(s.to_vec(), vec![1, 2, 3]);
    assert!(!s.next().has_value());
    assert!(!s.next().has_value());
    assert_eq!(s.count(), 3);
}

#[test]
fn test_counted_downstream_of_filter() {
    let mut s = naturals().take(10).filter(|x| x % 3 == 0).counted();
    let mut sink = Vec::new();
    s.collect_into(&mut sink);
    assert_eq!(sink, vec![0, 3, 6, 9]);
    assert_eq!(s.count(), 4);
}

#[test]
fn test_raw_producer_is_not_fused() {
    let mut s = resuming();
    assert_eq!(s.next(), 1);
    assert!(!s.next().has_value());
    assert_eq!(s.next(), 3);
}

#[test]
fn test_fuse() {
    let mut s = resuming().fuse();
    assert!(!s.is_done());
    assert_eq!(s.next(), 1);
    assert!(!s.next().has_value());
    assert!(s.is_done());
    assert!(!s.next().has_value());
}

#[test]
fn test_slice_latches() {
    let mut s = resuming().slice_to_end(0, 1);
    assert_eq!(s.to_vec(), vec![1]);
    assert!(!s.next().has_value());
}

#[test]
fn test_inspect() {
    let mut seen = Vec::new();
    let doubled = from_iter([1, 2, 3])
        .inspect(|x| seen.push(*x))
        .map(|x| x * 2)
        .to_vec();
    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_trace_is_transparent() {
    let mut s = from_iter([1, 2]).trace("numbers");
    assert_eq!(s.to_vec(), vec![1, 2]);
    assert!(!s.next().has_value());
}

#[test]
fn test_into_iterator() {
    let total: u32 = naturals().take(4).into_iterator().sum();
    assert_eq!(total, 6);
    let evens: Vec<u32> = naturals().into_iterator().filter(|x| x % 2 == 0).take(3).collect();
    assert_eq!(evens, vec![0, 2, 4]);
}

#[test]
fn test_cloned_streams_do_not_share_cursor() {
    let mut original = naturals().map(|x| x * 10);
    assert_eq!(original.next(), 0);

    let mut fork = original.clone();
    assert_eq!(fork.next(), 10);
    assert_eq!(fork.next(), 20);

    // the original is unaffected by pulls on the fork
    assert_eq!(original.next(), 10);
}

#[test]
fn test_cloned_counters_are_independent() {
    let mut a = naturals().take(3).counted();
    a.next();
    let mut b = a.clone();
    b.next();
    b.next();
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 3);
    assert_eq!(a.to_vec(), vec![1, 2]);
}
