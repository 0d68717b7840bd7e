use plusar::prelude::*;

#[test]
fn test_from_iter_literal() {
    assert_eq!(from_iter([42]).collect(), Ok(42));
}

#[test]
fn test_from_iter_yields_in_order_then_absent() {
    let mut s = from_iter(vec![1, 2, 3]);
    assert_eq!(s.next(), 1);
    assert_eq!(s.next(), 2);
    assert_eq!(s.next(), 3);
    for _ in 0..3 {
        assert!(!s.next().has_value());
    }
}

#[test]
fn test_from_iter_range() {
    assert_eq!(from_iter(0..5).to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_make_stream_from_producer() {
    let mut remaining = 3;
    let result = make_stream(move || {
        if remaining == 0 {
            return Optional::none();
        }
        remaining -= 1;
        make_optional(remaining)
    })
    .to_vec();
    assert_eq!(result, vec![2, 1, 0]);
}

#[test]
fn test_make_stream_calls_producer_once_per_pull() {
    let mut calls = 0;
    {
        let mut s = make_stream(|| {
            calls += 1;
            make_optional(calls)
        });
        assert_eq!(s.next(), 1);
        assert_eq!(s.next(), 2);
    }
    assert_eq!(calls, 2);
}

#[test]
fn test_empty() {
    let result: Vec<i32> = empty::<i32>().to_vec();
    assert_eq!(result, Vec::<i32>::new());
}

#[test]
fn test_once() {
    let mut s = once(42);
    assert_eq!(s.next(), 42);
    assert!(!s.next().has_value());
}

#[test]
fn test_repeat() {
    assert_eq!(repeat(42).take(5).to_vec(), vec![42, 42, 42, 42, 42]);
}

#[test]
fn test_repeat_with() {
    let mut n = 1;
    let powers = repeat_with(move || {
        let v = n;
        n *= 2;
        v
    })
    .take(5)
    .to_vec();
    assert_eq!(powers, vec![1, 2, 4, 8, 16]);
}

#[test]
fn test_boxed_stream() {
    let mut boxed: Box<dyn Stream<Item = i32>> = Box::new(from_iter([1, 2]));
    assert_eq!(boxed.next(), 1);
    assert_eq!(boxed.to_vec(), vec![2]);
}
