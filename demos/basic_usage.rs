use plusar::prelude::*;

fn main() {
    let v = make_stream(|| make_optional((1, 2)))
        .skip(10)
        .map(|(a, b)| a + b)
        .take(10)
        .map(|v| v * v)
        .reduce(0, |acc, v| acc + v)
        .collect();

    match v {
        Ok(v) => {
            assert_eq!(v, 90);
            println!(
                "make_stream(|| make_optional((1, 2)))\n\
                 \x20   .skip(10)\n\
                 \x20   .map(|(a, b)| a + b)\n\
                 \x20   .take(10)\n\
                 \x20   .map(|v| v * v)\n\
                 \x20   .reduce(0, |acc, v| acc + v)\n\
                 \x20   .collect() == {}",
                v
            );
        }
        Err(e) => eprintln!("pipeline produced no value: {}", e),
    }
}
