use ecgroup::{Curve, Point};
use num_bigint::BigUint;

fn main() {
    let curve = Curve::new(4, 7, 17).expect("non-singular curve");
    let p = Point::new(16, 11);

    let ord = curve.order_of_element(&p).expect("point on curve");
    let n = curve.order_of_group();
    println!("ord({}) = {}", p, ord);
    println!("|E| = {}", n);
    assert_eq!(&n % &ord, BigUint::from(0u32));

    let curve = Curve::new(2, 2, 17).expect("non-singular curve");
    let g = Point::new(5, 1);
    let mut multiple = Point::Identity;
    for k in 1u64..=19 {
        multiple = curve.add(&multiple, &g).expect("point on curve");
        assert_eq!(curve.mul_u64(&g, k).as_ref(), Ok(&multiple));
        println!("{:>2} * {} = {}", k, g, multiple);
    }

    let config = r#"{ "a": "2", "b": "2", "p": "17" }"#;
    let loaded: Curve = serde_json::from_str(config).expect("valid curve config");
    assert_eq!(loaded, curve);
}
