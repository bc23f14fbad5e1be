// crates/shared-kernel/tests/way_count_text.rs
use num_bigint::BigUint;
use stair_ways_shared_kernel::WayCount;

#[test]
fn display_is_plain_decimal() {
    let big = WayCount::new(BigUint::from(2u32).pow(70));
    assert_eq!(big.to_string(), "1180591620717411303424");
}

#[test]
fn parses_with_surrounding_whitespace() {
    let ways: WayCount = " 31489\n".parse().expect("parses");
    assert_eq!(ways, 31_489u64);
    assert!("-1".parse::<WayCount>().is_err());
    assert!("many".parse::<WayCount>().is_err());
}

#[test]
fn default_and_one() {
    assert_eq!(WayCount::default(), 0u64);
    assert_eq!(WayCount::one(), 1u64);
    assert_eq!(BigUint::from(WayCount::from(7)), BigUint::from(7u32));
}
