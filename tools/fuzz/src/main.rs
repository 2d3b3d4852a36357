use afl::fuzz;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tax_id::{
    compute_check_digit, to_human_form, to_machine_form, verify, verify_bytes, Country, Validator,
    TAX_ID_LENGTH,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;

    // must not panic on arbitrary bytes
    let bytes_verdict = verify_bytes(input);
    let input_str = std::str::from_utf8(input).ok()?;
    assert_eq!(bytes_verdict, verify(input_str));

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    run_fuzz(input_str, StdRng::seed_from_u64(rng_seed));

    Some(())
}

fn gen_payload(rng: &mut StdRng) -> String {
    let first = rng.gen_range(1..10u8);
    std::iter::once(first)
        .chain((1..TAX_ID_LENGTH - 1).map(|_| rng.gen_range(0..10u8)))
        .map(|digit| char::from(b'0' + digit))
        .collect()
}

fn has_one_repeated_digit(payload: &str) -> bool {
    ('0'..='9')
        .filter(|digit| matches!(payload.matches(*digit).count(), 2 | 3))
        .count()
        == 1
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let verdict = verify(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input char count: {:?}", input.chars().count());
        println!("Verdict: {:?}", verdict);
    }

    assert_eq!(verdict, Country::Germany.is_valid_match(input));
    if verdict {
        assert_eq!(to_machine_form(input), input);
    }

    let machine_form = to_machine_form(input);
    assert_eq!(to_machine_form(&machine_form), machine_form);
    let human_form = to_human_form(&machine_form, Some(Country::Germany)).unwrap();
    assert_eq!(to_machine_form(&human_form), machine_form);

    let payload = gen_payload(&mut rng);
    let check_digit = compute_check_digit(&payload).unwrap();
    let tax_id = format!("{}{}", payload, check_digit);
    assert_eq!(verify(&tax_id), has_one_repeated_digit(&payload));

    let wrong_check_digit = (check_digit + rng.gen_range(1..10)) % 10;
    assert!(!verify(&format!("{}{}", payload, wrong_check_digit)));
}
