use exact_arithmetic_coding::decimal::round_to;
use exact_arithmetic_coding::{
    Alphabet, EncodeError, Encoder, Interval, ModelError, ProbabilityModel, build_model,
    build_segments, encode, encode_sequence,
};
use num::{BigInt, BigRational, One, Zero};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::Rng;

/// A non-empty message over a small alphabet, so that symbols repeat and
/// frequency ties are common.
#[derive(Debug, Clone)]
struct Message(Vec<char>);

const LETTERS: &[char] = &['a', 'b', 'c', 'd', 'e', 'f'];

impl Arbitrary for Message {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut picks = Vec::<u8>::arbitrary(g);

        // Ensure that at least one symbol is present
        picks.push(u8::arbitrary(g));

        Message(
            picks
                .into_iter()
                .map(|p| LETTERS[p as usize % LETTERS.len()])
                .collect(),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|symbols| !symbols.is_empty())
                .map(Message),
        )
    }
}

fn random_message(length: usize) -> Vec<char> {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())])
        .collect()
}

#[quickcheck]
fn probabilities_sum_to_one(message: Message) -> bool {
    let model = build_model(message.0).unwrap();
    model
        .probabilities()
        .fold(BigRational::zero(), |acc, (_, p)| acc + p)
        .is_one()
}

#[quickcheck]
fn order_is_strict(message: Message) -> bool {
    let model = build_model(message.0).unwrap();
    model.stats().windows(2).all(|pair| {
        pair[0].count > pair[1].count
            || (pair[0].count == pair[1].count && pair[0].first_index < pair[1].first_index)
    })
}

#[quickcheck]
fn first_index_is_first_occurrence(message: Message) -> bool {
    let model = build_model(message.0.iter().copied()).unwrap();
    model.stats().iter().all(|stat| {
        message.0.iter().position(|&s| s == stat.symbol) == Some(stat.first_index)
            && message.0.iter().filter(|&&s| s == stat.symbol).count() == stat.count
    })
}

#[quickcheck]
fn segments_partition_unit_interval(message: Message) -> bool {
    let model = build_model(message.0).unwrap();
    let segments = build_segments(&model);

    let mut cursor = BigRational::zero();
    for (segment, (symbol, probability)) in segments.iter().zip(model.probabilities()) {
        if segment.symbol != symbol
            || segment.left != cursor
            || segment.width() != probability
        {
            return false;
        }
        cursor = segment.right.clone();
    }
    segments.len() == model.distinct() && cursor.is_one()
}

#[quickcheck]
fn trace_is_nested(message: Message) -> bool {
    let segments = build_segments(&build_model(message.0.iter().copied()).unwrap());
    let (code, trace) = encode(&segments, message.0.iter().copied()).unwrap();

    let mut previous = Interval::unit();
    for (step, &symbol) in trace.iter().zip(&message.0) {
        let current = step.interval();
        if step.symbol != symbol
            || current.left >= current.right
            || !current.is_within(&previous)
        {
            return false;
        }
        previous = current;
    }
    trace.len() == message.0.len() && previous.contains(code.value())
}

#[quickcheck]
fn encoding_is_deterministic(message: Message) -> bool {
    let first = encode_sequence(&message.0).unwrap();
    let second = encode_sequence(&message.0).unwrap();
    first.0 == second.0 && first.1 == second.1
}

#[quickcheck]
fn code_width_matches_product_of_probabilities(message: Message) -> bool {
    let (model, encoding) = encode_sequence(&message.0).unwrap();
    let expected = message
        .0
        .iter()
        .fold(BigRational::one(), |acc, s| acc * model.probability(s));
    encoding.interval.width() == expected
}

#[quickcheck]
fn rounded_code_identifies_interval(message: Message) -> bool {
    let (_, encoding) = encode_sequence(&message.0).unwrap();
    let digits = encoding.min_code_digits().unwrap();
    let rounded = round_to(encoding.code.value(), digits);
    let coarser = digits
        .checked_sub(1)
        .map(|d| round_to(encoding.code.value(), d));

    encoding.interval.contains(&rounded)
        && coarser.is_none_or(|c| !encoding.interval.contains(&c))
}

#[quickcheck]
fn unknown_symbol_aborts(message: Message, position: usize) -> bool {
    let segments = build_segments(&build_model(message.0.iter().copied()).unwrap());
    let mut input = message.0.clone();
    let position = position % (input.len() + 1);
    input.insert(position, 'z');

    encode(&segments, input)
        == Err(EncodeError::UnknownSymbol {
            symbol: 'z',
            position,
        })
}

#[test]
fn empty_input_has_no_model() {
    assert_eq!(build_model(Vec::<char>::new()), Err(ModelError::EmptyInput));
    assert!(matches!(
        encode_sequence::<u8>(&[]),
        Err(exact_arithmetic_coding::Error::Model(ModelError::EmptyInput))
    ));
}

#[test_log::test]
fn three_symbol_scenario() {
    let model = build_model("AAB".chars()).unwrap();
    let third = |n: i64| BigRational::new(BigInt::from(n), BigInt::from(3));
    assert_eq!(
        model.probabilities().collect::<Vec<_>>(),
        vec![('A', third(2)), ('B', third(1))]
    );

    let (code, trace) = encode(&build_segments(&model), "AAB".chars()).unwrap();
    assert_eq!(trace.len(), 3);
    assert_eq!(
        trace[2].interval(),
        Interval {
            left: BigRational::new(BigInt::from(8), BigInt::from(27)),
            right: BigRational::new(BigInt::from(4), BigInt::from(9)),
        }
    );
    assert_eq!(code.to_string(), "10/27");
}

#[test_log::test]
fn long_random_messages_stay_exact() {
    for length in [200, 1000, 3000, 6000] {
        let message = random_message(length);
        let model = ProbabilityModel::build(message.iter().copied()).unwrap();
        let encoding = Encoder::from_alphabet(&model)
            .encode(message.iter().copied())
            .unwrap();

        assert_eq!(encoding.trace.len(), length);
        let last = encoding.trace.last().unwrap();
        assert!(last.left < last.right);
        assert!(encoding.interval.contains(encoding.code.value()));

        let digits = encoding.min_code_digits().unwrap();
        let rounded = round_to(encoding.code.value(), digits);
        assert!(encoding.interval.contains(&rounded));
        assert_eq!(model.total_interval_width(), length);
    }
}
