use flip7_engine::cards::{build_fresh_deck, Card, CardKind};
use flip7_engine::rules::{compute_round_score, has_second_chance, is_bust, resolve_second_chance};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn number_plus_addition_doubled() {
    let hand = [Card::number(0, 3), Card::addition(1, 4), Card::multiplier(2)];
    assert_eq!(compute_round_score(&hand), 14);
}

#[test]
fn seven_distinct_numbers_earn_bonus() {
    let hand: Vec<Card> = (1..=7u8).map(|v| Card::number(v as u16, v)).collect();
    assert_eq!(compute_round_score(&hand), 43);
}

#[test]
fn six_numbers_earn_no_bonus() {
    let hand: Vec<Card> = (1..=6u8).map(|v| Card::number(v as u16, v)).collect();
    assert_eq!(compute_round_score(&hand), 21);
}

#[test]
fn score_law_holds_for_random_hands() {
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    for _ in 0..500 {
        let deck = build_fresh_deck(&mut rng);
        let len = rng.random_range(0..=12);
        let hand = &deck[..len];

        let s: u32 = hand
            .iter()
            .filter(|c| c.kind == CardKind::Number)
            .map(|c| c.value as u32)
            .sum();
        let a: u32 = hand
            .iter()
            .filter(|c| c.kind == CardKind::Addition)
            .map(|c| c.value as u32)
            .sum();
        let m = hand.iter().any(|c| c.kind == CardKind::Multiplier);
        let n = hand.iter().filter(|c| c.kind == CardKind::Number).count();
        let expected = (s + a) * if m { 2 } else { 1 } + if n == 7 { 15 } else { 0 };
        assert_eq!(compute_round_score(hand), expected, "hand {:?}", hand);
    }
}

#[test]
fn bust_iff_number_value_repeats() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..500 {
        let deck = build_fresh_deck(&mut rng);
        let len = rng.random_range(0..=10);
        let (hand, rest) = deck.split_at(len);
        let incoming = rest[0];
        let expected = incoming.kind == CardKind::Number
            && hand
                .iter()
                .any(|c| c.kind == CardKind::Number && c.value == incoming.value);
        assert_eq!(is_bust(hand, &incoming), expected);
    }
}

#[test]
fn second_chance_consumes_one_copy_at_a_time() {
    let hand = vec![
        Card::action(0, CardKind::SecondChance),
        Card::number(1, 9),
        Card::action(2, CardKind::SecondChance),
        Card::number(3, 9),
    ];
    let first = resolve_second_chance(&hand, 3);
    assert_eq!(first.removed_cards, vec![hand[0], hand[3]]);
    assert_eq!(first.remaining_hand, vec![hand[1], hand[2]]);
    assert!(has_second_chance(&first.remaining_hand));

    let mut again = first.remaining_hand.clone();
    again.push(Card::number(4, 9));
    let second = resolve_second_chance(&again, 4);
    assert_eq!(second.remaining_hand, vec![hand[1]]);
    assert!(!has_second_chance(&second.remaining_hand));
}

#[test]
fn rules_do_not_mutate_input() {
    let hand = vec![Card::action(0, CardKind::SecondChance), Card::number(1, 2)];
    let before = hand.clone();
    let _ = resolve_second_chance(&hand, 1);
    let _ = compute_round_score(&hand);
    let _ = is_bust(&hand, &Card::number(2, 2));
    assert_eq!(hand, before);
}
