use crate::cards::{Card, CardId, CardKind};

/// Number cards needed for the seven-card bonus; also ends the turn.
pub const HAND_LIMIT: usize = 7;

/// Flat bonus for holding [`HAND_LIMIT`] number cards.
pub const SEVEN_CARD_BONUS: u32 = 15;

/// Cards taken out of a hand by a Second Chance mitigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondChanceResolution {
    /// The hand with both cards removed, other cards in their original order.
    pub remaining_hand: Vec<Card>,
    /// The consumed Second Chance card and the bust card, in hand order.
    pub removed_cards: Vec<Card>,
}

/// True iff `incoming` is a number card whose value is already in `hand`.
///
/// # Examples
///
/// ```
/// use flip7_engine::cards::{Card, CardKind};
/// use flip7_engine::rules::is_bust;
///
/// let hand = [Card::number(0, 5), Card::action(1, CardKind::Freeze)];
/// assert!(is_bust(&hand, &Card::number(2, 5)));
/// assert!(!is_bust(&hand, &Card::number(3, 6)));
/// assert!(!is_bust(&hand, &Card::action(4, CardKind::Freeze)));
/// ```
pub fn is_bust(hand: &[Card], incoming: &Card) -> bool {
    incoming.is_number()
        && hand
            .iter()
            .any(|c| c.is_number() && c.value == incoming.value)
}

pub fn has_second_chance(hand: &[Card]) -> bool {
    hand.iter().any(|c| c.kind == CardKind::SecondChance)
}

pub fn has_freeze(hand: &[Card]) -> bool {
    hand.iter().any(|c| c.kind == CardKind::Freeze)
}

pub fn has_flip_three(hand: &[Card]) -> bool {
    hand.iter().any(|c| c.kind == CardKind::FlipThree)
}

pub fn has_multiplier(hand: &[Card]) -> bool {
    hand.iter().any(|c| c.kind == CardKind::Multiplier)
}

/// Face values of the number cards in hand order.
pub fn number_card_values(hand: &[Card]) -> Vec<u8> {
    hand.iter()
        .filter(|c| c.is_number())
        .map(|c| c.value)
        .collect()
}

pub fn number_card_count(hand: &[Card]) -> usize {
    hand.iter().filter(|c| c.is_number()).count()
}

/// Removes the first Second Chance card and the card with id `bust_card_id`.
///
/// Only one Second Chance is consumed per call. If either card is missing
/// nothing is removed for it; callers only invoke this after checking
/// [`has_second_chance`] and placing the bust card in the hand.
pub fn resolve_second_chance(hand: &[Card], bust_card_id: CardId) -> SecondChanceResolution {
    let second_chance_id = hand
        .iter()
        .find(|c| c.kind == CardKind::SecondChance)
        .map(|c| c.id);

    let (removed_cards, remaining_hand): (Vec<Card>, Vec<Card>) = hand
        .iter()
        .partition(|c| c.id == bust_card_id || Some(c.id) == second_chance_id);

    SecondChanceResolution {
        remaining_hand,
        removed_cards,
    }
}

/// Round score for a hand.
///
/// Sum of number and addition values, doubled if a multiplier is present,
/// then +15 when the hand holds exactly seven number cards. The bonus is
/// never doubled.
///
/// # Examples
///
/// ```
/// use flip7_engine::cards::Card;
/// use flip7_engine::rules::compute_round_score;
///
/// let hand = [Card::number(0, 3), Card::addition(1, 4), Card::multiplier(2)];
/// assert_eq!(compute_round_score(&hand), 14);
/// ```
pub fn compute_round_score(hand: &[Card]) -> u32 {
    let sum: u32 = hand
        .iter()
        .filter(|c| matches!(c.kind, CardKind::Number | CardKind::Addition))
        .map(|c| u32::from(c.value))
        .sum();
    let doubled = if has_multiplier(hand) { sum * 2 } else { sum };
    if number_card_count(hand) == HAND_LIMIT {
        doubled + SEVEN_CARD_BONUS
    } else {
        doubled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[u8]) -> Vec<Card> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Card::number(i as CardId, v))
            .collect()
    }

    #[test]
    fn non_number_cards_never_bust() {
        let hand = vec![
            Card::addition(0, 4),
            Card::multiplier(1),
            Card::action(2, CardKind::Freeze),
            Card::action(3, CardKind::FlipThree),
            Card::action(4, CardKind::SecondChance),
        ];
        assert!(!is_bust(&hand, &Card::addition(10, 4)));
        assert!(!is_bust(&hand, &Card::multiplier(11)));
        assert!(!is_bust(&hand, &Card::action(12, CardKind::Freeze)));
        assert!(!is_bust(&hand, &Card::action(13, CardKind::FlipThree)));
        assert!(!is_bust(&hand, &Card::action(14, CardKind::SecondChance)));
    }

    #[test]
    fn number_matching_addition_value_is_not_bust() {
        let hand = vec![Card::addition(0, 4)];
        assert!(!is_bust(&hand, &Card::number(1, 4)));
    }

    #[test]
    fn zero_duplicates_bust() {
        let hand = numbers(&[0]);
        assert!(is_bust(&hand, &Card::number(50, 0)));
    }

    #[test]
    fn score_sum_then_double_then_bonus() {
        let mut hand = numbers(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(compute_round_score(&hand), 28 + 15);

        hand.push(Card::multiplier(20));
        assert_eq!(compute_round_score(&hand), 28 * 2 + 15);

        hand.push(Card::addition(21, 10));
        assert_eq!(compute_round_score(&hand), (28 + 10) * 2 + 15);
    }

    #[test]
    fn action_cards_score_nothing() {
        let hand = vec![
            Card::number(0, 9),
            Card::action(1, CardKind::Freeze),
            Card::action(2, CardKind::FlipThree),
            Card::action(3, CardKind::SecondChance),
        ];
        assert_eq!(compute_round_score(&hand), 9);
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(compute_round_score(&[]), 0);
        assert!(number_card_values(&[]).is_empty());
    }

    #[test]
    fn second_chance_removes_exactly_two_and_keeps_order() {
        let hand = vec![
            Card::number(0, 9),
            Card::action(1, CardKind::SecondChance),
            Card::addition(2, 6),
            Card::action(3, CardKind::SecondChance),
            Card::number(4, 9),
        ];
        let res = resolve_second_chance(&hand, 4);
        assert_eq!(res.remaining_hand.len(), hand.len() - 2);
        assert_eq!(
            res.remaining_hand.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![0, 2, 3]
        );
        assert_eq!(
            res.removed_cards.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 4]
        );
        assert!(has_second_chance(&res.remaining_hand));
    }

    #[test]
    fn predicates() {
        let hand = vec![
            Card::number(0, 3),
            Card::action(1, CardKind::Freeze),
            Card::number(2, 8),
        ];
        assert!(has_freeze(&hand));
        assert!(!has_flip_three(&hand));
        assert!(!has_second_chance(&hand));
        assert_eq!(number_card_values(&hand), vec![3, 8]);
        assert_eq!(number_card_count(&hand), 2);
    }
}
