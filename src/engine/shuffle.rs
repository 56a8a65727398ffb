use crate::domain::deck::Deck;
use crate::engine::RandomSource;

/// Каноническая колода: 52 карты, масть→ранг, без случайности.
pub fn create_deck() -> Deck {
    Deck::standard_52()
}

/// Тасовка Фишера–Йетса (Дурстенфельд) поверх копии колоды.
///
/// Для i от последнего индекса до 1: j равномерно из [0, i], swap(i, j).
/// Исходная колода не меняется.
pub fn shuffle_deck<R: RandomSource>(deck: &Deck, rng: &mut R) -> Deck {
    let mut cards = deck.cards.clone();
    for i in (1..cards.len()).rev() {
        let j = rng.index_up_to(i);
        cards.swap(i, j);
    }
    Deck::from_cards(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RNG, который всегда возвращает верхнюю границу: swap(i, i) — колода не меняется.
    struct Identity;

    impl RandomSource for Identity {
        fn index_up_to(&mut self, upper: usize) -> usize {
            upper
        }
    }

    /// RNG, который всегда возвращает 0.
    struct AlwaysZero;

    impl RandomSource for AlwaysZero {
        fn index_up_to(&mut self, _upper: usize) -> usize {
            0
        }
    }

    #[test]
    fn upper_bound_draws_keep_order() {
        let deck = create_deck();
        let shuffled = shuffle_deck(&deck, &mut Identity);
        assert_eq!(shuffled, deck);
    }

    #[test]
    fn zero_draws_rotate_deck() {
        // swap(i, 0) для i = n-1..1 сдвигает колоду: [0,1,2,...] -> [1,2,...,n-1,0]
        let deck = create_deck();
        let shuffled = shuffle_deck(&deck, &mut AlwaysZero);

        assert_eq!(shuffled.cards[51], deck.cards[0]);
        assert_eq!(&shuffled.cards[..51], &deck.cards[1..]);
    }
}
