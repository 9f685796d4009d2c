//! Card, deck, hand and round tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    ActionError, Card, DECK_SIZE, Deck, Decision, EmptyDeckError, GameCountError, Hand, Outcome,
    Rank, Role, Round, RoundState, Suit, Winner, parse_game_count,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `draws` in the given order.
fn stacked(draws: &[Card]) -> Deck {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    Deck::from_cards(deck)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::player();
    hand.add_cards(ranks.iter().map(|&rank| card(Suit::Spades, rank)));
    hand
}

#[test]
fn card_renders_rank_and_suit() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A of spades");
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10 of hearts");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).to_string(), "Q of diamonds");
    assert_eq!(card(Suit::Clubs, Rank::King).value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Ace).value(), 11);
    assert_eq!(card(Suit::Clubs, Rank::Seven).value(), 7);
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn new_deck_is_in_canonical_order() {
    let deck = Deck::new();
    let cards = deck.cards();
    assert_eq!(cards[0], card(Suit::Spades, Rank::Ace));
    assert_eq!(cards[12], card(Suit::Spades, Rank::King));
    assert_eq!(cards[13], card(Suit::Clubs, Rank::Ace));
    assert_eq!(cards[26], card(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Diamonds, Rank::King));
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    let before: HashSet<Card> = Deck::new().cards().iter().copied().collect();
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
    assert_ne!(deck, Deck::new());
}

#[test]
fn shuffle_of_tiny_deck_is_harmless() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut empty = Deck::from_cards(Vec::new());
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let single = card(Suit::Hearts, Rank::Five);
    let mut one = Deck::from_cards(vec![single]);
    one.shuffle(&mut rng);
    assert_eq!(one.cards(), &[single]);
}

#[test]
fn deal_takes_cards_from_the_top_in_order() {
    let mut deck = Deck::new();
    let dealt = deck.deal(3).unwrap();

    assert_eq!(
        dealt,
        vec![
            card(Suit::Diamonds, Rank::King),
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Diamonds, Rank::Jack),
        ]
    );
    assert_eq!(deck.len(), DECK_SIZE - 3);
    assert!(!deck.cards().contains(&dealt[0]));
}

#[test]
fn deal_from_empty_deck_is_an_error() {
    let mut deck = Deck::from_cards(Vec::new());
    assert_eq!(
        deck.deal(1).unwrap_err(),
        EmptyDeckError {
            requested: 1,
            dealt: 0
        }
    );
}

#[test]
fn deal_past_the_end_reports_how_far_it_got() {
    let mut deck = stacked(&[card(Suit::Clubs, Rank::Two), card(Suit::Clubs, Rank::Three)]);
    assert_eq!(
        deck.deal(3).unwrap_err(),
        EmptyDeckError {
            requested: 3,
            dealt: 2
        }
    );
    assert!(deck.is_empty());
}

#[test]
fn deal_zero_cards_succeeds_on_empty_deck() {
    let mut deck = Deck::from_cards(Vec::new());
    assert_eq!(deck.deal(0).unwrap(), Vec::new());
}

#[test]
fn hand_values() {
    let blackjack = hand_of(&[Rank::Ace, Rank::Ten]);
    assert_eq!(blackjack.value(), 21);
    assert!(blackjack.is_blackjack());

    let two_aces = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(two_aces.value(), 21);
    assert!(two_aces.is_blackjack());

    // Only one ace is ever counted low.
    let two_aces_bust = hand_of(&[Rank::Ace, Rank::Ace, Rank::King]);
    assert_eq!(two_aces_bust.value(), 22);
    assert!(two_aces_bust.is_bust());

    let bust = hand_of(&[Rank::Ten, Rank::Ten, Rank::Five]);
    assert_eq!(bust.value(), 25);
    assert!(bust.is_bust());

    let soft = hand_of(&[Rank::Ace, Rank::Six, Rank::Five]);
    assert_eq!(soft.value(), 12);
    assert!(!soft.is_bust());

    let faces = hand_of(&[Rank::Jack, Rank::Queen, Rank::King]);
    assert_eq!(faces.value(), 30);

    assert_eq!(Hand::dealer().value(), 0);
}

#[test]
fn three_card_twenty_one_counts_as_blackjack() {
    let hand = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert!(hand.is_blackjack());
}

#[test]
fn add_cards_keeps_order() {
    let mut hand = Hand::player();
    hand.add_cards([card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Nine)]);
    hand.add_cards([card(Suit::Spades, Rank::Jack)]);

    assert_eq!(hand.len(), 3);
    assert_eq!(hand.cards()[0], card(Suit::Hearts, Rank::Two));
    assert_eq!(hand.cards()[2], card(Suit::Spades, Rank::Jack));
    assert_eq!(hand.role(), Role::Player);
}

#[test]
fn dealer_view_hides_hole_card_until_revealed() {
    let mut dealer = Hand::dealer();
    dealer.add_cards([card(Suit::Hearts, Rank::Nine), card(Suit::Clubs, Rank::Six)]);

    let hidden = dealer.view(false);
    assert_eq!(hidden.cards, vec![None, Some(card(Suit::Clubs, Rank::Six))]);
    assert_eq!(hidden.value, None);
    assert!(hidden.has_hidden());
    assert_eq!(hidden.to_string(), "Dealer's hand:\nhidden\n6 of clubs\n");

    let revealed = dealer.view(true);
    assert!(!revealed.has_hidden());
    assert_eq!(revealed.value, None);
}

#[test]
fn dealer_blackjack_is_never_hidden() {
    let mut dealer = Hand::dealer();
    dealer.add_cards([card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::King)]);

    assert!(!dealer.view(false).has_hidden());
}

#[test]
fn player_view_shows_every_card_and_value() {
    let mut player = Hand::player();
    player.add_cards([card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Four)]);

    let view = player.view(false);
    assert!(!view.has_hidden());
    assert_eq!(view.value, Some(15));
    assert_eq!(view.to_string(), "Your hand:\nA of hearts\n4 of clubs\nValue: 15\n");
}

#[test]
fn player_bust_means_dealer_wins() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Clubs, Rank::Six),
    ]));

    round.deal().unwrap();
    assert_eq!(round.state(), RoundState::PlayerTurn);

    let drawn = round.hit().unwrap();
    assert_eq!(drawn, card(Suit::Clubs, Rank::Six));
    assert_eq!(round.state(), RoundState::Done);

    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.player_value, 22);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.winner(), Winner::Dealer);
}

#[test]
fn player_blackjack_on_deal_ends_round() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Nine),
    ]));

    round.deal().unwrap();
    assert_eq!(round.state(), RoundState::Done);

    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBlackjack);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn dealer_blackjack_on_deal_wins_and_shows() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Queen),
    ]));

    round.deal().unwrap();
    assert_eq!(round.result().unwrap().outcome, Outcome::DealerBlackjack);
    assert!(!round.dealer_view().has_hidden());
}

#[test]
fn both_blackjack_is_a_tie() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Jack),
        card(Suit::Hearts, Rank::Queen),
    ]));

    round.deal().unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::BothBlackjack);
    assert_eq!(result.winner(), Winner::Tie);
}

#[test]
fn equal_values_push() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Jack),
    ]));

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(!round.is_hole_revealed());

    let drawn = round.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert!(round.is_hole_revealed());
    assert_eq!(round.state(), RoundState::Resolution);

    let result = round.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(round.state(), RoundState::Done);
}

#[test]
fn higher_final_value_wins() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Seven),
    ]));

    round.deal().unwrap();
    round.stand().unwrap();
    round.dealer_play().unwrap();
    let result = round.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.winner(), Winner::Player);
}

#[test]
fn dealer_draws_below_seventeen_and_can_bust() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Clubs, Rank::King),
    ]));

    round.deal().unwrap();
    round.stand().unwrap();

    let drawn = round.dealer_play().unwrap();
    assert_eq!(
        drawn,
        vec![card(Suit::Clubs, Rank::Three), card(Suit::Clubs, Rank::King)]
    );
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.dealer_value, 25);
}

#[test]
fn dealer_reaching_twenty_one_wins() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Clubs, Rank::Five),
    ]));

    round.deal().unwrap();
    round.stand().unwrap();
    round.dealer_play().unwrap();
    assert_eq!(round.result().unwrap().outcome, Outcome::DealerBlackjack);
}

#[test]
fn player_hitting_to_twenty_one_wins_before_dealer_plays() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Five),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
    ]));

    round.deal().unwrap();
    round.hit().unwrap();
    assert_eq!(round.state(), RoundState::Done);
    assert_eq!(round.result().unwrap().outcome, Outcome::PlayerBlackjack);
    assert_eq!(round.dealer().len(), 2);
}

#[test]
fn actions_out_of_order_are_rejected() {
    let mut round = Round::from_deck(Deck::new());
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.showdown().unwrap_err(), ActionError::InvalidState);

    // K, Q, J, 10 of diamonds: 20 against 20.
    round.deal().unwrap();
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.deal().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.showdown().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn running_out_of_cards_is_reported() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Spades, Rank::Four),
    ]));

    assert_eq!(
        round.deal().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError {
            requested: 1,
            dealt: 0
        })
    );
    assert_eq!(round.result(), None);
}

#[test]
fn dealer_running_out_of_cards_is_reported() {
    let mut round = Round::from_deck(stacked(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Three),
    ]));

    round.deal().unwrap();
    round.stand().unwrap();
    assert!(matches!(
        round.dealer_play().unwrap_err(),
        ActionError::EmptyDeck(_)
    ));
}

#[test]
fn new_round_uses_a_fresh_shuffled_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut round = Round::new(&mut rng);
    assert_eq!(round.cards_remaining(), DECK_SIZE);
    assert_ne!(round.deck(), &Deck::new());

    round.deal().unwrap();
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.dealer().len(), 2);

    let dealt: HashSet<Card> = round.dealt_cards().into_iter().collect();
    assert_eq!(dealt.len(), 4);
    assert!(round.deck().cards().iter().all(|c| !dealt.contains(c)));
}

#[test]
fn same_seed_shuffles_the_same_way() {
    let first = Round::new(&mut ChaCha8Rng::seed_from_u64(5));
    let second = Round::new(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(first.deck(), second.deck());
}

#[test]
fn outcome_winners() {
    assert_eq!(Outcome::PlayerBust.winner(), Winner::Dealer);
    assert_eq!(Outcome::DealerBust.winner(), Winner::Player);
    assert_eq!(Outcome::BothBlackjack.winner(), Winner::Tie);
    assert_eq!(Outcome::DealerBlackjack.winner(), Winner::Dealer);
    assert_eq!(Outcome::PlayerBlackjack.winner(), Winner::Player);
    assert_eq!(Outcome::PlayerWins.winner(), Winner::Player);
    assert_eq!(Outcome::Push.winner(), Winner::Tie);
    assert_eq!(Outcome::DealerWins.winner(), Winner::Dealer);

    assert!(Outcome::PlayerBust.is_early());
    assert!(!Outcome::Push.is_early());
}

#[test]
fn decisions_parse_case_insensitively() {
    assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("HIT".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!(" Stand\n".parse::<Decision>(), Ok(Decision::Stand));
    assert_eq!("S".parse::<Decision>(), Ok(Decision::Stand));
    assert!("hold".parse::<Decision>().is_err());
    assert!("".parse::<Decision>().is_err());
}

#[test]
fn game_count_must_be_a_positive_integer() {
    assert_eq!(parse_game_count("3\n").unwrap().get(), 3);
    assert_eq!(parse_game_count(" 1000000 ").unwrap().get(), 1_000_000);
    assert_eq!(parse_game_count("0"), Err(GameCountError::NotPositive));
    assert_eq!(parse_game_count("-4"), Err(GameCountError::NotPositive));
    assert_eq!(parse_game_count("three"), Err(GameCountError::NotANumber));
    assert_eq!(parse_game_count("2.5"), Err(GameCountError::NotANumber));
    assert_eq!(parse_game_count(""), Err(GameCountError::NotANumber));
    assert_eq!(
        parse_game_count("18446744073709551615").unwrap().get(),
        u64::MAX
    );
    assert_eq!(
        parse_game_count("18446744073709551616"),
        Err(GameCountError::TooLarge)
    );
    assert_eq!(
        parse_game_count("999999999999999999999999999999999999999999"),
        Err(GameCountError::TooLarge)
    );
    assert_eq!(
        parse_game_count("-999999999999999999999999999999999999999999"),
        Err(GameCountError::NotPositive)
    );
}
