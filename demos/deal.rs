//! Deals a few cards from a shuffled deck and prints the stacks.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use cardstack::{Card, CardStack, Orientation, compare_rank_suit, compare_suit_rank};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    log::info!("Dealing with seed {seed}");

    let mut deck = CardStack::shuffled_standard_deck(Orientation::FaceDown, &mut rng);
    print_stack(&deck);
    println!();

    let drawn = deck.draw(10);
    println!("Drawn face down:");
    print_cards(&drawn);
    println!("Deck status:");
    print_stack(&deck);
    println!();

    let mut hand = CardStack::from_cards(drawn, Orientation::FaceUp);
    println!("Stack from drawn cards:");
    print_stack(&hand);
    hand.sort_by(compare_suit_rank);
    print_stack(&hand);
    hand.sort_by(compare_rank_suit);
    print_stack(&hand);
    println!();

    println!("Flipped deck.");
    deck.set_orientation(Orientation::FaceUp);
    print_stack(&deck);
}

fn print_stack(stack: &CardStack) {
    println!(
        "STACK: {:?} ({}) =============",
        stack.orientation(),
        stack.len()
    );
    for row in stack.contents().chunks(13) {
        print_cards(row);
    }
}

fn print_cards(cards: &[Card]) {
    let line: String = cards.iter().map(Card::short_name).collect();
    println!("{line}");
}
