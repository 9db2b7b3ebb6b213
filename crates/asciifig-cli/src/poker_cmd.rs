use asciifig::poker::hand_rank;

pub fn run(cards: &[String]) -> Result<(), i32> {
    let hand: [&str; 5] = match <[&str; 5]>::try_from(
        cards.iter().map(String::as_str).collect::<Vec<_>>(),
    ) {
        Ok(hand) => hand,
        Err(_) => {
            eprintln!("Error: a poker hand is exactly five cards");
            return Err(1);
        }
    };

    let rank = hand_rank(&hand).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    println!("{rank}");
    Ok(())
}
