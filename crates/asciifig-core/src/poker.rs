//! Poker hand classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Rank + suit, where rank `10` is the only two-character rank.
static CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(10|[2-9JQKA])(.)$").expect("card pattern is valid"));

/// The nine poker hand ranks, weakest first.
///
/// The derived `Ord` follows the standard ranking, so
/// `HandRank::Flush > HandRank::Straight` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRank {
    HighCard,
    OnePair,
    TwoPairs,
    ThreeOfKind,
    Straight,
    Flush,
    FullHouse,
    FourOfKind,
    StraightFlush,
}

impl HandRank {
    /// Human-readable name of the rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandRank::HighCard => "high card",
            HandRank::OnePair => "one pair",
            HandRank::TwoPairs => "two pairs",
            HandRank::ThreeOfKind => "three of a kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourOfKind => "four of a kind",
            HandRank::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card string that does not parse as rank + suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCard(pub String);

impl fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card: {:?}", self.0)
    }
}

impl std::error::Error for InvalidCard {}

/// Classify a five-card hand.
///
/// Cards are rank + suit strings like `"4♥"` or `"10♠"`. The ace-low
/// straight `A,2,3,4,5` is recognized; card order within the hand does
/// not matter.
pub fn hand_rank(hand: &[&str; 5]) -> Result<HandRank, InvalidCard> {
    let mut values = [0u8; 5];
    let mut suits = [""; 5];

    for (i, card) in hand.iter().enumerate() {
        let caps = CARD_RE
            .captures(card)
            .ok_or_else(|| InvalidCard(card.to_string()))?;
        values[i] = match &caps[1] {
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            rank => rank.parse().map_err(|_| InvalidCard(card.to_string()))?,
        };
        suits[i] = caps.get(2).map_or("", |m| m.as_str());
    }

    values.sort_unstable();
    let is_flush = suits.iter().all(|&s| s == suits[0]);
    let is_straight = values.windows(2).all(|w| w[1] - w[0] == 1)
        || values == [2, 3, 4, 5, 14];

    // Multiplicities of equal ranks, largest first: four of a kind is
    // [4, 1], a full house [3, 2], and so on.
    let mut counts: Vec<usize> = Vec::new();
    let mut run = 1;
    for i in 1..values.len() {
        if values[i] == values[i - 1] {
            run += 1;
        } else {
            counts.push(run);
            run = 1;
        }
    }
    counts.push(run);
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let rank = if is_flush && is_straight {
        HandRank::StraightFlush
    } else if counts[0] == 4 {
        HandRank::FourOfKind
    } else if counts[0] == 3 && counts[1] == 2 {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if counts[0] == 3 {
        HandRank::ThreeOfKind
    } else if counts[0] == 2 && counts[1] == 2 {
        HandRank::TwoPairs
    } else if counts[0] == 2 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    };
    Ok(rank)
}
