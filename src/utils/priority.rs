/// Rank given to chains missing from [`PRIORITY_TABLE`]
pub const UNKNOWN_PRIORITY: i32 = -99;

/// Display priority per blockchain, higher first
pub const PRIORITY_TABLE: &[(&str, i32)] = &[
    ("Osmosis", 100),
    ("Ethereum", 50),
    ("Arbitrum", 30),
    ("Zilliqa", 20),
    ("Neo", 20),
];

/// Look up the display priority of a blockchain
pub fn get_priority(blockchain: &str) -> i32 {
    PRIORITY_TABLE
        .iter()
        .find(|(name, _)| *name == blockchain)
        .map_or(UNKNOWN_PRIORITY, |(_, rank)| *rank)
}
