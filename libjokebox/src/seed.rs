//! The jokes every session starts with

use crate::types::Joke;

const SEED: [(&str, i64); 5] = [
    ("What do you call a very small valentine? A valen-tiny!", 3),
    (
        "What did the dog say when he rubbed his tail on the sandpaper? Rough, rough!",
        2,
    ),
    (
        "A termite walks into the bar and says, \"Where is the bar tender?\"",
        1,
    ),
    (
        "Why did the scarecrow win an award? Because he was outstanding in his field!",
        0,
    ),
    ("Why was the math book sad? Because it had too many problems.", 0),
];

/// The five seed jokes with ids 1 to 5
pub fn seed_jokes() -> Vec<Joke> {
    SEED.iter()
        .enumerate()
        .map(|(index, (text, rating))| Joke {
            id: index as u64 + 1,
            text: (*text).to_string(),
            rating: *rating,
        })
        .collect()
}
