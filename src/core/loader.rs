use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use encoding_rs::{
    GBK,
    UTF_8,
};

use super::{
    errors::TrainerError,
    models::{
        Deck,
        WordEntry,
    },
};

/// Field delimiters tested against each line, in priority order. The first
/// one that occurs anywhere in the line wins, so a line holding both a TAB
/// and a semicolon splits on the TAB.
const DELIMITERS: [&str; 4] = ["\t", "  ", ";", "|"];

/// Default word list looked up near the program at startup.
const DATA_FILE: &str = "cet4.txt";

pub fn try_load(path: impl AsRef<Path>) -> Result<Deck, TrainerError> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes).ok_or(TrainerError::UnreadableFile)?;

    let deck = parse_text(&text);
    if deck.is_empty() {
        return Err(TrainerError::NoValidEntries);
    }

    Ok(deck)
}

/// Decodes raw file bytes as UTF-8, falling back to GBK for legacy word
/// lists. Returns `None` when the bytes are malformed in both.
fn decode(bytes: &[u8]) -> Option<String> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return Some(text.into_owned());
    }

    let (text, _, had_errors) = GBK.decode(bytes);
    if !had_errors {
        return Some(text.into_owned());
    }

    None
}

/// Parses decoded text into a deck, skipping blank lines and lines with no
/// recognized delimiter. A skipped line is not an error.
pub fn parse_text(text: &str) -> Deck {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(split_line)
        .collect()
}

/// Splits a line into (word, meaning) on the first occurrence of the
/// highest-priority delimiter present. The meaning keeps any further
/// delimiter occurrences.
fn split_line(line: &str) -> Option<WordEntry> {
    for delimiter in DELIMITERS {
        if let Some((word, meaning)) = line.split_once(delimiter) {
            return WordEntry::new(word, meaning);
        }
    }

    None
}

/// The embedded fallback deck, used when no word list file can be found or
/// parsed. Loading this can never fail.
pub fn builtin_deck() -> Deck {
    [
        ("access", "v. 获取 n. 接近，入口"),
        ("project", "n. 工程；课题、作业"),
        ("intention", "n. 打算，意图"),
        ("strategy", "n. 策略，战略"),
        ("primary", "adj. 主要的，基本的"),
    ]
    .iter()
    .filter_map(|(word, meaning)| WordEntry::new(word, meaning))
    .collect()
}

/// Resolves the startup deck: the first candidate path that both exists
/// and parses wins; a candidate that fails to parse falls through to the
/// next one. Falls back to the builtin deck.
pub fn startup_deck() -> Deck {
    for path in candidate_paths() {
        if !path.exists() {
            continue;
        }

        match try_load(&path) {
            Ok(deck) => {
                println!("Loaded {} words from {}", deck.len(), path.display());
                return deck;
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    println!("No word list found, using the builtin deck");
    builtin_deck()
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths =
        vec![Path::new("data").join(DATA_FILE), PathBuf::from(DATA_FILE)];

    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join("data").join(DATA_FILE));
        paths.push(exe_dir.join(DATA_FILE));
    }

    paths
}
