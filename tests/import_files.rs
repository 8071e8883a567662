use std::io::Write;

use encoding_rs::GBK;
use tempfile::NamedTempFile;
use wordcard::core::{
    loader,
    NavigationState,
    TrainerError,
    WordEntry,
};

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write temp file");
    file
}

#[test]
fn loads_utf8_word_list() {
    let file = write_temp("access\tv. 获取 n. 接近，入口\nproject\tn. 工程\n".as_bytes());

    let deck = loader::try_load(file.path()).unwrap();

    assert_eq!(deck.len(), 2);
    assert_eq!(deck[0].word(), "access");
    assert_eq!(deck[0].meaning(), "v. 获取 n. 接近，入口");
}

#[test]
fn loads_gbk_word_list() {
    let (bytes, _, _) = GBK.encode("单词;意思\n策略;n. 策略，战略\n");
    let file = write_temp(&bytes);

    let deck = loader::try_load(file.path()).unwrap();

    assert_eq!(deck.len(), 2);
    assert_eq!(deck[0].word(), "单词");
    assert_eq!(deck[1].meaning(), "n. 策略，战略");
}

#[test]
fn rejects_file_unreadable_in_both_encodings() {
    // 0xFF is an invalid byte in UTF-8 and an invalid lead byte in GBK.
    let file = write_temp(b"word\xFF\xFF\xFFmeaning\n");

    assert!(matches!(loader::try_load(file.path()), Err(TrainerError::UnreadableFile)));
}

#[test]
fn rejects_file_with_no_valid_entries() {
    let file = write_temp(b"just one line without any delimiter?\n\n   \n");

    assert!(matches!(loader::try_load(file.path()), Err(TrainerError::NoValidEntries)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");

    let result = loader::try_load(dir.path().join("nope.txt"));

    assert!(matches!(result, Err(TrainerError::Io(_))));
}

#[test]
fn failed_import_leaves_active_deck_unchanged() {
    let good = write_temp("alpha;一\nbeta;二\n".as_bytes());
    let bad = write_temp(b"no delimiter here\n");

    let mut nav = NavigationState::new();
    nav.load(loader::try_load(good.path()).unwrap()).unwrap();

    // The caller only replaces the deck on a successful parse.
    assert!(loader::try_load(bad.path()).is_err());

    assert_eq!(nav.deck_len(), 2);
    assert_eq!(nav.current().unwrap().word(), "alpha");
}

#[test]
fn export_then_reimport_round_trips_for_every_delimiter() {
    let entries: Vec<WordEntry> = [
        ("access", "v. 获取 n. 接近，入口"),
        ("bank", "n. 银行"),
        ("bank", "n. 河岸"),
    ]
    .iter()
    .filter_map(|(w, m)| WordEntry::new(w, m))
    .collect();

    for delimiter in ["\t", "  ", ";", "|"] {
        let exported: String = entries
            .iter()
            .map(|e| format!("{}{}{}\n", e.word(), delimiter, e.meaning()))
            .collect();
        let file = write_temp(exported.as_bytes());

        let reimported = loader::try_load(file.path()).unwrap();

        assert_eq!(reimported, entries, "delimiter {:?}", delimiter);
    }
}

#[test]
fn gbk_and_utf8_copies_of_the_same_list_parse_identically() {
    let text = "词汇|n. 词汇，词汇量\n战略|n. 战略\n";
    let utf8_file = write_temp(text.as_bytes());

    let (gbk_bytes, _, _) = GBK.encode(text);
    let gbk_file = write_temp(&gbk_bytes);

    let from_utf8 = loader::try_load(utf8_file.path()).unwrap();
    let from_gbk = loader::try_load(gbk_file.path()).unwrap();

    assert_eq!(from_utf8, from_gbk);
}

#[test]
fn startup_candidates_fall_through_to_builtin() {
    // Run from a directory with no cet4.txt so every candidate misses.
    let dir = tempfile::tempdir().expect("temp dir");
    let original = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(dir.path()).expect("enter temp dir");

    let deck = loader::startup_deck();

    std::env::set_current_dir(original).expect("restore cwd");

    assert_eq!(deck.len(), 5);
    assert_eq!(deck[0].word(), "access");
}
