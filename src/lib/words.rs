use std::collections::BTreeSet;

const STOP_WORDS_EN: &str = include_str!("../../data/stop_words_en.txt");

/// English words ordered from most to least frequent.
const FREQUENCY_EN: &str = include_str!("../../data/top_en.txt");

fn lines(data: &'static str) -> impl Iterator<Item = &'static str> {
    data.lines().map(str::trim).filter(|l| !l.is_empty())
}

pub fn stop_words() -> Vec<&'static str> {
    lines(STOP_WORDS_EN).collect()
}

/// The `n` most frequent English words, or the whole bundled list if it is shorter.
pub fn top_n_list(n: usize) -> Vec<&'static str> {
    lines(FREQUENCY_EN).take(n).collect()
}

/// Union of both lists, normalised to lowercase.
pub fn combined_words<S, C>(stop: &[S], common: &[C]) -> BTreeSet<String>
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    stop.iter()
        .map(|w| normalise(w.as_ref()))
        .chain(common.iter().map(|w| normalise(w.as_ref())))
        .filter(|w| !w.is_empty())
        .collect()
}

fn normalise(word: &str) -> String {
    word.trim().to_lowercase()
}
