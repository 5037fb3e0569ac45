//! Sentence tokenization
//!
//! A token is a maximal run of non-whitespace characters. Leading, trailing
//! and repeated whitespace never produce empty tokens.

/// Split a sentence into word tokens, collapsing whitespace runs
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

/// Join tokens back into a sentence with single spaces
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}
