use hangman_data::Letter;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Uppercases `text` and strips diacritical marks, e.g. `"limão"` becomes `"LIMAO"`.
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

pub fn normalize_letter(letter: Letter) -> String {
    let mut buf = [0; 4];
    normalize(letter.as_char().encode_utf8(&mut buf))
}
