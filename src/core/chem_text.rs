//! Hilfsfunktionen für Summenformel-Texte mit Unicode-Tiefstellungen.

/// Tiefgestellte Ziffer `₀`–`₉` für `digit` (0–9).
pub fn subscript_digit(digit: u8) -> Option<char> {
    if digit > 9 {
        return None;
    }
    char::from_u32(0x2080 + u32::from(digit))
}

/// Fügt `insert` an Zeichenposition `char_index` ein.
///
/// Ein Index hinter dem Textende hängt an. Liefert den neuen Text und die
/// Zeichenposition direkt hinter dem eingefügten Text.
pub fn insert_at_char(text: &str, char_index: usize, insert: &str) -> (String, usize) {
    let char_count = text.chars().count();
    let char_index = char_index.min(char_count);
    let byte_index = text
        .char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte);

    let mut result = String::with_capacity(text.len() + insert.len());
    result.push_str(&text[..byte_index]);
    result.push_str(insert);
    result.push_str(&text[byte_index..]);

    (result, char_index + insert.chars().count())
}

/// Wandelt Ziffern hinter Buchstaben, `)` oder `]` in Tiefstellungen um.
///
/// `CH3` → `CH₃`, `C2H5OH` → `C₂H₅OH`, `(CH3)3C` → `(CH₃)₃C`.
/// Führende Ziffern (z.B. Positionsangaben wie `2-Butyl`) bleiben erhalten.
pub fn subscript_digits(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut subscript_run = false;
    let mut previous: Option<char> = None;

    for ch in text.chars() {
        let converted = match ch.to_digit(10) {
            Some(digit) => {
                let after_group = previous
                    .is_some_and(|p| p.is_alphabetic() || p == ')' || p == ']');
                if after_group || subscript_run {
                    subscript_run = true;
                    subscript_digit(digit as u8).unwrap_or(ch)
                } else {
                    ch
                }
            }
            None => {
                subscript_run = false;
                ch
            }
        };
        result.push(converted);
        previous = Some(ch);
    }

    result
}
