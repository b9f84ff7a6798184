/// A set and rep scheme such as `3x8-12`.
///
/// Grammar: `<sets> "x" <min reps> [ "-" <max reps> ]`. The pattern may
/// occur anywhere in the text, so free-form schemes like `"Heavy 3x5"`
/// still parse. A scheme without an explicit maximum has
/// `max_reps == min_reps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepScheme {
    pub sets: u32,
    pub min_reps: u32,
    pub max_reps: u32,
}

impl RepScheme {
    /// Returns the first rep scheme found in `text`, or `None` if the text
    /// contains none. Never fails; callers treat unparseable schemes as
    /// absent.
    #[must_use]
    pub fn find(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b != b'x' {
                continue;
            }
            let Some(sets) = preceding_number(bytes, i) else {
                continue;
            };
            let Some((min_reps, after_min)) = following_number(bytes, i + 1) else {
                continue;
            };
            let max_reps = if bytes.get(after_min) == Some(&b'-') {
                match following_number(bytes, after_min + 1) {
                    Some((max, _)) => max,
                    None => min_reps,
                }
            } else {
                min_reps
            };
            return Some(Self {
                sets,
                min_reps,
                max_reps,
            });
        }
        None
    }

    /// The rep part of the scheme as entered in an entry form, e.g. `8-12`
    /// or `5` for a fixed rep target.
    #[must_use]
    pub fn reps_text(&self) -> String {
        if self.min_reps == self.max_reps {
            self.min_reps.to_string()
        } else {
            format!("{}-{}", self.min_reps, self.max_reps)
        }
    }
}

impl TryFrom<&str> for RepScheme {
    type Error = RepSchemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::find(value).ok_or(RepSchemeError::NoScheme)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepSchemeError {
    #[error("No rep scheme of the form <sets>x<min reps>[-<max reps>] found")]
    NoScheme,
}

fn preceding_number(bytes: &[u8], end: usize) -> Option<u32> {
    let mut start = end;
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    parse_digits(&bytes[start..end])
}

fn following_number(bytes: &[u8], start: usize) -> Option<(u32, usize)> {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    parse_digits(&bytes[start..end]).map(|n| (n, end))
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}
