// Numeric token extraction for solution names

/// Returns the longest maximal run of ASCII digits in `input`.
///
/// Runs are compared by length only; when several runs share the maximum
/// length the first one wins. Leading zeros are kept as written. Returns
/// `None` when `input` contains no ASCII digit.
pub fn extract_longest_number(input: &str) -> Option<&str> {
    let mut best: Option<&str> = None;
    let mut rest = input;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let tail = &rest[start..];
        let len = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        let run = &tail[..len];

        if best.is_none_or(|b| run.len() > b.len()) {
            best = Some(run);
        }
        rest = &tail[len..];
    }

    best
}

/// Builds the namespace label `<prefix><digits>` for a solution name.
///
/// A name without digits yields the bare prefix.
pub fn problem_namespace(name: &str, prefix: &str) -> String {
    format!("{prefix}{}", extract_longest_number(name).unwrap_or_default())
}
