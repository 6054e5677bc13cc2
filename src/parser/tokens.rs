/// Cursor over the space-separated tokens of one trimmed source line.
///
/// Runs of spaces never produce empty tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line.trim() }
    }

    /// Consumes every remaining token and rejoins them with single spaces.
    /// Returns `None` if no tokens are left.
    pub fn remainder(&mut self) -> Option<String> {
        let joined = self.by_ref().collect::<Vec<_>>().join(" ");
        (!joined.is_empty()).then_some(joined)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(' ');
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }
}
