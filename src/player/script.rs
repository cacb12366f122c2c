//! The fixed script typed out by the hero terminal.

/// Lines shown in the hero terminal of the landing page.
pub const HERO_SCRIPT: &[&str] = &[
    "$ pip install blitzcoder",
    "$ blitz create ecommerce-api --framework fastapi",
    "✨ Generating project structure...",
    "✅ FastAPI project created successfully!",
    "📁 Files: 23 | Lines: 1,247 | Time: 3.2s",
];

/// An ordered, immutable list of lines.
///
/// The script is fixed at construction; the player never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    /// Build a script from any list of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The landing page's default hero script.
    pub fn hero() -> Self {
        Self::new(HERO_SCRIPT.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of ticks one full pass over the script takes.
    ///
    /// Each line costs one tick per character plus `dwell_ticks`.
    pub fn pass_ticks(&self, dwell_ticks: u32) -> u64 {
        self.lines
            .iter()
            .map(|line| line.chars().count() as u64 + u64::from(dwell_ticks.max(1)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_script_matches_constant() {
        let script = Script::hero();
        assert_eq!(script.len(), HERO_SCRIPT.len());
        assert_eq!(script.line(0), Some("$ pip install blitzcoder"));
    }

    #[test]
    fn line_out_of_range_is_none() {
        let script = Script::new(["one"]);
        assert_eq!(script.line(1), None);
    }

    #[test]
    fn pass_ticks_counts_characters_not_bytes() {
        // "✨x" is two characters but four bytes
        let script = Script::new(["✨x", "abc"]);
        assert_eq!(script.pass_ticks(10), (2 + 10) + (3 + 10));
    }

    #[test]
    fn pass_ticks_uses_at_least_one_dwell_tick() {
        let script = Script::new(["ab"]);
        assert_eq!(script.pass_ticks(0), 3);
    }

    #[test]
    fn empty_script_has_zero_pass_ticks() {
        assert_eq!(Script::default().pass_ticks(10), 0);
    }
}
