//! The battle log shown to the player.

/// What kind of battle event a log line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Battle start banners.
    System,
    /// An automatic attack.
    Attack,
    /// A skill cast by the player.
    Skill,
    /// An ally joining the fight.
    Summon,
    /// A player action that was refused.
    Refused,
    /// The final victory or defeat line.
    Outcome,
}

/// A single line of the battle log.
#[derive(Debug, Clone)]
pub struct LogLine {
    /// Battle time (seconds since start) when the line was written.
    pub at: f64,
    /// What the line records.
    pub kind: LogKind,
    /// Human-readable text.
    pub text: String,
}

/// Append-only battle log, optionally bounded.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    lines: Vec<LogLine>,
    max_lines: usize,
}

impl BattleLog {
    /// Create a log keeping at most `max_lines` lines (0 = unlimited).
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
        }
    }

    /// Append a line, dropping the oldest lines if the log is over capacity.
    pub fn push(&mut self, at: f64, kind: LogKind, text: impl Into<String>) {
        self.lines.push(LogLine {
            at,
            kind,
            text: text.into(),
        });
        if self.max_lines > 0 && self.lines.len() > self.max_lines {
            let drain_count = self.lines.len() - self.max_lines;
            self.lines.drain(..drain_count);
        }
    }

    /// All retained lines, oldest first.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// The most recent line.
    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }

    /// Lines of a given kind.
    pub fn of_kind(&self, kind: LogKind) -> Vec<&LogLine> {
        self.lines.iter().filter(|l| l.kind == kind).collect()
    }

    /// Text of every retained line, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_query() {
        let mut log = BattleLog::new(0);
        log.push(0.0, LogKind::System, "Battle start!");
        log.push(1.5, LogKind::Attack, "Hero attacks Ruin Guardian for 8 damage!");
        assert_eq!(log.len(), 2);
        assert_eq!(log.of_kind(LogKind::Attack).len(), 1);
        assert_eq!(
            log.last().map(|l| l.text.as_str()),
            Some("Hero attacks Ruin Guardian for 8 damage!")
        );
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut log = BattleLog::new(2);
        for i in 0..5 {
            log.push(f64::from(i), LogKind::Attack, format!("line {i}"));
        }
        assert_eq!(log.texts(), vec!["line 3".to_string(), "line 4".to_string()]);
    }

    #[test]
    fn clear_empties() {
        let mut log = BattleLog::new(0);
        log.push(0.0, LogKind::System, "x");
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
