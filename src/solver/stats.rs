use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell as TableCell, Row, Table};
use separator::Separatable;

/// Counts of states by depth (number of actions from the start).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    visited_states: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn total_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    /// The deepest level at which a state was created.
    pub fn max_depth(&self) -> Option<usize> {
        self.created_states.len().checked_sub(1)
    }

    /// Returns true when this is the first state created at this depth.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true when this is the first state expanded at this depth.
    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Visited", "Duplicates", "Not visited"]
                .iter()
                .map(|title| TableCell::new(title))
                .collect(),
        ));

        let at = |counts: &[usize], depth: usize| counts.get(depth).cloned().unwrap_or(0);
        for depth in 0..self.created_states.len() {
            let created = at(&self.created_states[..], depth);
            let visited = at(&self.visited_states[..], depth);
            let duplicates = at(&self.duplicate_states[..], depth);
            table.add_row(Row::new(vec![
                TableCell::new(&format!("{}:", depth)),
                TableCell::new(&separated(created)),
                TableCell::new(&separated(visited)),
                TableCell::new(&separated(duplicates)),
                TableCell::new(&separated(created - visited)),
            ]));
        }
        table
    }
}

fn separated(count: usize) -> String {
    (count as u64).separated_string()
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", separated(self.total_created()))?;
        writeln!(
            f,
            "total reached duplicates: {}",
            separated(self.total_reached_duplicates())
        )?;
        writeln!(f, "total visited: {}", separated(self.total_visited()))
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        writeln!(f, "States created total: {}", separated(created))?;
        writeln!(f, "States visited total: {}", separated(visited))?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            separated(self.total_reached_duplicates())
        )?;
        writeln!(f, "Created but not visited total: {}", separated(created - visited))?;
        writeln!(f)?;
        write!(f, "{}", self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert_eq!(stats.max_depth(), None);

        assert!(stats.add_created(0));
        assert!(stats.add_visited(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        // skipped depths are filled with zeros
        assert!(stats.add_reached_duplicate(2));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.max_depth(), Some(1));
        assert_eq!(stats.duplicate_states, vec![0, 0, 1]);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(1);
        }
        stats.add_created(0);
        stats.add_visited(0);

        let s = stats.to_string();
        assert!(s.starts_with("States created total: 1,235\n"));
        assert!(s.contains("Created but not visited total: 1,234\n"));
        assert!(s.contains("Depth"));
        assert!(s.contains("Not visited"));
        let rows: Vec<_> = s.lines().filter(|line| line.trim_start().starts_with("1:")).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("1,234"));

        let d = format!("{:?}", stats);
        assert!(d.contains("created by depth: [1, 1234]"));
    }
}
