//! Frontier queue and visited set
//!
//! The frontier is FIFO, giving breadth-first order. Duplicate entries are
//! allowed; they are resolved when popped, against the visited set.

use std::collections::{HashSet, VecDeque};

/// Ordered queue of normalized URLs awaiting a visit
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding only the seed
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::new();
        frontier.push(seed);
        frontier
    }

    /// Appends a URL to the back of the queue
    pub fn push(&mut self, url: impl Into<String>) {
        self.queue.push_back(url.into());
    }

    /// Removes the URL at the front of the queue
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued URLs, front first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}

/// Normalized URLs already taken from the frontier this run
///
/// Grows monotonically and lives only in memory. `mark` is the single
/// check-and-mark point; swapping this for a bounded or shared set only has
/// to preserve that contract.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as visited, returning false if it already was
    pub fn mark(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::with_seed("a");
        frontier.push("b");
        frontier.push("c");

        assert_eq!(frontier.pop().as_deref(), Some("a"));
        assert_eq!(frontier.pop().as_deref(), Some("b"));
        assert_eq!(frontier.pop().as_deref(), Some("c"));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut frontier = Frontier::new();
        frontier.push("a");
        frontier.push("a");
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_iter_front_first() {
        let mut frontier = Frontier::with_seed("x");
        frontier.push("y");
        assert_eq!(frontier.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_mark_once() {
        let mut visited = VisitedSet::new();
        assert!(visited.mark("https://a.com/p"));
        assert!(!visited.mark("https://a.com/p"));
        assert!(visited.contains("https://a.com/p"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_urls() {
        let mut visited = VisitedSet::new();
        assert!(visited.mark("https://a.com/p"));
        assert!(visited.mark("https://a.com/p?q=1"));
        assert_eq!(visited.len(), 2);
        assert!(!visited.is_empty());
    }
}
