//! The lives pool
//!
//! An ordered list of programming languages standing in for lives: each wrong
//! guess wipes out the next language in the list, and the game is lost when
//! only Assembly remains. The engine consumes a single number from this pool
//! (`max_wrong_guesses`); the names and colors exist for the renderers.

/// One entry of the lives pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Display name
    pub name: &'static str,
    /// Chip background color (r, g, b)
    pub background: (u8, u8, u8),
    /// Chip text color (r, g, b)
    pub foreground: (u8, u8, u8),
}

/// Ordered pool of lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivesPool {
    entries: Vec<Language>,
}

/// The default pool: eight languages to lose, Assembly last
const STANDARD: &[Language] = &[
    Language {
        name: "HTML",
        background: (226, 104, 15),
        foreground: (249, 244, 218),
    },
    Language {
        name: "CSS",
        background: (50, 138, 241),
        foreground: (249, 244, 218),
    },
    Language {
        name: "JavaScript",
        background: (244, 235, 19),
        foreground: (30, 30, 30),
    },
    Language {
        name: "React",
        background: (46, 211, 233),
        foreground: (30, 30, 30),
    },
    Language {
        name: "TypeScript",
        background: (41, 142, 198),
        foreground: (249, 244, 218),
    },
    Language {
        name: "Node.js",
        background: (89, 145, 55),
        foreground: (249, 244, 218),
    },
    Language {
        name: "Python",
        background: (255, 215, 66),
        foreground: (30, 30, 30),
    },
    Language {
        name: "Ruby",
        background: (208, 43, 43),
        foreground: (249, 244, 218),
    },
    Language {
        name: "Assembly",
        background: (45, 81, 159),
        foreground: (249, 244, 218),
    },
];

impl LivesPool {
    /// The standard nine-language pool
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: STANDARD.to_vec(),
        }
    }

    /// Build a pool from arbitrary entries
    ///
    /// Callers supply display data; the engine only ever reads the derived
    /// wrong-guess bound. A pool with one entry (or none) allows zero wrong
    /// guesses: the first miss loses the round.
    #[must_use]
    pub const fn new(entries: Vec<Language>) -> Self {
        Self { entries }
    }

    /// The allowed number of wrong guesses: pool length minus one
    #[must_use]
    pub fn max_wrong_guesses(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// All entries in order
    #[must_use]
    pub fn entries(&self) -> &[Language] {
        &self.entries
    }

    /// Whether the entry at `index` has been lost after `wrong_guesses`
    /// wrong guesses
    #[must_use]
    pub fn is_lost(&self, index: usize, wrong_guesses: usize) -> bool {
        index < wrong_guesses
    }

    /// Names of all entries, in order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|lang| lang.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pool_shape() {
        let pool = LivesPool::standard();
        assert_eq!(pool.entries().len(), 9);
        assert_eq!(pool.entries()[0].name, "HTML");
        assert_eq!(pool.entries()[8].name, "Assembly");
    }

    #[test]
    fn max_wrong_is_length_minus_one() {
        let pool = LivesPool::standard();
        assert_eq!(pool.max_wrong_guesses(), 8);

        let single = LivesPool::new(vec![STANDARD[0]]);
        assert_eq!(single.max_wrong_guesses(), 0);
    }

    #[test]
    fn empty_pool_allows_no_wrong_guesses() {
        let empty = LivesPool::new(Vec::new());
        assert_eq!(empty.max_wrong_guesses(), 0);
        assert!(empty.entries().is_empty());
    }

    #[test]
    fn lost_entries_are_a_prefix() {
        let pool = LivesPool::standard();

        assert!(!pool.is_lost(0, 0));
        assert!(pool.is_lost(0, 1));
        assert!(pool.is_lost(2, 3));
        assert!(!pool.is_lost(3, 3));
    }

    #[test]
    fn names_in_order() {
        let pool = LivesPool::standard();
        let names = pool.names();
        assert_eq!(names[2], "JavaScript");
        assert_eq!(names.last(), Some(&"Assembly"));
    }
}
