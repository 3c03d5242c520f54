use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub link: String,
    pub tags: Vec<String>,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, link: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            tags,
        }
    }
}

/// Borrowed view of one stored bookmark together with its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub index: usize,
    pub bookmark: &'a Bookmark,
}

impl fmt::Display for ListEntry<'_> {
    // `<index> <name> <link> [<tag> <tag> ...]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.index,
            self.bookmark.name,
            self.bookmark.link,
            self.bookmark.tags.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entry_renders_index_name_link_and_bracketed_tags() {
        let bm = Bookmark::new(
            "Docs",
            "https://x.test",
            vec!["ref".to_string(), "go".to_string()],
        );
        let entry = ListEntry {
            index: 3,
            bookmark: &bm,
        };

        assert_eq!(entry.to_string(), "3 Docs https://x.test [ref go]");
    }

    #[test]
    fn list_entry_renders_empty_tags_as_empty_brackets() {
        let bm = Bookmark::new("a", "b", Vec::new());
        let entry = ListEntry {
            index: 0,
            bookmark: &bm,
        };

        assert_eq!(entry.to_string(), "0 a b []");
    }
}
