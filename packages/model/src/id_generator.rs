use crate::section::Section;
use crc32fast::Hasher;

/// Generate a page ID from its slug using CRC32.
pub fn get_page_id(slug: &str) -> String {
    let mut buff = String::from(slug);
    if !slug.starts_with("page://") {
        buff = format!("page://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for sections within a page.
///
/// IDs are `{seed}-{n}` where the seed is the page ID and `n` is a counter
/// that only moves forward, so an ID is never reused within a session even
/// after the section that held it is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Page ID (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(slug: &str) -> Self {
        Self {
            seed: get_page_id(slug),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Continue generating for a loaded page: the counter starts past the
    /// largest `{seed}-{n}` suffix already present, so fresh IDs cannot
    /// collide with persisted ones.
    pub fn resume(slug: &str, sections: &[Section]) -> Self {
        let mut gen = Self::new(slug);
        gen.count = max_suffix(&gen.seed, sections);
        gen
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get page ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

fn max_suffix(seed: &str, sections: &[Section]) -> u32 {
    let mut max = 0;
    for section in sections {
        if let Some(rest) = section
            .id
            .strip_prefix(seed)
            .and_then(|r| r.strip_prefix('-'))
        {
            if let Ok(n) = rest.parse::<u32>() {
                max = max.max(n);
            }
        }
        if let Some(children) = &section.children {
            max = max.max(max_suffix(seed, children));
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn test_page_id_generation() {
        let id1 = get_page_id("home");
        let id2 = get_page_id("home");

        // Same slug always generates same ID
        assert_eq!(id1, id2);

        // Different slugs generate different IDs
        let id3 = get_page_id("pricing");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("home");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        // IDs are sequential
        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        // All share same seed
        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_resume_skips_persisted_ids() {
        let mut gen = IdGenerator::new("home");
        let sections = vec![
            Section::new(gen.new_id(), SectionKind::Hero, "Hero", 0),
            Section::new(gen.new_id(), SectionKind::Cta, "CTA", 1),
        ];

        let mut resumed = IdGenerator::resume("home", &sections);
        let fresh = resumed.new_id();
        assert!(fresh.ends_with("-3"));
        assert!(sections.iter().all(|s| s.id != fresh));
    }

    #[test]
    fn test_resume_ignores_foreign_ids() {
        // Sections pasted from another page keep their foreign seed; they
        // must not confuse the counter.
        let sections = vec![Section::new("deadbeef-9", SectionKind::Custom, "X", 0)];
        let mut gen = IdGenerator::resume("home", &sections);
        assert!(gen.new_id().ends_with("-1"));
    }
}
