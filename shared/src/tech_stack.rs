pub const TECH_STACK_OPTIONS: [&str; 25] = [
    "React", "Vue.js", "Angular", "Node.js", "Express", "Next.js",
    "Python", "Django", "Flask", "Java", "Spring Boot", "TypeScript",
    "JavaScript", "PHP", "Laravel", "Ruby", "Rails", "Go", "Rust",
    "MongoDB", "PostgreSQL", "MySQL", "Redis", "Docker", "Kubernetes",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechStack {
    selected: Vec<String>,
}

impl TechStack {
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn contains(&self, tech: &str) -> bool {
        self.selected.iter().any(|t| t == tech)
    }

    /// Known options matching `input` (case-insensitive substring) that are not picked yet.
    pub fn suggestions(&self, input: &str) -> Vec<&'static str> {
        let needle = input.trim().to_lowercase();
        TECH_STACK_OPTIONS.iter()
            .copied()
            .filter(|opt| opt.to_lowercase().contains(&needle) && !self.contains(opt))
            .collect()
    }

    /// Returns false when the entry was blank or already present.
    pub fn add(&mut self, tech: &str) -> bool {
        let tech = tech.trim();
        if tech.is_empty() || self.contains(tech) {
            return false;
        }
        self.selected.push(tech.to_string());
        true
    }

    pub fn remove(&mut self, tech: &str) {
        self.selected.retain(|t| t != tech);
    }
}
