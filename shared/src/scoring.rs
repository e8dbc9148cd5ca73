pub const GOOD_THRESHOLD: f64 = 85.0;
pub const CAUTION_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    OutOfTen,
    OutOfHundred,
}

impl Scale {
    pub const fn max(self) -> f64 {
        match self {
            Scale::OutOfTen => 10.0,
            Scale::OutOfHundred => 100.0,
        }
    }

    /// Maps a raw score onto 0-100, clamped.
    pub fn normalize(self, score: f64) -> f64 {
        (score * 100.0 / self.max()).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Caution,
    Risk,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Caution => "Needs attention",
            Severity::Risk => "At risk",
        }
    }
}

/// Single colour policy for every score on every view.
pub fn classify(score: f64, scale: Scale) -> Severity {
    let normalized = scale.normalize(score);
    if normalized >= GOOD_THRESHOLD {
        Severity::Good
    } else if normalized >= CAUTION_THRESHOLD {
        Severity::Caution
    } else {
        Severity::Risk
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Overall,
    CodeQuality,
    Readme,
    Accessibility,
    Seo,
    BestPractices,
    Performance,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Overall => "Overall Score",
            Category::CodeQuality => "Code Quality",
            Category::Readme => "README",
            Category::Accessibility => "Accessibility",
            Category::Seo => "SEO",
            Category::BestPractices => "Best Practices",
            Category::Performance => "Performance",
        }
    }

    pub fn scale(self) -> Scale {
        match self {
            Category::Overall | Category::CodeQuality | Category::Readme => Scale::OutOfTen,
            Category::Accessibility | Category::Seo | Category::BestPractices | Category::Performance => Scale::OutOfHundred,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: Category,
    pub value: Option<f64>,
    pub reasoning: Option<String>,
}

impl CategoryScore {
    pub fn scale(&self) -> Scale {
        self.category.scale()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.value.map(|v| classify(v, self.scale()))
    }

    /// Width of the progress bar, relative to the category's own maximum.
    pub fn percent(&self) -> f64 {
        self.value.map_or(0.0, |v| self.scale().normalize(v))
    }

    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
            Some(v) => format!("{:.1}", v),
            None => "n/a".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub overall: CategoryScore,
    pub categories: [CategoryScore; 6],
}
