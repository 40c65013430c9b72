pub const GDP_FALLBACK_COLOR: &str = "#f7fbff";

// Unknown or missing category
pub const DEFAULT_COLOR: &str = "#ffffff";
pub const DEFAULT_CLASS: &str = "cluster-default";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GdpBucket {
    pub lower_bound: f64,
    pub color: &'static str,
}

// Descending; first bound <= value wins.
pub static GDP_BUCKETS: [GdpBucket; 10] = [
    GdpBucket { lower_bound: 27_360_000_000_000.0, color: "#081D58" },
    GdpBucket { lower_bound: 1_025_602_500_000.0, color: "#17347B" },
    GdpBucket { lower_bound: 511_432_500_000.0, color: "#225EA8" },
    GdpBucket { lower_bound: 331_112_500_000.0, color: "#1D91C0" },
    GdpBucket { lower_bound: 245_838_000_000.0, color: "#41B6C4" },
    GdpBucket { lower_bound: 90_867_500_000.0, color: "#7FCDBB" },
    GdpBucket { lower_bound: 77_022_500_000.0, color: "#C7E9B4" },
    GdpBucket { lower_bound: 12_332_500_000.0, color: "#EDF8B1" },
    GdpBucket { lower_bound: 520_000_000.0, color: "#FFFFD9" },
    GdpBucket { lower_bound: 0.0, color: GDP_FALLBACK_COLOR },
];

pub fn gdp_thresholds() -> impl Iterator<Item = f64> {
    GDP_BUCKETS[..GDP_BUCKETS.len() - 1]
        .iter()
        .rev()
        .map(|b| b.lower_bound)
}

/// 0 is the catch-all, 9 the top bucket.
pub fn gdp_bucket(gdp: f64) -> usize {
    // NaN compares false against every bound and lands in the catch-all.
    GDP_BUCKETS
        .iter()
        .position(|b| gdp >= b.lower_bound && b.lower_bound > 0.0)
        .map(|i| GDP_BUCKETS.len() - 1 - i)
        .unwrap_or(0)
}

pub fn gdp_color(gdp: f64) -> &'static str {
    GDP_BUCKETS[GDP_BUCKETS.len() - 1 - gdp_bucket(gdp)].color
}

// Declaration order is the legend order and the cluster tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Finance,
    FleetsAndUsers,
    KnowledgeAndService,
    Manufacturers,
    Other,
    SubnationalGovernments,
    Utilities,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Finance,
        Category::FleetsAndUsers,
        Category::KnowledgeAndService,
        Category::Manufacturers,
        Category::Other,
        Category::SubnationalGovernments,
        Category::Utilities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::FleetsAndUsers => "Fleets and Users",
            Category::KnowledgeAndService => "Knowledge and Service Organ",
            Category::Manufacturers => "Manufacturers and Suppliers",
            Category::Other => "Other",
            Category::SubnationalGovernments => "Subnational Governments",
            Category::Utilities => "Utilities and Infrastructure Providers",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Finance => "#0095D3",
            Category::FleetsAndUsers => "#5CC4BD",
            Category::KnowledgeAndService => "#9C6EB0",
            Category::Manufacturers => "#D1D439",
            Category::Other => "#FF9E18",
            Category::SubnationalGovernments => "#EF4E00",
            Category::Utilities => "#76BC21",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Category::Finance => "cluster-finance",
            Category::FleetsAndUsers => "cluster-fleets",
            Category::KnowledgeAndService => "cluster-knowledge",
            Category::Manufacturers => "cluster-manufacturers",
            Category::Other => "cluster-other",
            Category::SubnationalGovernments => "cluster-subnational",
            Category::Utilities => "cluster-utilities",
        }
    }

    // Case-sensitive, no trimming
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

pub fn endorser_color(category: Option<&str>) -> &'static str {
    category
        .and_then(Category::from_label)
        .map_or(DEFAULT_COLOR, Category::color)
}

pub fn category_class(category: Option<&str>) -> &'static str {
    category
        .and_then(Category::from_label)
        .map_or(DEFAULT_CLASS, Category::css_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_and_bottom_buckets() {
        assert_eq!(gdp_color(27_360_000_000_000.0), "#081D58");
        assert_eq!(gdp_color(1e15), "#081D58");
        assert_eq!(gdp_color(0.0), "#f7fbff");
        assert_eq!(gdp_color(519_999_999.9), "#f7fbff");
        assert_eq!(gdp_color(520_000_000.0), "#FFFFD9");
    }

    #[test]
    fn out_of_range_input_is_catch_all() {
        assert_eq!(gdp_color(-5.0), GDP_FALLBACK_COLOR);
        assert_eq!(gdp_color(f64::NAN), GDP_FALLBACK_COLOR);
        assert_eq!(gdp_color(f64::INFINITY), "#081D58");
    }

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        for bucket in &GDP_BUCKETS {
            if bucket.lower_bound > 0.0 {
                assert_eq!(gdp_color(bucket.lower_bound), bucket.color);
            }
        }
        assert_eq!(gdp_color(90_867_499_999.0), "#C7E9B4");
    }

    #[test]
    fn bucket_index_is_monotonic() {
        let mut samples: Vec<f64> = vec![-1.0, 0.0, 1.0, 3e13, 1e16];
        for t in gdp_thresholds() {
            samples.extend([t - 1.0, t, t + 1.0]);
        }
        samples.sort_by(|a, b| a.total_cmp(b));

        for pair in samples.windows(2) {
            assert!(gdp_bucket(pair[0]) <= gdp_bucket(pair[1]), "{:?}", pair);
        }
        assert_eq!(gdp_bucket(1e16), 9);
    }

    #[test]
    fn thresholds_ascend() {
        let t: Vec<f64> = gdp_thresholds().collect();
        assert_eq!(t.len(), 9);
        assert_eq!(t[0], 520_000_000.0);
        assert_eq!(t[8], 27_360_000_000_000.0);
    }

    #[test]
    fn known_categories() {
        let expected = [
            ("Finance", "#0095D3", "cluster-finance"),
            ("Fleets and Users", "#5CC4BD", "cluster-fleets"),
            ("Knowledge and Service Organ", "#9C6EB0", "cluster-knowledge"),
            ("Manufacturers and Suppliers", "#D1D439", "cluster-manufacturers"),
            ("Other", "#FF9E18", "cluster-other"),
            ("Subnational Governments", "#EF4E00", "cluster-subnational"),
            ("Utilities and Infrastructure Providers", "#76BC21", "cluster-utilities"),
        ];
        for (label, color, class) in expected {
            assert_eq!(endorser_color(Some(label)), color);
            assert_eq!(category_class(Some(label)), class);
        }
    }

    #[test]
    fn unknown_or_missing_category_uses_defaults() {
        for label in [None, Some(""), Some("finance"), Some(" Finance"), Some("Banks")] {
            assert_eq!(endorser_color(label), DEFAULT_COLOR);
            assert_eq!(category_class(label), DEFAULT_CLASS);
        }
    }
}
