use crate::classify::{Category, DEFAULT_CLASS};
use serde::Serialize;

pub const BASE_SIZE: u32 = 30;
pub const MAX_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterIcon {
    pub html: String,
    pub class_name: String,
    pub size: [u32; 2],
    pub anchor: [f64; 2],
}

// Labels outside Category share one slot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryTally {
    counts: [usize; Category::ALL.len()],
    unrecognized: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominant {
    Known(Category),
    Unrecognized,
}

impl Dominant {
    pub fn css_class(self) -> &'static str {
        match self {
            Dominant::Known(c) => c.css_class(),
            Dominant::Unrecognized => DEFAULT_CLASS,
        }
    }
}

impl CategoryTally {
    pub fn add(&mut self, label: Option<&str>) {
        let Some(label) = label else { return };
        match Category::from_label(label) {
            Some(c) => self.counts[c as usize] += 1,
            None => self.unrecognized += 1,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts[category as usize]
    }

    // Ties go to the earlier variant, unrecognized last.
    pub fn dominant(&self) -> Option<Dominant> {
        let mut best: Option<(Dominant, usize)> = None;
        let slots = Category::ALL
            .iter()
            .map(|&c| (Dominant::Known(c), self.count(c)))
            .chain(std::iter::once((Dominant::Unrecognized, self.unrecognized)));

        for (slot, n) in slots {
            if n == 0 {
                continue;
            }
            match best {
                Some((_, top)) if n <= top => {}
                _ => best = Some((slot, n)),
            }
        }
        best.map(|(slot, _)| slot)
    }
}

impl<'a> FromIterator<Option<&'a str>> for CategoryTally {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        let mut tally = CategoryTally::default();
        for label in iter {
            tally.add(label);
        }
        tally
    }
}

pub fn icon_size(member_count: usize) -> u32 {
    let grown = (BASE_SIZE as usize).saturating_add(member_count.saturating_mul(2));
    grown.min(MAX_SIZE as usize) as u32
}

pub fn cluster_icon<'a, I>(categories: I, member_count: usize) -> ClusterIcon
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let tally: CategoryTally = categories.into_iter().collect();
    let class = tally.dominant().map_or(DEFAULT_CLASS, Dominant::css_class);
    let size = icon_size(member_count);

    ClusterIcon {
        html: format!("<div><span>{}</span></div>", member_count),
        class_name: format!("custom-cluster {}", class),
        size: [size, size],
        anchor: [size as f64 / 2.0, size as f64 / 2.0],
    }
}
