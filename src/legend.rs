use crate::classify::{gdp_color, gdp_thresholds, Category};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub color: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub categories: Vec<LegendRow>,
    pub gdp: Vec<LegendRow>,
}

pub fn legend_rows() -> Legend {
    let categories = Category::ALL
        .iter()
        .map(|c| LegendRow {
            color: c.color(),
            label: c.label().to_string(),
        })
        .collect();

    let thresholds: Vec<f64> = gdp_thresholds().collect();
    let gdp = thresholds
        .iter()
        .enumerate()
        .map(|(i, &lo)| {
            let label = match thresholds.get(i + 1) {
                Some(hi) => format!("{:.1}&ndash;{:.1}B", lo / 1e9, hi / 1e9),
                None => format!("{:.1}+B", lo / 1e9),
            };
            LegendRow {
                // +1 so a bound that sits exactly on a cutoff still picks its own bucket
                color: gdp_color(lo + 1.0),
                label,
            }
        })
        .collect();

    Legend { categories, gdp }
}

fn swatch(out: &mut String, row: &LegendRow) {
    out.push_str(&format!(
        "<i style=\"background:{}; width: 18px; height: 18px; display: inline-block; margin-right: 8px;\"></i> {}<br>",
        row.color, row.label
    ));
}

/// Inner HTML of the legend control.
pub fn legend_html() -> String {
    let legend = legend_rows();
    let mut out = String::from("<strong>Endorsers</strong><br>");
    for row in &legend.categories {
        swatch(&mut out, row);
    }
    out.push_str("<br><strong>GDP (Billions)</strong><br>");
    for row in &legend.gdp {
        swatch(&mut out, row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_row_counts() {
        let legend = legend_rows();
        assert_eq!(legend.categories.len(), 7);
        assert_eq!(legend.gdp.len(), 9);
    }

    #[test]
    fn gdp_labels() {
        let legend = legend_rows();
        assert_eq!(legend.gdp[0].label, "0.5&ndash;12.3B");
        assert_eq!(legend.gdp[0].color, "#FFFFD9");
        let last = legend.gdp.last().unwrap();
        assert_eq!(last.label, "27360.0+B");
        assert!(last.label.ends_with("+B"));
        assert_eq!(last.color, "#081D58");
    }

    #[test]
    fn gdp_swatches_follow_buckets_upwards() {
        let colors: Vec<&str> = legend_rows().gdp.iter().map(|r| r.color).collect();
        assert_eq!(
            colors,
            vec![
                "#FFFFD9", "#EDF8B1", "#C7E9B4", "#7FCDBB", "#41B6C4", "#1D91C0", "#225EA8",
                "#17347B", "#081D58",
            ]
        );
    }

    #[test]
    fn html_lists_every_row() {
        let html = legend_html();
        assert_eq!(html.matches("<i style=").count(), 16);
        assert!(html.starts_with("<strong>Endorsers</strong>"));
        assert!(html.contains("<strong>GDP (Billions)</strong>"));
        assert!(html.contains("background:#0095D3"));
        assert!(html.contains("Utilities and Infrastructure Providers<br>"));
    }
}
