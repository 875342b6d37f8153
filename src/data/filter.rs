use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{Category, KeywordPoint, MonthlyPoint};
use super::period::IndexRange;

// ---------------------------------------------------------------------------
// Category selection: "all" or a non-empty set of specific categories
// ---------------------------------------------------------------------------

/// One of the category buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    All,
    Only(Category),
}

/// Which categories the keyword view shows.
///
/// `from_categories` and `toggled` never produce an empty `Only`; one built
/// by hand is treated as `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(BTreeSet<Category>),
}

impl CategorySelection {
    /// Build from a set of categories; an empty set means "all".
    pub fn from_categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        let set: BTreeSet<Category> = categories.into_iter().collect();
        if set.is_empty() {
            CategorySelection::All
        } else {
            CategorySelection::Only(set)
        }
    }

    /// Whether keywords of `category` pass this selection.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(set) => set.is_empty() || set.contains(&category),
        }
    }

    /// Whether a button should render as active.
    pub fn is_active(&self, choice: CategoryChoice) -> bool {
        match (self, choice) {
            (CategorySelection::All, CategoryChoice::All) => true,
            (CategorySelection::Only(set), CategoryChoice::All) => set.is_empty(),
            (CategorySelection::Only(set), CategoryChoice::Only(c)) => set.contains(&c),
            _ => false,
        }
    }

    /// Apply a button press.
    ///
    /// * `All` clears any specific selection.
    /// * A specific category toggles; pressing one while `All` is active
    ///   starts a fresh selection with just that category.
    /// * Deselecting the last category reverts to `All`.
    pub fn toggled(&self, choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::All => CategorySelection::All,
            CategoryChoice::Only(category) => {
                let mut set = match self {
                    CategorySelection::All => BTreeSet::new(),
                    CategorySelection::Only(set) => set.clone(),
                };
                if !set.remove(&category) {
                    set.insert(category);
                }
                Self::from_categories(set)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Monthly trend filter
// ---------------------------------------------------------------------------

/// One position of the derived trend; `value` is `None` where the score was
/// below the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSample {
    pub label: String,
    pub value: Option<f64>,
}

/// Slice `series` to `range` (inclusive) and blank out scores below `threshold`.
///
/// Blanked samples keep their slot so the chart shows a gap rather than a
/// shorter series. Indices beyond the series are ignored.
pub fn filter_monthly(series: &[MonthlyPoint], range: IndexRange, threshold: f64) -> Vec<TrendSample> {
    series
        .iter()
        .skip(range.start)
        .take(range.len())
        .map(|p| TrendSample {
            label: p.label.clone(),
            value: (p.value >= threshold).then_some(p.value),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Keyword filter
// ---------------------------------------------------------------------------

/// Keep keywords mentioned at least `min_frequency` times whose category is
/// selected. Source order is preserved.
pub fn filter_keywords(
    points: &[KeywordPoint],
    min_frequency: u32,
    categories: &CategorySelection,
) -> Vec<KeywordPoint> {
    points
        .iter()
        .filter(|p| p.count >= min_frequency && categories.admits(p.category))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Everything the charts draw for one selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DerivedViews {
    pub trend: Vec<TrendSample>,
    pub keywords: Vec<KeywordPoint>,
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::model::Dataset;
    use crate::data::period::{resolve_range, Period};

    fn sample() -> Dataset {
        Dataset::mock(&mut StdRng::seed_from_u64(42))
    }

    fn names(points: &[KeywordPoint]) -> Vec<&str> {
        points.iter().map(|p| p.keyword.as_str()).collect()
    }

    #[test]
    fn threshold_zero_keeps_slice_untouched() {
        let ds = sample();
        for period in Period::ALL {
            let range = resolve_range(period);
            let trend = filter_monthly(&ds.monthly, range, 0.0);
            let expected: Vec<TrendSample> = ds.monthly[range.start..=range.end]
                .iter()
                .map(|p| TrendSample {
                    label: p.label.clone(),
                    value: Some(p.value),
                })
                .collect();
            assert_eq!(trend, expected);
        }

        let negative = filter_monthly(&ds.monthly, resolve_range(Period::All), -5.0);
        assert!(negative.iter().all(|s| s.value.is_some()));
    }

    #[test]
    fn threshold_above_max_blanks_everything() {
        let ds = sample();
        for period in Period::ALL {
            let range = resolve_range(period);
            let trend = filter_monthly(&ds.monthly, range, 81.5);
            assert_eq!(trend.len(), range.end - range.start + 1);
            assert!(trend.iter().all(|s| s.value.is_none()));
        }
    }

    #[test]
    fn gaps_keep_labels_aligned() {
        let ds = sample();
        let trend = filter_monthly(&ds.monthly, resolve_range(Period::All), 56.0);
        let labels: Vec<&str> = trend.iter().map(|s| s.label.as_str()).collect();
        let values: Vec<Option<f64>> = trend.iter().map(|s| s.value).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(
            values,
            [None, Some(59.0), Some(80.0), Some(81.0), Some(56.0), None]
        );
    }

    #[test]
    fn quarter_slice() {
        let ds = sample();
        let trend = filter_monthly(&ds.monthly, resolve_range(Period::Quarter), 0.0);
        let labels: Vec<&str> = trend.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn range_past_series_end_is_clamped() {
        let short = vec![MonthlyPoint::new("Jan", 10.0), MonthlyPoint::new("Feb", 20.0)];
        assert!(filter_monthly(&short, IndexRange::new(4, 5), 0.0).is_empty());
        assert_eq!(filter_monthly(&short, IndexRange::new(0, 5), 0.0).len(), 2);
        assert!(filter_monthly(&short, IndexRange::new(1, 0), 0.0).is_empty());
    }

    #[test]
    fn all_keywords_at_zero_frequency() {
        let ds = sample();
        let kept = filter_keywords(&ds.keywords, 0, &CategorySelection::All);
        assert_eq!(kept, ds.keywords);
    }

    #[test]
    fn no_keywords_above_max_count() {
        let ds = sample();
        assert!(filter_keywords(&ds.keywords, 1000, &CategorySelection::All).is_empty());
    }

    #[test]
    fn food_only() {
        let ds = sample();
        let food = CategorySelection::from_categories([Category::Food]);
        let kept = filter_keywords(&ds.keywords, 0, &food);
        assert_eq!(names(&kept), ["food", "menu", "taste", "portion"]);
    }

    #[test]
    fn frequency_and_category_combine() {
        let ds = sample();
        let sel = CategorySelection::from_categories([Category::Service, Category::Quality]);
        let kept = filter_keywords(&ds.keywords, 200, &sel);
        assert_eq!(names(&kept), ["quality", "delivery", "freshness"]);
    }

    #[test]
    fn filters_are_idempotent() {
        let ds = sample();
        let range = resolve_range(Period::Month);
        assert_eq!(
            filter_monthly(&ds.monthly, range, 30.0),
            filter_monthly(&ds.monthly, range, 30.0)
        );

        let sel = CategorySelection::from_categories([Category::Price]);
        let once = filter_keywords(&ds.keywords, 150, &sel);
        let twice = filter_keywords(&once, 150, &sel);
        assert_eq!(once, twice);
        assert_eq!(once, filter_keywords(&ds.keywords, 150, &sel));
    }

    #[test]
    fn toggling_categories() {
        let sel = CategorySelection::All;
        let food = sel.toggled(CategoryChoice::Only(Category::Food));
        assert_eq!(food, CategorySelection::from_categories([Category::Food]));
        assert!(!food.is_active(CategoryChoice::All));

        let both = food.toggled(CategoryChoice::Only(Category::Price));
        assert!(both.is_active(CategoryChoice::Only(Category::Food)));
        assert!(both.is_active(CategoryChoice::Only(Category::Price)));

        let back = both
            .toggled(CategoryChoice::Only(Category::Food))
            .toggled(CategoryChoice::Only(Category::Price));
        assert_eq!(back, CategorySelection::All);

        assert_eq!(both.toggled(CategoryChoice::All), CategorySelection::All);
        assert_eq!(CategorySelection::from_categories([]), CategorySelection::All);
    }

    #[test]
    fn empty_only_behaves_as_all() {
        let ds = sample();
        let empty = CategorySelection::Only(BTreeSet::new());
        assert_eq!(filter_keywords(&ds.keywords, 0, &empty), ds.keywords);
        assert!(empty.is_active(CategoryChoice::All));
        assert!(!empty.is_active(CategoryChoice::Only(Category::Food)));
        assert_eq!(
            empty.toggled(CategoryChoice::Only(Category::Food)),
            CategorySelection::from_categories([Category::Food])
        );
    }
}
