// Sample datasets
// Small excerpts of the classic tips, iris and gapminder tables

use crate::chart::Series;
use indexmap::IndexMap;

pub struct Tip {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: &'static str,
    pub smoker: &'static str,
}

const fn tip(total_bill: f64, tip: f64, sex: &'static str, smoker: &'static str) -> Tip {
    Tip {
        total_bill,
        tip,
        sex,
        smoker,
    }
}

pub const TIPS: &[Tip] = &[
    tip(16.99, 1.01, "Female", "No"),
    tip(10.34, 1.66, "Male", "No"),
    tip(21.01, 3.50, "Male", "No"),
    tip(23.68, 3.31, "Male", "No"),
    tip(24.59, 3.61, "Female", "No"),
    tip(25.29, 4.71, "Male", "No"),
    tip(8.77, 2.00, "Male", "No"),
    tip(26.88, 3.12, "Male", "No"),
    tip(15.04, 1.96, "Male", "No"),
    tip(14.78, 3.23, "Male", "No"),
    tip(35.26, 5.00, "Female", "No"),
    tip(14.83, 3.02, "Female", "No"),
    tip(38.01, 3.00, "Male", "Yes"),
    tip(11.24, 1.76, "Male", "Yes"),
    tip(20.29, 3.21, "Male", "Yes"),
    tip(13.81, 2.00, "Male", "Yes"),
    tip(3.07, 1.00, "Female", "Yes"),
    tip(26.86, 3.14, "Female", "Yes"),
    tip(25.28, 5.00, "Female", "Yes"),
    tip(14.73, 2.20, "Female", "No"),
];

pub struct Iris {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub species: &'static str,
}

const fn iris(sepal_length: f64, sepal_width: f64, species: &'static str) -> Iris {
    Iris {
        sepal_length,
        sepal_width,
        species,
    }
}

pub const IRIS: &[Iris] = &[
    iris(5.1, 3.5, "setosa"),
    iris(4.9, 3.0, "setosa"),
    iris(4.7, 3.2, "setosa"),
    iris(4.6, 3.1, "setosa"),
    iris(5.0, 3.6, "setosa"),
    iris(7.0, 3.2, "versicolor"),
    iris(6.4, 3.2, "versicolor"),
    iris(6.9, 3.1, "versicolor"),
    iris(5.5, 2.3, "versicolor"),
    iris(6.5, 2.8, "versicolor"),
    iris(6.3, 3.3, "virginica"),
    iris(5.8, 2.7, "virginica"),
    iris(7.1, 3.0, "virginica"),
    iris(6.3, 2.9, "virginica"),
    iris(6.5, 3.0, "virginica"),
];

pub const GAPMINDER_YEARS: [u16; 12] = [
    1952, 1957, 1962, 1967, 1972, 1977, 1982, 1987, 1992, 1997, 2002, 2007,
];

/// Life expectancy in Oceania per country, aligned with [`GAPMINDER_YEARS`].
pub const GAPMINDER_OCEANIA: &[(&str, [f64; 12])] = &[
    (
        "Australia",
        [
            69.12, 70.33, 70.93, 71.10, 71.93, 73.49, 74.74, 76.32, 77.56, 78.83, 80.37, 81.235,
        ],
    ),
    (
        "New Zealand",
        [
            69.39, 70.26, 71.24, 71.52, 71.89, 72.22, 73.84, 74.32, 76.33, 77.55, 79.11, 80.204,
        ],
    ),
];

/// Split rows into one series per group, groups in first-seen order.
pub fn group_by<T>(
    rows: &[T],
    group: impl Fn(&T) -> &str,
    point: impl Fn(&T) -> (f64, f64),
) -> Vec<Series> {
    let mut groups: IndexMap<&str, Vec<(f64, f64)>> = IndexMap::new();
    for row in rows {
        groups.entry(group(row)).or_default().push(point(row));
    }
    groups
        .into_iter()
        .map(|(name, points)| Series::new(name, points))
        .collect()
}

pub fn gapminder_oceania() -> Vec<Series> {
    GAPMINDER_OCEANIA
        .iter()
        .map(|(country, life_exp)| {
            let points = GAPMINDER_YEARS
                .iter()
                .zip(life_exp)
                .map(|(year, value)| (f64::from(*year), *value))
                .collect();
            Series::new(*country, points)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_keeps_first_seen_order() {
        let series = group_by(TIPS, |t| t.sex, |t| (t.total_bill, t.tip));
        let names: Vec<_> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Female", "Male"]);
        let total: usize = series.iter().map(|s| s.points.len()).sum();
        assert_eq!(total, TIPS.len());
    }

    #[test]
    fn gapminder_series_span_all_years() {
        let series = gapminder_oceania();
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.points.len() == GAPMINDER_YEARS.len()));
        assert_eq!(series[0].points[0], (1952.0, 69.12));
    }
}
