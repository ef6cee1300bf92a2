//! Random-walk time series for panels and the comparison chart.

use chrono::NaiveDateTime;
use rand::Rng;

use crate::catalog::Instrument;
use crate::rng::SeedSource;
use crate::selection::{ChartMode, SelectionStore, TimeWindow};
use crate::ticker::{Category, Rgb};

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub time: NaiveDateTime,
    pub value: f64,
}

/// Multiplicative random walk: `value *= 1 + (u - 0.5) * volatility + drift`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    pub start: f64,
    pub drift: f64,
    pub volatility: f64,
}

impl RandomWalk {
    /// Walk used by the comparison chart, which only knows the category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Fx => Self {
                start: 1.0,
                drift: 0.0,
                volatility: 0.01,
            },
            Category::Bond => Self {
                start: 100.0,
                drift: 0.0,
                volatility: 0.005,
            },
            Category::Equity => Self {
                start: 100.0,
                drift: 0.0002,
                volatility: 0.02,
            },
            Category::Commodity | Category::Crypto => Self {
                start: 100.0,
                drift: 0.0,
                volatility: 0.02,
            },
        }
    }

    fn step<R: Rng + ?Sized>(&self, value: f64, rng: &mut R) -> f64 {
        let shock = (rng.gen::<f64>() - 0.5) * self.volatility + self.drift;
        value * (1.0 + shock)
    }
}

/// Generate `window.steps() + 1` points ending at `end`.
pub fn generate<R: Rng + ?Sized>(
    walk: &RandomWalk,
    window: TimeWindow,
    end: NaiveDateTime,
    rng: &mut R,
) -> Vec<SeriesPoint> {
    let steps = window.steps();
    let step = window.step();
    let start = end - step * steps as i32;

    let mut points = Vec::with_capacity(steps + 1);
    let mut value = walk.start;
    for i in 0..=steps {
        if i > 0 {
            value = walk.step(value, rng);
        }
        points.push(SeriesPoint {
            time: start + step * i as i32,
            value,
        });
    }
    points
}

/// Series for a catalog instrument, seeded by symbol and window.
pub fn instrument_series(
    instrument: &Instrument,
    window: TimeWindow,
    seeds: &SeedSource,
    end: NaiveDateTime,
) -> Vec<SeriesPoint> {
    let mut rng = seeds.rng_for(&instrument.symbol, window);
    generate(&instrument.walk(window), window, end, &mut rng)
}

/// Rescale to percent change from the first observation.
///
/// A zero first value cannot be rebased and yields a flat zero line.
pub fn normalize_percent_change(points: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let base = first.value;
    points
        .iter()
        .map(|p| SeriesPoint {
            time: p.time,
            value: if base == 0.0 {
                0.0
            } else {
                (p.value / base - 1.0) * 100.0
            },
        })
        .collect()
}

/// Last value and its change over the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub last: f64,
    pub change: f64,
    pub change_pct: f64,
}

impl Quote {
    pub fn from_series(points: &[SeriesPoint]) -> Option<Self> {
        let first = points.first()?.value;
        let last = points.last()?.value;
        let change = last - first;
        let change_pct = if first == 0.0 { 0.0 } else { change / first * 100.0 };
        Some(Self {
            last,
            change,
            change_pct,
        })
    }
}

/// One line of the comparison chart.
#[derive(Debug, Clone)]
pub struct ComparisonLine {
    pub symbol: String,
    pub category: Category,
    pub color: Rgb,
    pub points: Vec<SeriesPoint>,
}

/// Everything the comparison chart draws for the current selection.
#[derive(Debug, Clone)]
pub struct ComparisonSeries {
    pub mode: ChartMode,
    pub window: TimeWindow,
    pub lines: Vec<ComparisonLine>,
}

impl ComparisonSeries {
    /// One line per selected ticker, in selection order; normalized in Compare mode.
    pub fn build(selection: &SelectionStore, seeds: &SeedSource, end: NaiveDateTime) -> Self {
        let mode = selection.mode();
        let window = selection.window();
        let lines = selection
            .tickers()
            .iter()
            .map(|t| {
                let mut rng = seeds.rng_for(t.symbol(), window);
                let raw = generate(&RandomWalk::for_category(t.category()), window, end, &mut rng);
                let points = match mode {
                    ChartMode::Compare => normalize_percent_change(&raw),
                    ChartMode::Overlay => raw,
                };
                ComparisonLine {
                    symbol: t.symbol().to_string(),
                    category: t.category(),
                    color: t.color(),
                    points,
                }
            })
            .collect();
        Self {
            mode,
            window,
            lines,
        }
    }

    /// Min and max value across all lines, or `None` when nothing is drawn.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p.value))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::SelectedTicker;
    use chrono::NaiveDate;

    fn end() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap()
    }

    #[test]
    fn series_length_and_spacing() {
        let seeds = SeedSource::new(1);
        let walk = RandomWalk::for_category(Category::Equity);
        let points = generate(&walk, TimeWindow::OneMonth, end(), &mut seeds.rng_for("X", TimeWindow::OneMonth));
        assert_eq!(points.len(), 31);
        assert_eq!(points.last().unwrap().time, end());
        assert_eq!(points[1].time - points[0].time, chrono::Duration::days(1));
        assert_eq!(points[0].value, 100.0);
    }

    #[test]
    fn intraday_uses_hourly_steps() {
        let seeds = SeedSource::new(1);
        let walk = RandomWalk::for_category(Category::Fx);
        let points = generate(&walk, TimeWindow::OneDay, end(), &mut seeds.rng_for("EURUSD", TimeWindow::OneDay));
        assert_eq!(points.len(), 25);
        assert_eq!(points[1].time - points[0].time, chrono::Duration::hours(1));
        assert_eq!(points[0].value, 1.0);
    }

    #[test]
    fn walk_stays_positive_and_bounded() {
        let seeds = SeedSource::new(3);
        let walk = RandomWalk::for_category(Category::Crypto);
        let points = generate(&walk, TimeWindow::OneYear, end(), &mut seeds.rng_for("BTC", TimeWindow::OneYear));
        for pair in points.windows(2) {
            let ratio = pair[1].value / pair[0].value;
            assert!(ratio > 0.98 && ratio < 1.02, "ratio {ratio}");
        }
    }

    #[test]
    fn same_seed_same_series() {
        let seeds = SeedSource::new(99);
        let inst = crate::catalog::Catalog::default_catalog().find("GC").cloned().unwrap();
        let a = instrument_series(&inst, TimeWindow::OneYear, &seeds, end());
        let b = instrument_series(&inst, TimeWindow::OneYear, &seeds, end());
        assert_eq!(a, b);
        assert_eq!(a[0].value, inst.level);
    }

    #[test]
    fn normalize_starts_at_zero() {
        let seeds = SeedSource::new(5);
        let walk = RandomWalk::for_category(Category::Commodity);
        let raw = generate(&walk, TimeWindow::OneWeek, end(), &mut seeds.rng_for("CL", TimeWindow::OneWeek));
        let pct = normalize_percent_change(&raw);
        assert_eq!(pct.len(), raw.len());
        assert_eq!(pct[0].value, 0.0);
        let expected = (raw[3].value / raw[0].value - 1.0) * 100.0;
        assert!((pct[3].value - expected).abs() < 1e-12);
    }

    #[test]
    fn normalize_edge_cases() {
        assert!(normalize_percent_change(&[]).is_empty());
        let zeros = vec![
            SeriesPoint { time: end(), value: 0.0 },
            SeriesPoint { time: end(), value: 5.0 },
        ];
        assert!(normalize_percent_change(&zeros).iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn quote_from_series() {
        let points = vec![
            SeriesPoint { time: end(), value: 100.0 },
            SeriesPoint { time: end(), value: 110.0 },
        ];
        let q = Quote::from_series(&points).unwrap();
        assert_eq!(q.last, 110.0);
        assert_eq!(q.change, 10.0);
        assert!((q.change_pct - 10.0).abs() < 1e-12);
        assert!(Quote::from_series(&[]).is_none());
    }

    #[test]
    fn comparison_follows_selection_order_and_mode() {
        let seeds = SeedSource::new(11);
        let mut selection = SelectionStore::new();
        selection.add(SelectedTicker::new("MSFT", "Microsoft", Category::Equity));
        selection.add(SelectedTicker::new("EURUSD", "Euro", Category::Fx));
        selection.set_window(TimeWindow::OneMonth);

        let compare = ComparisonSeries::build(&selection, &seeds, end());
        let symbols: Vec<_> = compare.lines.iter().map(|l| l.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "EURUSD"]);
        assert!(compare.lines.iter().all(|l| l.points[0].value == 0.0));

        selection.set_mode(ChartMode::Overlay);
        let overlay = ComparisonSeries::build(&selection, &seeds, end());
        assert_eq!(overlay.lines[0].points[0].value, 100.0);
        assert_eq!(overlay.lines[1].points[0].value, 1.0);
        assert_eq!(overlay.lines[1].color, Category::Fx.color());
    }

    #[test]
    fn adding_a_ticker_keeps_existing_lines() {
        let seeds = SeedSource::new(11);
        let mut selection = SelectionStore::new();
        selection.add(SelectedTicker::new("GC", "Gold", Category::Commodity));
        let before = ComparisonSeries::build(&selection, &seeds, end());

        selection.add(SelectedTicker::new("SI", "Silver", Category::Commodity));
        let after = ComparisonSeries::build(&selection, &seeds, end());
        assert_eq!(before.lines[0].points, after.lines[0].points);
    }

    #[test]
    fn bounds_of_empty_comparison() {
        let seeds = SeedSource::new(0);
        let empty = ComparisonSeries::build(&SelectionStore::new(), &seeds, end());
        assert!(empty.is_empty());
        assert!(empty.value_bounds().is_none());
    }
}
