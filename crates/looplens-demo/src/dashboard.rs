// File: crates/looplens-demo/src/dashboard.rs
// Summary: Chart cards of the dashboard and projection of iteration records into chart specs.

use anyhow::{anyhow, bail, Result};
use looplens_core::{ChartSpec, PaletteColor, Series};

use crate::input::Record;

/// One line on a card: which metric, how it is labelled and coloured.
#[derive(Clone, Copy, Debug)]
pub struct Trace {
    pub metric: &'static str,
    pub label: &'static str,
    pub color: PaletteColor,
}

#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub id: &'static str,
    pub title: &'static str,
    pub traces: &'static [Trace],
}

const fn trace(metric: &'static str, label: &'static str, color: PaletteColor) -> Trace {
    Trace { metric, label, color }
}

pub const DASHBOARD: &[Card] = &[
    Card {
        id: "exposure",
        title: "Exposure to HIGH vacancies",
        traces: &[
            trace("exposure_high_A", "Group A", PaletteColor::Blue),
            trace("exposure_high_B", "Group B", PaletteColor::Red),
        ],
    },
    Card {
        id: "choice",
        title: "Applications to HIGH vacancies",
        traces: &[
            trace("choice_high_A", "Group A", PaletteColor::Blue),
            trace("choice_high_B", "Group B", PaletteColor::Red),
        ],
    },
    Card {
        id: "acceptance",
        title: "Acceptance rate",
        traces: &[
            trace("acceptance_rate_A", "Group A", PaletteColor::Blue),
            trace("acceptance_rate_B", "Group B", PaletteColor::Red),
        ],
    },
    Card {
        id: "diversity",
        title: "Exposure entropy",
        traces: &[
            trace("diversity_entropy_A", "Group A", PaletteColor::Blue),
            trace("diversity_entropy_B", "Group B", PaletteColor::Red),
        ],
    },
    Card {
        id: "platform",
        title: "Platform p_high",
        traces: &[
            trace("p_high_A", "p_high A", PaletteColor::Blue),
            trace("p_high_B", "p_high B", PaletteColor::Red),
        ],
    },
    Card {
        id: "disparity",
        title: "Group disparities",
        traces: &[
            trace("disparity_exposure", "Exposure gap", PaletteColor::Purple),
            trace("disparity_accept", "Acceptance gap", PaletteColor::Orange),
        ],
    },
    Card {
        id: "reinforcement",
        title: "Reinforcement index",
        traces: &[trace("reinforcement_index", "Reinforcement", PaletteColor::Green)],
    },
];

impl Card {
    /// One series per trace; `data[i]` is the metric in iteration `i`.
    pub fn project(&self, records: &[Record]) -> Result<ChartSpec> {
        let series = self
            .traces
            .iter()
            .map(|t| {
                let data = records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        r.get(t.metric)
                            .copied()
                            .ok_or_else(|| anyhow!("metric '{}' missing from iteration {i}", t.metric))
                    })
                    .collect::<Result<Vec<f64>>>()?;
                Ok(Series::new(t.label, t.color, data))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ChartSpec::new(series))
    }
}

/// Cards named by `ids` in the order given, or every card when `ids` is empty.
pub fn select<'a>(cards: &'a [Card], ids: &[String]) -> Result<Vec<&'a Card>> {
    if ids.is_empty() {
        return Ok(cards.iter().collect());
    }
    ids.iter()
        .map(|id| match cards.iter().find(|c| c.id.eq_ignore_ascii_case(id)) {
            Some(card) => Ok(card),
            None => {
                let known = cards.iter().map(|c| c.id).collect::<Vec<_>>().join(", ");
                bail!("unknown card '{id}' (known: {known})")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, f64)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn projects_metrics_in_iteration_order() {
        let records = vec![
            record(&[("exposure_high_A", 0.5), ("exposure_high_B", 0.5)]),
            record(&[("exposure_high_A", 0.6), ("exposure_high_B", 0.4)]),
            record(&[("exposure_high_A", 0.7), ("exposure_high_B", 0.3)]),
        ];
        let spec = DASHBOARD[0].project(&records).expect("project");
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].label, "Group A");
        assert_eq!(spec.series[0].data, vec![0.5, 0.6, 0.7]);
        assert_eq!(spec.series[1].color, PaletteColor::Red);
        assert_eq!(spec.series[1].data, vec![0.5, 0.4, 0.3]);
    }

    #[test]
    fn missing_metric_names_iteration() {
        let records = vec![record(&[("reinforcement_index", 0.0)]), record(&[])];
        let card = select(DASHBOARD, &["reinforcement".to_string()]).expect("card")[0];
        let err = card.project(&records).expect_err("missing");
        assert!(err.to_string().contains("iteration 1"));
    }

    #[test]
    fn select_keeps_requested_order() {
        let ids = vec!["platform".to_string(), "Exposure".to_string()];
        let picked = select(DASHBOARD, &ids).expect("select");
        let names: Vec<&str> = picked.iter().map(|c| c.id).collect();
        assert_eq!(names, ["platform", "exposure"]);
        assert_eq!(select(DASHBOARD, &[]).expect("all").len(), DASHBOARD.len());
    }

    #[test]
    fn select_rejects_unknown_cards() {
        let err = select(DASHBOARD, &["latency".to_string()]).expect_err("unknown");
        assert!(err.to_string().contains("known: exposure"));
    }

    #[test]
    fn card_ids_are_unique() {
        let mut ids: Vec<&str> = DASHBOARD.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DASHBOARD.len());
    }
}
