//! Data Processor Module
//! Partitions the tick table by pid and derives one curve per process.

use super::loader::Table;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Order in which groups (and therefore curves) are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Ascending pid
    Ascending,
    /// Random permutation; reproducible when a seed is given
    Shuffled { seed: Option<u64> },
}

impl Default for GroupOrder {
    fn default() -> Self {
        GroupOrder::Ascending
    }
}

/// Row indices of the table sharing one pid.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub pid: f64,
    pub rows: Vec<usize>,
}

/// Points of one process, ready to draw. X is global ticks, Y is process ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub pid: f64,
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

impl Curve {
    pub fn from_group(table: &Table, group: &Group) -> Self {
        let points = group
            .rows
            .iter()
            .map(|&i| [table.global_ticks()[i], table.proc_ticks()[i]])
            .collect();

        Self {
            pid: group.pid,
            label: format!("pid = {}", format_pid(group.pid)),
            points,
        }
    }
}

/// Format a pid for display, dropping the fraction for integral values.
pub fn format_pid(pid: f64) -> String {
    if pid.fract() == 0.0 && pid.abs() < 1e15 {
        format!("{}", pid as i64)
    } else {
        pid.to_string()
    }
}

/// Groups rows and orders them for drawing.
pub struct DataProcessor;

impl DataProcessor {
    /// Distinct pids in ascending order. `-0.0` and `0.0` collapse to one key.
    pub fn distinct_pids(table: &Table) -> Vec<f64> {
        let mut keys: Vec<f64> = table.pids().iter().map(|&p| p + 0.0).collect();
        keys.sort_by(f64::total_cmp);
        keys.dedup_by(|a, b| a.total_cmp(b).is_eq());
        keys
    }

    /// Partition the table into one group per distinct pid.
    ///
    /// Every row lands in exactly one group, and rows inside a group keep
    /// their file order. `order` only permutes the groups themselves.
    pub fn partition(table: &Table, order: GroupOrder) -> Vec<Group> {
        let keys = Self::distinct_pids(table);
        let mut groups: Vec<Group> = keys
            .iter()
            .map(|&pid| Group {
                pid,
                rows: Vec::new(),
            })
            .collect();

        for (row, &pid) in table.pids().iter().enumerate() {
            let pid = pid + 0.0;
            if let Ok(idx) = keys.binary_search_by(|k| k.total_cmp(&pid)) {
                groups[idx].rows.push(row);
            }
        }

        Self::apply_order(&mut groups, order);
        tracing::debug!(groups = groups.len(), ?order, "partitioned tick table");
        groups
    }

    /// Build curves for every group, in group order.
    pub fn curves(table: &Table, groups: &[Group]) -> Vec<Curve> {
        groups
            .iter()
            .map(|group| Curve::from_group(table, group))
            .collect()
    }

    fn apply_order(groups: &mut [Group], order: GroupOrder) {
        match order {
            GroupOrder::Ascending => {}
            GroupOrder::Shuffled { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                groups.shuffle(&mut rng);
            }
        }
    }
}
