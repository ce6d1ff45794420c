//! # Passing Network
//!
//! Directed passer -> receiver links built from completed passes that name
//! both players. Player ids are kept in ordered maps so the output is stable
//! across runs.
//!
//! The Gini coefficient of passes sent per player measures how concentrated
//! distribution is:
//! - 0.0 = every player passes equally
//! - 1.0 = one player makes every pass

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::events::MatchEvent;

/// One player in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
    pub player: String,
    pub name: Option<String>,
    pub passes_made: u32,
    pub passes_received: u32,
    /// Mean pass-origin position (normalized units)
    pub avg_x: f64,
    pub avg_y: f64,
}

/// Completed passes from `from` to `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLink {
    pub from: String,
    pub to: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassNetwork {
    pub nodes: Vec<NetworkNode>,
    /// Sorted by count descending, then by (from, to)
    pub links: Vec<NetworkLink>,
    /// Gini of passes made per node; `None` when there are no nodes
    pub pass_gini: Option<f64>,
}

#[derive(Default)]
struct NodeAcc {
    name: Option<String>,
    made: u32,
    received: u32,
    sum_x: f64,
    sum_y: f64,
}

impl PassNetwork {
    pub fn build(events: &[MatchEvent], config: &NetworkConfig) -> Self {
        let mut nodes: BTreeMap<&str, NodeAcc> = BTreeMap::new();
        let mut links: BTreeMap<(&str, &str), u32> = BTreeMap::new();

        for pass in events.iter().filter_map(MatchEvent::as_pass) {
            if !pass.base.success {
                continue;
            }
            let (Some(from), Some(to)) = (pass.base.player.as_deref(), pass.pass_target.as_deref()) else {
                continue;
            };

            let passer = nodes.entry(from).or_default();
            passer.made += 1;
            passer.sum_x += pass.base.x;
            passer.sum_y += pass.base.y;
            if passer.name.is_none() {
                passer.name = pass.base.player_name.clone();
            }

            let receiver = nodes.entry(to).or_default();
            receiver.received += 1;
            if receiver.name.is_none() {
                receiver.name = pass.pass_target_name.clone();
            }

            *links.entry((from, to)).or_insert(0) += 1;
        }

        let min_link = config.min_link_passes.max(1);
        let mut links: Vec<NetworkLink> = links
            .into_iter()
            .filter(|&(_, count)| count >= min_link)
            .map(|((from, to), count)| NetworkLink { from: from.to_string(), to: to.to_string(), count })
            .collect();
        // stable sort keeps (from, to) order within equal counts
        links.sort_by(|a, b| b.count.cmp(&a.count));

        let nodes: Vec<NetworkNode> = nodes
            .into_iter()
            .map(|(player, acc)| {
                let n = acc.made.max(1) as f64;
                NetworkNode {
                    player: player.to_string(),
                    name: acc.name,
                    passes_made: acc.made,
                    passes_received: acc.received,
                    avg_x: if acc.made > 0 { acc.sum_x / n } else { 0.0 },
                    avg_y: if acc.made > 0 { acc.sum_y / n } else { 0.0 },
                }
            })
            .collect();

        let made: Vec<u32> = nodes.iter().map(|n| n.passes_made).collect();
        let pass_gini = gini_coefficient(&made);

        Self { nodes, links, pass_gini }
    }

    pub fn node(&self, player: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.player == player)
    }

    pub fn link(&self, from: &str, to: &str) -> Option<&NetworkLink> {
        self.links.iter().find(|l| l.from == from && l.to == to)
    }

    pub fn total_passes(&self) -> u32 {
        self.links.iter().map(|l| l.count).sum()
    }
}

/// Gini coefficient of non-negative counts.
///
/// Sorted-values formula: `G = 2 * Σ(i * x_i) / (n * Σx) - (n + 1) / n`
/// with 1-based ranks. All-zero input is perfect equality.
pub fn gini_coefficient(values: &[u32]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let mut sorted: Vec<u64> = values.iter().map(|&v| v as u64).collect();
    sorted.sort_unstable();
    let sum: u64 = sorted.iter().sum();
    if sum == 0 {
        return Some(0.0);
    }

    let weighted: u64 = sorted.iter().enumerate().map(|(i, &v)| (i as u64 + 1) * v).sum();
    let n = n as f64;
    let gini = 2.0 * weighted as f64 / (n * sum as f64) - (n + 1.0) / n;

    // float noise can push a uniform distribution slightly below zero
    Some(gini.clamp(0.0, 1.0))
}
