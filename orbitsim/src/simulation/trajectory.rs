//! Per-body position history.
//!
//! The physics step never reads a trajectory; it only appends to it. How much
//! history is kept is decided by a [`TrajectoryPolicy`].

use std::collections::vec_deque;
use std::collections::VecDeque;

use serde::Deserialize;

use super::states::NVec2;

/// Retention rule for trajectory samples
///
/// ```yaml
/// trajectory:
///   policy: ring
///   capacity: 2000
/// ```
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TrajectoryPolicy {
    /// Keep every sample forever
    #[default]
    Unbounded,
    /// Keep only the most recent `capacity` samples
    Ring { capacity: usize },
    /// Keep one sample out of every `every` steps
    Decimate { every: u64 },
}

#[derive(Debug, Clone)]
pub struct Trajectory {
    policy: TrajectoryPolicy,
    points: VecDeque<NVec2>,
    offered: u64, // samples offered so far, kept or not
}

impl Trajectory {
    pub fn new(policy: TrajectoryPolicy) -> Self {
        let points = match policy {
            TrajectoryPolicy::Ring { capacity } => VecDeque::with_capacity(capacity),
            _ => VecDeque::new(),
        };
        Self {
            policy,
            points,
            offered: 0,
        }
    }

    /// Offer the position reached at the end of a step
    pub fn record(&mut self, point: NVec2) {
        self.offered += 1;
        match self.policy {
            TrajectoryPolicy::Unbounded => self.points.push_back(point),
            TrajectoryPolicy::Ring { capacity } => {
                if capacity == 0 {
                    return;
                }
                if self.points.len() == capacity {
                    self.points.pop_front();
                }
                self.points.push_back(point);
            }
            TrajectoryPolicy::Decimate { every } => {
                if every != 0 && self.offered % every == 0 {
                    self.points.push_back(point);
                }
            }
        }
    }

    pub fn policy(&self) -> TrajectoryPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<NVec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a NVec2;
    type IntoIter = vec_deque::Iter<'a, NVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
