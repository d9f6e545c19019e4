//! Per-section reveal specs and their lifecycle against the registry.

use super::registry::{ObserverId, ObserverRegistry};
use super::trigger::{Bounds, ScrollTrigger, TriggerConfig};
use crate::tween::{StyleFrame, Tween};

/// Which element's position drives a group's trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// The whole section element.
    Section,
    /// The group's own container.
    Container,
}

/// One animated element group inside a section.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    pub target: &'static str,
    pub source: TriggerSource,
    /// When true the tween animates the container's children.
    pub children: bool,
    pub tween: Tween,
    pub trigger: TriggerConfig,
}

impl RevealGroup {
    /// Fully revealed state of the group's elements.
    pub fn resting_frame(&self) -> StyleFrame {
        self.tween.final_frame()
    }
}

/// Force a group to its resting state after a fixed delay, whether or
/// not its observer ever fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    pub target: &'static str,
    pub delay_ms: u32,
}

/// Everything a section registers when it mounts.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReveal {
    /// Owner tag used in the registry (the section anchor).
    pub owner: &'static str,
    pub groups: Vec<RevealGroup>,
    pub fallbacks: Vec<Fallback>,
}

/// Result of trying to register one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Registered(ObserverId),
    /// The group's element was not attached yet.
    Skipped(&'static str),
}

/// Outcomes of a [`SectionReveal::mount`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountReport {
    pub outcomes: Vec<MountOutcome>,
}

impl MountReport {
    pub fn registered(&self) -> Vec<ObserverId> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                MountOutcome::Registered(id) => Some(*id),
                MountOutcome::Skipped(_) => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                MountOutcome::Skipped(target) => Some(*target),
                MountOutcome::Registered(_) => None,
            })
            .collect()
    }
}

impl SectionReveal {
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            groups: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    pub fn group(mut self, group: RevealGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn fallback(mut self, target: &'static str, delay_ms: u32) -> Self {
        self.fallbacks.push(Fallback { target, delay_ms });
        self
    }

    pub fn find(&self, target: &str) -> Option<&RevealGroup> {
        self.groups.iter().find(|g| g.target == target)
    }

    /// Register one observer per group.
    ///
    /// `resolve` measures the group's trigger element and builds the
    /// payload; returning `None` skips the group for this pass (no retry,
    /// the fallbacks still apply).
    pub fn mount<T>(
        &self,
        registry: &mut ObserverRegistry<T>,
        mut resolve: impl FnMut(&RevealGroup) -> Option<(Bounds, T)>,
    ) -> MountReport {
        let outcomes = self
            .groups
            .iter()
            .map(|group| match resolve(group) {
                Some((bounds, payload)) => {
                    let trigger = ScrollTrigger::new(group.trigger, bounds);
                    MountOutcome::Registered(registry.register(self.owner, trigger, payload))
                }
                None => {
                    log::debug!("'{}' not attached, skipping '{}' reveal", self.owner, group.target);
                    MountOutcome::Skipped(group.target)
                }
            })
            .collect();
        MountReport { outcomes }
    }

    /// Release everything this section registered.
    pub fn unmount<T>(&self, registry: &mut ObserverRegistry<T>) -> usize {
        registry.release_owner(self.owner)
    }

    /// Resting frames for every fallback target.
    pub fn fallback_frames(&self) -> Vec<(Fallback, StyleFrame)> {
        self.fallbacks
            .iter()
            .filter_map(|fb| self.find(fb.target).map(|g| (*fb, g.resting_frame())))
            .collect()
    }
}
