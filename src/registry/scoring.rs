//! Related-domain and workflow scoring.
//!
//! Scores are additive. Every candidate list is sorted by score descending with
//! name ascending as tie-break, so identical catalogs always produce identical
//! results.

use super::Registry;
use crate::catalog::{DomainInfo, Workflow};
use serde::Serialize;
use std::collections::BTreeMap;

pub const MAX_RELATED_DOMAINS: usize = 5;
pub const MAX_WORKFLOW_SUGGESTIONS: usize = 3;

const EXPLICIT_RELATION: u32 = 5;
const SHARED_CATEGORY: u32 = 4;
const USE_CASE_OVERLAP: u32 = 3;
const SAME_TIER: u32 = 2;
const ADJACENT_TIER: u32 = 1;
const WORKFLOW_MEMBER: u32 = 5;

/// A workflow ranked for a particular domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowSuggestion {
    pub name: String,
    pub description: String,
    pub category: String,
    pub domains: Vec<String>,
    pub score: u32,
}

impl Registry {
    /// Domains that work well with `domain`, best first, at most five.
    ///
    /// Unknown domain yields an empty list.
    pub fn related_domains(&self, domain: &str) -> Vec<&DomainInfo> {
        self.related_domain_scores(domain)
            .into_iter()
            .filter_map(|(name, _)| self.domains.get(name))
            .collect()
    }

    /// Scored candidates behind [`Registry::related_domains`].
    pub fn related_domain_scores(&self, domain: &str) -> Vec<(&str, u32)> {
        let Some(target) = self.domain_info(domain) else {
            return Vec::new();
        };
        let index = self.index();
        let target_words = index.use_case_words.get(&target.name);

        let mut scores: BTreeMap<&str, u32> = BTreeMap::new();
        for candidate in self.domains.values() {
            if candidate.name == target.name {
                continue;
            }

            let mut score = 0;
            if target.related_domains.contains(&candidate.name)
                || candidate.related_domains.contains(&target.name)
            {
                score += EXPLICIT_RELATION;
            }
            if !target.category.is_empty() && candidate.category == target.category {
                score += SHARED_CATEGORY;
            }
            let overlaps = match (target_words, index.use_case_words.get(&candidate.name)) {
                (Some(a), Some(b)) => a.intersection(b).next().is_some(),
                _ => false,
            };
            if overlaps {
                score += USE_CASE_OVERLAP;
            }
            score += match target.required_tier.distance(candidate.required_tier) {
                0 => SAME_TIER,
                1 => ADJACENT_TIER,
                _ => 0,
            };

            if score > 0 {
                scores.insert(candidate.name.as_str(), score);
            }
        }

        let mut ranked: Vec<(&str, u32)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(MAX_RELATED_DOMAINS);
        ranked
    }

    /// Workflows relevant to `domain`, best first, at most three.
    ///
    /// A workflow scores for including the domain, for sharing its category,
    /// and for every participating domain that is among its related domains.
    pub fn workflow_suggestions(&self, domain: &str) -> Vec<WorkflowSuggestion> {
        let Some(target) = self.domain_info(domain) else {
            return Vec::new();
        };
        let related: Vec<&str> = self
            .related_domain_scores(&target.name)
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        let mut ranked: Vec<WorkflowSuggestion> = self
            .workflows
            .iter()
            .filter_map(|wf| {
                let score = workflow_score(wf, target, &related);
                (score > 0).then(|| WorkflowSuggestion {
                    name: wf.name.clone(),
                    description: wf.description.clone(),
                    category: wf.category.clone(),
                    domains: wf.domains.clone(),
                    score,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(MAX_WORKFLOW_SUGGESTIONS);
        ranked
    }
}

fn workflow_score(workflow: &Workflow, target: &DomainInfo, related: &[&str]) -> u32 {
    let mut score = 0;
    if workflow.domains.iter().any(|d| *d == target.name) {
        score += WORKFLOW_MEMBER;
    }
    if !target.category.is_empty() && workflow.category == target.category {
        score += SHARED_CATEGORY;
    }
    let related_members = workflow
        .domains
        .iter()
        .filter(|d| related.contains(&d.as_str()))
        .count() as u32;
    score + related_members * ADJACENT_TIER
}
