use thiserror::Error;

use crate::{
    eulerian::EulerianPath,
    graph::GraphView,
    settings::{EulerianSettings, SeedPolicy},
};

#[derive(Debug, Error)]
pub enum EulerianPathBuilderError {
    #[error("`graph` not set")]
    GraphNotSet,

    #[error("`seed_policy` not set")]
    SeedPolicyNotSet,
}

#[derive(Debug)]
pub struct EulerianPathBuilder<'a, Graph> {
    graph: Option<&'a Graph>,
    seed_policy: Option<SeedPolicy>,
}

impl<Graph: GraphView> Default for EulerianPathBuilder<'_, Graph> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Graph: GraphView> EulerianPathBuilder<'a, Graph> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: None,
            seed_policy: None,
        }
    }

    #[must_use]
    pub fn graph(mut self, graph: &'a Graph) -> Self {
        self.graph = Some(graph);
        self
    }

    #[must_use]
    pub fn seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = Some(seed_policy);
        self
    }

    /// Takes every setting from `settings`.
    #[must_use]
    pub fn settings(self, settings: EulerianSettings) -> Self {
        self.seed_policy(settings.seed_policy)
    }

    pub fn build_no_defaults(self) -> Result<EulerianPath<'a, Graph>, EulerianPathBuilderError> {
        let graph = self.graph.ok_or(EulerianPathBuilderError::GraphNotSet)?;

        let settings = EulerianSettings {
            seed_policy: self
                .seed_policy
                .ok_or(EulerianPathBuilderError::SeedPolicyNotSet)?,
        };

        Ok(EulerianPath::with_settings(graph, settings))
    }

    pub fn build(mut self) -> Result<EulerianPath<'a, Graph>, EulerianPathBuilderError> {
        self.seed_policy.get_or_insert(SeedPolicy::default());

        self.build_no_defaults()
    }
}
