// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{DynVerificationPolicy, PickerConfig, PickerDependencies};
use crate::domain::contacts::models::SelectionMode;
use crate::domain::contacts::services::VerificationPolicy;
use crate::infra::contacts::TrustAllVerificationPolicy;
use crate::{SelectionDelegate, SelectionEngine};

pub struct UndefinedDependencies;

pub struct SelectionEngineBuilder<D> {
    config: PickerConfig,
    delegate: Option<Box<dyn SelectionDelegate>>,
    dependencies: D,
    verification_policy: DynVerificationPolicy,
}

impl SelectionEngineBuilder<UndefinedDependencies> {
    pub(crate) fn new() -> Self {
        SelectionEngineBuilder {
            config: Default::default(),
            delegate: None,
            dependencies: UndefinedDependencies,
            verification_policy: Arc::new(TrustAllVerificationPolicy),
        }
    }

    pub fn set_dependencies(
        self,
        dependencies: PickerDependencies,
    ) -> SelectionEngineBuilder<PickerDependencies> {
        SelectionEngineBuilder {
            config: self.config,
            delegate: self.delegate,
            dependencies,
            verification_policy: self.verification_policy,
        }
    }
}

impl<D> SelectionEngineBuilder<D> {
    pub fn set_config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn SelectionDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_verification_policy<P: VerificationPolicy + 'static>(mut self, policy: P) -> Self {
        self.verification_policy = Arc::new(policy);
        self
    }
}

impl SelectionEngineBuilder<PickerDependencies> {
    pub fn build(self, mode: SelectionMode) -> SelectionEngine {
        SelectionEngine::new(
            self.dependencies,
            self.verification_policy,
            self.config,
            self.delegate,
            mode,
        )
    }
}
