//! Identity-bound draft session
//!
//! One parametrized surface replaces a per-entity save/load/clear triple
//! for each creation flow. The session re-reads the identity provider on
//! every call, so a login or logout changes which key the next operation
//! touches. A draft saved anonymously stays under the anonymous scope
//! after login; associating it with the user takes a fresh save.

use std::sync::Arc;

use crate::data::{ApplicationDraft, Draft};
use crate::identity::IdentityProvider;
use crate::store::draft_store::DraftStore;
use crate::store::key::{DraftKey, DraftKind};

/// Draft persistence bound to the current user identity
#[derive(Clone)]
pub struct DraftSession {
    store: DraftStore,
    identity: Arc<dyn IdentityProvider>,
}

impl DraftSession {
    pub fn new(store: DraftStore, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    /// Persist the draft for the current user
    pub fn save<D: Draft>(&self, draft: &D) {
        self.store.save(&self.key_for(D::KIND, None), draft);
    }

    /// Load the current user's draft of this kind, if one was saved
    pub fn load<D: Draft>(&self) -> Option<D> {
        self.store.load(&self.key_for(D::KIND, None))
    }

    /// Discard the current user's draft of this kind
    pub fn clear<D: Draft>(&self) {
        self.store.clear(&self.key_for(D::KIND, None));
    }

    /// Persist an application draft tied to a parent program
    pub fn save_application(&self, program_id: &str, draft: &ApplicationDraft) {
        self.store
            .save(&self.key_for(DraftKind::Application, Some(program_id)), draft);
    }

    /// Load the current user's application draft for a program
    pub fn load_application(&self, program_id: &str) -> Option<ApplicationDraft> {
        self.store
            .load(&self.key_for(DraftKind::Application, Some(program_id)))
    }

    /// Discard the current user's application draft for a program
    pub fn clear_application(&self, program_id: &str) {
        self.store
            .clear(&self.key_for(DraftKind::Application, Some(program_id)));
    }

    fn key_for(&self, kind: DraftKind, entity: Option<&str>) -> DraftKey {
        let user = self.identity.current_user();
        DraftKey::new(kind, user.as_ref().map(|u| u.as_str()), entity)
    }
}
