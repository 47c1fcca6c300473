//! Targeting preferences page state.

use crate::{
    Banner, BannerKind, CoreError, Profile, ProfileLookup, Result as CoreErrorResult,
    SAVE_TARGETING_SUCCESS_MESSAGE, TargetingDraft,
};

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TargetingEditor {
    profile: Option<Profile>,
    draft: TargetingDraft,
    pending: Option<Profile>,
    banner: Option<Banner>,
    loading: bool,
    load_failed: bool,
}

impl Default for TargetingEditor {
    fn default() -> Self {
        Self {
            profile: None,
            draft: TargetingDraft::default(),
            pending: None,
            banner: None,
            loading: true,
            load_failed: false,
        }
    }
}

impl TargetingEditor {
    /// A freshly mounted editor is loading until `load` is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the draft from the fetched profile.
    pub fn load(&mut self, lookup: ProfileLookup) {
        self.loading = false;
        self.load_failed = false;
        self.profile = lookup.into_profile();
        self.draft = self
            .profile
            .as_ref()
            .map(TargetingDraft::from_profile)
            .unwrap_or_default();
    }

    /// The fetch failed. The form stays empty and saving is refused, since
    /// there is nothing to merge the draft into.
    pub fn fail_load<S: Into<String>>(&mut self, message: S) {
        self.loading = false;
        self.load_failed = true;
        self.profile = None;
        self.draft = TargetingDraft::default();
        self.banner = Some(Banner::error(message));
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn draft(&self) -> &TargetingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TargetingDraft {
        &mut self.draft
    }

    /// Build the merged profile to POST. Clears any banner from the last attempt.
    ///
    /// Fails without touching the draft when the profile load failed.
    pub fn begin_save(&mut self) -> CoreErrorResult<Profile> {
        if self.load_failed {
            let error = CoreError::profile_not_loaded();
            self.banner = Some(Banner::error(error.user_message()));
            return Err(error);
        }

        self.banner = None;
        let merged = self.draft.selection().merge_into(self.profile.as_ref());
        self.pending = Some(merged.clone());
        Ok(merged)
    }

    /// Record the save outcome. Success adopts the merged profile and shows
    /// a banner that expires after `ttl`; failure shows a sticky error.
    pub fn finish_save(&mut self, outcome: Result<(), String>, now: Instant, ttl: Duration) {
        let pending = self.pending.take();

        self.banner = Some(match outcome {
            Ok(()) => {
                if let Some(saved) = pending {
                    self.draft = TargetingDraft::from_profile(&saved);
                    self.profile = Some(saved);
                }
                Banner::success(SAVE_TARGETING_SUCCESS_MESSAGE, now, ttl)
            }
            Err(message) => Banner::error(message),
        });
    }

    /// Banner to render at `now`, if any.
    pub fn banner(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|banner| banner.is_visible(now))
    }

    /// Only error banners can be dismissed by the user.
    pub fn dismiss_banner(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.kind == BannerKind::Error)
        {
            self.banner = None;
        }
    }

    /// Drop all unsaved edits (used when the session ends mid-edit).
    pub fn discard(&mut self) {
        *self = Self {
            loading: false,
            ..Self::default()
        };
    }
}
