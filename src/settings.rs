// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{KvStore, PROFILE_KEY, SETTINGS_KEY, load_document, save_document};
use crate::models::{Profile, ProfilePatch, Settings, SettingsPatch};

/// User-configured limits plus identity. Settings and profile are separate
/// documents and are saved independently.
pub struct UserStore<'a> {
    kv: &'a dyn KvStore,
    settings: Settings,
    profile: Profile,
}

impl<'a> UserStore<'a> {
    pub fn load(kv: &'a dyn KvStore) -> Self {
        UserStore {
            kv,
            settings: load_document(kv, SETTINGS_KEY),
            profile: load_document(kv, PROFILE_KEY),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_registered(&self) -> bool {
        self.profile.is_registered
    }

    /// Shallow merge onto the current settings.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> &Settings {
        let s = &mut self.settings;
        if let Some(v) = patch.monthly_expense_limit {
            s.monthly_expense_limit = v;
        }
        if let Some(v) = patch.monthly_saving_goal {
            s.monthly_saving_goal = v;
        }
        if let Some(v) = patch.dark_mode {
            s.dark_mode = v;
        }
        if let Some(v) = patch.notifications_enabled {
            s.notifications_enabled = v;
        }
        save_document(self.kv, SETTINGS_KEY, &self.settings);
        &self.settings
    }

    /// Shallow merge onto the current profile. Registration state is untouched.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> &Profile {
        let p = &mut self.profile;
        if let Some(v) = patch.name {
            p.name = v;
        }
        if let Some(v) = patch.email {
            p.email = v;
        }
        if let Some(v) = patch.phone {
            p.phone = v;
        }
        save_document(self.kv, PROFILE_KEY, &self.profile);
        &self.profile
    }

    /// Replaces the profile wholesale.
    pub fn register_user(&mut self, name: &str, email: &str, phone: &str) -> &Profile {
        self.profile = Profile {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            is_registered: true,
        };
        save_document(self.kv, PROFILE_KEY, &self.profile);
        &self.profile
    }

    /// Resets only the profile; settings are kept.
    pub fn logout(&mut self) {
        self.profile = Profile::default();
        save_document(self.kv, PROFILE_KEY, &self.profile);
    }
}
