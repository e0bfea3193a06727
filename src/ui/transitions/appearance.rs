use crate::data::StorageKey;
use crate::ui::action::Action;
use crate::ui::appearance::Theme;
use crate::ui::context::TransitionContext;
use crate::ui::effect::Effect;
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_appearance_action(
        &mut self,
        action: Action,
        ctx: &TransitionContext<'_>,
        effects: &mut Vec<Effect>,
    ) {
        match action {
            Action::SetTheme(theme) => {
                self.theme = theme;
                effects.push(Effect::persist(StorageKey::Theme, theme.as_str()));
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                effects.push(Effect::persist(StorageKey::Theme, self.theme.as_str()));
            }
            Action::SyncThemeWithUserSettings(remote) => {
                // A locally stored choice always wins over the account setting
                if ctx.is_persisted(StorageKey::Theme) {
                    return;
                }
                if let Some(dark) = remote.dark_mode {
                    self.theme = Theme::from_dark_flag(dark);
                }
            }
            Action::SetLanguage(language) => {
                effects.push(Effect::persist(StorageKey::Language, language.clone()));
                self.language = language;
            }
            Action::UpdatePreferences(patch) => {
                self.preferences.merge(patch);
                effects.push(Effect::persist(
                    StorageKey::Preferences,
                    self.preferences.to_json(),
                ));
            }
            _ => {}
        }
    }
}
