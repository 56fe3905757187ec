use career_ladder::config::AppConfig;
use career_ladder::layers::chart_layers;
use career_ladder::radar::{self, Layer};
use career_ladder::session::{self, share_url};
use career_ladder::{
    ActiveTab, Catalog, CompareSlot, Dimension, LadderError, Role, SessionEvent, SessionState,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;
use tracing::{info, warn};

/// One row of the Explore role list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRow<'a> {
    Track(&'a str),
    Role(&'a Role),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub catalog: Catalog,
    pub config: AppConfig,
    pub session: SessionState,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    /// Highlighted dimension on the Define tab.
    pub dimension_index: usize,
    pub editing_name: bool,
    pub name_input: String,
    pub role_filter: String,
    pub filtering: bool,
    /// Highlighted entry of `visible_roles()` on the Explore tab.
    pub role_index: usize,
    pub compare_slot: CompareSlot,
}

impl App {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        let session = SessionState::initial(&catalog);
        Self {
            running: true,
            catalog,
            config,
            session,
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            dimension_index: 0,
            editing_name: false,
            name_input: String::new(),
            role_filter: String::new(),
            filtering: false,
            role_index: 0,
            compare_slot: CompareSlot::First,
        }
    }

    /// Restores a shared session, keeping whatever the token could not supply.
    pub fn restore(&mut self, token: &str) {
        let partial = session::decode(token, &self.catalog);
        if partial.is_empty() {
            self.status_message = "Share link could not be read; starting fresh".to_string();
            return;
        }

        if self.dispatch(SessionEvent::Restore(partial)) {
            info!(tab = self.session.active_tab.as_str(), "restored shared session");
            self.status_message = "Restored shared session".to_string();
        }
    }

    /// Applies `event`; on failure the session is left as it was and the error
    /// lands in the status bar. Returns whether the event was applied.
    pub fn dispatch(&mut self, event: SessionEvent) -> bool {
        match self.session.clone().apply(event, &self.catalog) {
            Ok(next) => {
                self.session = next;
                true
            }
            Err(err) => {
                warn!(error = %err, "session event rejected");
                self.status_message = describe_error(&err);
                false
            }
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.animation_paused {
            return;
        }

        // cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
        self.status_message = if self.animation_paused {
            "Animation paused".to_string()
        } else {
            "Animation resumed".to_string()
        };
    }

    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.filtering = false;
        self.editing_name = false;
        self.dispatch(SessionEvent::SetTab(tab));
    }

    pub fn share(&mut self) {
        let url = share_url(&self.config.share_base_url, &self.session);
        info!(%url, "share link generated");
        self.status_message = format!("Share link: {url}");
    }

    pub fn reset(&mut self) {
        if self.dispatch(SessionEvent::Reset) {
            self.dimension_index = 0;
            self.role_index = 0;
            self.role_filter.clear();
            self.compare_slot = CompareSlot::First;
            self.status_message = "Session reset".to_string();
        }
    }

    pub fn selected_dimension(&self) -> Option<&Dimension> {
        self.catalog.dimensions().get(self.dimension_index)
    }

    pub fn step_selected_level(&mut self, delta: i8) {
        if let Some(dimension_id) = self.selected_dimension().map(|d| d.id.clone()) {
            self.dispatch(SessionEvent::StepLevel {
                dimension_id,
                delta,
            });
        }
    }

    pub fn start_name_edit(&mut self) {
        self.name_input = self.session.custom_role.name.clone();
        self.editing_name = true;
    }

    pub fn commit_name_edit(&mut self) {
        let name = self.name_input.trim().to_string();
        self.editing_name = false;
        if name.is_empty() {
            self.status_message = "Custom role name cannot be empty".to_string();
            return;
        }
        self.dispatch(SessionEvent::RenameCustom(name));
    }

    /// Explore roles: grouped by track when unfiltered, best fuzzy match first otherwise.
    pub fn visible_roles(&self) -> Vec<&Role> {
        let filter = self.role_filter.trim();
        if filter.is_empty() {
            return self
                .catalog
                .tracks()
                .into_iter()
                .flat_map(|track| self.catalog.roles_in_track(track))
                .collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored = self
            .catalog
            .roles()
            .iter()
            .filter_map(|role| {
                let score = matcher
                    .fuzzy_match(&role.name, filter)
                    .or_else(|| matcher.fuzzy_match(&role.track, filter))?;
                Some((score, role))
            })
            .collect::<Vec<_>>();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, role)| role).collect()
    }

    /// Explore list rows. Track headers separate groups only when unfiltered;
    /// fuzzy ranking interleaves tracks.
    pub fn role_rows(&self) -> Vec<RoleRow<'_>> {
        let grouped = self.role_filter.trim().is_empty();
        let mut rows = Vec::new();
        let mut current_track = None;
        for role in self.visible_roles() {
            if grouped && current_track != Some(role.track.as_str()) {
                current_track = Some(role.track.as_str());
                rows.push(RoleRow::Track(&role.track));
            }
            rows.push(RoleRow::Role(role));
        }
        rows
    }

    pub fn highlighted_role(&self) -> Option<&Role> {
        self.visible_roles().get(self.role_index).copied()
    }

    pub fn select_highlighted_role(&mut self) {
        if let Some(id) = self.highlighted_role().map(|role| role.id.clone()) {
            self.dispatch(SessionEvent::SelectRole(Some(id)));
        }
    }

    /// Moves the selection along the highlighted role's first next role.
    pub fn follow_next_role(&mut self) {
        let Some(role) = self.highlighted_role() else {
            return;
        };
        let Some(next) = self.catalog.next_roles(role).next() else {
            self.status_message = format!("{} has no further roles in this catalog", role.name);
            return;
        };
        let next_id = next.id.clone();

        self.role_filter.clear();
        self.role_index = self
            .visible_roles()
            .iter()
            .position(|role| role.id == next_id)
            .unwrap_or(0);
        self.dispatch(SessionEvent::SelectRole(Some(next_id)));
    }

    pub fn select_nearest(&mut self) {
        if self.dispatch(SessionEvent::SelectNearest) {
            if let Some(role) = self.session.selected_role(&self.catalog) {
                self.status_message = format!("Selected nearest role: {}", role.name);
            }
        }
    }

    /// Cycles the active compare slot through the catalog, wrapping through "empty".
    pub fn cycle_compare_role(&mut self, forward: bool) {
        let roles = self.catalog.roles();
        let slots = roles.len() + 1;
        let current = self
            .session
            .compared_role(&self.catalog, self.compare_slot)
            .and_then(|role| self.catalog.role_index(&role.id))
            .unwrap_or(roles.len());

        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let role_id = roles.get(next).map(|role| role.id.clone());

        self.dispatch(SessionEvent::SetCompare {
            slot: self.compare_slot,
            role_id,
        });
    }

    pub fn layers(&self) -> Result<Vec<Layer>, LadderError> {
        chart_layers(&self.session, &self.catalog).map_err(Into::into)
    }

    /// Sets the custom level under a click on the radar, in chart coordinates
    /// (y down).
    pub fn click_level(&mut self, x: f64, y: f64, tolerance: f64) -> bool {
        let Some(hit) = radar::hit_test(
            x,
            y,
            self.catalog.dimensions(),
            self.config.canvas_radius,
            tolerance,
        ) else {
            return false;
        };

        if let Some(index) = self
            .catalog
            .dimensions()
            .iter()
            .position(|dimension| dimension.id == hit.dimension_id)
        {
            self.dimension_index = index;
        }
        self.dispatch(SessionEvent::SetLevel {
            dimension_id: hit.dimension_id,
            level: hit.level,
        })
    }
}

fn describe_error(err: &LadderError) -> String {
    match err {
        LadderError::UnknownReference(id) => format!("Unknown role: {id}"),
        LadderError::NoMatch => "No role to match against".to_string(),
        LadderError::Validation(err) => format!("Invalid levels: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin(), AppConfig::default())
    }

    #[test]
    fn unfiltered_roles_are_grouped_by_track() {
        let app = app();
        let rows = app.role_rows();

        assert_eq!(rows.first(), Some(&RoleRow::Track("Individual Contributor")));
        let tracks = rows
            .iter()
            .filter(|row| matches!(row, RoleRow::Track(_)))
            .count();
        assert_eq!(tracks, 3);
        assert_eq!(app.visible_roles().len(), app.catalog.roles().len());
    }

    #[test]
    fn fuzzy_filter_narrows_roles() {
        let mut app = app();
        app.role_filter = "staff".to_string();
        let names: Vec<_> = app.visible_roles().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(names.first(), Some(&"staff-engineer"));

        app.role_filter = "zzzz".to_string();
        assert!(app.visible_roles().is_empty());
        assert_eq!(app.highlighted_role(), None);
    }

    #[test]
    fn filtered_rows_have_no_track_headers() {
        let mut app = app();
        app.role_filter = "engineer".to_string();
        let rows = app.role_rows();

        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| matches!(row, RoleRow::Role(_))));
        assert_eq!(rows.len(), app.visible_roles().len());
    }

    #[test]
    fn follow_next_role_selects_it() {
        let mut app = app();
        app.role_index = 0;
        app.follow_next_role();

        assert_eq!(app.session.selected_role_id.as_deref(), Some("software-engineer"));
        assert_eq!(app.highlighted_role().map(|r| r.id.as_str()), Some("software-engineer"));
    }

    #[test]
    fn rejected_events_keep_session_and_report() {
        let mut app = app();
        let before = app.session.clone();

        assert!(!app.dispatch(SessionEvent::SelectRole(Some("cto".to_string()))));
        assert_eq!(app.session, before);
        assert_eq!(app.status_message, "Unknown role: cto");
    }

    #[test]
    fn compare_cycle_wraps_through_empty() {
        let mut app = app();
        app.cycle_compare_role(true);
        assert_eq!(app.session.compare_role_ids[0].as_deref(), Some("junior-engineer"));

        app.cycle_compare_role(false);
        assert_eq!(app.session.compare_role_ids[0], None);

        app.cycle_compare_role(false);
        assert_eq!(app.session.compare_role_ids[0].as_deref(), Some("engineering-manager"));
    }

    #[test]
    fn clicking_a_marker_sets_that_level() {
        let mut app = app();
        let radius = app.config.canvas_radius;
        let count = app.catalog.dimensions().len();
        let (x, y) = radar::polar_point(2, count, 3, radius);

        assert!(app.click_level(x, y, 1.0));
        assert_eq!(app.session.custom_role.levels.get("org_scope"), Some(3));
        assert_eq!(app.dimension_index, 2);
        assert!(!app.click_level(radius * 2.0, 0.0, 1.0));
    }

    #[test]
    fn share_and_restore_round_trip() {
        let mut app = app();
        app.step_selected_level(2);
        app.set_tab(ActiveTab::Define);
        app.share();
        let url = app
            .status_message
            .strip_prefix("Share link: ")
            .map(str::to_string)
            .unwrap_or_default();

        let mut other = self::app();
        other.restore(&url);
        assert_eq!(other.session, app.session);

        other.restore("%%%");
        assert_eq!(other.session, app.session);
        assert!(other.status_message.contains("could not be read"));
    }
}
